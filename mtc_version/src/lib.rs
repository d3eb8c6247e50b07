use std::io::{self, Write};

use crc32fast::Hasher;
use log::{debug, info, warn};

pub use mtc_version_core::error::VersionError;
pub use mtc_version_core::{SchemaVersion, VersionIdentity};

use crate::{
    types::{CheckSum, VersionStamp, stamp::STAMP_MAGIC},
    utils::{deserialize, deserialize_limited, serialize},
};

pub mod types;
mod utils;

/// Product name used in the startup banner.
pub const AGENT_NAME: &str = "MTConnect Agent";

/// Stamps are a few dozen bytes, anything past this is not a stamp.
pub const MAX_STAMP_LEN: usize = 512;

/// Renders and prints an injected [`VersionIdentity`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionInfo {
    identity: VersionIdentity,
}

impl VersionInfo {
    pub const fn new(identity: VersionIdentity) -> Self {
        Self { identity }
    }

    /// Version info of the running build.
    pub const fn current() -> Self {
        Self::new(VersionIdentity::CURRENT)
    }

    pub fn identity(&self) -> &VersionIdentity {
        &self.identity
    }

    /// `major.minor.patch`, followed by `-<rc>` when the release candidate tag is set.
    ///
    /// The build number is not part of this string, see [`VersionInfo::format_full`].
    pub fn format_version(&self) -> String {
        self.identity.to_string()
    }

    /// [`VersionInfo::format_version`] with `+<build>` appended, e.g. `2.5.0-RC1+9`.
    pub fn format_full(&self) -> String {
        format!("{:#}", self.identity)
    }

    /// Startup line, e.g. `MTConnect Agent Version 2.5.0+9`.
    pub fn banner(&self) -> String {
        format!("{AGENT_NAME} Version {:#}", self.identity)
    }

    pub fn schema_version(&self) -> SchemaVersion {
        SchemaVersion::from_identity(&self.identity)
    }

    /// Writes [`VersionInfo::format_version`] as one line.
    pub fn write_version<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.format_version())
    }

    /// Prints [`VersionInfo::format_version`] as one line to stdout.
    pub fn print_version(&self) {
        println!("{}", self.format_version());
    }

    pub fn log_version(&self) {
        info!("{}", self.banner());
    }
}

impl Default for VersionInfo {
    fn default() -> Self {
        Self::current()
    }
}

pub fn version() -> VersionInfo {
    VersionInfo::current()
}

/// Formatted version of the running build, see [`VersionInfo::format_version`].
pub fn format_version() -> String {
    VersionInfo::current().format_version()
}

/// Prints the version of the running build to stdout.
pub fn print_version() {
    VersionInfo::current().print_version();
}

/// Encodes a version identity into stamp bytes.
///
/// # Layout
/// - [`VersionStamp`] header (bincode standard config), starting with the
///   magic bytes `00 4D 00 54 00 43 00` and ending with `FF FF FF FF FF FF`
/// - [`CheckSum`] trailer (bincode legacy config, 20 bytes) holding the
///   CRC32 of the header bytes
///
/// # Returns
/// - `Ok(Vec<u8>)` - Encoded stamp bytes.
/// - `Err(VersionError)` - The release candidate tag is too long.
pub fn encode_stamp(identity: &VersionIdentity) -> Result<Vec<u8>, VersionError> {
    let stamp = VersionStamp::new(identity)?;

    let mut buf = serialize(&stamp, true)?;
    let mut hasher = Hasher::new();
    hasher.update(&buf);
    buf.extend(serialize(CheckSum::new(hasher.finalize()), false)?);

    debug!("encoded stamp {:#} ({} bytes)", identity, buf.len());
    Ok(buf)
}

/// Decodes stamp bytes back into a version identity.
///
/// # Parameters
/// - `bytes`: Stamp bytes
/// - `ignore_checksum`: ignore crc32 (not recommended)
///
/// # Returns
/// - `Ok(VersionIdentity)` - Decoded identity
/// - `Err(VersionError)` - Bad magic, bad checksum or malformed header
pub fn decode_stamp(bytes: &[u8], ignore_checksum: bool) -> Result<VersionIdentity, VersionError> {
    /* ===== Check stamp len ===== */
    if bytes.len() < STAMP_MAGIC.len() + CheckSum::SIZE {
        return Err(VersionError::InvalidStamp("Stamp is too short".to_string()));
    }
    if bytes.len() > MAX_STAMP_LEN {
        return Err(VersionError::InvalidStamp("Stamp is too long".to_string()));
    }
    if bytes[..STAMP_MAGIC.len()] != STAMP_MAGIC {
        return Err(VersionError::InvalidStamp("Invalid magic bytes".to_string()));
    }

    /* ===== Verify CRC32 trailer ===== */
    let (header, trailer) = bytes.split_at(bytes.len() - CheckSum::SIZE);
    let (check_sum, _) = deserialize::<CheckSum>(trailer, false)
        .map_err(|_| VersionError::InvalidChecksum("invalid checksum".to_string()))?;
    if check_sum.del != CheckSum::DELIMITER {
        return Err(VersionError::InvalidChecksum(
            "checksum delimiter not found".to_string(),
        ));
    }
    let mut hasher = Hasher::new();
    hasher.update(header);
    if hasher.finalize() != check_sum.crc32 && !ignore_checksum {
        return Err(VersionError::InvalidChecksum("Stamp is corrupted".to_string()));
    }

    /* ===== Deserialize the header ===== */
    let (stamp, read) = deserialize_limited::<VersionStamp, MAX_STAMP_LEN>(header).map_err(|e| {
        VersionError::InvalidStamp(format!("Stamp decoding error: {}", e))
    })?;
    if read != header.len() {
        return Err(VersionError::InvalidStamp(
            "trailing bytes after stamp header".to_string(),
        ));
    }
    if stamp.del != [0xff; 6] {
        return Err(VersionError::InvalidStamp(
            "stamp delimiter not found".to_string(),
        ));
    }
    let schema = stamp.schema;
    let identity = VersionIdentity::try_from(stamp)?;
    if schema != SchemaVersion::from_identity(&identity).as_int() {
        return Err(VersionError::InvalidStamp(format!(
            "schema version {schema} does not match {identity}"
        )));
    }

    if identity.major() != VersionIdentity::CURRENT.major() {
        warn!(
            "Stamp version {:#} differs from agent version {:#}",
            identity,
            VersionIdentity::CURRENT
        );
    }
    debug!("decoded stamp {:#}", identity);
    Ok(identity)
}
