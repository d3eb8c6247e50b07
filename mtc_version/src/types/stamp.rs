use bincode::{Decode, Encode};
use mtc_version_core::{SchemaVersion, VersionIdentity};

use crate::VersionError;

pub const STAMP_MAGIC: [u8; 7] = [0x00, 0x4D, 0x00, 0x54, 0x00, 0x43, 0x00]; // utf-16 "MTC"
pub const MAX_RELEASE_CANDIDATE_LEN: usize = 64;

#[repr(C)]
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct VersionStamp {
    pub magic: [u8; 7],
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub build: u32,
    pub release_candidate: String,
    pub schema: u32,       // SchemaVersion::as_int
    pub reserved: [u8; 8], // reserved for future use
    pub del: [u8; 6],      // [0xff; 6]
}

impl VersionStamp {
    pub fn new(identity: &VersionIdentity) -> Result<Self, VersionError> {
        let rc = identity.release_candidate();
        if rc.len() > MAX_RELEASE_CANDIDATE_LEN {
            return Err(VersionError::InvalidStamp(format!(
                "release candidate is longer than {MAX_RELEASE_CANDIDATE_LEN} bytes"
            )));
        }
        Ok(VersionStamp {
            magic: STAMP_MAGIC,
            major: identity.major(),
            minor: identity.minor(),
            patch: identity.patch(),
            build: identity.build(),
            release_candidate: rc.to_string(),
            schema: SchemaVersion::from_identity(identity).as_int(),
            reserved: [0x00; 8],
            del: [0xff; 6],
        })
    }
}

impl TryFrom<VersionStamp> for VersionIdentity {
    type Error = VersionError;

    fn try_from(stamp: VersionStamp) -> Result<Self, Self::Error> {
        if stamp.release_candidate.len() > MAX_RELEASE_CANDIDATE_LEN {
            return Err(VersionError::InvalidStamp(format!(
                "release candidate is longer than {MAX_RELEASE_CANDIDATE_LEN} bytes"
            )));
        }
        VersionIdentity::from_parts(
            stamp.major,
            stamp.minor,
            stamp.patch,
            stamp.build,
            stamp.release_candidate,
        )
        .map_err(|e| VersionError::InvalidStamp(e.to_string()))
    }
}
