pub mod error;

pub mod ver;

use std::borrow::Cow;
use std::fmt::{self, Display};
use std::str::FromStr;

use crate::error::VersionError;
use crate::ver::{RELEASE_CANDIDATE, VERSION_BUILD, VERSION_MAJOR, VERSION_MINOR, VERSION_PATCH};

/// `true` for `""` or a tag made of ascii alphanumerics, `.` and `-`.
pub const fn is_valid_release_candidate(tag: &str) -> bool {
    let bytes = tag.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if !(b.is_ascii_alphanumeric() || b == b'.' || b == b'-') {
            return false;
        }
        i += 1;
    }
    true
}

/// Version identity of an agent build.
///
/// Every field is fixed once the value is constructed. The identity of the
/// running build is [`VersionIdentity::CURRENT`]; other identities come from
/// parsing or from decoded version stamps.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionIdentity {
    major: u32,
    minor: u32,
    patch: u32,
    build: u32,
    release_candidate: Cow<'static, str>, // "" for a final release
}

impl VersionIdentity {
    /// The identity baked into this build.
    pub const CURRENT: VersionIdentity = VersionIdentity::new(
        VERSION_MAJOR,
        VERSION_MINOR,
        VERSION_PATCH,
        VERSION_BUILD,
        RELEASE_CANDIDATE,
    );

    /// # Panics
    /// If `release_candidate` is not a valid tag, see [`is_valid_release_candidate`].
    /// For a constant this is a compile error.
    pub const fn new(
        major: u32,
        minor: u32,
        patch: u32,
        build: u32,
        release_candidate: &'static str,
    ) -> Self {
        assert!(
            is_valid_release_candidate(release_candidate),
            "release candidate tag may only hold ascii alphanumerics, '.' and '-'"
        );
        VersionIdentity {
            major,
            minor,
            patch,
            build,
            release_candidate: Cow::Borrowed(release_candidate),
        }
    }

    /// Same as [`VersionIdentity::new`] for a tag only known at runtime.
    pub fn from_parts<S: Into<String>>(
        major: u32,
        minor: u32,
        patch: u32,
        build: u32,
        release_candidate: S,
    ) -> Result<Self, VersionError> {
        let release_candidate = release_candidate.into();
        if !is_valid_release_candidate(&release_candidate) {
            return Err(VersionError::Parse(format!(
                "invalid release candidate tag {release_candidate:?}"
            )));
        }
        Ok(VersionIdentity {
            major,
            minor,
            patch,
            build,
            release_candidate: Cow::Owned(release_candidate),
        })
    }

    pub const fn major(&self) -> u32 {
        self.major
    }
    pub const fn minor(&self) -> u32 {
        self.minor
    }
    pub const fn patch(&self) -> u32 {
        self.patch
    }
    pub const fn build(&self) -> u32 {
        self.build
    }
    pub fn release_candidate(&self) -> &str {
        &self.release_candidate
    }

    pub fn is_release_candidate(&self) -> bool {
        !self.release_candidate.is_empty()
    }

    /// `(major, minor, patch, build)`
    pub const fn numbers(&self) -> (u32, u32, u32, u32) {
        (self.major, self.minor, self.patch, self.build)
    }
}

impl Default for VersionIdentity {
    fn default() -> Self {
        VersionIdentity::CURRENT
    }
}

/// `{}` renders `major.minor.patch[-rc]`, `{:#}` appends `+build`.
impl Display for VersionIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.release_candidate.is_empty() {
            write!(f, "-{}", self.release_candidate)?;
        }
        if f.alternate() {
            write!(f, "+{}", self.build)?;
        }
        Ok(())
    }
}

fn component(part: &str, name: &str) -> Result<u32, VersionError> {
    part.parse::<u32>()
        .map_err(|e| VersionError::Parse(format!("invalid {name} component {part:?}: {e}")))
}

/// Accepts `major.minor.patch[-rc][+build]` and `major.minor.patch.build`.
impl FromStr for VersionIdentity {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(VersionError::Parse("version is empty".to_string()));
        }

        let (rest, build_meta) = match s.split_once('+') {
            Some((rest, build)) => (rest, Some(build)),
            None => (s, None),
        };
        let (core, rc) = match rest.split_once('-') {
            Some((_, "")) => {
                return Err(VersionError::Parse(
                    "release candidate tag is empty".to_string(),
                ));
            }
            Some((core, rc)) => (core, rc),
            None => (rest, ""),
        };
        let parts: Vec<&str> = core.split('.').collect();
        let (major, minor, patch, build) = match parts.as_slice() {
            [major, minor, patch] => (
                component(major, "major")?,
                component(minor, "minor")?,
                component(patch, "patch")?,
                None,
            ),
            [major, minor, patch, build] => (
                component(major, "major")?,
                component(minor, "minor")?,
                component(patch, "patch")?,
                Some(component(build, "build")?),
            ),
            _ => {
                return Err(VersionError::Parse(format!(
                    "expected major.minor.patch[.build], got {core:?}"
                )));
            }
        };

        let build = match (build, build_meta) {
            (Some(_), Some(_)) => {
                return Err(VersionError::Parse(
                    "build number given twice".to_string(),
                ));
            }
            (Some(b), None) => b,
            (None, Some(b)) => component(b, "build")?,
            (None, None) => 0,
        };

        VersionIdentity::from_parts(major, minor, patch, build, rc)
    }
}

/// MTConnect schema version (`major.minor`) served by the agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SchemaVersion {
    pub major: u32,
    pub minor: u32,
}

impl SchemaVersion {
    /// Schema version of the running build.
    pub const DEFAULT: SchemaVersion = SchemaVersion::new(VERSION_MAJOR, VERSION_MINOR);

    pub const fn new(major: u32, minor: u32) -> Self {
        SchemaVersion { major, minor }
    }

    pub const fn from_identity(identity: &VersionIdentity) -> Self {
        SchemaVersion {
            major: identity.major,
            minor: identity.minor,
        }
    }

    /// Comparable form: `major * 100 + minor`.
    pub const fn as_int(&self) -> u32 {
        self.major.saturating_mul(100).saturating_add(self.minor)
    }

    /// Lenient parse of `major<sep>minor` where `<sep>` is any single character,
    /// whitespace around it is skipped.
    ///
    /// A zero or unreadable major gives `default`; an unreadable minor is 0.
    pub fn parse_or(s: &str, default: SchemaVersion) -> SchemaVersion {
        fn leading_number(s: &str) -> (u32, &str) {
            let digits = s.len() - s.trim_start_matches(|c: char| c.is_ascii_digit()).len();
            (s[..digits].parse().unwrap_or(0), &s[digits..])
        }

        let (major, rest) = leading_number(s.trim_start());
        if major == 0 {
            return default;
        }
        let mut chars = rest.trim_start().chars();
        chars.next(); // separator
        let (minor, _) = leading_number(chars.as_str().trim_start());
        SchemaVersion { major, minor }
    }
}

impl Default for SchemaVersion {
    fn default() -> Self {
        SchemaVersion::DEFAULT
    }
}

impl Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl FromStr for SchemaVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (major, minor) = s
            .trim()
            .split_once('.')
            .ok_or_else(|| VersionError::Parse(format!("expected major.minor, got {s:?}")))?;
        Ok(SchemaVersion {
            major: component(major, "major")?,
            minor: component(minor, "minor")?,
        })
    }
}
