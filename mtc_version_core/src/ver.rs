// Generated by build.rs from the MTC_AGENT_VERSION_* environment variables.
include!(concat!(env!("OUT_DIR"), "/version.rs"));

/// Release candidate tag
///
/// `""` - final release
///
/// `"RC1"`, `"RC2"`, ... - pre-release build, rendered as `2.5.0-RC1`
pub const RELEASE_CANDIDATE: &str = VERSION_RC;
