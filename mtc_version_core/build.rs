//! Generates `$OUT_DIR/version.rs` with the agent version baked into the build.

use std::{env, fs, path::Path};

const DEFAULT_MAJOR: u32 = 2;
const DEFAULT_MINOR: u32 = 5;
const DEFAULT_PATCH: u32 = 0;
const DEFAULT_BUILD: u32 = 9;

fn number(var: &str, default: u32) -> u32 {
    println!("cargo:rerun-if-env-changed={var}");
    match env::var(var) {
        Ok(v) if !v.trim().is_empty() => v
            .trim()
            .parse()
            .unwrap_or_else(|e| panic!("BUILD: {var}={v:?} is not a non-negative integer: {e}")),
        _ => default,
    }
}

fn release_candidate(var: &str) -> String {
    println!("cargo:rerun-if-env-changed={var}");
    let tag = env::var(var).unwrap_or_default();
    let tag = tag.trim().trim_start_matches('-').to_string();
    if !tag
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'.' || b == b'-')
    {
        panic!("BUILD: {var}={tag:?} may only hold ascii alphanumerics, '.' and '-'");
    }
    tag
}

fn main() {
    let major = number("MTC_AGENT_VERSION_MAJOR", DEFAULT_MAJOR);
    let minor = number("MTC_AGENT_VERSION_MINOR", DEFAULT_MINOR);
    let patch = number("MTC_AGENT_VERSION_PATCH", DEFAULT_PATCH);
    let build = number("MTC_AGENT_VERSION_BUILD", DEFAULT_BUILD);
    let rc = release_candidate("MTC_AGENT_VERSION_RC");

    let generated = format!(
        "pub const VERSION_MAJOR: u32 = {major};\n\
         pub const VERSION_MINOR: u32 = {minor};\n\
         pub const VERSION_PATCH: u32 = {patch};\n\
         pub const VERSION_BUILD: u32 = {build};\n\
         pub const VERSION_RC: &str = {rc:?};\n"
    );

    let out_dir = env::var("OUT_DIR").expect("BUILD: OUT_DIR is not set");
    fs::write(Path::new(&out_dir).join("version.rs"), generated)
        .expect("BUILD: failed to write version.rs");
    println!("cargo:rerun-if-changed=build.rs");
}
