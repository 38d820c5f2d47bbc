//! Shared helpers for respath integration tests.

#![allow(dead_code)]

use respath::{PlatformPolicy, ResourcePath};

/// Parse under the POSIX policy (no drives, `/` separator).
pub fn posix(raw: &str) -> ResourcePath {
    ResourcePath::parse_with(raw, &PlatformPolicy::POSIX)
}

/// Parse under the Windows policy (drives, `\` separator).
pub fn windows(raw: &str) -> ResourcePath {
    ResourcePath::parse_with(raw, &PlatformPolicy::WINDOWS)
}

/// Assert that formatting and re-parsing under `policy` yields an equal path.
pub fn assert_round_trips(path: &ResourcePath, policy: &PlatformPolicy) {
    let text = path.to_string();
    let again = ResourcePath::parse_with(&text, policy);
    assert_eq!(&again, path, "round trip through {text:?}");
}
