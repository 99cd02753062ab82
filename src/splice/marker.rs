//! The fixed `include!` marker and the path rules derived from it.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Macro-invocation prefix that marks a splice point.
pub const MARKER: &str = r#"include!(concat!(env!("OUT_DIR"), ""#;

/// Build output directory holding the generated companion files.
pub const DEFAULT_BASE_DIR: &str = "./target/debug/build/cranelift-codegen-ba4dc72176f6ae31/out/";

/// Bytes past the marker start where the commented-out tail begins.
///
/// Keeping the tail from here turns `include!(...)` into `//clude!(...)`,
/// which is the shape earlier rewritten trees already carry.
pub const COMMENTED_TAIL_OFFSET: usize = 2;

/// Returns the companion token: everything up to the next `"`, or the
/// whole input when no quote follows.
pub fn parse_token(after_marker: &str) -> &str {
    match after_marker.find('"') {
        Some(end) => &after_marker[..end],
        None => after_marker,
    }
}

/// Concatenates `base_dir` and `token` as plain text.
///
/// Tokens usually start with `/`, so `Path::join` would treat them as
/// absolute and drop the base directory.
pub fn companion_path(base_dir: &Path, token: &str) -> PathBuf {
    let mut raw: OsString = base_dir.as_os_str().to_owned();
    raw.push(token);
    PathBuf::from(raw)
}
