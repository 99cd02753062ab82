//! In-memory splicing of companion files into marker occurrences.
//!
//! The pass walks the buffer left to right with a cursor. Each marker is
//! replaced by its companion text, and the rest of the line is kept behind a
//! `//` so the original invocation stays visible as a comment. Companion text
//! is copied verbatim and never scanned for further markers.

use std::fs;
use std::path::Path;

use super::error::SpliceError;
use super::marker::{companion_path, parse_token, COMMENTED_TAIL_OFFSET, MARKER};

/// Result of a successful splicing pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spliced {
    /// The rewritten buffer.
    pub content: String,
    /// Number of markers replaced.
    pub occurrences: usize,
}

/// Returns `true` if `content` holds at least one marker.
pub fn contains_marker(content: &str) -> bool {
    content.contains(MARKER)
}

/// Replaces every marker in `content` with the companion file it names.
///
/// Companions are resolved as `base_dir` followed by the token between the
/// marker and the next `"`. Each splice emits ` \n`, the companion text,
/// `\n //` and then the original buffer from two bytes past the marker start.
///
/// # Errors
/// Returns `SpliceError` on the first companion that cannot be read. Splices
/// already made in this pass are dropped with the partial buffer.
pub fn splice_content(content: &str, base_dir: &Path) -> Result<Spliced, SpliceError> {
    let mut output = String::with_capacity(content.len());
    let mut rest = content;
    let mut occurrences = 0;

    while let Some(pos) = rest.find(MARKER) {
        let token = parse_token(&rest[pos + MARKER.len()..]);
        let companion = read_companion(&companion_path(base_dir, token))?;

        output.push_str(&rest[..pos]);
        output.push_str(" \n");
        output.push_str(&companion);
        output.push_str("\n //");
        // The marker starts with ASCII, so this stays on a char boundary.
        rest = &rest[pos + COMMENTED_TAIL_OFFSET..];
        occurrences += 1;
    }
    output.push_str(rest);

    Ok(Spliced {
        content: output,
        occurrences,
    })
}

fn read_companion(path: &Path) -> Result<String, SpliceError> {
    let bytes = fs::read(path).map_err(|source| SpliceError::ReadCompanion {
        companion: path.to_path_buf(),
        source,
    })?;
    String::from_utf8(bytes).map_err(|_| SpliceError::InvalidUtf8 {
        path: path.to_path_buf(),
    })
}
