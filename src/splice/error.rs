use std::path::PathBuf;
use thiserror::Error;

//─────────────────────────────────────────────────────────────────────────────

/// Error type for the in-memory splicing pass.
#[derive(Error, Debug)]
pub enum SpliceError {
    /// The companion file named by a marker could not be read.
    #[error("read companion:{} error: {source}", companion.display())]
    ReadCompanion {
        companion: PathBuf,
        source: std::io::Error,
    },

    /// The companion file is not valid UTF-8 text.
    #[error("companion:{} is not valid UTF-8", path.display())]
    InvalidUtf8 { path: PathBuf },
}
