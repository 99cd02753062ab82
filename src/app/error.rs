use std::path::PathBuf;
use thiserror::Error;

// Custom Application Error
#[derive(Error, Debug)]
pub enum AppError {
    #[error("read file:{} error: {source}", path.display())]
    ReadTarget {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("read file:{} error: not valid UTF-8", path.display())]
    TargetNotUtf8 { path: PathBuf },
    #[error("splice file:{} error: {source}", path.display())]
    Splice {
        path: PathBuf,
        source: crate::splice::SpliceError,
    },
    #[error("write file:{} error: {source}", path.display())]
    WriteTarget {
        path: PathBuf,
        source: std::io::Error,
    },
}
