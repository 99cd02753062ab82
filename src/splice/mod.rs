// error module
mod error;
// marker module
pub mod marker;
// splicer module
mod splicer;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports from the splicer module.
//─────────────────────────────────────────────────────────────────────────────
pub use error::SpliceError;
pub use marker::DEFAULT_BASE_DIR;
pub use splicer::{contains_marker, splice_content, Spliced};
