use clap::Parser;
use std::path::PathBuf;

use crate::splice::DEFAULT_BASE_DIR;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Splices generated OUT_DIR files into sources in place of their include! invocations.", long_about = None)]
pub struct Cli {
    /// Source files to rewrite in place
    pub files: Vec<PathBuf>,

    /// Directory the generated companion files live in. Joined to each token by plain concatenation.
    #[clap(long, default_value = DEFAULT_BASE_DIR)]
    pub base_dir: PathBuf,

    /// Write verbose progress to this file.
    #[clap(long)]
    pub log_file: Option<PathBuf>,

    /// Suppress verbose output, even when a log file is given.
    #[clap(short, long)]
    pub quiet: bool,
}
