mod app;
mod splice;

use clap::Parser;

fn main() {
    let cli = app::Cli::parse();
    // Failures are reported per file; the exit status stays zero.
    app::run_app(cli);
}
