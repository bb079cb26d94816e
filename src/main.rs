//! CLI entry point for sampling named generators

use clap::Parser;
use randkit::cli::{Cli, Runner};

fn main() -> randkit::cli::Result<()> {
    let cli = Cli::parse();
    let runner = Runner::new(cli);
    runner.run()
}
