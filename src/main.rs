//! CLI entry point for golden/actual image comparison

use boxdiff::io::cli::{Cli, DiffRunner};
use clap::Parser;

// The run report is the tool's primary output
#[allow(clippy::print_stdout)]
fn main() -> boxdiff::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("warn"));

    let cli = Cli::parse();
    let quiet = cli.quiet;
    let runner = DiffRunner::new(cli);
    let report = runner.run()?;

    if !quiet {
        println!("{report}");
    }

    Ok(())
}
