use anyhow::Result;
use clap::Parser;
use std::io::IsTerminal;

use packtree::cli::args::CliArgs;
use packtree::cli::{driver, reporter::Reporter};

fn main() -> Result<()> {
    // Initialize tracing if PACKTREE_LOG or RUST_LOG is set (zero cost
    // otherwise). Supports PACKTREE_LOG_FORMAT=tree|json|text.
    packtree::tracing_config::init_tracing();

    let args = CliArgs::parse();

    // Color tracks the output stream, so piped output stays plain
    let color = std::io::stdout().is_terminal();
    let reporter = Reporter::new(color);

    let code = driver::run(&args, &reporter)?;
    std::process::exit(code);
}
