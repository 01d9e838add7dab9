//! `mdpage` - render a README-driven landing page

use clap::Parser;

use mdpage::cli::args::Cli;
use mdpage::cli::commands;
use mdpage::error::ExitCode;
use mdpage::observability::init_logging;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_logging(cli.log_format, cli.verbose, cli.quiet, cli.color);

    match commands::dispatch(cli).await {
        Ok(()) => std::process::exit(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
