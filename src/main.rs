use clap::Parser;
use depcopy::commands::copy::{hint, run};
use depcopy::config::Cli;
use depcopy::Config;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Convert CLI args to Config - this validates immediately
    let result = Config::try_from(cli).and_then(run);

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            let hint = hint(&error);
            // `{:#}` renders the io cause inline: "Cannot read x: No such file ..."
            eprintln!("Error: {:#}", anyhow::Error::new(error));
            if let Some(hint) = hint {
                eprintln!("hint: {hint}");
            }
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "depcopy=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
