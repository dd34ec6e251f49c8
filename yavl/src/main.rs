use clap::Parser;
use std::process::ExitCode;
use yavl::cli::{Cli, run};

fn main() -> ExitCode {
    // Logs go to stderr so `yavl compile SPEC -` can pipe the header
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli, &mut std::io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
