use clap::Parser;
use routewalk::cli::{run_cli, Cli};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    if let Err(err) = run_cli(&cli) {
        // Short, generic indication only; details stay in the logs.
        tracing::error!(error = %err, "Request failed");
        std::process::exit(1);
    }
}
