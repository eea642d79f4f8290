use clap::Parser;
mod app;
mod commands;
use commands::cli;
use slothtest_core::error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), error::CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = cli::Args::parse_from(cli::normalize_single_dash(std::env::args_os()));
    let exit = app::run_app(args).await?;
    std::process::exit(exit);
}
