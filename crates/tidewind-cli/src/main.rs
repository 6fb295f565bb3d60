use clap::Parser;
use tidewind_cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tidewind_cli::init_tracing();
    tidewind_cli::run(Cli::parse()).await
}
