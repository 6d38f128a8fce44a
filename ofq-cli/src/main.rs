//! OFQ CLI - Command line tool for ocean float query synthesis.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "ofq-cli",
    version,
    about = "Ocean float query and profile synthesis toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: ofq_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    ofq_cmd::run(cli.command).await
}
