use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod address;
mod input;

#[derive(Parser)]
#[command(name = "wasm-cashaddr-cli")]
#[command(about = "Convert eCash and Bitcoin Cash addresses between legacy and cashaddr formats", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: address::AddressCommand,
}

fn init_tracing() {
    // stdout carries the converted addresses
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    address::handle_command(cli.command)
}
