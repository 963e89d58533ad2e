//! energy-cli - Command line tool for the global energy dashboard views.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "energy-cli",
    version,
    about = "Global energy metrics dashboard toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: energy_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("starting energy-cli");
    energy_cmd::run(cli.command)
}
