use clap::Parser;

mod cli;
mod commands;

fn main() -> anyhow::Result<()> {
    // Logging is activated by Config::load from the settings document,
    // not here.
    let cli = cli::Cli::parse();
    commands::run_command(cli)
}
