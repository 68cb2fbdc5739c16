use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "plinth",
    about = "Inspect and exercise a Plinth workspace",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the settings file.
    #[arg(short, long, global = true, default_value = "settings.json")]
    pub settings: PathBuf,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show application name and version
    Info,
    /// List the resolved directory table
    Paths,
    /// Load a file and print its content
    Cat(CatArgs),
    /// Copy a file between configured directories
    Copy(CopyArgs),
}

#[derive(Args)]
pub struct CatArgs {
    /// Symbolic directory key (e.g. raw_data_dir)
    pub dir_key: String,
    pub filename: String,
}

#[derive(Args)]
pub struct CopyArgs {
    pub from_key: String,
    pub from_file: String,
    pub to_key: String,
    pub to_file: String,
    /// Fail instead of replacing an existing destination
    #[arg(long)]
    pub no_overwrite: bool,
}
