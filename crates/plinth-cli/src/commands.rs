use std::sync::Arc;

use anyhow::Context;
use colored::Colorize;

use plinth_config::Config;
use plinth_files::{FileContent, FileStore};

use crate::cli::{CatArgs, Cli, Command, CopyArgs};

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = Arc::new(
        Config::load(&cli.settings)
            .with_context(|| format!("load settings from {}", cli.settings.display()))?,
    );
    let store = FileStore::new(Arc::clone(&config));

    match cli.command {
        Command::Info => cmd_info(&config),
        Command::Paths => cmd_paths(&config),
        Command::Cat(args) => cmd_cat(&store, args),
        Command::Copy(args) => cmd_copy(&store, args),
    }
}

fn cmd_info(config: &Config) -> anyhow::Result<()> {
    println!(
        "{} {}",
        config.app_name().bold(),
        config.app_version().dimmed()
    );
    Ok(())
}

fn cmd_paths(config: &Config) -> anyhow::Result<()> {
    for (key, path) in config.paths() {
        println!("  {} {}", format!("{key:<20}").yellow(), path.display());
    }
    Ok(())
}

fn cmd_cat(store: &FileStore, args: CatArgs) -> anyhow::Result<()> {
    let content = store.load_file(&args.dir_key, &args.filename)?;
    print_content(&content)
}

fn cmd_copy(store: &FileStore, args: CopyArgs) -> anyhow::Result<()> {
    let content = store.load_file(&args.from_key, &args.from_file)?;
    store.save_file(&content, &args.to_key, &args.to_file, !args.no_overwrite)?;
    println!(
        "{} {}/{} → {}/{}",
        "✓".green(),
        args.from_key,
        args.from_file.bold(),
        args.to_key,
        args.to_file.bold()
    );
    Ok(())
}

fn print_content(content: &FileContent) -> anyhow::Result<()> {
    match content {
        FileContent::Text(text) => print!("{text}"),
        FileContent::Json(value) => println!("{}", serde_json::to_string_pretty(value)?),
        FileContent::Table(table) => {
            println!("{}", table.columns().join(",").bold());
            for row in table.rows() {
                println!("{}", row.join(","));
            }
        }
    }
    Ok(())
}
