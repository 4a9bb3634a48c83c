//! Keepbridge CLI - query KeePass credential stores from the command line.
//!
//! Results go to stdout, logs to stderr.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use keepbridge_core::{KeepassStore, Store, StoreDefinition};
use std::io::{self, Write};
use std::path::{is_separator, PathBuf};
use tracing_subscriber::EnvFilter;

/// Keepbridge - credential lookup for KeePass databases
#[derive(Parser, Debug)]
#[command(name = "keepbridge")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Store definition as NAME=PATH or PATH, where PATH is a store config file.
    /// A bare PATH may contain `=` as long as a path separator precedes it.
    #[arg(short, long = "store", value_name = "STORE", value_parser = parse_store_definition)]
    stores: Vec<StoreDefinition>,

    /// Request fuzzy search (matching stays substring based)
    #[arg(long)]
    fuzzy: bool,

    /// Config file used unless exactly one store is given
    #[arg(long, value_name = "FILE")]
    default_config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search titles and URLs
    Search { query: String },
    /// Substring search over titles and URLs
    Glob { query: String },
    /// Print the credentials of an item, written as NAME or STORE:NAME
    Open { item: String },
    /// List every entry title
    List,
}

fn parse_store_definition(value: &str) -> Result<StoreDefinition, String> {
    let (name, path) = match value.split_once('=') {
        Some((name, path)) if !name.contains(is_separator) => (name, path),
        _ => ("default", value),
    };
    if path.is_empty() {
        return Err(format!("missing config path in store definition {value:?}"));
    }
    Ok(StoreDefinition::new(name, path))
}

fn default_config_path() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".keepbridge").join("config"))
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("keepbridge=info".parse()?))
        .with_writer(std::io::stderr) // Keep stdout for results
        .init();

    let args = Args::parse();

    let default_config = match args.default_config {
        Some(path) => path,
        None => default_config_path()?,
    };
    tracing::debug!("Default config path: {}", default_config.display());

    let store = KeepassStore::new(&args.stores, args.fuzzy, &default_config)
        .context("Failed to open credential store")?;

    let mut stdout = io::stdout().lock();
    run(&store, args.command, &mut stdout)?;
    stdout.flush()?;

    Ok(())
}

/// Execute one command against `store`, writing results to `out`.
fn run(store: &KeepassStore, command: Command, out: &mut impl Write) -> Result<()> {
    match command {
        Command::Search { query } => print_lines(out, &store.search(&query)?)?,
        Command::Glob { query } => print_lines(out, &store.glob_search(&query)?)?,
        Command::List => print_lines(out, &store.all_entries())?,
        Command::Open { item } => {
            let mut reader = store.open(&item)?;
            io::copy(&mut reader, out)?;
        }
    }
    Ok(())
}

fn print_lines(out: &mut impl Write, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
