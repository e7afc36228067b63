mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{catalog, edit, export, init, CatalogArgs, EditCommand, ExportArgs, InitArgs};
use tracing_subscriber::EnvFilter;

/// Landkit CLI - build landing pages from ready-made sections
#[derive(Parser, Debug)]
#[command(name = "landkit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Initialize a project with a sample page
    Init(InitArgs),

    /// List the available components
    Catalog(CatalogArgs),

    #[command(flatten)]
    Edit(EditCommand),

    /// Export the page as standalone HTML
    Export(ExportArgs),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let cwd = match std::env::current_dir() {
        Ok(dir) => dir.display().to_string(),
        Err(err) => {
            eprintln!("{} Cannot get current directory: {}", "Error:".red().bold(), err);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Command::Init(args) => init(args, &cwd),
        Command::Catalog(args) => catalog(args),
        Command::Edit(command) => edit(command, &cwd),
        Command::Export(args) => export(args, &cwd),
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
