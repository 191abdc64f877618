//! Crypt CLI
//!
//! Bury code you are not ready to delete, and bring it back later.

use clap::{Parser, Subcommand};
use crypt_core::logging_facility::{init, Profile};

mod commands;
mod host;

#[derive(Debug, Parser)]
#[command(name = "crypt")]
#[command(about = "Crypt - a graveyard for code you might still need", long_about = None)]
#[command(version)]
struct Cli {
    #[command(flatten)]
    global: commands::GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Cut whole lines out of a file and bury them
    Bury(commands::bury::BuryArgs),
    /// List buried snippets, newest first
    List,
    /// Restore a snippet by id
    Resurrect(commands::resurrect::ResurrectArgs),
    /// Restore the snippet buried at a file line
    ResurrectAt(commands::resurrect::ResurrectAtArgs),
    /// Forget a snippet without restoring it
    Delete(commands::delete::DeleteArgs),
    /// Move a file and carry its buried snippets along
    Mv(commands::mv::MvArgs),
    /// Show the markers an editor would draw for a file
    Markers(commands::markers::MarkersArgs),
}

fn main() {
    let cli = Cli::parse();

    let rust_log_set = std::env::var_os("RUST_LOG").is_some();
    let profile = Profile::for_cli(cli.global.log_json, cli.global.verbose, rust_log_set);
    if let Some(profile) = profile {
        init(profile);
    }

    let result = match cli.command {
        Commands::Bury(args) => commands::bury::execute(&cli.global, args),
        Commands::List => commands::list::execute(&cli.global),
        Commands::Resurrect(args) => commands::resurrect::execute(&cli.global, args),
        Commands::ResurrectAt(args) => commands::resurrect::execute_at(&cli.global, args),
        Commands::Delete(args) => commands::delete::execute(&cli.global, args),
        Commands::Mv(args) => commands::mv::execute(&cli.global, args),
        Commands::Markers(args) => commands::markers::execute(&cli.global, args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
