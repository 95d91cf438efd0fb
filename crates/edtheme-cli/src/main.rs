// crates/edtheme-cli/src/main.rs

use clap::{Parser, Subcommand};

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "edtheme")]
#[command(about = "EverDrive GBA menu theme patch tools", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build an .ips patch from a stored theme or a share token
    Build(cmd::build::BuildArgs),

    /// Decode an .ips patch back into a theme
    Import(cmd::import::ImportArgs),

    /// Dump the records of an .ips patch with their meanings
    Inspect(cmd::inspect::InspectArgs),

    /// Share-token tools (encode/decode)
    Token(cmd::token::TokenArgs),

    /// Print a theme (colors, overrides, free slot)
    Show(cmd::show::ShowArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Build(args) => cmd::build::run(args),
        Commands::Import(args) => cmd::import::run(args),
        Commands::Inspect(args) => cmd::inspect::run(args),
        Commands::Token(args) => cmd::token::run(args),
        Commands::Show(args) => cmd::show::run(args),
    }
}
