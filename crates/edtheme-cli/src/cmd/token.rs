// crates/edtheme-cli/src/cmd/token.rs

use std::path::PathBuf;

use clap::{Args, Subcommand};
use edtheme_core::{share, ThemeState};

use crate::cmd::show::print_state;
use crate::io::{self, storage};

#[derive(Args)]
pub struct TokenArgs {
    #[command(subcommand)]
    pub cmd: TokenCommands,
}

#[derive(Subcommand)]
pub enum TokenCommands {
    /// Encode a stored theme as a share token (or a full URL)
    Encode(TokenEncodeArgs),

    /// Decode a token and show (or store) the theme it carries
    Decode(TokenDecodeArgs),
}

#[derive(Args)]
pub struct TokenEncodeArgs {
    /// Theme directory; defaults apply when omitted
    #[arg(long)]
    pub theme: Option<PathBuf>,

    /// Print a full URL instead of the bare token
    #[arg(long)]
    pub base_url: Option<String>,
}

#[derive(Args)]
pub struct TokenDecodeArgs {
    /// The share token
    pub token: String,

    /// Theme directory to write the decoded state into
    #[arg(long)]
    pub theme: Option<PathBuf>,
}

pub fn run(args: TokenArgs) -> anyhow::Result<()> {
    match args.cmd {
        TokenCommands::Encode(args) => encode(args),
        TokenCommands::Decode(args) => decode(args),
    }
}

fn encode(args: TokenEncodeArgs) -> anyhow::Result<()> {
    let state = io::load_state(args.theme.as_deref(), None)?;
    match args.base_url {
        // The default theme collapses to a bare URL rather than
        // round-tripping a token that says nothing.
        Some(base) if state.is_default() => println!("{base}"),
        Some(base) => println!("{base}?t={}", share::encode_token(&state)),
        None => println!("{}", share::encode_token(&state)),
    }
    Ok(())
}

fn decode(args: TokenDecodeArgs) -> anyhow::Result<()> {
    let mut state = ThemeState::default();
    if !share::apply_token(&mut state, &args.token) {
        anyhow::bail!("unrecognized share token");
    }
    if let Some(dir) = &args.theme {
        storage::save_theme(dir, &state)?;
        println!("stored into {}", dir.display());
    }
    print_state(&state);
    Ok(())
}
