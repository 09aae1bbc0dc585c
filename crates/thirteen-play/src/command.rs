//! Command-line definitions.

use clap::{Args, Parser, Subcommand};

use thirteen_core::STARTING_LAYOUT;

/// Thirteen Moves: alpha-beta search engine and self-play driver.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// A top-level command.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Play a full engine-versus-engine game and print every ply.
    Selfplay(SelfPlayArgs),
    /// Search one position and report the best move.
    Analyze(AnalyzeArgs),
    /// Count move-generator leaf nodes to a fixed depth.
    Perft(PerftArgs),
}

/// Options for `selfplay`.
#[derive(Debug, Clone, Args)]
pub struct SelfPlayArgs {
    /// Search depth for the attacker.
    #[arg(long, default_value_t = 8, value_parser = clap::value_parser!(u8).range(1..=26))]
    pub attacker_depth: u8,

    /// Search depth for the defender.
    #[arg(long, default_value_t = 8, value_parser = clap::value_parser!(u8).range(1..=26))]
    pub defender_depth: u8,

    /// Seed for move shuffling and the opening choice. Random if omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Evaluation function: `columns` or `material`.
    #[arg(long, default_value = "columns")]
    pub eval: String,

    /// Search the first two plies instead of playing the scripted openings.
    #[arg(long)]
    pub no_book: bool,
}

/// Options for `analyze`.
#[derive(Debug, Clone, Args)]
pub struct AnalyzeArgs {
    /// Board layout, rows top to bottom separated by `/`.
    #[arg(long, default_value = STARTING_LAYOUT)]
    pub layout: String,

    /// Side to move: `attacker` or `defender`.
    #[arg(long, default_value = "attacker")]
    pub side: String,

    /// Plies already played.
    #[arg(long, default_value_t = 2)]
    pub move_number: u32,

    /// Search depth.
    #[arg(long, default_value_t = 8)]
    pub depth: u8,

    /// Seed for move shuffling.
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Evaluation function: `columns` or `material`.
    #[arg(long, default_value = "columns")]
    pub eval: String,
}

/// Options for `perft`.
#[derive(Debug, Clone, Args)]
pub struct PerftArgs {
    /// Board layout, rows top to bottom separated by `/`.
    #[arg(long, default_value = STARTING_LAYOUT)]
    pub layout: String,

    /// Side to move: `attacker` or `defender`.
    #[arg(long, default_value = "attacker")]
    pub side: String,

    /// Depth in plies.
    #[arg(long, default_value_t = 4)]
    pub depth: usize,
}
