//! Game driver and command-line front end for Thirteen Moves.

pub mod command;
pub mod error;
pub mod game;
pub mod opening;
pub mod session;

pub use command::{AnalyzeArgs, Cli, Command, PerftArgs, SelfPlayArgs};
pub use error::PlayError;
pub use game::{Game, MOVES_PER_SIDE};
pub use opening::{ATTACKER_OPENINGS, book_move};
pub use session::{analyze, perft, run, self_play};
