//! Search and evaluation for Thirteen Moves.

pub mod config;
pub mod error;
pub mod eval;
pub mod search;

pub use config::SearchConfig;
pub use error::SearchError;
pub use eval::{ColumnWeights, Evaluate, Evaluator, EvaluatorParseError, Material};
pub use search::alphabeta::SearchStats;
pub use search::tt::{Bound, TranspositionTable, TtEntry};
pub use search::{SearchResult, Searcher};
