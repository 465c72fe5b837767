//! Fixed-depth adversarial search over the duel's move tree.
//!
//! Two interchangeable algorithms share one contract: given a position, a
//! depth and whether the side to act maximizes, return the best multiplier,
//! its backed-up score, and the number of nodes visited. Moves are always
//! tried in the order 2, 3, 4; the first move seeds the best result and a
//! later move replaces it only when strictly better. Alpha-beta relies on this
//! rule to choose exactly the move plain minimax chooses.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use log::debug;
use thiserror::Error;

use crate::state::{GameState, Multiplier, StateError};

mod alpha_beta;
mod context;
mod minimax;

pub use alpha_beta::alpha_beta;
pub use context::SearchContext;
pub use minimax::minimax;

/// Plies searched per computer move in normal play.
pub const DEFAULT_SEARCH_DEPTH: u8 = 3;

#[derive(Error, Debug, PartialEq)]
pub enum SearchError {
    #[error("no available moves")]
    NoAvailableMoves,
    #[error("depth must be at least 1")]
    DepthTooLow,
    #[error("state error: {0}")]
    State(#[from] StateError),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Minimax,
    AlphaBeta,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Minimax, Algorithm::AlphaBeta];

    pub fn search(
        &self,
        context: &mut SearchContext,
        state: &GameState,
        depth: u8,
        maximizing: bool,
    ) -> Result<SearchResult, SearchError> {
        match self {
            Algorithm::Minimax => minimax(context, state, depth, maximizing),
            Algorithm::AlphaBeta => alpha_beta(context, state, depth, maximizing),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Algorithm::Minimax => "Minimax",
            Algorithm::AlphaBeta => "Alpha-Beta",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let algorithm = match self {
            Algorithm::Minimax => "minimax",
            Algorithm::AlphaBeta => "alphabeta",
        };
        write!(f, "{}", algorithm)
    }
}

impl FromStr for Algorithm {
    type Err = &'static str;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "minimax" => Ok(Algorithm::Minimax),
            "alphabeta" | "alpha-beta" => Ok(Algorithm::AlphaBeta),
            _ => Err("invalid algorithm; options are: minimax, alphabeta"),
        }
    }
}

/// What one search invocation reports back to its caller.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchResult {
    /// `None` when the search was asked to look zero plies ahead or started
    /// from a terminal state.
    pub best_move: Option<Multiplier>,
    pub score: f64,
    pub nodes_visited: usize,
    pub duration: Duration,
}

/// Backed-up value of a single node.
#[derive(Clone, Copy, Debug, PartialEq)]
struct NodeValue {
    best_move: Option<Multiplier>,
    score: f64,
}

impl NodeValue {
    fn leaf(score: f64) -> Self {
        Self {
            best_move: None,
            score,
        }
    }

    fn unexplored(maximizing: bool) -> Self {
        let score = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        Self {
            best_move: None,
            score,
        }
    }
}

/// Updates the node's best score and move if `score` is better.
/// The first candidate always becomes the initial best.
/// Returns true if the best was updated.
fn update_best(value: &mut NodeValue, candidate: Multiplier, score: f64, maximizing: bool) -> bool {
    let is_better = if maximizing {
        score > value.score
    } else {
        score < value.score
    };

    if is_better || value.best_move.is_none() {
        value.score = score;
        value.best_move = Some(candidate);
        return true;
    }
    false
}

/// Picks the move for the side to act in `state`, searching to the context's
/// configured depth with the chosen algorithm.
///
/// # Returns
///
/// - `Ok(best_move)` - The best move found at the configured depth
/// - `Err(SearchError::DepthTooLow)` - If the configured depth is < 1
/// - `Err(SearchError::NoAvailableMoves)` - If the state is terminal
pub fn search_best_move(
    context: &mut SearchContext,
    state: &GameState,
    algorithm: Algorithm,
) -> Result<Multiplier, SearchError> {
    let depth = context.search_depth();
    if depth < 1 {
        return Err(SearchError::DepthTooLow);
    }
    if state.is_terminal() {
        return Err(SearchError::NoAvailableMoves);
    }

    let maximizing = state.to_move().maximize_score();
    let result = algorithm.search(context, state, depth, maximizing)?;
    debug!(
        "{} picked {:?} (score: {}, nodes: {}, took: {:?})",
        algorithm.label(),
        result.best_move,
        result.score,
        result.nodes_visited,
        result.duration
    );

    result.best_move.ok_or(SearchError::NoAvailableMoves)
}
