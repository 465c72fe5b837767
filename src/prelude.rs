//! Common types re-exported for convenience.

pub use crate::evaluate::GameEnding;
pub use crate::game::engine::{Engine, EngineConfig, EngineError};
pub use crate::searcher::{Algorithm, SearchContext, SearchResult};
pub use crate::state::{GameState, Multiplier, Player};
