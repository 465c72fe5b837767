//! CLI command implementations.

pub trait Command {
    fn execute(self);
}

pub mod calculate_best_move;
pub mod compare;
pub mod play;
pub mod stats;

// Shared utilities for commands
pub(crate) mod util;
