pub mod error;
pub mod game_state;
pub mod multiplier;
pub mod player;
pub mod tree;

pub use error::StateError;
pub use game_state::{GameState, TERMINAL_THRESHOLD};
pub use multiplier::Multiplier;
pub use player::Player;
pub use tree::{GameTree, Node, NodeId};
