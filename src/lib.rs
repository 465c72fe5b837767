pub mod evaluate;
pub mod game;
pub mod input_handler;
pub mod match_log;
pub mod prelude;
pub mod searcher;
pub mod state;

#[cfg(feature = "instrumentation")]
pub mod instrumentation;
