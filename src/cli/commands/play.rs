//! Play command - play a game against the computer.

use std::path::PathBuf;

use log::warn;
use number_duel::game::engine::EngineConfig;
use number_duel::game::input_source::HumanInput;
use number_duel::game::r#loop::GameLoop;
use number_duel::game::renderer::StatsRenderer;
use number_duel::match_log::{MatchLog, DEFAULT_HISTORY_FILE};
use number_duel::searcher::Algorithm;
use number_duel::state::Player;
use structopt::StructOpt;

use super::util::{exit_with_error, format_seconds};
use super::Command;

#[derive(StructOpt)]
pub struct PlayArgs {
    #[structopt(short, long, default_value = "8")]
    pub start: u32,
    #[structopt(short, long, default_value = "human")]
    pub first: Player,
    #[structopt(short, long, default_value = "alphabeta")]
    pub algorithm: Algorithm,
    #[structopt(short, long, default_value = "3")]
    pub depth: u8,
    #[structopt(long = "history-file", default_value = DEFAULT_HISTORY_FILE, parse(from_os_str))]
    pub history_file: PathBuf,
    #[structopt(long = "no-history")]
    pub no_history: bool,
}

impl Command for PlayArgs {
    fn execute(self) {
        let config = EngineConfig {
            starting_number: self.start,
            first_mover: self.first,
            algorithm: self.algorithm,
            search_depth: self.depth,
            ..EngineConfig::default()
        };

        let mut game = GameLoop::new(HumanInput, StatsRenderer, config)
            .unwrap_or_else(|error| exit_with_error(error));

        if !self.no_history {
            match MatchLog::open(&self.history_file) {
                Ok(log) => game = game.with_match_log(log),
                Err(error) => warn!("playing without a match log: {}", error),
            }
        }

        match game.run() {
            Ok(Some(summary)) => println!(
                "{} computer moves, {} positions searched, {}s per move",
                summary.computer_moves,
                summary.total_nodes_visited,
                format_seconds(summary.mean_search_duration)
            ),
            Ok(None) => println!("Game abandoned."),
            Err(error) => exit_with_error(error),
        }
    }
}
