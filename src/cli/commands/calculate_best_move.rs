//! Calculate best move command - run one search from an arbitrary position.

use number_duel::searcher::{Algorithm, SearchContext};
use number_duel::state::Player;
use structopt::StructOpt;

use super::util::{exit_with_error, format_score, format_seconds, position_from_args};
use super::Command;

#[derive(StructOpt)]
pub struct CalculateBestMoveArgs {
    #[structopt(short, long)]
    pub number: u32,
    #[structopt(long = "human-score", default_value = "0", allow_hyphen_values = true)]
    pub human_score: i32,
    #[structopt(long = "computer-score", default_value = "0", allow_hyphen_values = true)]
    pub computer_score: i32,
    #[structopt(short, long, default_value = "alphabeta")]
    pub algorithm: Algorithm,
    #[structopt(short, long, default_value = "3")]
    pub depth: u8,
    #[structopt(
        long = "to-move",
        default_value = "computer",
        help = "Side to act: the computer maximizes, the human minimizes"
    )]
    pub to_move: Player,
}

impl Command for CalculateBestMoveArgs {
    fn execute(self) {
        let state =
            position_from_args(self.number, self.human_score, self.computer_score, self.to_move);
        let mut context = SearchContext::new(self.depth);

        let result = self
            .algorithm
            .search(&mut context, &state, self.depth, self.to_move.maximize_score())
            .unwrap_or_else(|error| exit_with_error(error));

        match result.best_move {
            Some(best_move) => println!("{}", best_move),
            None => println!("-"),
        }
        println!("score: {}", format_score(result.score));
        println!("nodes visited: {}", result.nodes_visited);
        println!("time: {}s", format_seconds(result.duration));
    }
}
