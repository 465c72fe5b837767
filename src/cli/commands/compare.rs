//! Compare command - report how much alpha-beta prunes against plain minimax.

use number_duel::searcher::{Algorithm, SearchContext};
use number_duel::state::Player;
use structopt::StructOpt;

use super::util::{exit_with_error, format_score, format_seconds, position_from_args};
use super::Command;

#[derive(StructOpt)]
pub struct CompareArgs {
    #[structopt(short, long, default_value = "8")]
    pub number: u32,
    #[structopt(long = "human-score", default_value = "0", allow_hyphen_values = true)]
    pub human_score: i32,
    #[structopt(long = "computer-score", default_value = "0", allow_hyphen_values = true)]
    pub computer_score: i32,
    #[structopt(short, long, default_value = "3", help = "Deepest search to run")]
    pub depth: u8,
    #[structopt(long = "to-move", default_value = "computer")]
    pub to_move: Player,
}

impl Command for CompareArgs {
    fn execute(self) {
        let state =
            position_from_args(self.number, self.human_score, self.computer_score, self.to_move);
        let maximizing = self.to_move.maximize_score();
        let mut context = SearchContext::default();

        println!("Position: {}", state);
        println!(
            "{:>5}  {:<10} {:>4} {:>9} {:>8} {:>12}",
            "depth", "algorithm", "move", "score", "nodes", "time (s)"
        );

        for depth in 1..=self.depth {
            let mut nodes = [0usize; 2];
            for (i, algorithm) in Algorithm::ALL.iter().enumerate() {
                let result = algorithm
                    .search(&mut context, &state, depth, maximizing)
                    .unwrap_or_else(|error| exit_with_error(error));
                nodes[i] = result.nodes_visited;

                let best_move = result
                    .best_move
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "{:>5}  {:<10} {:>4} {:>9} {:>8} {:>12}",
                    depth,
                    algorithm.label(),
                    best_move,
                    format_score(result.score),
                    result.nodes_visited,
                    format_seconds(result.duration)
                );
            }

            if nodes[0] > 0 {
                let pruned = nodes[0].saturating_sub(nodes[1]);
                println!(
                    "       pruned {} of {} nodes ({:.1}%)",
                    pruned,
                    nodes[0],
                    pruned as f64 * 100. / nodes[0] as f64
                );
            }
        }
    }
}
