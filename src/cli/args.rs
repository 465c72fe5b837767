//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{
    calculate_best_move::CalculateBestMoveArgs, compare::CompareArgs, play::PlayArgs,
    stats::StatsArgs,
};

#[derive(StructOpt)]
#[structopt(
    name = "number-duel",
    about = "A two-player multiplication duel against a minimax computer opponent"
)]
pub enum NumberDuel {
    #[structopt(
        name = "play",
        about = "Play a game against the computer. Pick the starting number with `--start` (8 to 18, default: 8), who moves first with `--first` (human, computer or random), and the search with `--algorithm` (default: alphabeta) and `--depth` (default: 3). Finished games are appended to the match log unless `--no-history` is given."
    )]
    Play(PlayArgs),
    #[structopt(
        name = "calculate-best-move",
        about = "Run a single search from the position given by `--number`, `--human-score` and `--computer-score`, and print the chosen multiplier, its score and the number of nodes visited."
    )]
    CalculateBestMove(CalculateBestMoveArgs),
    #[structopt(
        name = "compare",
        about = "Search the same position with both minimax and alpha-beta at every depth from 1 to `--depth` (default: 3) and report the move, score and node count of each."
    )]
    Compare(CompareArgs),
    #[structopt(
        name = "stats",
        about = "Show the recorded games and aggregate statistics. Use `--delete N` to remove game N, or `--clear` to empty the log."
    )]
    Stats(StatsArgs),
}

impl crate::cli::commands::Command for NumberDuel {
    fn execute(self) {
        macro_rules! execute_command {
            ($($variant:ident($cmd:ident)),+ $(,)?) => {
                match self {
                    $(Self::$variant($cmd) => $cmd.execute(),)+
                }
            };
        }

        execute_command! {
            Play(cmd),
            CalculateBestMove(cmd),
            Compare(cmd),
            Stats(cmd),
        }
    }
}
