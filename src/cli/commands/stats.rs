//! Stats command - show and edit the match log.

use std::path::PathBuf;
use std::time::Duration;

use number_duel::match_log::{MatchLog, DEFAULT_HISTORY_FILE};
use structopt::StructOpt;

use super::util::{exit_with_error, format_seconds};
use super::Command;

#[derive(StructOpt)]
pub struct StatsArgs {
    #[structopt(long = "history-file", default_value = DEFAULT_HISTORY_FILE, parse(from_os_str))]
    pub history_file: PathBuf,
    #[structopt(long, help = "Delete the game with this number (as listed)")]
    pub delete: Option<usize>,
    #[structopt(long, conflicts_with = "delete", help = "Delete every recorded game")]
    pub clear: bool,
}

impl Command for StatsArgs {
    fn execute(self) {
        let mut log =
            MatchLog::open(&self.history_file).unwrap_or_else(|error| exit_with_error(error));

        if self.clear {
            log.clear().unwrap_or_else(|error| exit_with_error(error));
            println!("Match history cleared.");
            return;
        }

        if let Some(number) = self.delete {
            let removed = number
                .checked_sub(1)
                .ok_or_else(|| format!("game numbers start at 1, got {}", number))
                .and_then(|index| log.delete(index).map_err(|error| error.to_string()))
                .unwrap_or_else(|error| exit_with_error(error));
            println!("Deleted game {}: {}", number, removed.result);
        }

        if log.is_empty() {
            println!("No games recorded in {}.", self.history_file.display());
            return;
        }

        println!(
            "{:>3}  {:<14} {:>5} {:>7} {:>10}  {:<10} {:<9} {}",
            "#", "result", "start", "nodes", "avg (s)", "algorithm", "first", "played"
        );
        for (i, record) in log.records().iter().enumerate() {
            let avg_time = Duration::try_from_secs_f64(record.avg_time).unwrap_or_default();
            println!(
                "{:>3}  {:<14} {:>5} {:>7} {:>10}  {:<10} {:<9} {}",
                i + 1,
                record.result.to_string(),
                record.initial_number,
                record.nodes_visited,
                format_seconds(avg_time),
                record.algorithm.to_string(),
                record.starting_player.to_string(),
                humantime::format_rfc3339_seconds(record.completed_at())
            );
        }

        let stats = log.stats();
        println!();
        println!("Total games:       {}", stats.total_games);
        println!("Human wins:        {}", stats.human_wins);
        println!("Computer wins:     {}", stats.computer_wins);
        println!("Draws:             {}", stats.draws);
        println!("Minimax games:     {}", stats.minimax_games);
        println!("Alpha-beta games:  {}", stats.alpha_beta_games);
    }
}
