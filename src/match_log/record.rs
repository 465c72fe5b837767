use std::fmt;
use std::str::FromStr;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::evaluate::GameEnding;
use crate::game::engine::GameSummary;
use crate::searcher::Algorithm;
use crate::state::Player;

use super::MatchLogError;

const FIELD_COUNT: usize = 7;

/// One completed game, as stored in the match log.
///
/// Serialized as a single comma separated line:
/// `result,initial_number,nodes_visited,avg_time,algorithm,starting_player,timestamp`
#[derive(Clone, Debug, PartialEq)]
pub struct MatchRecord {
    pub result: GameEnding,
    pub initial_number: u32,
    pub nodes_visited: usize,
    /// Mean search time per computer move, in seconds.
    pub avg_time: f64,
    pub algorithm: Algorithm,
    pub starting_player: Player,
    /// Seconds since the Unix epoch.
    pub timestamp: f64,
}

impl MatchRecord {
    pub fn from_summary(summary: &GameSummary, timestamp: f64) -> Self {
        Self {
            result: summary.ending,
            initial_number: summary.starting_number,
            nodes_visited: summary.total_nodes_visited,
            avg_time: summary.mean_search_duration.as_secs_f64(),
            algorithm: summary.algorithm,
            starting_player: summary.first_mover,
            timestamp,
        }
    }

    /// Stamps the summary with the current wall-clock time.
    pub fn completed_now(summary: &GameSummary) -> Self {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs_f64())
            .unwrap_or_default();
        Self::from_summary(summary, timestamp)
    }

    pub fn completed_at(&self) -> SystemTime {
        Duration::try_from_secs_f64(self.timestamp)
            .ok()
            .and_then(|elapsed| UNIX_EPOCH.checked_add(elapsed))
            .unwrap_or(UNIX_EPOCH)
    }
}

impl fmt::Display for MatchRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{},{},{}",
            self.result,
            self.initial_number,
            self.nodes_visited,
            self.avg_time,
            self.algorithm,
            self.starting_player,
            self.timestamp
        )
    }
}

impl FromStr for MatchRecord {
    type Err = MatchLogError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let malformed = |reason: &str| MatchLogError::MalformedRecord {
            line: line.to_string(),
            reason: reason.to_string(),
        };

        let fields: Vec<&str> = line.trim().split(',').collect();
        if fields.len() != FIELD_COUNT {
            return Err(malformed("expected 7 fields"));
        }

        Ok(Self {
            result: fields[0]
                .parse::<GameEnding>()
                .map_err(|e: &str| malformed(e))?,
            initial_number: fields[1]
                .parse()
                .map_err(|_| malformed("initial number is not an integer"))?,
            nodes_visited: fields[2]
                .parse()
                .map_err(|_| malformed("nodes visited is not an integer"))?,
            avg_time: fields[3]
                .parse()
                .map_err(|_| malformed("average time is not a number"))?,
            algorithm: fields[4]
                .parse::<Algorithm>()
                .map_err(|e: &str| malformed(e))?,
            starting_player: match fields[5] {
                "human" => Player::Human,
                "computer" => Player::Computer,
                _ => return Err(malformed("starting player must be human or computer")),
            },
            timestamp: fields[6]
                .parse()
                .map_err(|_| malformed("timestamp is not a number"))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::GameState;

    #[test]
    fn test_parse_line_written_by_older_versions() {
        let record: MatchRecord = "COMPUTER WINS,12,93,0.00012345,alphabeta,human,1714000000.25"
            .parse()
            .unwrap();

        assert_eq!(record.result, GameEnding::ComputerWins);
        assert_eq!(record.initial_number, 12);
        assert_eq!(record.nodes_visited, 93);
        assert_eq!(record.avg_time, 0.00012345);
        assert_eq!(record.algorithm, Algorithm::AlphaBeta);
        assert_eq!(record.starting_player, Player::Human);
        assert_eq!(record.timestamp, 1714000000.25);
    }

    #[test]
    fn test_parse_accepts_exponent_notation() {
        let record: MatchRecord = "DRAW,8,40,1.2e-05,minimax,computer,1714000000.0"
            .parse()
            .unwrap();
        assert_eq!(record.avg_time, 0.000012);
    }

    #[test]
    fn test_display_field_order() {
        let record = MatchRecord {
            result: GameEnding::HumanWins,
            initial_number: 9,
            nodes_visited: 120,
            avg_time: 0.5,
            algorithm: Algorithm::Minimax,
            starting_player: Player::Computer,
            timestamp: 100.5,
        };
        assert_eq!(record.to_string(), "HUMAN WINS,9,120,0.5,minimax,computer,100.5");
        assert_eq!(record.to_string().parse::<MatchRecord>().unwrap(), record);
    }

    #[test]
    fn test_rejects_wrong_field_count() {
        let result = "DRAW,8,40,0.1,minimax,human".parse::<MatchRecord>();
        assert!(matches!(result, Err(MatchLogError::MalformedRecord { .. })));
    }

    #[test]
    fn test_rejects_random_starting_player() {
        let result = "DRAW,8,40,0.1,minimax,random,1.0".parse::<MatchRecord>();
        assert!(matches!(result, Err(MatchLogError::MalformedRecord { .. })));
    }

    #[test]
    fn test_rejects_unknown_result() {
        let result = "WIN,8,40,0.1,minimax,human,1.0".parse::<MatchRecord>();
        assert!(matches!(result, Err(MatchLogError::MalformedRecord { .. })));
    }

    #[test]
    fn test_from_summary() {
        let summary = GameSummary {
            ending: GameEnding::Draw,
            starting_number: 15,
            total_nodes_visited: 62,
            mean_search_duration: Duration::from_millis(250),
            computer_moves: 2,
            plies: 4,
            algorithm: Algorithm::AlphaBeta,
            first_mover: Player::Computer,
            final_state: GameState::with_scores(1440, 1, 1, Player::Human).unwrap(),
        };

        let record = MatchRecord::from_summary(&summary, 42.);
        assert_eq!(record.to_string(), "DRAW,15,62,0.25,alphabeta,computer,42");
    }
}
