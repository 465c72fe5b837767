use std::fmt::Write;

use termion::{clear, cursor};

use crate::evaluate::GameEnding;
use crate::game::engine::{GameSummary, MoveReport};
use crate::searcher::SearchResult;
use crate::state::{GameState, TERMINAL_THRESHOLD};

pub struct GameDisplay {
    buffer: String,
    clear_screen: bool,
}

impl Default for GameDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl GameDisplay {
    pub fn new() -> Self {
        Self {
            buffer: String::with_capacity(1024),
            clear_screen: true,
        }
    }

    /// A display that never emits terminal control sequences.
    pub fn plain() -> Self {
        Self {
            clear_screen: false,
            ..Self::new()
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        if self.clear_screen {
            let _ = write!(self.buffer, "{}{}", cursor::Goto(1, 1), clear::All);
        }
    }

    pub fn compose_game_state(
        &mut self,
        turn: usize,
        state: &GameState,
        last_move: Option<&MoveReport>,
        last_search: Option<&SearchResult>,
    ) {
        self.clear();

        let _ = writeln!(self.buffer, "REACH {} FIRST!    TURN {}", TERMINAL_THRESHOLD, turn);
        self.buffer.push_str("──────────────────────────────\n");

        match last_move {
            Some(report) => {
                let _ = writeln!(self.buffer, "Given number: {}", report.previous.number());
                let _ = writeln!(
                    self.buffer,
                    "Calculation: {} × {} = {}",
                    report.previous.number(),
                    report.multiplier,
                    report.state.number()
                );
            }
            None => {
                let _ = writeln!(self.buffer, "Given number: {}", state.number());
            }
        }
        let _ = writeln!(self.buffer, "Current number: {}", state.number());
        let _ = writeln!(
            self.buffer,
            "\nSCORE: Human {} | Computer {}",
            state.human_score(),
            state.computer_score()
        );

        if let Some(report) = last_move {
            let _ = writeln!(self.buffer, "\n{}", describe_move(report));
        }

        if let Some(search) = last_search {
            let _ = writeln!(
                self.buffer,
                "\n* Score: {}\n* Positions searched: {}\n* Move took: {:?}",
                search.score, search.nodes_visited, search.duration
            );
        }
    }

    pub fn compose_game_over(&mut self, summary: &GameSummary) {
        let banner = match summary.ending {
            GameEnding::HumanWins => "HUMAN WINS!",
            GameEnding::ComputerWins => "COMPUTER WINS!",
            GameEnding::Draw => "DRAW!",
        };
        let _ = writeln!(self.buffer, "\nGAME OVER - {}", banner);
        let _ = writeln!(
            self.buffer,
            "Final score: Human {} | Computer {}",
            summary.final_state.human_score(),
            summary.final_state.computer_score()
        );
        let _ = writeln!(
            self.buffer,
            "Avg. time per move: {:.6}s",
            summary.mean_search_duration.as_secs_f64()
        );
        let _ = writeln!(
            self.buffer,
            "Positions searched: {} ({})",
            summary.total_nodes_visited,
            summary.algorithm.label()
        );
    }

    pub fn push_line(&mut self, line: &str) {
        self.buffer.push_str(line);
        self.buffer.push('\n');
    }

    /// Prints the composed frame and starts a new one.
    pub fn flush(&mut self) {
        print!("{}", self.buffer);
        self.buffer.clear();
    }

    pub fn buffer(self) -> String {
        self.buffer
    }
}

/// One-line description of a committed move and its effect on the scores.
pub fn describe_move(report: &MoveReport) -> String {
    let mover = report.mover.label();
    if report.state.number() % 2 == 0 {
        format!(
            "{} chose {}. Even number! {} loses 1 point",
            mover,
            report.multiplier,
            report.mover.opponent().label()
        )
    } else {
        format!(
            "{} chose {}. Odd number! {} gains 1 point",
            mover, report.multiplier, mover
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::engine::TurnPhase;
    use crate::searcher::Algorithm;
    use crate::state::{Multiplier, Player};
    use std::time::Duration;

    fn report(number: u32, multiplier: Multiplier, mover: Player) -> MoveReport {
        let previous = GameState::new(number, mover).unwrap();
        let state = previous.apply(multiplier, mover).unwrap();
        MoveReport {
            mover,
            multiplier,
            previous,
            state,
            phase: TurnPhase::ComputerThinking,
        }
    }

    #[test]
    fn test_describe_even_move() {
        let report = report(8, Multiplier::Three, Player::Human);
        assert_eq!(
            describe_move(&report),
            "Human chose 3. Even number! Computer loses 1 point"
        );
    }

    #[test]
    fn test_describe_odd_move() {
        let report = report(9, Multiplier::Three, Player::Computer);
        assert_eq!(
            describe_move(&report),
            "Computer chose 3. Odd number! Computer gains 1 point"
        );
    }

    #[test]
    fn test_compose_game_state() {
        let report = report(8, Multiplier::Three, Player::Human);
        let mut display = GameDisplay::plain();
        display.compose_game_state(1, &report.state, Some(&report), None);
        let frame = display.buffer();

        assert!(frame.contains("TURN 1"));
        assert!(frame.contains("Given number: 8"));
        assert!(frame.contains("Calculation: 8 × 3 = 24"));
        assert!(frame.contains("Current number: 24"));
        assert!(frame.contains("SCORE: Human 0 | Computer -1"));
        assert!(!frame.contains("Positions searched"));
    }

    #[test]
    fn test_compose_game_state_with_search_stats() {
        let report = report(24, Multiplier::Four, Player::Computer);
        let search = SearchResult {
            best_move: Some(Multiplier::Four),
            score: 0.32,
            nodes_visited: 31,
            duration: Duration::from_micros(12),
        };
        let mut display = GameDisplay::plain();
        display.compose_game_state(2, &report.state, Some(&report), Some(&search));
        let frame = display.buffer();

        assert!(frame.contains("* Positions searched: 31"));
        assert!(frame.contains("* Score: 0.32"));
    }

    #[test]
    fn test_compose_game_over() {
        let summary = GameSummary {
            ending: GameEnding::ComputerWins,
            starting_number: 8,
            total_nodes_visited: 93,
            mean_search_duration: Duration::from_millis(2),
            computer_moves: 3,
            plies: 6,
            algorithm: Algorithm::AlphaBeta,
            first_mover: Player::Human,
            final_state: GameState::with_scores(1536, -2, 1, Player::Human).unwrap(),
        };
        let mut display = GameDisplay::plain();
        display.compose_game_over(&summary);
        let frame = display.buffer();

        assert!(frame.contains("GAME OVER - COMPUTER WINS!"));
        assert!(frame.contains("Avg. time per move: 0.002000s"));
        assert!(frame.contains("Positions searched: 93 (Alpha-Beta)"));
    }
}
