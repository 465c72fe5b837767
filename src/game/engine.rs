use std::convert::TryFrom;
use std::fmt;
use std::ops::RangeInclusive;
use std::time::Duration;

use log::info;
use thiserror::Error;

use crate::evaluate::{self, GameEnding};
use crate::searcher::{Algorithm, SearchContext, SearchError, SearchResult, DEFAULT_SEARCH_DEPTH};
use crate::state::{GameState, GameTree, Multiplier, NodeId, Player, StateError};

pub const DEFAULT_STARTING_NUMBER: u32 = 8;
pub const VALID_STARTING_NUMBERS: RangeInclusive<u32> = 8..=18;

/// Everything needed to start a game session.
#[derive(Clone, Debug)]
pub struct EngineConfig {
    pub starting_number: u32,
    pub first_mover: Player,
    pub algorithm: Algorithm,
    pub search_depth: u8,
    pub valid_starting_numbers: RangeInclusive<u32>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            starting_number: DEFAULT_STARTING_NUMBER,
            first_mover: Player::Human,
            algorithm: Algorithm::AlphaBeta,
            search_depth: DEFAULT_SEARCH_DEPTH,
            valid_starting_numbers: VALID_STARTING_NUMBERS,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), EngineError> {
        if !self.valid_starting_numbers.contains(&self.starting_number) {
            return Err(EngineError::StartingNumberOutOfRange {
                number: self.starting_number,
                min: *self.valid_starting_numbers.start(),
                max: *self.valid_starting_numbers.end(),
            });
        }
        if self.search_depth < 1 {
            return Err(EngineError::SearchDepthTooLow);
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnPhase {
    AwaitingHumanMove,
    ComputerThinking,
    Finished,
}

impl TurnPhase {
    fn after(state: &GameState) -> Self {
        if state.is_terminal() {
            return TurnPhase::Finished;
        }
        match state.to_move() {
            Player::Human => TurnPhase::AwaitingHumanMove,
            Player::Computer => TurnPhase::ComputerThinking,
        }
    }
}

impl fmt::Display for TurnPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phase = match self {
            TurnPhase::AwaitingHumanMove => "awaiting human move",
            TurnPhase::ComputerThinking => "computer thinking",
            TurnPhase::Finished => "finished",
        };
        write!(f, "{}", phase)
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum EngineError {
    #[error("Starting number {number} must be between {min} and {max}")]
    StartingNumberOutOfRange { number: u32, min: u32, max: u32 },
    #[error("Search depth must be at least 1")]
    SearchDepthTooLow,
    #[error("Invalid move: {value} is not one of 2, 3 or 4")]
    InvalidMove { value: u32 },
    #[error("It is not the human's turn (game is {phase})")]
    NotHumansTurn { phase: TurnPhase },
    #[error("It is not the computer's turn (game is {phase})")]
    NotComputersTurn { phase: TurnPhase },
    #[error("State error: {error}")]
    StateError { error: StateError },
    #[error("Search error: {error}")]
    SearchError { error: SearchError },
}

impl From<StateError> for EngineError {
    fn from(error: StateError) -> Self {
        EngineError::StateError { error }
    }
}

impl From<SearchError> for EngineError {
    fn from(error: SearchError) -> Self {
        EngineError::SearchError { error }
    }
}

/// A committed move and the positions on either side of it.
#[derive(Clone, Debug, PartialEq)]
pub struct MoveReport {
    pub mover: Player,
    pub multiplier: Multiplier,
    pub previous: GameState,
    pub state: GameState,
    pub phase: TurnPhase,
}

impl MoveReport {
    /// The player whose score changed and by how much.
    pub fn score_change(&self) -> (Player, i32) {
        let human = self.state.human_score() - self.previous.human_score();
        if human != 0 {
            (Player::Human, human)
        } else {
            (
                Player::Computer,
                self.state.computer_score() - self.previous.computer_score(),
            )
        }
    }
}

/// A computer turn: the search that chose the move, then the move itself.
#[derive(Clone, Debug, PartialEq)]
pub struct ComputerMove {
    pub search: SearchResult,
    pub report: MoveReport,
}

/// Emitted once, when the game reaches a terminal state.
#[derive(Clone, Debug, PartialEq)]
pub struct GameSummary {
    pub ending: GameEnding,
    pub starting_number: u32,
    pub total_nodes_visited: usize,
    pub mean_search_duration: Duration,
    pub computer_moves: u32,
    pub plies: usize,
    pub algorithm: Algorithm,
    pub first_mover: Player,
    pub final_state: GameState,
}

/// Search performance statistics
#[derive(Debug, Clone)]
pub struct SearchStats {
    pub positions_searched: usize,
    pub total_positions_searched: usize,
    pub depth: u8,
    pub last_score: Option<f64>,
    pub last_search_duration: Option<Duration>,
}

#[derive(Clone, Copy, Debug, Default)]
struct SearchTotals {
    nodes_visited: usize,
    search_time: Duration,
    computer_moves: u32,
}

impl SearchTotals {
    fn record(&mut self, result: &SearchResult) {
        self.nodes_visited += result.nodes_visited;
        self.search_time += result.duration;
        self.computer_moves += 1;
    }

    fn mean_search_duration(&self) -> Duration {
        if self.computer_moves == 0 {
            return Duration::default();
        }
        self.search_time / self.computer_moves
    }
}

/// Drives a single game session from the starting number to a terminal state.
///
/// The engine owns the committed line of play as a root-to-current path in its
/// own arena; searches run in the search context's scratch arena and never
/// touch it.
pub struct Engine {
    config: EngineConfig,
    tree: GameTree,
    current: NodeId,
    phase: TurnPhase,
    search_context: SearchContext,
    totals: SearchTotals,
    summary: Option<GameSummary>,
}

impl Engine {
    pub fn with_config(config: EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;

        let root_state = GameState::new(config.starting_number, config.first_mover)?;
        let (tree, root) = GameTree::with_root(root_state);
        let search_context = SearchContext::new(config.search_depth);

        let mut engine = Self {
            config,
            tree,
            current: root,
            phase: TurnPhase::after(&root_state),
            search_context,
            totals: SearchTotals::default(),
            summary: None,
        };
        info!(
            "new game: start {}, {} moves first, {} at depth {}",
            engine.config.starting_number,
            engine.config.first_mover,
            engine.config.algorithm,
            engine.config.search_depth
        );
        engine.finish_if_terminal(&root_state);

        Ok(engine)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase == TurnPhase::Finished
    }

    pub fn state(&self) -> Result<&GameState, EngineError> {
        Ok(self.tree.state(self.current)?)
    }

    /// Committed line of play, root first.
    pub fn tree(&self) -> &GameTree {
        &self.tree
    }

    pub fn current_node(&self) -> NodeId {
        self.current
    }

    pub fn move_history(&self) -> Result<Vec<Multiplier>, EngineError> {
        Ok(self.tree.moves_to(self.current)?)
    }

    pub fn summary(&self) -> Option<&GameSummary> {
        self.summary.as_ref()
    }

    pub fn check_game_over(&self) -> Option<GameEnding> {
        self.summary.as_ref().map(|summary| summary.ending)
    }

    pub fn get_search_stats(&self) -> SearchStats {
        SearchStats {
            positions_searched: self.search_context.searched_position_count(),
            total_positions_searched: self.totals.nodes_visited,
            depth: self.search_context.search_depth(),
            last_score: self.search_context.last_score(),
            last_search_duration: self.search_context.last_search_duration(),
        }
    }

    /// Commits a human move given as a raw number, rejecting anything but 2, 3 or 4.
    pub fn make_human_move_value(&mut self, value: u32) -> Result<MoveReport, EngineError> {
        let multiplier =
            Multiplier::try_from(value).map_err(|_| EngineError::InvalidMove { value })?;
        self.make_human_move(multiplier)
    }

    pub fn make_human_move(&mut self, multiplier: Multiplier) -> Result<MoveReport, EngineError> {
        if self.phase != TurnPhase::AwaitingHumanMove {
            return Err(EngineError::NotHumansTurn { phase: self.phase });
        }
        self.commit(multiplier, Player::Human)
    }

    /// Runs the configured search from the current position and commits its move.
    pub fn make_computer_move(&mut self) -> Result<ComputerMove, EngineError> {
        if self.phase != TurnPhase::ComputerThinking {
            return Err(EngineError::NotComputersTurn { phase: self.phase });
        }

        let state = *self.state()?;
        let search = self.config.algorithm.search(
            &mut self.search_context,
            &state,
            self.config.search_depth,
            true,
        )?;
        let multiplier = search.best_move.ok_or(SearchError::NoAvailableMoves)?;
        self.totals.record(&search);

        let report = self.commit(multiplier, Player::Computer)?;
        Ok(ComputerMove { search, report })
    }

    fn commit(&mut self, multiplier: Multiplier, mover: Player) -> Result<MoveReport, EngineError> {
        let previous = *self.state()?;
        let next = self.tree.apply_move(self.current, multiplier, mover)?;
        self.current = next;

        let state = *self.state()?;
        self.phase = TurnPhase::after(&state);
        info!(
            "{} chose {}: {} -> {} (human {}, computer {})",
            mover,
            multiplier,
            previous.number(),
            state.number(),
            state.human_score(),
            state.computer_score()
        );
        self.finish_if_terminal(&state);

        Ok(MoveReport {
            mover,
            multiplier,
            previous,
            state,
            phase: self.phase,
        })
    }

    fn finish_if_terminal(&mut self, state: &GameState) {
        let ending = match evaluate::game_ending(state) {
            Some(ending) => ending,
            None => return,
        };

        self.phase = TurnPhase::Finished;
        let summary = GameSummary {
            ending,
            starting_number: self.config.starting_number,
            total_nodes_visited: self.totals.nodes_visited,
            mean_search_duration: self.totals.mean_search_duration(),
            computer_moves: self.totals.computer_moves,
            plies: self
                .tree
                .node(self.current)
                .map(|node| usize::from(node.depth()))
                .unwrap_or_default(),
            algorithm: self.config.algorithm,
            first_mover: self.config.first_mover,
            final_state: *state,
        };
        info!(
            "game over: {} after {} plies, {} nodes searched",
            summary.ending, summary.plies, summary.total_nodes_visited
        );
        self.summary = Some(summary);
    }
}

// Tests
#[cfg(test)]
mod tests {
    use super::*;

    fn engine(starting_number: u32, first_mover: Player, algorithm: Algorithm) -> Engine {
        Engine::with_config(EngineConfig {
            starting_number,
            first_mover,
            algorithm,
            ..EngineConfig::default()
        })
        .unwrap()
    }

    /// Plays the game out, feeding the human side from `human_moves` in a cycle.
    fn play_out(engine: &mut Engine, human_moves: &[Multiplier]) -> Vec<Multiplier> {
        let mut turn = 0;
        while !engine.is_finished() {
            match engine.phase() {
                TurnPhase::AwaitingHumanMove => {
                    let multiplier = human_moves[turn % human_moves.len()];
                    engine.make_human_move(multiplier).unwrap();
                    turn += 1;
                }
                TurnPhase::ComputerThinking => {
                    engine.make_computer_move().unwrap();
                }
                TurnPhase::Finished => unreachable!(),
            }
        }
        engine.move_history().unwrap()
    }

    #[test]
    fn test_initial_phase_follows_first_mover() {
        let human_first = engine(8, Player::Human, Algorithm::Minimax);
        assert_eq!(human_first.phase(), TurnPhase::AwaitingHumanMove);

        let computer_first = engine(8, Player::Computer, Algorithm::Minimax);
        assert_eq!(computer_first.phase(), TurnPhase::ComputerThinking);
    }

    #[test]
    fn test_rejects_out_of_range_starting_number() {
        for number in [0u32, 7, 19, 600].iter() {
            let result = Engine::with_config(EngineConfig {
                starting_number: *number,
                ..EngineConfig::default()
            });
            assert_eq!(
                result.err(),
                Some(EngineError::StartingNumberOutOfRange {
                    number: *number,
                    min: 8,
                    max: 18
                })
            );
        }
    }

    #[test]
    fn test_rejects_zero_depth() {
        let result = Engine::with_config(EngineConfig {
            search_depth: 0,
            ..EngineConfig::default()
        });
        assert_eq!(result.err(), Some(EngineError::SearchDepthTooLow));
    }

    #[test]
    fn test_terminal_start_is_finished_immediately() {
        let engine = Engine::with_config(EngineConfig {
            starting_number: 1500,
            valid_starting_numbers: 1..=2000,
            ..EngineConfig::default()
        })
        .unwrap();

        assert!(engine.is_finished());
        assert_eq!(engine.check_game_over(), Some(GameEnding::Draw));
    }

    #[test]
    fn test_human_move_then_computer_turn() {
        let mut engine = engine(8, Player::Human, Algorithm::AlphaBeta);

        let report = engine.make_human_move(Multiplier::Three).unwrap();
        assert_eq!(report.state.number(), 24);
        assert_eq!(report.state.human_score(), 0);
        assert_eq!(report.state.computer_score(), -1);
        assert_eq!(report.score_change(), (Player::Computer, -1));
        assert_eq!(engine.phase(), TurnPhase::ComputerThinking);

        let computer = engine.make_computer_move().unwrap();
        assert_eq!(computer.report.mover, Player::Computer);
        assert_eq!(computer.report.multiplier, Multiplier::Four);
        assert_eq!(computer.report.state.number(), 96);
        assert_eq!(computer.search.nodes_visited, 31);
        assert_eq!(engine.phase(), TurnPhase::AwaitingHumanMove);
    }

    #[test]
    fn test_invalid_multiplier_leaves_state_unchanged() {
        let mut engine = engine(8, Player::Human, Algorithm::Minimax);
        let before = *engine.state().unwrap();

        assert_eq!(
            engine.make_human_move_value(5),
            Err(EngineError::InvalidMove { value: 5 })
        );
        assert_eq!(*engine.state().unwrap(), before);
        assert_eq!(engine.phase(), TurnPhase::AwaitingHumanMove);
        assert!(engine.move_history().unwrap().is_empty());
    }

    #[test]
    fn test_human_move_rejected_during_computer_turn() {
        let mut engine = engine(8, Player::Computer, Algorithm::Minimax);

        assert_eq!(
            engine.make_human_move(Multiplier::Two),
            Err(EngineError::NotHumansTurn {
                phase: TurnPhase::ComputerThinking
            })
        );
        assert_eq!(engine.state().unwrap().number(), 8);
    }

    #[test]
    fn test_computer_move_rejected_during_human_turn() {
        let mut engine = engine(8, Player::Human, Algorithm::Minimax);

        assert_eq!(
            engine.make_computer_move().err(),
            Some(EngineError::NotComputersTurn {
                phase: TurnPhase::AwaitingHumanMove
            })
        );
    }

    #[test]
    fn test_game_reaches_finished_with_summary() {
        let mut engine = engine(10, Player::Human, Algorithm::AlphaBeta);
        play_out(&mut engine, &[Multiplier::Two]);

        let summary = engine.summary().unwrap().clone();
        let final_state = *engine.state().unwrap();
        assert!(final_state.is_terminal());
        assert_eq!(summary.final_state, final_state);
        assert_eq!(summary.starting_number, 10);
        assert_eq!(summary.algorithm, Algorithm::AlphaBeta);
        assert_eq!(summary.first_mover, Player::Human);
        assert_eq!(summary.plies, engine.move_history().unwrap().len());
        assert_eq!(Some(summary.ending), evaluate::game_ending(&final_state));
        assert!(summary.computer_moves > 0);
        assert!(summary.total_nodes_visited > 0);
    }

    #[test]
    fn test_no_moves_accepted_after_finish() {
        let mut engine = engine(12, Player::Computer, Algorithm::Minimax);
        play_out(&mut engine, &[Multiplier::Four]);

        assert!(engine.is_finished());
        assert_eq!(
            engine.make_human_move(Multiplier::Two),
            Err(EngineError::NotHumansTurn {
                phase: TurnPhase::Finished
            })
        );
        assert!(engine.make_computer_move().is_err());
    }

    #[test]
    fn test_algorithms_play_identical_games() {
        for number in VALID_STARTING_NUMBERS {
            for first_mover in Player::ALL.iter() {
                let mut plain = engine(number, *first_mover, Algorithm::Minimax);
                let mut pruned = engine(number, *first_mover, Algorithm::AlphaBeta);
                let human_moves = [Multiplier::Three, Multiplier::Two, Multiplier::Four];

                let plain_moves = play_out(&mut plain, &human_moves);
                let pruned_moves = play_out(&mut pruned, &human_moves);

                assert_eq!(plain_moves, pruned_moves);
                let plain_summary = plain.summary().unwrap();
                let pruned_summary = pruned.summary().unwrap();
                assert_eq!(plain_summary.ending, pruned_summary.ending);
                assert_eq!(plain_summary.final_state, pruned_summary.final_state);
                assert!(pruned_summary.total_nodes_visited <= plain_summary.total_nodes_visited);
            }
        }
    }

    #[test]
    fn test_replaying_moves_reaches_same_final_state() {
        let mut engine = engine(14, Player::Computer, Algorithm::Minimax);
        let moves = play_out(&mut engine, &[Multiplier::Two, Multiplier::Three]);

        let mut replayed = GameState::new(14, Player::Computer).unwrap();
        for multiplier in moves {
            let mover = replayed.to_move();
            replayed = replayed.apply(multiplier, mover).unwrap();
        }

        assert_eq!(replayed, *engine.state().unwrap());
    }

    #[test]
    fn test_total_nodes_is_sum_of_searches() {
        let mut engine = engine(9, Player::Computer, Algorithm::Minimax);
        let mut expected = 0;
        while !engine.is_finished() {
            match engine.phase() {
                TurnPhase::ComputerThinking => {
                    expected += engine.make_computer_move().unwrap().search.nodes_visited;
                }
                _ => {
                    engine.make_human_move(Multiplier::Two).unwrap();
                }
            }
        }

        assert_eq!(engine.summary().unwrap().total_nodes_visited, expected);
        assert_eq!(engine.get_search_stats().total_positions_searched, expected);
    }

    #[test]
    fn test_committed_path_is_kept_in_tree() {
        let mut engine = engine(8, Player::Human, Algorithm::AlphaBeta);
        engine.make_human_move(Multiplier::Two).unwrap();
        engine.make_computer_move().unwrap();

        let path = engine.tree().path_to(engine.current_node()).unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(engine.tree().len(), 3);
        assert_eq!(engine.tree().node(engine.current_node()).unwrap().depth(), 2);
    }
}
