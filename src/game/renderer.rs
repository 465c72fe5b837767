use crate::game::display::GameDisplay;
use crate::game::engine::{GameSummary, MoveReport};
use crate::searcher::SearchResult;
use crate::state::GameState;

pub trait GameRenderer {
    fn render(
        &self,
        ui: &mut GameDisplay,
        turn: usize,
        state: &GameState,
        last_move: Option<&MoveReport>,
        last_search: Option<&SearchResult>,
        awaiting_input: bool,
    );
    fn render_game_over(&self, ui: &mut GameDisplay, summary: &GameSummary);
    fn render_message(&self, ui: &mut GameDisplay, message: &str);
}

/// Interactive terminal output with search statistics after computer turns.
pub struct StatsRenderer;

impl GameRenderer for StatsRenderer {
    fn render(
        &self,
        ui: &mut GameDisplay,
        turn: usize,
        state: &GameState,
        last_move: Option<&MoveReport>,
        last_search: Option<&SearchResult>,
        awaiting_input: bool,
    ) {
        ui.compose_game_state(turn, state, last_move, last_search);
        if awaiting_input {
            ui.push_line("\nEnter your move (2, 3 or 4), or `quit`:");
        }
        ui.flush();
    }

    fn render_game_over(&self, ui: &mut GameDisplay, summary: &GameSummary) {
        ui.compose_game_over(summary);
        ui.flush();
    }

    fn render_message(&self, ui: &mut GameDisplay, message: &str) {
        ui.push_line(message);
        ui.flush();
    }
}

/// Renders nothing. Used for headless games.
pub struct SilentRenderer;

impl GameRenderer for SilentRenderer {
    fn render(
        &self,
        _ui: &mut GameDisplay,
        _turn: usize,
        _state: &GameState,
        _last_move: Option<&MoveReport>,
        _last_search: Option<&SearchResult>,
        _awaiting_input: bool,
    ) {
    }

    fn render_game_over(&self, _ui: &mut GameDisplay, _summary: &GameSummary) {}

    fn render_message(&self, _ui: &mut GameDisplay, _message: &str) {}
}
