use log::{info, warn};
use thiserror::Error;

use crate::game::display::GameDisplay;
use crate::game::engine::{Engine, EngineConfig, EngineError, GameSummary, MoveReport, TurnPhase};
use crate::game::input_source::InputSource;
use crate::game::renderer::GameRenderer;
use crate::input_handler::InputError;
use crate::match_log::{MatchLog, MatchLogError, MatchRecord};
use crate::searcher::SearchResult;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("{0}")]
    Engine(#[from] EngineError),
    #[error("{0}")]
    Input(#[from] InputError),
    #[error("{0}")]
    MatchLog(#[from] MatchLogError),
}

pub struct GameLoop<I: InputSource, R: GameRenderer> {
    engine: Engine,
    ui: GameDisplay,
    input: I,
    renderer: R,
    match_log: Option<MatchLog>,
}

impl<I: InputSource, R: GameRenderer> GameLoop<I, R> {
    pub fn new(input: I, renderer: R, config: EngineConfig) -> Result<Self, GameError> {
        Ok(Self {
            engine: Engine::with_config(config)?,
            ui: GameDisplay::new(),
            input,
            renderer,
            match_log: None,
        })
    }

    /// Appends a record to `match_log` when a game finishes.
    pub fn with_match_log(mut self, match_log: MatchLog) -> Self {
        self.match_log = Some(match_log);
        self
    }

    pub fn with_display(mut self, ui: GameDisplay) -> Self {
        self.ui = ui;
        self
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn match_log(&self) -> Option<&MatchLog> {
        self.match_log.as_ref()
    }

    /// Plays until the game ends or the human quits.
    ///
    /// Returns `Ok(None)` if the human quit; abandoned games are not recorded.
    pub fn run(&mut self) -> Result<Option<GameSummary>, GameError> {
        let mut turn = 1;
        let mut last_move: Option<MoveReport> = None;
        let mut last_search: Option<SearchResult> = None;

        loop {
            let state = *self.engine.state()?;
            match self.engine.phase() {
                TurnPhase::Finished => break,
                TurnPhase::AwaitingHumanMove => {
                    self.renderer.render(
                        &mut self.ui,
                        turn,
                        &state,
                        last_move.as_ref(),
                        last_search.as_ref(),
                        true,
                    );

                    let multiplier = match self.input.get_move() {
                        Ok(Some(multiplier)) => multiplier,
                        Ok(None) => {
                            self.renderer.render_message(
                                &mut self.ui,
                                "Invalid move. Please enter 2, 3 or 4.",
                            );
                            continue;
                        }
                        Err(InputError::UserExit) => {
                            info!("game abandoned on turn {}", turn);
                            return Ok(None);
                        }
                        Err(error) => return Err(error.into()),
                    };
                    last_move = Some(self.engine.make_human_move(multiplier)?);
                    last_search = None;
                }
                TurnPhase::ComputerThinking => {
                    self.renderer.render(
                        &mut self.ui,
                        turn,
                        &state,
                        last_move.as_ref(),
                        last_search.as_ref(),
                        false,
                    );
                    let computer_move = self.engine.make_computer_move()?;
                    last_move = Some(computer_move.report);
                    last_search = Some(computer_move.search);
                }
            }
            turn += 1;
        }

        let summary = match self.engine.summary() {
            Some(summary) => summary.clone(),
            None => return Ok(None),
        };

        let state = *self.engine.state()?;
        self.renderer.render(
            &mut self.ui,
            turn,
            &state,
            last_move.as_ref(),
            last_search.as_ref(),
            false,
        );
        self.renderer.render_game_over(&mut self.ui, &summary);

        if let Some(match_log) = self.match_log.as_mut() {
            if let Err(error) = match_log.append(MatchRecord::completed_now(&summary)) {
                warn!("game result was not saved: {}", error);
                self.renderer
                    .render_message(&mut self.ui, &format!("Could not save game: {}", error));
            }
        }

        Ok(Some(summary))
    }
}
