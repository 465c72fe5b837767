use std::fmt;

use super::error::StateError;
use super::multiplier::Multiplier;
use super::player::Player;

/// The game ends as soon as the shared number reaches this value.
pub const TERMINAL_THRESHOLD: u32 = 1200;

/// A position in the duel: the shared number, both scores and the player
/// who is about to move.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct GameState {
    number: u32,
    human_score: i32,
    computer_score: i32,
    to_move: Player,
}

impl GameState {
    /// Starting position: both scores at zero.
    pub fn new(number: u32, to_move: Player) -> Result<Self, StateError> {
        Self::with_scores(number, 0, 0, to_move)
    }

    pub fn with_scores(
        number: u32,
        human_score: i32,
        computer_score: i32,
        to_move: Player,
    ) -> Result<Self, StateError> {
        if number == 0 {
            return Err(StateError::NonPositiveNumberError);
        }

        Ok(Self {
            number,
            human_score,
            computer_score,
            to_move,
        })
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn human_score(&self) -> i32 {
        self.human_score
    }

    pub fn computer_score(&self) -> i32 {
        self.computer_score
    }

    pub fn score(&self, player: Player) -> i32 {
        match player {
            Player::Human => self.human_score,
            Player::Computer => self.computer_score,
        }
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn is_terminal(&self) -> bool {
        self.number >= TERMINAL_THRESHOLD
    }

    /// Applies `multiplier` on behalf of `mover`. This is the only place the
    /// scoring rule lives: an even result costs the mover's opponent a point,
    /// an odd result earns the mover a point.
    pub fn apply(&self, multiplier: Multiplier, mover: Player) -> Result<Self, StateError> {
        if self.is_terminal() {
            return Err(StateError::TerminalStateMoveApplicationError {
                number: self.number,
            });
        }

        let number = self.number * multiplier.factor();
        let mut next = Self {
            number,
            human_score: self.human_score,
            computer_score: self.computer_score,
            to_move: mover.opponent(),
        };

        let (scored, delta) = if number % 2 == 0 {
            (mover.opponent(), -1)
        } else {
            (mover, 1)
        };
        match scored {
            Player::Human => next.human_score += delta,
            Player::Computer => next.computer_score += delta,
        }

        Ok(next)
    }

    /// Leader by score, `None` on a tie.
    pub fn leader(&self) -> Option<Player> {
        if self.human_score > self.computer_score {
            Some(Player::Human)
        } else if self.computer_score > self.human_score {
            Some(Player::Computer)
        } else {
            None
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "number: {}, human: {}, computer: {}, to move: {}",
            self.number, self.human_score, self.computer_score, self.to_move
        )
    }
}
