use std::fmt;
use std::str::FromStr;

use crate::state::{GameState, Player, TERMINAL_THRESHOLD};

// Decided games outrank every heuristic value.
pub const COMPUTER_WINS: f64 = f64::INFINITY;
pub const HUMAN_WINS: f64 = f64::NEG_INFINITY;
pub const DRAW: f64 = 0.;

const SCORE_DIFFERENCE_WEIGHT: f64 = 2.;
const PROGRESS_WEIGHT: f64 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameEnding {
    HumanWins,
    ComputerWins,
    Draw,
}

impl GameEnding {
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameEnding::HumanWins => Some(Player::Human),
            GameEnding::ComputerWins => Some(Player::Computer),
            GameEnding::Draw => None,
        }
    }
}

impl fmt::Display for GameEnding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ending = match self {
            GameEnding::HumanWins => "HUMAN WINS",
            GameEnding::ComputerWins => "COMPUTER WINS",
            GameEnding::Draw => "DRAW",
        };
        write!(f, "{}", ending)
    }
}

impl FromStr for GameEnding {
    type Err = &'static str;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HUMAN WINS" => Ok(GameEnding::HumanWins),
            "COMPUTER WINS" => Ok(GameEnding::ComputerWins),
            "DRAW" => Ok(GameEnding::Draw),
            _ => Err("invalid result; options are: HUMAN WINS, COMPUTER WINS, DRAW"),
        }
    }
}

/// Returns the game ending if the state is terminal, otherwise returns None.
pub fn game_ending(state: &GameState) -> Option<GameEnding> {
    if !state.is_terminal() {
        return None;
    }

    let ending = match state.leader() {
        Some(Player::Human) => GameEnding::HumanWins,
        Some(Player::Computer) => GameEnding::ComputerWins,
        None => GameEnding::Draw,
    };
    Some(ending)
}

/// Scores a state from the computer's point of view. Terminal states get an
/// exact value; anything else gets the heuristic.
pub fn score(state: &GameState) -> f64 {
    match game_ending(state) {
        Some(GameEnding::ComputerWins) => COMPUTER_WINS,
        Some(GameEnding::HumanWins) => HUMAN_WINS,
        Some(GameEnding::Draw) => DRAW,
        None => heuristic_score(state),
    }
}

fn heuristic_score(state: &GameState) -> f64 {
    let score_difference = f64::from(state.computer_score() - state.human_score());
    let progress = f64::from(state.number()) / f64::from(TERMINAL_THRESHOLD);

    score_difference * SCORE_DIFFERENCE_WEIGHT + progress * PROGRESS_WEIGHT
}
