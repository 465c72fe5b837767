use rand::seq::SliceRandom;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, PartialEq, Debug, Eq, Hash)]
pub enum Player {
    Human,
    Computer,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::Human, Player::Computer];

    pub fn opponent(&self) -> Self {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }

    /// The computer is the maximizing side of every search.
    pub fn maximize_score(&self) -> bool {
        match self {
            Player::Computer => true,
            Player::Human => false,
        }
    }

    pub fn from_maximizing(maximizing: bool) -> Self {
        if maximizing {
            Player::Computer
        } else {
            Player::Human
        }
    }

    pub fn random() -> Self {
        *Self::ALL
            .choose(&mut rand::thread_rng())
            .unwrap_or(&Player::Human)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Player::Human => "Human",
            Player::Computer => "Computer",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let player_str = match self {
            Player::Human => "human",
            Player::Computer => "computer",
        };
        write!(f, "{}", player_str)
    }
}

// used for parsing cli args and match log records
type ParseError = &'static str;
impl FromStr for Player {
    type Err = ParseError;
    fn from_str(player: &str) -> Result<Self, Self::Err> {
        match player {
            "human" => Ok(Player::Human),
            "computer" => Ok(Player::Computer),
            "random" => Ok(Player::random()),
            _ => Err("invalid player; options are: human, computer, random"),
        }
    }
}
