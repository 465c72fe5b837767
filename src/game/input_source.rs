use std::collections::VecDeque;

use crate::input_handler::{parse_move_input, InputError};
use crate::state::Multiplier;

pub trait InputSource {
    /// `Ok(None)` means the input was not a move and should be asked for again.
    fn get_move(&mut self) -> Result<Option<Multiplier>, InputError>;
}

pub struct HumanInput;

impl InputSource for HumanInput {
    fn get_move(&mut self) -> Result<Option<Multiplier>, InputError> {
        match parse_move_input() {
            Ok(multiplier) => Ok(Some(multiplier)),
            Err(InputError::InvalidInput { .. }) => Ok(None),
            Err(error) => Err(error),
        }
    }
}

/// Feeds a fixed sequence of moves, then asks to exit.
pub struct ScriptedInput {
    moves: VecDeque<Multiplier>,
}

impl ScriptedInput {
    pub fn new<I: IntoIterator<Item = Multiplier>>(moves: I) -> Self {
        Self {
            moves: moves.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl InputSource for ScriptedInput {
    fn get_move(&mut self) -> Result<Option<Multiplier>, InputError> {
        self.moves.pop_front().map(Some).ok_or(InputError::UserExit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_input_yields_moves_in_order() {
        let mut input = ScriptedInput::new(vec![Multiplier::Two, Multiplier::Four]);

        assert_eq!(input.get_move(), Ok(Some(Multiplier::Two)));
        assert_eq!(input.get_move(), Ok(Some(Multiplier::Four)));
        assert_eq!(input.remaining(), 0);
        assert_eq!(input.get_move(), Err(InputError::UserExit));
    }
}
