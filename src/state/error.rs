use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum StateError {
    #[error("Cannot apply move, the number {number} has already reached the threshold")]
    TerminalStateMoveApplicationError { number: u32 },
    #[error("Invalid multiplier {value}, it must be one of 2, 3 or 4")]
    InvalidMultiplierError { value: u32 },
    #[error("Cannot parse {input:?} as a multiplier")]
    UnparsableMultiplierError { input: String },
    #[error("The starting number must be positive")]
    NonPositiveNumberError,
    #[error("Node {id} does not exist in the game tree")]
    UnknownNodeError { id: usize },
}
