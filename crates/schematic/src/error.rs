use lib::input::IStrError;
use thiserror::Error;

/// Errors raised while building or analyzing a schematic.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("schematic is empty")]
    Empty,
    #[error("row {row} has {actual} columns, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("malformed schematic input")]
    Input(#[from] IStrError),
    #[error("cell at row {row}, column {column} is out of range")]
    OutOfRange { row: usize, column: usize },
    #[error("value at row {row}, column {column} overflows")]
    Overflow { row: usize, column: usize },
    #[error("bad alphabet; empty {empty:?} and gear {gear:?} must be distinct non-digits")]
    Alphabet { empty: char, gear: char },
}
