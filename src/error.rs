use thiserror::Error;

/// Errors raised by board mutation, turn sequencing and the console front-end.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("position ({row},{col}) is outside the 3x3 board")]
    OutOfBounds { row: usize, col: usize },

    #[error("position ({row},{col}) is already occupied")]
    Occupied { row: usize, col: usize },

    #[error("game already over")]
    GameOver,

    #[error("it is not {0:?}'s turn")]
    NotYourTurn(crate::min_max::Player),

    #[error("no moves left on the board")]
    NoMoves,

    #[error("input closed before a move was chosen")]
    InputClosed,

    #[error("failed to {operation}: {source}")]
    Io {
        operation: &'static str,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
