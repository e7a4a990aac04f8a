use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// Board engine errors. Both are recovered locally by the caller (the UI
/// ignores the click); neither is ever surfaced to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum GameError {
    #[error("cell {cell} is already occupied")]
    CellOccupied { cell: usize },
    #[error("game is already completed")]
    GameAlreadyCompleted,
    #[error("it is not {mark}'s turn")]
    NotYourTurn { mark: crate::Mark },
}

/// Ledger errors. `NoCurrentUser` is a no-op skip for callers, never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum LedgerError {
    #[error("no user is currently logged in")]
    NoCurrentUser,
}

/// Account errors surfaced on the login and registration forms.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum AuthError {
    #[error("an account with this email already exists")]
    EmailAlreadyRegistered,
    #[error("invalid email or password")]
    InvalidCredentials,
}
