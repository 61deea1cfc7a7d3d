use thiserror::Error;

/// Errors surfaced by the game core.
///
/// `NoCharactersAvailable` is a configuration fault caught at construction
/// time; the session variants signal front-end misuse of the round
/// lifecycle. Persistence problems never show up here: stores are
/// best-effort and degrade to defaults.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("no characters available after exclusions")]
    NoCharactersAvailable,

    #[error("session already finished")]
    SessionFinished,

    #[error("no active round")]
    NoActiveRound,

    #[error("round is not complete yet")]
    RoundNotComplete,
}
