// Library surface for the game core and integration tests.
// Keep this lean to avoid coupling to bin-only types in main.rs.
pub mod config;
pub mod error;
pub mod grid;
pub mod highscore;
pub mod roster;
pub mod round;
pub mod scoring;
pub mod session;
pub mod word;

pub use error::GameError;
pub use session::{GameEvent, GameSession, SessionObserver, SessionSettings, SessionState};
pub use word::CaseMode;
