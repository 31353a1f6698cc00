// Library surface for the binary and for headless integration tests.
pub mod boss;
pub mod config;
pub mod error;
pub mod game;
pub mod language;
pub mod runtime;
pub mod session;
pub mod terminal;
pub mod ui;

pub use config::GameConfig;
pub use error::{GameError, Result};
pub use game::{Game, GameState, GameSummary};
