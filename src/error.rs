use thiserror::Error;

use crate::language::Tier;

/// Errors raised while loading game data or driving the terminal.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("word list for tier {0} is empty")]
    EmptyTier(Tier),

    #[error("no word list configured for tier {0}")]
    MissingTier(Tier),

    #[error("word {word:?} appears more than once in tier {tier}")]
    DuplicateWord { tier: Tier, word: String },

    #[error("word list {name} could not be read: {source}")]
    WordList {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("no boss defined for level {0}")]
    MissingBoss(u32),

    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
