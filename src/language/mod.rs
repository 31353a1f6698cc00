pub mod core;
pub mod difficulty;
pub mod selector;

pub use self::core::WordList;
pub use difficulty::Tier;
pub use selector::WordBank;
