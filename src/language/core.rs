use include_dir::{include_dir, Dir};
use serde::Deserialize;

use super::difficulty::Tier;
use crate::error::{GameError, Result};

static LANG_DIR: Dir = include_dir!("src/lang");

/// One embedded word list, as stored in `src/lang/<tier>.json`.
#[derive(Deserialize, Clone, Debug)]
pub struct WordList {
    pub name: String,
    pub size: u32,
    pub words: Vec<String>,
}

impl WordList {
    pub fn builtin(tier: Tier) -> Result<Self> {
        read_word_list(tier)
    }

    pub fn from_json(name: &str, json: &[u8]) -> Result<Self> {
        serde_json::from_slice(json).map_err(|source| GameError::WordList {
            name: name.to_string(),
            source,
        })
    }
}

fn read_word_list(tier: Tier) -> Result<WordList> {
    let file_name = format!("{}.json", tier.file_stem());
    let file = LANG_DIR
        .get_file(&file_name)
        .ok_or(GameError::MissingTier(tier))?;

    WordList::from_json(&file_name, file.contents())
}
