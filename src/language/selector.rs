use itertools::Itertools;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashMap;

use super::{core::WordList, difficulty::Tier};
use crate::error::{GameError, Result};

/// Candidate words for every difficulty tier.
#[derive(Debug, Clone, Default)]
pub struct WordBank {
    tiers: HashMap<Tier, Vec<String>>,
}

impl WordBank {
    /// Load the word lists compiled into the binary.
    pub fn builtin() -> Result<Self> {
        let mut tiers = HashMap::with_capacity(Tier::ALL.len());
        for tier in Tier::ALL {
            tiers.insert(tier, WordList::builtin(tier)?.words);
        }
        Ok(Self { tiers })
    }

    pub fn from_lists<I, S>(lists: I) -> Self
    where
        I: IntoIterator<Item = (Tier, Vec<S>)>,
        S: Into<String>,
    {
        let tiers = lists
            .into_iter()
            .map(|(tier, words)| (tier, words.into_iter().map(Into::into).collect()))
            .collect();
        Self { tiers }
    }

    pub fn words(&self, tier: Tier) -> &[String] {
        self.tiers.get(&tier).map(Vec::as_slice).unwrap_or_default()
    }

    /// Every tier must exist, be non-empty and hold distinct words.
    pub fn validate(&self) -> Result<()> {
        for tier in Tier::ALL {
            let words = self.tiers.get(&tier).ok_or(GameError::MissingTier(tier))?;
            if words.is_empty() {
                return Err(GameError::EmptyTier(tier));
            }
            if let Some(word) = words.iter().duplicates().next() {
                return Err(GameError::DuplicateWord {
                    tier,
                    word: word.clone(),
                });
            }
        }
        Ok(())
    }

    /// Draw up to `count` distinct words for `level` in random order.
    pub fn select_words<R: Rng + ?Sized>(
        &self,
        level: u32,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<String>> {
        let tier = Tier::for_level(level);
        let available = self.words(tier);
        if available.is_empty() {
            return Err(GameError::EmptyTier(tier));
        }

        // choose_multiple keeps source order, so shuffle afterwards
        let mut picked: Vec<String> = available
            .choose_multiple(rng, count.min(available.len()))
            .cloned()
            .collect();
        picked.shuffle(rng);
        Ok(picked)
    }
}
