use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::{ConfigContentProvider, ConfigManager, ConfigSerializer, Validate};

pub const SNAKE_BEST_SCORES_KEY: &str = "snake";

/// Personal records for one game: most pies eaten and longest snake.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestScores {
    pub pies: u32,
    pub length: usize,
}

impl Default for BestScores {
    fn default() -> Self {
        Self { pies: 0, length: 3 }
    }
}

impl BestScores {
    /// Raises whichever record was beaten. Returns whether anything improved.
    pub fn record(&mut self, pies: u32, length: usize) -> bool {
        let mut improved = false;
        if pies > self.pies {
            self.pies = pies;
            improved = true;
        }
        if length > self.length {
            self.length = length;
            improved = true;
        }
        improved
    }

    pub fn merged(mut self, other: &BestScores) -> BestScores {
        self.record(other.pies, other.length);
        self
    }
}

/// Every game's records, keyed by a fixed identifier such as [`SNAKE_BEST_SCORES_KEY`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestScoreBook {
    #[serde(default)]
    pub entries: BTreeMap<String, BestScores>,
}

impl Validate for BestScoreBook {
    fn validate(&self) -> Result<(), String> {
        if let Some(key) = self.entries.keys().find(|key| key.trim().is_empty()) {
            return Err(format!("best score key '{}' must not be blank", key));
        }
        Ok(())
    }
}

pub trait BestScoreStore {
    fn load(&self, key: &str) -> Result<BestScores, String>;
    /// Stores `scores` without ever lowering a record already on file.
    fn save(&self, key: &str, scores: &BestScores) -> Result<(), String>;
}

impl<T: BestScoreStore + ?Sized> BestScoreStore for Box<T> {
    fn load(&self, key: &str) -> Result<BestScores, String> {
        (**self).load(key)
    }

    fn save(&self, key: &str, scores: &BestScores) -> Result<(), String> {
        (**self).save(key, scores)
    }
}

impl<TConfigContentProvider, TConfigSerializer> BestScoreStore
    for ConfigManager<TConfigContentProvider, BestScoreBook, TConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfigSerializer: ConfigSerializer<BestScoreBook>,
{
    fn load(&self, key: &str) -> Result<BestScores, String> {
        Ok(self
            .get_config()?
            .entries
            .get(key)
            .copied()
            .unwrap_or_default())
    }

    fn save(&self, key: &str, scores: &BestScores) -> Result<(), String> {
        self.update(|book| {
            let entry = book.entries.entry(key.to_string()).or_default();
            *entry = entry.merged(scores);
        })
    }
}
