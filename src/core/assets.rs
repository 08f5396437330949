/// Word lists and banner texts, loaded once at startup
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{HangmanError, Result};

pub const WORDS_FILE: &str = "words.json";
pub const WELCOME_FILE: &str = "welcome-message.txt";
pub const WINNER_FILE: &str = "winner-message.txt";

const LEVEL_PREFIX: &str = "level";

/// On-disk shape of the word list: `{ "level1": [...], "level2": [...] }`
#[derive(Debug, Deserialize)]
#[serde(transparent)]
struct RawWordBank(HashMap<String, Vec<String>>);

/// Immutable mapping from level to its candidate words.
///
/// Levels are 1-based and contiguous, so the highest level is also the
/// number of levels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordBank {
    levels: BTreeMap<u32, Vec<String>>,
}

impl WordBank {
    /// Build a bank from per-level word lists, validating every entry.
    pub fn new(levels: BTreeMap<u32, Vec<String>>) -> Result<Self> {
        if levels.is_empty() {
            return Err(invalid("word bank has no levels"));
        }

        for (expected, (&level, words)) in (1u32..).zip(levels.iter()) {
            if level != expected {
                return Err(invalid(format!(
                    "levels must be contiguous from 1, missing level {expected}"
                )));
            }
            if words.is_empty() {
                return Err(invalid(format!("level {level} has no words")));
            }
            if let Some(bad) = words
                .iter()
                .find(|w| w.is_empty() || !w.chars().all(char::is_alphabetic))
            {
                return Err(invalid(format!("level {level} has invalid word {bad:?}")));
            }
        }

        Ok(Self { levels })
    }

    /// Parse the JSON word list format.
    pub fn from_json(text: &str) -> Result<Self> {
        let RawWordBank(raw) = serde_json::from_str(text).map_err(invalid)?;

        let mut levels = BTreeMap::new();
        for (key, words) in raw {
            let level = parse_level_key(&key)
                .ok_or_else(|| invalid(format!("unexpected key {key:?}, expected level<N>")))?;
            if levels.insert(level, words).is_some() {
                return Err(invalid(format!("level {level} is listed more than once")));
            }
        }

        Self::new(levels)
    }

    pub fn words_for_level(&self, level: u32) -> Result<&[String]> {
        self.levels
            .get(&level)
            .map(Vec::as_slice)
            .ok_or(HangmanError::LevelNotFound(level))
    }

    pub fn max_level(&self) -> u32 {
        self.levels.len() as u32
    }

    pub fn contains_level(&self, level: u32) -> bool {
        self.levels.contains_key(&level)
    }
}

/// Everything read from the asset directory.
#[derive(Debug, Clone)]
pub struct GameAssets {
    pub words: WordBank,
    pub welcome_message: String,
    pub winner_message: String,
}

impl GameAssets {
    /// Load `words.json` and the two message files from `dir`.
    pub fn load(dir: &Path) -> Result<Self> {
        let words_path = dir.join(WORDS_FILE);
        let words = WordBank::from_json(&read_asset(&words_path)?).map_err(|e| match e {
            HangmanError::InvalidWordBank(reason) => {
                warn!(path = ?words_path, %reason, "rejecting word list");
                HangmanError::asset(&words_path, reason)
            }
            other => other,
        })?;

        let welcome_message = read_asset(&dir.join(WELCOME_FILE))?;
        let winner_message = read_asset(&dir.join(WINNER_FILE))?;

        debug!(dir = ?dir, levels = words.max_level(), "assets loaded");
        Ok(Self {
            words,
            welcome_message,
            winner_message,
        })
    }
}

/// `level<N>` with N written canonically: no sign, no leading zeros, N >= 1
fn parse_level_key(key: &str) -> Option<u32> {
    let digits = key.strip_prefix(LEVEL_PREFIX)?;
    let level = digits.parse::<u32>().ok().filter(|&n| n >= 1)?;
    (level.to_string() == digits).then_some(level)
}

fn invalid(reason: impl ToString) -> HangmanError {
    HangmanError::InvalidWordBank(reason.to_string())
}

fn read_asset(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| HangmanError::asset(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_levels_in_order() {
        let bank = WordBank::from_json(r#"{"level2": ["horse"], "level1": ["dog", "cat"]}"#).unwrap();
        assert_eq!(bank.max_level(), 2);
        assert_eq!(bank.words_for_level(1).unwrap(), ["dog", "cat"]);
        assert_eq!(bank.words_for_level(2).unwrap(), ["horse"]);
    }

    #[test]
    fn missing_level_is_reported() {
        let bank = WordBank::from_json(r#"{"level1": ["dog"]}"#).unwrap();
        assert!(matches!(bank.words_for_level(3), Err(HangmanError::LevelNotFound(3))));
        assert!(!bank.contains_level(0));
    }

    #[test]
    fn rejects_gaps_between_levels() {
        let err = WordBank::from_json(r#"{"level1": ["dog"], "level3": ["horse"]}"#).unwrap_err();
        assert!(err.to_string().contains("missing level 2"), "{err}");
    }

    #[test]
    fn rejects_bad_keys_and_words() {
        assert!(WordBank::from_json(r#"{"stage1": ["dog"]}"#).is_err());
        assert!(WordBank::from_json(r#"{"level0": ["dog"]}"#).is_err());
        assert!(WordBank::from_json(r#"{"level1": []}"#).is_err());
        assert!(WordBank::from_json(r#"{"level1": ["ice cream"]}"#).is_err());
        assert!(WordBank::from_json(r#"{"level1": [""]}"#).is_err());
        assert!(WordBank::from_json("{}").is_err());
        assert!(WordBank::from_json("[1, 2]").is_err());
        assert!(WordBank::from_json(r#"{"level+1": ["dog"]}"#).is_err());
        assert!(WordBank::from_json(r#"{"level01": ["dog"]}"#).is_err());
    }

    #[test]
    fn rejects_levels_listed_twice() {
        let err = WordBank::from_json(r#"{"level1": ["dog"], "level01": ["cat"]}"#).unwrap_err();
        assert!(matches!(err, HangmanError::InvalidWordBank(_)), "{err}");
        assert!(err.to_string().contains("\"level01\""), "{err}");
    }
}
