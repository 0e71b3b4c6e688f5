//! Eco Jumper high score
//!
//! Persisted as a plain decimal string so the browser key stays readable.

use serde::{Deserialize, Serialize};

use crate::persistence::Storage;

/// A single best score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct HighScore(pub u64);

impl HighScore {
    /// Storage key
    pub const STORAGE_KEY: &'static str = "ecoJumperHighScore";

    pub fn value(&self) -> u64 {
        self.0
    }

    /// Check if a final score beats the stored one
    pub fn qualifies(&self, score: u64) -> bool {
        score > self.0
    }

    /// Record a final score. Returns true if it became the new best.
    pub fn submit(&mut self, score: u64) -> bool {
        if !self.qualifies(score) {
            return false;
        }
        self.0 = score;
        true
    }

    /// Load from storage; anything missing or unparseable reads as zero
    pub fn load(storage: &dyn Storage) -> Self {
        match storage.get(Self::STORAGE_KEY) {
            Ok(Some(raw)) => match raw.trim().parse::<u64>() {
                Ok(score) => {
                    log::info!("Loaded high score {score}");
                    Self(score)
                }
                Err(_) => {
                    log::warn!("Ignoring unreadable high score {raw:?}");
                    Self::default()
                }
            },
            Ok(None) => {
                log::info!("No high score found, starting fresh");
                Self::default()
            }
            Err(e) => {
                log::warn!("Could not read high score: {e}");
                Self::default()
            }
        }
    }

    /// Save to storage; failures are logged and otherwise ignored
    pub fn save(&self, storage: &mut dyn Storage) {
        match storage.set(Self::STORAGE_KEY, &self.0.to_string()) {
            Ok(()) => log::info!("High score saved ({})", self.0),
            Err(e) => log::warn!("Could not save high score: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStorage;

    #[test]
    fn test_submit_only_raises() {
        let mut best = HighScore(40);
        assert!(!best.submit(40));
        assert!(!best.submit(12));
        assert!(best.submit(41));
        assert_eq!(best.value(), 41);
    }

    #[test]
    fn test_round_trip_through_storage() {
        let mut storage = MemoryStorage::new();
        assert_eq!(HighScore::load(&storage), HighScore(0));

        HighScore(123).save(&mut storage);
        assert_eq!(
            storage.get(HighScore::STORAGE_KEY).unwrap().as_deref(),
            Some("123")
        );
        assert_eq!(HighScore::load(&storage), HighScore(123));
    }

    #[test]
    fn test_garbage_reads_as_zero() {
        let mut storage = MemoryStorage::new();
        storage.set(HighScore::STORAGE_KEY, "lots").unwrap();
        assert_eq!(HighScore::load(&storage), HighScore(0));
    }
}
