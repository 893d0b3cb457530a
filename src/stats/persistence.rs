//! Rarity statistics storage.

use super::types::RarityStatistics;
use crate::utils::persistence::{load_json_or_default_at, save_json_at, save_path};
use std::path::PathBuf;

pub const STATS_FILENAME: &str = "rarity_stats.json";

/// Load/save of the statistics blob. Failures are the store's problem.
pub trait StatsStore {
    fn load_statistics(&self) -> RarityStatistics;
    fn save_statistics(&mut self, stats: &RarityStatistics);
}

/// Statistics stored as JSON (~/.eternal-realms/rarity_stats.json by default).
#[derive(Debug, Clone)]
pub struct JsonStatsStore {
    path: Option<PathBuf>,
}

impl JsonStatsStore {
    /// Store in the default save directory.
    pub fn new() -> Self {
        let path = match save_path(STATS_FILENAME) {
            Ok(p) => Some(p),
            Err(e) => {
                tracing::warn!(error = %e, "no save directory, rarity stats will not persist");
                None
            }
        };
        Self { path }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }
}

impl Default for JsonStatsStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StatsStore for JsonStatsStore {
    fn load_statistics(&self) -> RarityStatistics {
        match &self.path {
            Some(path) => load_json_or_default_at(path),
            None => RarityStatistics::default(),
        }
    }

    fn save_statistics(&mut self, stats: &RarityStatistics) {
        if let Some(path) = &self.path {
            if let Err(e) = save_json_at(path, stats) {
                tracing::warn!(error = %e, path = %path.display(), "failed to save rarity stats");
            }
        }
    }
}

/// Keeps the last saved statistics in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStatsStore {
    saved: Option<RarityStatistics>,
}

impl MemoryStatsStore {
    pub fn saved(&self) -> Option<&RarityStatistics> {
        self.saved.as_ref()
    }
}

impl StatsStore for MemoryStatsStore {
    fn load_statistics(&self) -> RarityStatistics {
        self.saved.clone().unwrap_or_default()
    }

    fn save_statistics(&mut self, stats: &RarityStatistics) {
        self.saved = Some(stats.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rarity::TierId;
    use std::fs;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join("eternal-realms-tests")
            .join(format!("{name}-{}.json", std::process::id()))
    }

    #[test]
    fn test_json_store_roundtrip() {
        let path = temp_path("stats-roundtrip");
        let mut store = JsonStatsStore::with_path(&path);

        let mut stats = RarityStatistics::default();
        stats.total_drops = 9;
        stats.highest_tier = TierId::Epic;
        stats.items_found.insert(TierId::Epic, 1);
        store.save_statistics(&stats);

        assert_eq!(store.load_statistics(), stats);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_json_store_missing_file_is_default() {
        let store = JsonStatsStore::with_path(temp_path("stats-missing"));
        assert_eq!(store.load_statistics(), RarityStatistics::default());
    }

    #[test]
    fn test_json_store_corrupt_file_is_default() {
        let path = temp_path("stats-corrupt");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ not json").unwrap();
        let store = JsonStatsStore::with_path(&path);
        assert_eq!(store.load_statistics(), RarityStatistics::default());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStatsStore::default();
        assert!(store.saved().is_none());
        assert_eq!(store.load_statistics(), RarityStatistics::default());

        let mut stats = RarityStatistics::default();
        stats.total_drops = 1;
        store.save_statistics(&stats);
        assert_eq!(store.saved(), Some(&stats));
    }
}
