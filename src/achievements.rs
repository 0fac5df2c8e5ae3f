//! Per-user persisted achievement completion state.

use std::sync::Arc;

use log::{error, warn};

use crate::api::AchievementRecord;
use crate::models::AchievementStatus;
use crate::store::KeyValueStore;

const ACHIEVEMENTS_KEY: &str = "user_achievements";

/// Tracks which achievements a user has completed, independently of the
/// fetched catalog. Missing or undecodable data reads as "none yet".
pub struct AchievementLog {
    store: Arc<dyn KeyValueStore>,
}

impl AchievementLog {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    fn storage_key(user_id: &str) -> String {
        format!("{ACHIEVEMENTS_KEY}_{user_id}")
    }

    pub fn load(&self, user_id: &str) -> Vec<AchievementStatus> {
        let Some(bytes) = self.store.get(&Self::storage_key(user_id)) else {
            return Vec::new();
        };

        match serde_json::from_slice(&bytes) {
            Ok(statuses) => statuses,
            Err(err) => {
                warn!("Discarding undecodable achievement data for {user_id}: {err}");
                Vec::new()
            }
        }
    }

    pub fn save(&self, user_id: &str, statuses: &[AchievementStatus]) {
        match serde_json::to_vec(statuses) {
            Ok(bytes) => self.store.set(&Self::storage_key(user_id), &bytes),
            Err(err) => error!("Failed to encode achievements for {user_id}: {err}"),
        }
    }

    /// Overwrite the stored state for `id`, inserting it when absent.
    pub fn update(&self, user_id: &str, id: i64, completed: bool) {
        let mut statuses = self.load(user_id);

        if let Some(status) = statuses.iter_mut().find(|s| s.id == id) {
            status.completed = completed;
        } else {
            statuses.push(AchievementStatus { id, completed });
        }

        self.save(user_id, &statuses);
    }

    pub fn is_completed(&self, user_id: &str, id: i64) -> bool {
        self.load(user_id)
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.completed)
            .unwrap_or(false)
    }

    pub fn completed_ids(&self, user_id: &str) -> Vec<i64> {
        self.load(user_id)
            .into_iter()
            .filter(|s| s.completed)
            .map(|s| s.id)
            .collect()
    }

    /// Mark the fetched catalog with this user's local completion state.
    pub fn apply_completion(&self, user_id: &str, records: &mut [AchievementRecord]) {
        let completed = self.completed_ids(user_id);
        for record in records {
            if completed.contains(&record.id) {
                record.completed = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn log() -> AchievementLog {
        AchievementLog::new(Arc::new(MemoryStore::new()))
    }

    #[test]
    fn update_inserts_then_overwrites() {
        let log = log();

        log.update("u1", 4, true);
        assert!(log.is_completed("u1", 4));
        assert_eq!(log.load("u1").len(), 1);

        log.update("u1", 4, false);
        assert!(!log.is_completed("u1", 4));
        assert_eq!(log.load("u1").len(), 1);
    }

    #[test]
    fn completed_ids_reflect_only_completed_records() {
        let log = log();
        log.update("u1", 1, true);
        log.update("u1", 2, false);
        log.update("u1", 3, true);

        let mut ids = log.completed_ids("u1");
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn state_is_scoped_per_user() {
        let log = log();
        log.update("u1", 1, true);

        assert!(log.is_completed("u1", 1));
        assert!(!log.is_completed("u2", 1));
        assert!(log.load("u2").is_empty());
    }

    #[test]
    fn apply_completion_marks_fetched_records() {
        let log = log();
        log.update("u1", 2, true);

        let mut records = vec![
            AchievementRecord {
                id: 1,
                title: "Primer envío".to_string(),
                description: String::new(),
                image: String::new(),
                requirement: String::new(),
                completed: false,
            },
            AchievementRecord {
                id: 2,
                title: "Reciclador".to_string(),
                description: String::new(),
                image: String::new(),
                requirement: String::new(),
                completed: false,
            },
        ];

        log.apply_completion("u1", &mut records);
        assert!(!records[0].completed);
        assert!(records[1].completed);
    }

    #[test]
    fn garbage_reads_as_no_achievements() {
        let log = log();
        log.store.set(&AchievementLog::storage_key("u1"), b"\xff\xfe");
        assert!(log.load("u1").is_empty());
        assert!(!log.is_completed("u1", 1));
    }
}
