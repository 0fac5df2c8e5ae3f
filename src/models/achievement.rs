use serde::{Deserialize, Serialize};

/// Per-user completion state for one achievement, persisted locally and
/// merged into the fetched achievement catalog for display.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AchievementStatus {
    pub id: i64,
    pub completed: bool,
}
