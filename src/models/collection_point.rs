use serde::{Deserialize, Serialize};

/// A physical recycling drop-off location. Read-only reference data;
/// fetched from the backend and cached in memory for the process lifetime.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CollectionPoint {
    pub id: String,
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub is_active: bool,
}
