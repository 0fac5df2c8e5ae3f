use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A shipment code stays redeemable for this long after registration.
pub const SHIPMENT_VALIDITY_HOURS: i64 = 48;

/// Maximum number of simultaneously pending shipments per user.
pub const MAX_ACTIVE_SHIPMENTS: usize = 3;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ShipmentStatus {
    Pending,
    Completed,
    Expired,
}

impl ShipmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShipmentStatus::Pending => "pending",
            ShipmentStatus::Completed => "completed",
            ShipmentStatus::Expired => "expired",
        }
    }
}

/// A user's reservation to drop off recyclables at a collection point,
/// bearing a time-limited code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Shipment {
    pub id: Uuid,
    pub code: String,
    pub collection_point_id: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
    /// Fixed at creation as `created_at + 48h`; never recomputed.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub valid_until: DateTime<Utc>,
    pub user_id: String,
    pub status: ShipmentStatus,
}

impl Shipment {
    pub fn new(collection_point_id: &str, user_id: &str, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            code: generate_shipping_code(now),
            collection_point_id: collection_point_id.to_string(),
            created_at: now,
            valid_until: now + Duration::hours(SHIPMENT_VALIDITY_HOURS),
            user_id: user_id.to_string(),
            status: ShipmentStatus::Pending,
        }
    }

    /// Recompute the status against the clock.
    ///
    /// Only the `Pending -> Expired` edge is taken here. `Completed` is
    /// terminal and immune to expiry, and `Expired` never reverts to
    /// `Pending` even if `now` has moved backwards.
    pub fn refresh_status(&mut self, now: DateTime<Utc>) {
        if self.status == ShipmentStatus::Pending && now > self.valid_until {
            self.status = ShipmentStatus::Expired;
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == ShipmentStatus::Pending
    }
}

/// Generate a shipment code of the form `ENV-4821-0934`: four random
/// digits plus the last four digits of the unix timestamp.
///
/// Uniqueness is not guaranteed, only practically unlikely within a
/// user's 48-hour validity window.
pub fn generate_shipping_code(now: DateTime<Utc>) -> String {
    let random: u32 = rand::thread_rng().gen_range(1000..=9999);
    let suffix = now.timestamp().rem_euclid(10_000);
    format!("ENV-{random}-{suffix:04}")
}
