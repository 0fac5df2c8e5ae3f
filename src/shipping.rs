//! Shipment registration, lifecycle, and the collection-point cache.

use std::sync::{Arc, RwLock};

use log::{error, info, warn};

use crate::api::RemoteApi;
use crate::clock::Clock;
use crate::models::{CollectionPoint, Shipment, ShipmentStatus, MAX_ACTIVE_SHIPMENTS};
use crate::store::KeyValueStore;

const SHIPPINGS_KEY: &str = "user_shippings";

/// Owns every shipment record, keyed per user in the key-value store.
///
/// Reads recompute statuses against the clock and write the result back,
/// so a record that crossed its validity window shows up `Expired` no
/// matter which operation touched it first. Operations on one user's
/// collection are read-modify-write; callers invoking them concurrently
/// for the same user can lose updates.
pub struct ShipmentService {
    store: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
    api: Arc<dyn RemoteApi>,
    cached_points: RwLock<Vec<CollectionPoint>>,
}

impl ShipmentService {
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        clock: Arc<dyn Clock>,
        api: Arc<dyn RemoteApi>,
    ) -> Self {
        Self {
            store,
            clock,
            api,
            cached_points: RwLock::new(Vec::new()),
        }
    }

    fn storage_key(user_id: &str) -> String {
        format!("{SHIPPINGS_KEY}_{user_id}")
    }

    /// Missing or undecodable data is "no shipments yet", never an error.
    fn load_raw(&self, user_id: &str) -> Vec<Shipment> {
        let Some(bytes) = self.store.get(&Self::storage_key(user_id)) else {
            return Vec::new();
        };

        match serde_json::from_slice(&bytes) {
            Ok(shipments) => shipments,
            Err(err) => {
                warn!("Discarding undecodable shipment data for {user_id}: {err}");
                Vec::new()
            }
        }
    }

    fn persist(&self, user_id: &str, shipments: &[Shipment]) {
        match serde_json::to_vec(shipments) {
            Ok(bytes) => self.store.set(&Self::storage_key(user_id), &bytes),
            Err(err) => error!("Failed to encode shipments for {user_id}: {err}"),
        }
    }

    /// Register a new shipment for `user_id` at the given collection point.
    ///
    /// The quota is NOT re-checked here; callers must hold a positive
    /// [`Self::can_create_new_shipping`] answer before calling.
    pub fn create_shipment(&self, collection_point_id: &str, user_id: &str) -> Shipment {
        let shipment = Shipment::new(collection_point_id, user_id, self.clock.now());

        let mut shipments = self.load_raw(user_id);
        shipments.push(shipment.clone());
        self.persist(user_id, &shipments);

        info!("Registered shipment {} for {user_id}", shipment.code);
        shipment
    }

    /// Load the user's shipments, refresh every status against the clock,
    /// write the refreshed statuses back, and return them newest first.
    pub fn list_shipments(&self, user_id: &str) -> Vec<Shipment> {
        let mut shipments = self.load_raw(user_id);

        let now = self.clock.now();
        for shipment in &mut shipments {
            shipment.refresh_status(now);
        }
        self.persist(user_id, &shipments);

        shipments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        shipments
    }

    pub fn active_shipments_count(&self, user_id: &str) -> usize {
        self.list_shipments(user_id)
            .iter()
            .filter(|s| s.is_active())
            .count()
    }

    pub fn has_active_shipments(&self, user_id: &str) -> bool {
        self.active_shipments_count(user_id) > 0
    }

    /// Admission rule: fewer than three currently pending shipments.
    pub fn can_create_new_shipping(&self, user_id: &str) -> bool {
        self.active_shipments_count(user_id) < MAX_ACTIVE_SHIPMENTS
    }

    /// Linear scan by exact code.
    pub fn validate_shipping_code(&self, code: &str, user_id: &str) -> Option<Shipment> {
        self.list_shipments(user_id)
            .into_iter()
            .find(|s| s.code == code)
    }

    /// Remove the record(s) matching `code`; silent no-op when absent.
    pub fn delete_shipment(&self, code: &str, user_id: &str) {
        let mut shipments = self.load_raw(user_id);
        shipments.retain(|s| s.code != code);
        self.persist(user_id, &shipments);
    }

    /// Explicit status transition, e.g. marking a shipment `Completed` when
    /// it is redeemed at the collection point. Silent no-op when the record
    /// is no longer stored.
    pub fn update_status(&self, shipment: &Shipment, status: ShipmentStatus) {
        let mut shipments = self.load_raw(&shipment.user_id);
        if let Some(stored) = shipments.iter_mut().find(|s| s.id == shipment.id) {
            stored.status = status;
            self.persist(&shipment.user_id, &shipments);
        }
    }

    /// Collection points, fetched once per process lifetime.
    ///
    /// The first successful fetch populates the cache; afterwards the
    /// backend is never asked again. A failed fetch yields an empty list
    /// and leaves the cache unpopulated.
    pub async fn collection_points(&self) -> Vec<CollectionPoint> {
        {
            let cached = self.cached_points.read().unwrap();
            if !cached.is_empty() {
                return cached.clone();
            }
        }

        match self.api.collection_points().await {
            Ok(records) => {
                let points: Vec<CollectionPoint> =
                    records.into_iter().map(Into::into).collect();
                *self.cached_points.write().unwrap() = points.clone();
                points
            }
            Err(err) => {
                warn!("Failed to load collection points: {err}");
                Vec::new()
            }
        }
    }

    pub async fn collection_point_by_id(&self, id: &str) -> Option<CollectionPoint> {
        self.collection_points().await.into_iter().find(|p| p.id == id)
    }

    /// Cache-only view for callers that cannot await; empty until the
    /// first successful fetch.
    pub fn cached_collection_points(&self) -> Vec<CollectionPoint> {
        self.cached_points.read().unwrap().clone()
    }
}
