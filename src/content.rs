//! Remote content with the silent-degradation policy applied: any fetch or
//! decode failure logs and yields an empty list, never an error.

use std::sync::Arc;

use anyhow::Result;
use log::warn;

use crate::api::{
    AchievementRecord, CategoryRecord, OnboardingSlideRecord, ProductRecord, RemoteApi,
    TipRecord,
};
use crate::clock::Clock;
use crate::events::classify_events;
use crate::models::Event;

/// Read side of the dashboard, tips, onboarding, achievements, and events
/// screens.
pub struct ContentService {
    api: Arc<dyn RemoteApi>,
    clock: Arc<dyn Clock>,
}

impl ContentService {
    pub fn new(api: Arc<dyn RemoteApi>, clock: Arc<dyn Clock>) -> Self {
        Self { api, clock }
    }

    pub async fn categories(&self) -> Vec<CategoryRecord> {
        or_empty("categories", self.api.categories().await)
    }

    pub async fn products(&self) -> Vec<ProductRecord> {
        or_empty("products", self.api.products().await)
    }

    pub async fn tips(&self) -> Vec<TipRecord> {
        or_empty("tips", self.api.tips().await)
    }

    pub async fn onboarding_slides(&self) -> Vec<OnboardingSlideRecord> {
        or_empty("onboarding slides", self.api.onboarding().await)
    }

    pub async fn achievements(&self) -> Vec<AchievementRecord> {
        or_empty("achievements", self.api.achievements().await)
    }

    /// Events already classified against today's date and in display order.
    pub async fn events(&self) -> Vec<Event> {
        let records = or_empty("events", self.api.events().await);
        let events = records.into_iter().map(Event::from).collect();
        classify_events(events, self.clock.now().date_naive())
    }
}

fn or_empty<T>(what: &str, result: Result<Vec<T>>) -> Vec<T> {
    match result {
        Ok(items) => items,
        Err(err) => {
            warn!("Failed to load {what}: {err}");
            Vec::new()
        }
    }
}
