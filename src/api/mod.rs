use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;

mod records;

pub use records::{
    AchievementRecord, CategoryRecord, CollectionPointRecord, Envelope, EventRecord,
    OnboardingSlideRecord, ProductRecord, TipRecord,
};

/// Typed fetches against the backend. One method per resource; each
/// resolves to the decoded document list or an error.
///
/// No retry, cancellation, or timeout contract is implied. Callers that
/// can degrade do so at their own layer (fetch failure becomes an empty
/// result there, not here).
#[async_trait]
pub trait RemoteApi: Send + Sync {
    async fn categories(&self) -> Result<Vec<CategoryRecord>>;
    async fn products(&self) -> Result<Vec<ProductRecord>>;
    async fn events(&self) -> Result<Vec<EventRecord>>;
    async fn achievements(&self) -> Result<Vec<AchievementRecord>>;
    async fn onboarding(&self) -> Result<Vec<OnboardingSlideRecord>>;
    async fn collection_points(&self) -> Result<Vec<CollectionPointRecord>>;
    async fn tips(&self) -> Result<Vec<TipRecord>>;
}

/// REST client for the ReciclaPlus backend.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    async fn fetch<T: DeserializeOwned>(&self, resource: &str) -> Result<Vec<T>> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), resource);

        let envelope: Envelope<T> = self
            .http
            .get(&url)
            .send()
            .await
            .with_context(|| format!("request to {url} failed"))?
            .error_for_status()
            .with_context(|| format!("request to {url} was rejected"))?
            .json()
            .await
            .with_context(|| format!("failed to decode {resource} response"))?;

        Ok(envelope.documents)
    }
}

#[async_trait]
impl RemoteApi for ApiClient {
    async fn categories(&self) -> Result<Vec<CategoryRecord>> {
        self.fetch("categorias").await
    }

    async fn products(&self) -> Result<Vec<ProductRecord>> {
        self.fetch("productos").await
    }

    async fn events(&self) -> Result<Vec<EventRecord>> {
        self.fetch("eventos").await
    }

    async fn achievements(&self) -> Result<Vec<AchievementRecord>> {
        self.fetch("logros").await
    }

    async fn onboarding(&self) -> Result<Vec<OnboardingSlideRecord>> {
        self.fetch("onboarding").await
    }

    async fn collection_points(&self) -> Result<Vec<CollectionPointRecord>> {
        // The endpoint name is misspelled on the backend; it is the contract.
        self.fetch("puntosderecolecion").await
    }

    async fn tips(&self) -> Result<Vec<TipRecord>> {
        self.fetch("tips").await
    }
}
