pub mod achievements;
pub mod api;
pub mod clock;
pub mod config;
pub mod content;
pub mod events;
pub mod models;
pub mod session;
pub mod shipping;
pub mod store;

use std::sync::Arc;

use anyhow::Result;
use log::info;

use achievements::AchievementLog;
use api::{ApiClient, RemoteApi};
use clock::{Clock, SystemClock};
use config::Config;
use content::ContentService;
use session::UserSession;
use shipping::ShipmentService;
use store::{KeyValueStore, SqliteStore};

/// Every service the app needs, constructed once at process start and
/// passed by reference to whatever renders screens. There is no global
/// state; injecting a different store, backend, or clock is how tests
/// (and previews) run the same wiring.
pub struct AppServices {
    pub session: Arc<UserSession>,
    pub shipments: Arc<ShipmentService>,
    pub achievements: Arc<AchievementLog>,
    pub content: Arc<ContentService>,
}

impl AppServices {
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        api: Arc<dyn RemoteApi>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            session: Arc::new(UserSession::new(store.clone())),
            shipments: Arc::new(ShipmentService::new(
                store.clone(),
                clock.clone(),
                api.clone(),
            )),
            achievements: Arc::new(AchievementLog::new(store)),
            content: Arc::new(ContentService::new(api, clock)),
        }
    }

    /// Production wiring: durable store on disk, REST backend, system clock.
    pub fn bootstrap(config: &Config) -> Result<Self> {
        info!("ReciclaPlus core starting up...");

        let store = Arc::new(SqliteStore::open(
            config.data_dir.join("reciclaplus.sqlite3"),
        )?);
        let api = Arc::new(ApiClient::new(config.api_base_url.clone()));

        Ok(Self::new(store, api, Arc::new(SystemClock)))
    }
}

/// Initialize logging (reads RUST_LOG env var).
pub fn init_logging() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
}
