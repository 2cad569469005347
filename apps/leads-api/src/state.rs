//! Application state for the lead API.

use anyhow::Result;
use std::sync::Arc;

use lead_core::{LeadStore, Notifier};

use crate::config::Config;
use crate::notify::SesNotifier;
use crate::store::SqliteLeadStore;

/// Shared application state: the two injected capabilities.
pub struct AppState {
    pub store: Arc<dyn LeadStore>,
    pub notifier: Arc<dyn Notifier>,
}

impl AppState {
    pub fn new(store: Arc<dyn LeadStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self { store, notifier }
    }

    /// Wire up the production backends: SQLite storage and SES email.
    pub async fn from_config(config: &Config) -> Result<Self> {
        let store = SqliteLeadStore::connect(&config.database_url).await?;
        let notifier = SesNotifier::new(&config.notify_to, &config.notify_from).await;

        Ok(Self::new(Arc::new(store), Arc::new(notifier)))
    }
}
