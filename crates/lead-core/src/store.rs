//! Lead persistence interface.

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::model::Lead;

/// Storage backend failure.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Persist, list, and delete leads.
///
/// Implementations rely on the backend's own insert atomicity; no
/// application-level locking is expected of them.
#[async_trait]
pub trait LeadStore: Send + Sync {
    async fn insert(&self, lead: &Lead) -> Result<(), StoreError>;

    /// All leads, newest first.
    async fn list(&self) -> Result<Vec<Lead>, StoreError>;

    /// Remove a lead by id. `Ok(false)` means the id was unknown.
    async fn delete(&self, id: &str) -> Result<bool, StoreError>;
}

/// In-memory store used by tests and local development.
#[derive(Debug, Default)]
pub struct MemoryLeadStore {
    leads: RwLock<Vec<Lead>>,
}

impl MemoryLeadStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LeadStore for MemoryLeadStore {
    async fn insert(&self, lead: &Lead) -> Result<(), StoreError> {
        self.leads.write().await.push(lead.clone());
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Lead>, StoreError> {
        let mut leads = self.leads.read().await.clone();
        leads.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(leads)
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let mut leads = self.leads.write().await;
        let before = leads.len();
        leads.retain(|l| l.id != id);
        Ok(leads.len() < before)
    }
}
