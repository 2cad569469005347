//! SQLite-backed lead storage.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use sqlx::FromRow;

use lead_core::{Lead, LeadStatus, LeadStore, StoreError};

/// Lead row as stored in the database.
#[derive(Debug, Clone, FromRow)]
struct DbLead {
    id: String,
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
    service: String,
    message: Option<String>,
    urgency: Option<String>,
    property_type: Option<String>,
    address: Option<String>,
    zip_code: Option<String>,
    photo_url: Option<String>,
    status: String,
    source: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<DbLead> for Lead {
    fn from(row: DbLead) -> Self {
        Lead {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            phone: row.phone,
            service: row.service,
            message: row.message,
            urgency: row.urgency,
            property_type: row.property_type,
            address: row.address,
            zip_code: row.zip_code,
            photo_url: row.photo_url,
            status: LeadStatus::from_label(&row.status),
            source: row.source,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// `LeadStore` over a SQLite pool.
pub struct SqliteLeadStore {
    pool: SqlitePool,
}

impl SqliteLeadStore {
    /// Connect and run migrations.
    pub async fn connect(database_url: &str) -> Result<Self> {
        tracing::info!("Connecting to database: {}", database_url);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;

        Self::run_migrations(&pool).await?;

        Ok(Self { pool })
    }

    async fn run_migrations(pool: &SqlitePool) -> Result<()> {
        tracing::info!("Running database migrations...");

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS leads (
                id TEXT PRIMARY KEY,
                first_name TEXT NOT NULL,
                last_name TEXT NOT NULL,
                email TEXT NOT NULL,
                phone TEXT NOT NULL,
                service TEXT NOT NULL,
                message TEXT,
                urgency TEXT,
                property_type TEXT,
                address TEXT,
                zip_code TEXT,
                photo_url TEXT,
                status TEXT NOT NULL DEFAULT 'new',
                source TEXT NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        // Listing is always newest-first
        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_leads_created_at ON leads(created_at)
            "#,
        )
        .execute(pool)
        .await?;

        tracing::info!("Migrations complete");
        Ok(())
    }
}

#[async_trait]
impl LeadStore for SqliteLeadStore {
    async fn insert(&self, lead: &Lead) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO leads (id, first_name, last_name, email, phone, service, message,
                               urgency, property_type, address, zip_code, photo_url,
                               status, source, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&lead.id)
        .bind(&lead.first_name)
        .bind(&lead.last_name)
        .bind(&lead.email)
        .bind(&lead.phone)
        .bind(&lead.service)
        .bind(&lead.message)
        .bind(&lead.urgency)
        .bind(&lead.property_type)
        .bind(&lead.address)
        .bind(&lead.zip_code)
        .bind(&lead.photo_url)
        .bind(lead.status.to_string())
        .bind(&lead.source)
        .bind(lead.created_at.to_rfc3339())
        .bind(lead.updated_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::Backend(e.to_string()))?;

        Ok(())
    }

    async fn list(&self) -> Result<Vec<Lead>, StoreError> {
        let rows: Vec<DbLead> = sqlx::query_as(
            r#"
            SELECT id, first_name, last_name, email, phone, service, message,
                   urgency, property_type, address, zip_code, photo_url,
                   status, source, created_at, updated_at
            FROM leads
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StoreError::Backend(e.to_string()))?;

        Ok(rows.into_iter().map(Lead::from).collect())
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM leads WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
