//! Wire models for the lead API.
//!
//! The deployed contact form sends camelCase JSON; missing optional
//! fields deserialize to their defaults so validation, not serde, is
//! what rejects incomplete submissions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use lead_core::{Lead, LeadStatus, LeadSubmission};

/// Body of `POST /contact`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateLeadRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub message: Option<String>,
    pub urgency: Option<String>,
    pub property_type: Option<String>,
    pub address: Option<String>,
    pub zip_code: Option<String>,
    pub photo_url: Option<String>,
}

impl CreateLeadRequest {
    pub fn into_submission(self) -> LeadSubmission {
        LeadSubmission {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            service: self.service,
            message: self.message,
            urgency: self.urgency,
            property_type: self.property_type,
            address: self.address,
            zip_code: self.zip_code,
            photo_url: self.photo_url,
        }
    }
}

/// A lead as returned to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadResponse {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urgency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    pub status: LeadStatus,
    pub source: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Lead> for LeadResponse {
    fn from(lead: Lead) -> Self {
        Self {
            id: lead.id,
            first_name: lead.first_name,
            last_name: lead.last_name,
            email: lead.email,
            phone: lead.phone,
            service: lead.service,
            message: lead.message,
            urgency: lead.urgency,
            property_type: lead.property_type,
            address: lead.address,
            zip_code: lead.zip_code,
            photo_url: lead.photo_url,
            status: lead.status,
            source: lead.source,
            created_at: lead.created_at,
            updated_at: lead.updated_at,
        }
    }
}

/// Response to `POST /contact`.
///
/// `notification_sent` distinguishes "record saved, notification
/// failed" from a plain success; the record exists either way.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLeadResponse {
    pub lead: LeadResponse,
    pub notification_sent: bool,
}

/// Body of `POST /deletecontact`.
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteLeadRequest {
    pub id: String,
}

/// Response to a successful delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteLeadResponse {
    pub success: bool,
    pub id: String,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}
