//! HTTP handlers for the lead API.

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;
use tracing::{info, warn};

use lead_core::Lead;

use crate::error::ApiError;
use crate::models::*;
use crate::state::AppState;

/// Handler: GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "leads-api",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Handler: POST /contact
///
/// Validation failures reject before any persistence attempt. A failed
/// insert is the only 500; a failed notification still returns 201 with
/// `notificationSent: false`, since the record already exists.
pub async fn create_lead(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateLeadRequest>,
) -> Result<(StatusCode, Json<CreateLeadResponse>), ApiError> {
    let submission = req.into_submission();
    submission.validate()?;

    let lead = Lead::from_submission(submission);
    state.store.insert(&lead).await?;

    let notification_sent = match state.notifier.notify(&lead).await {
        Ok(()) => true,
        Err(e) => {
            warn!(lead_id = %lead.id, error = %e, "Lead saved but notification failed");
            false
        }
    };

    info!("Created lead: {}", lead.id);

    Ok((
        StatusCode::CREATED,
        Json(CreateLeadResponse {
            lead: lead.into(),
            notification_sent,
        }),
    ))
}

/// Handler: GET /get-all-leads
pub async fn list_leads(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<LeadResponse>>, ApiError> {
    let leads = state.store.list().await?;
    Ok(Json(leads.into_iter().map(LeadResponse::from).collect()))
}

/// Handler: POST /deletecontact
pub async fn delete_lead(
    State(state): State<Arc<AppState>>,
    Json(req): Json<DeleteLeadRequest>,
) -> Result<Json<DeleteLeadResponse>, ApiError> {
    let removed = state.store.delete(&req.id).await?;
    if !removed {
        return Err(ApiError::LeadNotFound(req.id));
    }

    info!("Deleted lead: {}", req.id);

    Ok(Json(DeleteLeadResponse {
        success: true,
        id: req.id,
    }))
}
