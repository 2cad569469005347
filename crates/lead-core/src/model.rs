//! Lead model and creation validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Source label stamped on leads that arrive through the public
/// contact form.
pub const DEFAULT_SOURCE: &str = "website";

/// Where a lead sits in the follow-up process.
///
/// These are labels, not a state machine: any status may follow any
/// other. Enforcing a forward-only pipeline is an open product
/// question, so transitions stay unconstrained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadStatus {
    New,
    Contacted,
    Completed,
}

impl LeadStatus {
    /// Parse a stored label, falling back to `New` for anything
    /// unrecognized.
    pub fn from_label(label: &str) -> Self {
        match label {
            "contacted" => LeadStatus::Contacted,
            "completed" => LeadStatus::Completed,
            _ => LeadStatus::New,
        }
    }
}

impl std::fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeadStatus::New => write!(f, "new"),
            LeadStatus::Contacted => write!(f, "contacted"),
            LeadStatus::Completed => write!(f, "completed"),
        }
    }
}

/// A stored lead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    /// Service requested, free text from the form dropdown.
    pub service: String,
    pub message: Option<String>,
    pub urgency: Option<String>,
    pub property_type: Option<String>,
    pub address: Option<String>,
    pub zip_code: Option<String>,
    pub photo_url: Option<String>,
    pub status: LeadStatus,
    pub source: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Lead {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Build a new lead from a validated submission.
    ///
    /// The server assigns the id, status, source, and both timestamps.
    pub fn from_submission(submission: LeadSubmission) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            first_name: submission.first_name,
            last_name: submission.last_name,
            email: submission.email,
            phone: submission.phone,
            service: submission.service,
            message: submission.message,
            urgency: submission.urgency,
            property_type: submission.property_type,
            address: submission.address,
            zip_code: submission.zip_code,
            photo_url: submission.photo_url,
            status: LeadStatus::New,
            source: DEFAULT_SOURCE.to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// The contact-form fields as submitted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LeadSubmission {
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

impl LeadSubmission {
    /// Check the required contact fields before any persistence attempt.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let required: [(&'static str, &str); 5] = [
            ("firstName", &self.first_name),
            ("lastName", &self.last_name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("service", &self.service),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ValidationError::MissingField(field));
            }
        }

        if !email_address::EmailAddress::is_valid(&self.email) {
            return Err(ValidationError::InvalidEmail(self.email.clone()));
        }

        Ok(())
    }
}

/// Rejection reason for a lead submission.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("invalid email address: {0}")]
    InvalidEmail(String),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn submission() -> LeadSubmission {
        LeadSubmission {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane@x.com".to_string(),
            phone: "555-0100".to_string(),
            service: "Roof Repair".to_string(),
            message: Some(String::new()),
            ..Default::default()
        }
    }

    #[test]
    fn valid_submission_passes() {
        assert_eq!(submission().validate(), Ok(()));
    }

    #[test]
    fn each_required_field_is_checked() {
        for field in ["firstName", "lastName", "email", "phone", "service"] {
            let mut sub = submission();
            match field {
                "firstName" => sub.first_name.clear(),
                "lastName" => sub.last_name.clear(),
                "email" => sub.email.clear(),
                "phone" => sub.phone.clear(),
                "service" => sub.service.clear(),
                _ => unreachable!(),
            }
            assert_eq!(sub.validate(), Err(ValidationError::MissingField(field)));
        }
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let mut sub = submission();
        sub.phone = "   ".to_string();
        assert_eq!(sub.validate(), Err(ValidationError::MissingField("phone")));
    }

    #[test]
    fn malformed_email_is_rejected() {
        let mut sub = submission();
        sub.email = "not-an-email".to_string();
        assert!(matches!(
            sub.validate(),
            Err(ValidationError::InvalidEmail(_))
        ));
    }

    #[test]
    fn from_submission_assigns_server_fields() {
        let before = Utc::now();
        let lead = Lead::from_submission(submission());

        assert_eq!(lead.status, LeadStatus::New);
        assert_eq!(lead.source, DEFAULT_SOURCE);
        assert_eq!(lead.id.len(), 36);
        assert!(lead.created_at >= before);
        assert_eq!(lead.created_at, lead.updated_at);
        assert_eq!(lead.full_name(), "Jane Doe");
    }

    #[test]
    fn status_labels_round_trip_and_unknowns_default_to_new() {
        assert_eq!(LeadStatus::from_label("contacted"), LeadStatus::Contacted);
        assert_eq!(LeadStatus::from_label("completed"), LeadStatus::Completed);
        assert_eq!(LeadStatus::from_label("qualified"), LeadStatus::New);
        assert_eq!(LeadStatus::Contacted.to_string(), "contacted");
    }
}
