//! New-lead notification: the interface and the email it sends.

use async_trait::async_trait;
use thiserror::Error;

use crate::model::Lead;

/// Notification delivery failure.
///
/// A failed notification never undoes the insert that preceded it; the
/// API layer reports it separately from persistence errors.
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("failed to build notification: {0}")]
    Build(String),

    #[error("failed to send notification: {0}")]
    Send(String),
}

/// Tell the office about a newly created lead.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, lead: &Lead) -> Result<(), NotifyError>;
}

/// A rendered notification email, ready for whatever relay sends it.
#[derive(Debug, Clone, PartialEq)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub html: String,
    pub text: String,
}

/// The new-lead notification template.
pub struct LeadEmail;

impl LeadEmail {
    /// Render the notification for `lead`, addressed to the office.
    pub fn to_message(lead: &Lead, recipient: &str) -> EmailMessage {
        let name = lead.full_name();
        let subject = format!("New lead: {} - {}", name, lead.service);

        let optional_row = |label: &str, value: &Option<String>| -> String {
            match value.as_deref().filter(|v| !v.is_empty()) {
                Some(v) => format!(
                    r#"<tr><td style="padding: 4px 12px 4px 0; color: #666;">{label}</td><td style="padding: 4px 0;">{v}</td></tr>"#
                ),
                None => String::new(),
            }
        };

        let html = format!(
            r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
</head>
<body style="font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; max-width: 600px; margin: 0 auto; padding: 20px;">
  <h1 style="color: #333; font-size: 22px;">New lead from the website</h1>

  <p style="color: #666; font-size: 16px;">
    <strong>{name}</strong> requested <strong>{service}</strong>.
  </p>

  <table style="font-size: 14px; color: #333;">
    <tr><td style="padding: 4px 12px 4px 0; color: #666;">Email</td><td style="padding: 4px 0;">{email}</td></tr>
    <tr><td style="padding: 4px 12px 4px 0; color: #666;">Phone</td><td style="padding: 4px 0;">{phone}</td></tr>
    {urgency_row}
    {property_row}
    {address_row}
    {zip_row}
    {message_row}
  </table>

  <hr style="border: none; border-top: 1px solid #eee; margin: 30px 0;">

  <p style="color: #999; font-size: 12px;">
    Summit Ridge Roofing lead notifications
  </p>
</body>
</html>"#,
            name = name,
            service = lead.service,
            email = lead.email,
            phone = lead.phone,
            urgency_row = optional_row("Urgency", &lead.urgency),
            property_row = optional_row("Property", &lead.property_type),
            address_row = optional_row("Address", &lead.address),
            zip_row = optional_row("ZIP", &lead.zip_code),
            message_row = optional_row("Message", &lead.message),
        );

        let detail = |label: &str, value: &Option<String>| -> String {
            match value.as_deref().filter(|v| !v.is_empty()) {
                Some(v) => format!("\n{label}: {v}"),
                None => String::new(),
            }
        };

        let text = format!(
            "New lead from the website\n\n\
             Name: {name}\n\
             Service: {service}\n\
             Email: {email}\n\
             Phone: {phone}\
             {urgency}{property}{address}{zip}{message}\n\n\
             ---\n\
             Summit Ridge Roofing lead notifications",
            name = name,
            service = lead.service,
            email = lead.email,
            phone = lead.phone,
            urgency = detail("Urgency", &lead.urgency),
            property = detail("Property", &lead.property_type),
            address = detail("Address", &lead.address),
            zip = detail("ZIP", &lead.zip_code),
            message = detail("Message", &lead.message),
        );

        EmailMessage {
            to: recipient.to_string(),
            subject,
            html,
            text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LeadSubmission;

    fn lead() -> Lead {
        Lead::from_submission(LeadSubmission {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane@x.com".to_string(),
            phone: "555-0100".to_string(),
            service: "Roof Repair".to_string(),
            urgency: Some("This week".to_string()),
            ..Default::default()
        })
    }

    #[test]
    fn message_names_the_lead_and_service() {
        let message = LeadEmail::to_message(&lead(), "office@summitridgeroofing.com");

        assert_eq!(message.to, "office@summitridgeroofing.com");
        assert!(message.subject.contains("Jane Doe"));
        assert!(message.subject.contains("Roof Repair"));
        assert!(message.subject.is_ascii());
        assert!(message.html.contains("Jane Doe"));
        assert!(message.html.contains("555-0100"));
        assert!(message.text.contains("Roof Repair"));
        assert!(message.text.contains("Urgency: This week"));
    }

    #[test]
    fn absent_optional_fields_are_omitted() {
        let mut lead = lead();
        lead.urgency = None;
        lead.message = Some(String::new());

        let message = LeadEmail::to_message(&lead, "office@summitridgeroofing.com");
        assert!(!message.text.contains("Urgency:"));
        assert!(!message.text.contains("Message:"));
    }
}
