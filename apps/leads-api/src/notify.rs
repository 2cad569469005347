//! SES-backed lead notification.

use async_trait::async_trait;
use aws_sdk_sesv2::{
    types::{Body, Content, Destination, EmailContent, Message},
    Client as SesClient,
};
use tracing::info;

use lead_core::{Lead, LeadEmail, Notifier, NotifyError};

/// Sends new-lead notifications through AWS SES.
pub struct SesNotifier {
    client: SesClient,
    recipient: String,
    from: String,
}

impl SesNotifier {
    /// Create a notifier from the ambient AWS credentials.
    pub async fn new(recipient: &str, from: &str) -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let client = SesClient::new(&config);

        Self {
            client,
            recipient: recipient.to_string(),
            from: from.to_string(),
        }
    }
}

#[async_trait]
impl Notifier for SesNotifier {
    async fn notify(&self, lead: &Lead) -> Result<(), NotifyError> {
        let message = LeadEmail::to_message(lead, &self.recipient);

        let subject = Content::builder()
            .data(&message.subject)
            .charset("UTF-8")
            .build()
            .map_err(|e| NotifyError::Build(e.to_string()))?;

        let html = Content::builder()
            .data(&message.html)
            .charset("UTF-8")
            .build()
            .map_err(|e| NotifyError::Build(e.to_string()))?;

        let text = Content::builder()
            .data(&message.text)
            .charset("UTF-8")
            .build()
            .map_err(|e| NotifyError::Build(e.to_string()))?;

        let body = Body::builder().html(html).text(text).build();
        let email = Message::builder().subject(subject).body(body).build();

        let result = self
            .client
            .send_email()
            .from_email_address(&self.from)
            .destination(
                Destination::builder()
                    .to_addresses(&message.to)
                    .build(),
            )
            .content(EmailContent::builder().simple(email).build())
            .send()
            .await
            .map_err(|e| NotifyError::Send(e.to_string()))?;

        info!(
            lead_id = %lead.id,
            message_id = result.message_id().unwrap_or("unknown"),
            "Lead notification sent"
        );

        Ok(())
    }
}
