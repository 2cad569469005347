//! HTTP endpoint tests for the lead API.
//!
//! Runs the real router against the in-memory store and a recording
//! notifier, so every test covers the full extract → validate →
//! persist → notify path without a database or mail relay.

use std::sync::Arc;

use async_trait::async_trait;
use axum_test::TestServer;
use serde_json::json;
use tokio::sync::Mutex;

use lead_core::{
    EmailMessage, Lead, LeadEmail, LeadStore, LeadSubmission, MemoryLeadStore, Notifier,
    NotifyError,
};

use crate::app;
use crate::state::AppState;

const OFFICE: &str = "office@summitridgeroofing.com";

/// Captures every notification instead of sending it.
#[derive(Default)]
struct RecordingNotifier {
    sent: Mutex<Vec<EmailMessage>>,
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, lead: &Lead) -> Result<(), NotifyError> {
        self.sent
            .lock()
            .await
            .push(LeadEmail::to_message(lead, OFFICE));
        Ok(())
    }
}

/// Always fails, for the saved-but-not-notified path.
struct FailingNotifier;

#[async_trait]
impl Notifier for FailingNotifier {
    async fn notify(&self, _lead: &Lead) -> Result<(), NotifyError> {
        Err(NotifyError::Send("relay unreachable".to_string()))
    }
}

fn test_server(notifier: Arc<dyn Notifier>) -> (TestServer, Arc<MemoryLeadStore>) {
    let store = Arc::new(MemoryLeadStore::new());
    let state = Arc::new(AppState::new(store.clone(), notifier));
    (TestServer::new(app(state)).unwrap(), store)
}

fn jane_doe() -> serde_json::Value {
    json!({
        "firstName": "Jane",
        "lastName": "Doe",
        "email": "jane@x.com",
        "phone": "555-0100",
        "service": "Roof Repair",
        "message": ""
    })
}

#[tokio::test]
async fn health_returns_200() {
    let (server, _) = test_server(Arc::new(RecordingNotifier::default()));

    let response = server.get("/health").await;
    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "leads-api");
}

#[tokio::test]
async fn contact_creates_lead_and_notifies_office() {
    let notifier = Arc::new(RecordingNotifier::default());
    let (server, _) = test_server(notifier.clone());

    let submitted_at = chrono::Utc::now();
    let response = server.post("/contact").json(&jane_doe()).await;
    response.assert_status(axum::http::StatusCode::CREATED);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["lead"]["firstName"], "Jane");
    assert_eq!(body["lead"]["status"], "new");
    assert_eq!(body["lead"]["source"], "website");
    assert_eq!(body["notificationSent"], true);

    let created_at: chrono::DateTime<chrono::Utc> =
        serde_json::from_value(body["lead"]["createdAt"].clone()).unwrap();
    assert!(created_at >= submitted_at);

    // Exactly one notification, naming the lead and the service.
    let sent = notifier.sent.lock().await;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, OFFICE);
    assert!(sent[0].subject.contains("Jane Doe"));
    assert!(sent[0].subject.contains("Roof Repair"));
}

#[tokio::test]
async fn created_lead_shows_up_in_listing_once() {
    let (server, _) = test_server(Arc::new(RecordingNotifier::default()));

    server.post("/contact").json(&jane_doe()).await;

    let response = server.get("/get-all-leads").await;
    response.assert_status_ok();

    let leads = response.json::<Vec<serde_json::Value>>();
    assert_eq!(leads.len(), 1);
    assert_eq!(leads[0]["firstName"], "Jane");
    assert_eq!(leads[0]["lastName"], "Doe");
    assert_eq!(leads[0]["email"], "jane@x.com");
    assert_eq!(leads[0]["phone"], "555-0100");
    assert_eq!(leads[0]["service"], "Roof Repair");
    assert_eq!(leads[0]["status"], "new");
}

#[tokio::test]
async fn missing_required_field_is_rejected_before_persistence() {
    let notifier = Arc::new(RecordingNotifier::default());
    let (server, store) = test_server(notifier.clone());

    let mut body = jane_doe();
    body["phone"] = json!("");
    let response = server.post("/contact").json(&body).await;
    response.assert_status_bad_request();

    let error = response.json::<serde_json::Value>();
    assert!(error["error"].as_str().unwrap().contains("phone"));

    // No partial record, no notification.
    assert!(store.list().await.unwrap().is_empty());
    assert!(notifier.sent.lock().await.is_empty());
}

#[tokio::test]
async fn omitted_required_field_is_rejected() {
    let (server, store) = test_server(Arc::new(RecordingNotifier::default()));

    let response = server
        .post("/contact")
        .json(&json!({"firstName": "Jane", "email": "jane@x.com"}))
        .await;
    response.assert_status_bad_request();
    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn malformed_email_is_rejected() {
    let (server, _) = test_server(Arc::new(RecordingNotifier::default()));

    let mut body = jane_doe();
    body["email"] = json!("not-an-email");
    let response = server.post("/contact").json(&body).await;
    response.assert_status_bad_request();
}

#[tokio::test]
async fn notification_failure_still_returns_created() {
    let (server, store) = test_server(Arc::new(FailingNotifier));

    let response = server.post("/contact").json(&jane_doe()).await;
    response.assert_status(axum::http::StatusCode::CREATED);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["notificationSent"], false);

    // The record was saved despite the failed notification.
    assert_eq!(store.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn delete_removes_lead_from_listing() {
    let (server, _) = test_server(Arc::new(RecordingNotifier::default()));

    let created = server.post("/contact").json(&jane_doe()).await;
    let id = created.json::<serde_json::Value>()["lead"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let response = server.post("/deletecontact").json(&json!({"id": id})).await;
    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["success"], true);

    let leads = server.get("/get-all-leads").await.json::<Vec<serde_json::Value>>();
    assert!(leads.is_empty());
}

#[tokio::test]
async fn delete_unknown_id_is_404_and_leaves_collection_unchanged() {
    let (server, store) = test_server(Arc::new(RecordingNotifier::default()));

    server.post("/contact").json(&jane_doe()).await;

    let response = server
        .post("/deletecontact")
        .json(&json!({"id": "no-such-lead"}))
        .await;
    response.assert_status_not_found();

    assert_eq!(store.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn listing_is_newest_first() {
    let (server, store) = test_server(Arc::new(RecordingNotifier::default()));

    // Seed directly with staggered timestamps to make ordering
    // deterministic.
    for (hours_ago, name) in [(3, "Oldest"), (1, "Middle"), (0, "Newest")] {
        let mut lead = Lead::from_submission(LeadSubmission {
            first_name: name.to_string(),
            last_name: "Tester".to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            phone: "555-0100".to_string(),
            service: "Inspection".to_string(),
            ..Default::default()
        });
        lead.created_at = chrono::Utc::now() - chrono::Duration::hours(hours_ago);
        store.insert(&lead).await.unwrap();
    }

    let leads = server.get("/get-all-leads").await.json::<Vec<serde_json::Value>>();
    assert_eq!(leads.len(), 3);
    assert_eq!(leads[0]["firstName"], "Newest");
    assert_eq!(leads[2]["firstName"], "Oldest");

    let timestamps: Vec<chrono::DateTime<chrono::Utc>> = leads
        .iter()
        .map(|l| serde_json::from_value(l["createdAt"].clone()).unwrap())
        .collect();
    assert!(timestamps.windows(2).all(|w| w[0] >= w[1]));
}
