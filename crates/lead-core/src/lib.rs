//! Lead handling for the Summit Ridge site backend.
//!
//! A lead is a prospective customer's submitted service request. This
//! crate owns the lead model and its creation-time validation, plus the
//! two capabilities the API server needs injected: somewhere to persist
//! leads ([`LeadStore`]) and a way to tell the office about a new one
//! ([`Notifier`]). Both are traits so the HTTP layer is testable
//! without a real database or mail relay.

pub mod model;
pub mod notify;
pub mod store;

pub use model::{Lead, LeadStatus, LeadSubmission, ValidationError, DEFAULT_SOURCE};
pub use notify::{EmailMessage, LeadEmail, Notifier, NotifyError};
pub use store::{LeadStore, MemoryLeadStore, StoreError};
