//! Content model for the Summit Ridge marketing site.
//!
//! Holds the Page → Component → Settings tree that the page renderers
//! read and the admin editor mutates. The store is an explicit value
//! with a defined lifecycle: construct it once per editor session
//! (usually via [`ContentStore::with_defaults`]), mutate it through the
//! operations on [`ContentStore`], and optionally persist it as a JSON
//! snapshot between sessions.
//!
//! Component settings are a closed tagged union ([`ComponentSettings`])
//! rather than a free-form map, so every renderer gets the field set it
//! expects without defensive fallbacks.

pub mod model;
pub mod seed;
pub mod settings;
pub mod store;

pub use model::{Component, Page, PageCategory};
pub use settings::{
    ComponentKind, ComponentSettings, FaqEntry, GalleryImage, ServiceCard, Testimonial,
};
pub use store::{ContentStore, StoreError};
