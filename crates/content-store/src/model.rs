//! Pages and the components they are built from.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::settings::{ComponentKind, ComponentSettings};

/// Which part of the site a page belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageCategory {
    Marketing,
    Services,
    Locations,
    Company,
}

/// A named section of a page.
///
/// Component ids are unique within their owning page. Inactive
/// components stay in the tree with their settings intact so the
/// operator can re-enable them without losing edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub id: String,
    pub name: String,
    pub active: bool,
    pub settings: ComponentSettings,
}

impl Component {
    /// The component type, derived from its settings variant.
    pub fn kind(&self) -> ComponentKind {
        self.settings.kind()
    }
}

/// A routed page composed of an ordered list of components.
///
/// Page ids are unique across the whole store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub id: String,
    pub name: String,
    pub route: String,
    pub category: PageCategory,
    pub components: Vec<Component>,
    pub updated_at: DateTime<Utc>,
}

impl Page {
    pub fn component(&self, component_id: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.id == component_id)
    }

    /// Components the renderer should draw, in page order.
    pub fn active_components(&self) -> impl Iterator<Item = &Component> {
        self.components.iter().filter(|c| c.active)
    }
}
