//! The content store and its mutation operations.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{Component, Page};
use crate::seed;
use crate::settings::{ComponentKind, ComponentSettings};

/// Why a mutation did not apply.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("no page selected")]
    NoPageSelected,

    #[error("component not found in selected page: {0}")]
    ComponentNotFound(String),

    #[error("component type mismatch: expected {expected}, got {got}")]
    KindMismatch {
        expected: ComponentKind,
        got: ComponentKind,
    },
}

/// The Page → Component tree plus the admin editor's current selection.
///
/// Selection is deliberately permissive: selecting an unknown id is not
/// an error, it just leaves [`ContentStore::current_page`] absent until
/// a known id is selected. Mutations are strict and report
/// [`StoreError`] when their target does not exist, so callers can tell
/// "nothing to change" apart from "target missing".
///
/// Selection state is ephemeral and excluded from snapshots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentStore {
    pages: Vec<Page>,
    #[serde(skip)]
    selected_page: Option<String>,
    #[serde(skip)]
    selected_component: Option<String>,
}

impl ContentStore {
    /// Build a store over the given pages.
    pub fn new(pages: Vec<Page>) -> Self {
        Self {
            pages,
            selected_page: None,
            selected_component: None,
        }
    }

    /// Build a store seeded with the default site configuration.
    pub fn with_defaults() -> Self {
        Self::new(seed::default_pages())
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Set the page the editor is working on.
    ///
    /// `None` or an empty id clears the selection. Changing pages
    /// always clears the component selection.
    pub fn select_page(&mut self, id: Option<&str>) {
        self.selected_component = None;
        self.selected_page = match id {
            Some(id) if !id.is_empty() => Some(id.to_string()),
            _ => None,
        };
    }

    /// Set the component the editor is working on, within the selected
    /// page. `None` or an empty id clears the selection.
    pub fn select_component(&mut self, id: Option<&str>) {
        self.selected_component = match id {
            Some(id) if !id.is_empty() => Some(id.to_string()),
            _ => None,
        };
    }

    /// The selected page, if its id resolves to a known page.
    pub fn current_page(&self) -> Option<&Page> {
        let id = self.selected_page.as_deref()?;
        self.pages.iter().find(|p| p.id == id)
    }

    /// The selected component within the selected page, if both resolve.
    pub fn current_component(&self) -> Option<&Component> {
        let id = self.selected_component.as_deref()?;
        self.current_page()?.component(id)
    }

    /// Replace the settings of a component in the selected page.
    ///
    /// This is a whole-value replacement, never a merge. A component's
    /// type is fixed for its lifetime, so the new settings must be the
    /// same variant as the old ones. Bumps the page's `updated_at` on
    /// success.
    pub fn update_component_settings(
        &mut self,
        component_id: &str,
        settings: ComponentSettings,
    ) -> Result<(), StoreError> {
        let page = self.selected_page_mut()?;
        let component = page
            .components
            .iter_mut()
            .find(|c| c.id == component_id)
            .ok_or_else(|| StoreError::ComponentNotFound(component_id.to_string()))?;

        if component.kind() != settings.kind() {
            return Err(StoreError::KindMismatch {
                expected: component.kind(),
                got: settings.kind(),
            });
        }

        component.settings = settings;
        page.updated_at = Utc::now();
        Ok(())
    }

    /// Flip a component's active flag in the selected page.
    ///
    /// Returns the new state. Bumps the page's `updated_at`.
    pub fn toggle_component(&mut self, component_id: &str) -> Result<bool, StoreError> {
        let page = self.selected_page_mut()?;
        let component = page
            .components
            .iter_mut()
            .find(|c| c.id == component_id)
            .ok_or_else(|| StoreError::ComponentNotFound(component_id.to_string()))?;

        component.active = !component.active;
        let active = component.active;
        page.updated_at = Utc::now();
        Ok(active)
    }

    /// Read-only page lookup for renderers.
    ///
    /// Unknown ids yield `None`; renderers fall back to
    /// [`crate::seed::default_page`] so the first paint is never empty.
    pub fn page_content(&self, page_id: &str) -> Option<&Page> {
        self.pages.iter().find(|p| p.id == page_id)
    }

    /// Serialize the page tree to a JSON snapshot.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Restore a store from a JSON snapshot. Selection starts cleared.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    fn selected_page_mut(&mut self) -> Result<&mut Page, StoreError> {
        let id = self
            .selected_page
            .clone()
            .ok_or(StoreError::NoPageSelected)?;
        self.pages
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(StoreError::NoPageSelected)
    }
}
