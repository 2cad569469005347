//! Typed component settings.
//!
//! Each page section the site can render has its own settings variant.
//! The serde tag doubles as the component type on the wire, so a
//! snapshot round-trips to the same variant it came from.

use serde::{Deserialize, Serialize};

/// The closed set of component types the renderers know how to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    Hero,
    Services,
    Testimonials,
    Gallery,
    CallToAction,
    ContactForm,
    Faq,
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComponentKind::Hero => write!(f, "hero"),
            ComponentKind::Services => write!(f, "services"),
            ComponentKind::Testimonials => write!(f, "testimonials"),
            ComponentKind::Gallery => write!(f, "gallery"),
            ComponentKind::CallToAction => write!(f, "call_to_action"),
            ComponentKind::ContactForm => write!(f, "contact_form"),
            ComponentKind::Faq => write!(f, "faq"),
        }
    }
}

/// A service offering shown in the services grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceCard {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// A customer quote for the testimonial carousel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Star rating, 1-5.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
}

/// An image in the project gallery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

/// A question/answer pair for the FAQ section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

/// Operator-editable settings, one variant per component type.
///
/// An update through the store replaces the whole value; there is no
/// per-field merge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ComponentSettings {
    Hero {
        title: String,
        subtitle: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        background_image: Option<String>,
        cta_label: String,
        cta_link: String,
    },
    Services {
        heading: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        intro: Option<String>,
        services: Vec<ServiceCard>,
    },
    Testimonials {
        heading: String,
        testimonials: Vec<Testimonial>,
    },
    Gallery {
        heading: String,
        images: Vec<GalleryImage>,
    },
    CallToAction {
        heading: String,
        body: String,
        button_label: String,
        button_link: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        phone: Option<String>,
    },
    ContactForm {
        heading: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        blurb: Option<String>,
        /// Choices offered in the "service requested" dropdown.
        services: Vec<String>,
    },
    Faq {
        heading: String,
        entries: Vec<FaqEntry>,
    },
}

impl ComponentSettings {
    /// The component type these settings belong to.
    pub fn kind(&self) -> ComponentKind {
        match self {
            ComponentSettings::Hero { .. } => ComponentKind::Hero,
            ComponentSettings::Services { .. } => ComponentKind::Services,
            ComponentSettings::Testimonials { .. } => ComponentKind::Testimonials,
            ComponentSettings::Gallery { .. } => ComponentKind::Gallery,
            ComponentSettings::CallToAction { .. } => ComponentKind::CallToAction,
            ComponentSettings::ContactForm { .. } => ComponentKind::ContactForm,
            ComponentSettings::Faq { .. } => ComponentKind::Faq,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_variant() {
        let settings = ComponentSettings::Hero {
            title: "Protect Your Home".to_string(),
            subtitle: "Roofing done right".to_string(),
            background_image: None,
            cta_label: "Get a Quote".to_string(),
            cta_link: "/contact".to_string(),
        };
        assert_eq!(settings.kind(), ComponentKind::Hero);
        assert_eq!(settings.kind().to_string(), "hero");
    }

    #[test]
    fn serde_tag_is_component_type() {
        let settings = ComponentSettings::CallToAction {
            heading: "Storm damage?".to_string(),
            body: "We offer 24/7 emergency tarping.".to_string(),
            button_label: "Call Now".to_string(),
            button_link: "tel:+15550100".to_string(),
            phone: Some("555-0100".to_string()),
        };

        let json = serde_json::to_value(&settings).unwrap();
        assert_eq!(json["type"], "call_to_action");

        let back: ComponentSettings = serde_json::from_value(json).unwrap();
        assert_eq!(back, settings);
    }
}
