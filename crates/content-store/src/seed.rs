//! Default site configuration.
//!
//! The store is seeded from this fixed layout at startup; the admin
//! editor can change settings and active flags but never adds or
//! removes pages or components. Renderers also use [`default_page`] as
//! the fallback when a lookup comes back empty.

use chrono::Utc;

use crate::model::{Component, Page, PageCategory};
use crate::settings::{ComponentSettings, FaqEntry, GalleryImage, ServiceCard, Testimonial};

fn component(id: &str, name: &str, settings: ComponentSettings) -> Component {
    Component {
        id: id.to_string(),
        name: name.to_string(),
        active: true,
        settings,
    }
}

fn home() -> Page {
    Page {
        id: "home".to_string(),
        name: "Home".to_string(),
        route: "/".to_string(),
        category: PageCategory::Marketing,
        updated_at: Utc::now(),
        components: vec![
            component(
                "home-hero",
                "Hero Banner",
                ComponentSettings::Hero {
                    title: "Summit Ridge Roofing".to_string(),
                    subtitle: "Licensed and insured roofers serving the front range since 2004"
                        .to_string(),
                    background_image: Some("/images/hero-shingles.jpg".to_string()),
                    cta_label: "Get a Free Estimate".to_string(),
                    cta_link: "/contact".to_string(),
                },
            ),
            component(
                "home-services",
                "Service Grid",
                ComponentSettings::Services {
                    heading: "What We Do".to_string(),
                    intro: Some("Residential and commercial, from repair to full replacement.".to_string()),
                    services: vec![
                        ServiceCard {
                            title: "Roof Repair".to_string(),
                            description: "Leaks, missing shingles, flashing and vent repair."
                                .to_string(),
                            icon: Some("hammer".to_string()),
                        },
                        ServiceCard {
                            title: "Roof Replacement".to_string(),
                            description: "Full tear-off and re-roof with asphalt, metal or tile."
                                .to_string(),
                            icon: Some("home".to_string()),
                        },
                        ServiceCard {
                            title: "Storm Damage".to_string(),
                            description: "Hail and wind inspections, insurance claim support."
                                .to_string(),
                            icon: Some("cloud-lightning".to_string()),
                        },
                        ServiceCard {
                            title: "Gutters".to_string(),
                            description: "Seamless gutter installation and cleaning.".to_string(),
                            icon: Some("droplet".to_string()),
                        },
                    ],
                },
            ),
            component(
                "home-testimonials",
                "Testimonial Carousel",
                ComponentSettings::Testimonials {
                    heading: "What Our Customers Say".to_string(),
                    testimonials: vec![
                        Testimonial {
                            quote: "They replaced our hail-damaged roof in two days and handled \
                                    the insurance paperwork for us."
                                .to_string(),
                            author: "M. Alvarez".to_string(),
                            location: Some("Boulder, CO".to_string()),
                            rating: Some(5),
                        },
                        Testimonial {
                            quote: "Fast, clean, and the crew walked me through every step."
                                .to_string(),
                            author: "D. Chen".to_string(),
                            location: Some("Longmont, CO".to_string()),
                            rating: Some(5),
                        },
                    ],
                },
            ),
            component(
                "home-cta",
                "Bottom Call To Action",
                ComponentSettings::CallToAction {
                    heading: "Storm damage? Don't wait.".to_string(),
                    body: "We offer 24/7 emergency tarping and free same-week inspections."
                        .to_string(),
                    button_label: "Request an Inspection".to_string(),
                    button_link: "/contact".to_string(),
                    phone: Some("(555) 010-0199".to_string()),
                },
            ),
        ],
    }
}

fn services() -> Page {
    Page {
        id: "services".to_string(),
        name: "Services".to_string(),
        route: "/services".to_string(),
        category: PageCategory::Services,
        updated_at: Utc::now(),
        components: vec![
            component(
                "services-hero",
                "Hero Banner",
                ComponentSettings::Hero {
                    title: "Our Services".to_string(),
                    subtitle: "Every roof, every material, one standard of work".to_string(),
                    background_image: None,
                    cta_label: "Get a Quote".to_string(),
                    cta_link: "/contact".to_string(),
                },
            ),
            component(
                "services-grid",
                "Full Service List",
                ComponentSettings::Services {
                    heading: "Residential & Commercial".to_string(),
                    intro: None,
                    services: vec![
                        ServiceCard {
                            title: "Asphalt Shingle".to_string(),
                            description: "Architectural and 3-tab shingle systems.".to_string(),
                            icon: None,
                        },
                        ServiceCard {
                            title: "Metal Roofing".to_string(),
                            description: "Standing seam and corrugated panels.".to_string(),
                            icon: None,
                        },
                        ServiceCard {
                            title: "Flat / TPO".to_string(),
                            description: "Single-ply membranes for low-slope roofs.".to_string(),
                            icon: None,
                        },
                        ServiceCard {
                            title: "Inspections".to_string(),
                            description: "Pre-sale and insurance inspections with photo reports."
                                .to_string(),
                            icon: None,
                        },
                    ],
                },
            ),
            component(
                "services-faq",
                "FAQ",
                ComponentSettings::Faq {
                    heading: "Common Questions".to_string(),
                    entries: vec![
                        FaqEntry {
                            question: "How long does a replacement take?".to_string(),
                            answer: "Most residential roofs are done in one to two days."
                                .to_string(),
                        },
                        FaqEntry {
                            question: "Do you work with insurance?".to_string(),
                            answer: "Yes, we document damage and meet your adjuster on site."
                                .to_string(),
                        },
                    ],
                },
            ),
        ],
    }
}

fn gallery() -> Page {
    Page {
        id: "gallery".to_string(),
        name: "Project Gallery".to_string(),
        route: "/gallery".to_string(),
        category: PageCategory::Company,
        updated_at: Utc::now(),
        components: vec![component(
            "gallery-grid",
            "Project Photos",
            ComponentSettings::Gallery {
                heading: "Recent Projects".to_string(),
                images: vec![
                    GalleryImage {
                        url: "/images/projects/metal-ridge.jpg".to_string(),
                        caption: Some("Standing seam, Niwot".to_string()),
                    },
                    GalleryImage {
                        url: "/images/projects/shingle-tearoff.jpg".to_string(),
                        caption: Some("Full tear-off and re-roof, Erie".to_string()),
                    },
                    GalleryImage {
                        url: "/images/projects/tpo-flat.jpg".to_string(),
                        caption: None,
                    },
                ],
            },
        )],
    }
}

fn contact() -> Page {
    Page {
        id: "contact".to_string(),
        name: "Contact".to_string(),
        route: "/contact".to_string(),
        category: PageCategory::Marketing,
        updated_at: Utc::now(),
        components: vec![
            component(
                "contact-form",
                "Contact Form",
                ComponentSettings::ContactForm {
                    heading: "Request a Free Estimate".to_string(),
                    blurb: Some(
                        "Tell us about your roof and we'll get back to you within one business day."
                            .to_string(),
                    ),
                    services: vec![
                        "Roof Repair".to_string(),
                        "Roof Replacement".to_string(),
                        "Storm Damage".to_string(),
                        "Gutters".to_string(),
                        "Inspection".to_string(),
                    ],
                },
            ),
            component(
                "contact-cta",
                "Phone Call To Action",
                ComponentSettings::CallToAction {
                    heading: "Prefer to talk?".to_string(),
                    body: "Our office is open Monday through Saturday, 7am to 6pm.".to_string(),
                    button_label: "Call (555) 010-0199".to_string(),
                    button_link: "tel:+15550100199".to_string(),
                    phone: Some("(555) 010-0199".to_string()),
                },
            ),
        ],
    }
}

/// The full default page set, in navigation order.
pub fn default_pages() -> Vec<Page> {
    vec![home(), services(), gallery(), contact()]
}

/// Built-in default content for a single page, used as the renderer
/// fallback when a store lookup yields nothing.
pub fn default_page(page_id: &str) -> Option<Page> {
    default_pages().into_iter().find(|p| p.id == page_id)
}
