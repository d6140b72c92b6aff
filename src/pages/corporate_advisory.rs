use dioxus::prelude::*;
use pmde_core::{TabSet, TextAlign, TextPosition};
use pmde_ui::{ParallaxHero, TabPanel};

use super::BottomIcon;
use crate::context::use_site_config;
use crate::data::corporate_advisory_tabs;

#[component]
pub fn CorporateAdvisory() -> Element {
    let config = use_site_config();
    let tabs = use_hook(|| {
        corporate_advisory_tabs().unwrap_or_else(|e| {
            tracing::error!("Failed to load advisory tabs: {}", e);
            TabSet::default()
        })
    });

    rsx! {
        div { id: "corporate-advisory-hero-container",
            ParallaxHero {
                background_image: "/updatedImages/HeroBack9.webp",
                foreground_image: "/updatedImages/HeroFront11.webp",
                title: "Make your next minerals investment with confidence",
                subtitle: "Independent corporate advisory for the financing and development of minerals assets.",
                description: "Corporate Advisory",
                text_position: TextPosition::TopLeft,
                text_align: TextAlign::Left,
                parallax_strength: config.parallax.strength,
                content_parallax_factor: 0.5,
                middle_image_parallax_factor: 0.5,
            }
            BottomIcon {}
        }

        section { class: "page-section advisory-tabs", id: "solutions-container",
            div { class: "section-label", h1 { "Advisory Services" } }
            TabPanel {
                tabs: tabs,
                sub_item_interval: config.rotation.sub_item_interval_ms,
            }
        }
    }
}
