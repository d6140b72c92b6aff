use dioxus::prelude::*;
use pmde_core::{TextAlign, TextPosition};
use pmde_ui::ParallaxHero;

use super::BottomIcon;
use crate::context::use_site_config;

#[component]
pub fn Insights() -> Element {
    let config = use_site_config();

    rsx! {
        div { id: "insights-hero-container",
            ParallaxHero {
                background_image: "/updatedImages/HeroBack7.webp",
                title: "Insights And Resources",
                subtitle: "Gain Insights from real-world examples of how we've driven success across projects.",
                text_position: TextPosition::TopLeft,
                text_align: TextAlign::Left,
                parallax_strength: config.parallax.strength,
                content_parallax_factor: 0.5,
                middle_image_parallax_factor: 0.5,
            }
            BottomIcon {}
        }

        section { class: "page-section case-studies",
            div { class: "section-label", h1 { "Case Studies" } }
            p { class: "section-copy",
                "Explore real-world case studies and project insights from across the resource sector."
            }
        }
    }
}
