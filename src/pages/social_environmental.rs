use dioxus::prelude::*;
use pmde_core::{ScrollDirectionX, ScrollDirectionY, TextAlign, TextPosition};
use pmde_ui::{CtaButton, ParallaxHero};

use super::BottomIcon;
use crate::context::use_site_config;

#[component]
pub fn SocialEnvironmental() -> Element {
    let config = use_site_config();

    rsx! {
        div { id: "social-hero",
            ParallaxHero {
                background_image: "/updatedImages/HeroBack5.webp",
                foreground_image: "/updatedImages/HeroFront5.webp",
                title: "Make Your Mining Operations More Sustainable",
                subtitle: "Expert guidance on maintaining your social licence, ensuring compliance with environmental and labour laws, and addressing uncertainties.",
                description: "Social & Environmental Solutions",
                text_position: TextPosition::TopLeft,
                text_align: TextAlign::Left,
                parallax_strength: config.parallax.strength,
                content_parallax_factor: 0.5,
                middle_image_parallax_factor: 0.5,
                content_scroll_direction_x: ScrollDirectionX::Left,
                content_scroll_direction_y: ScrollDirectionY::None,
            }
            BottomIcon {}
        }

        section { class: "page-section advisory-tabs", id: "solutions-container",
            div { class: "section-label", h1 { "Social and Environmental Solutions" } }
            CtaButton { href: "/contact", "Speak to an Expert" }
        }
    }
}
