use dioxus::prelude::*;
use pmde_core::TextPosition;
use pmde_ui::{HeroCarousel, ServicesCarousel, TestimonialCarousel};

use super::BottomIcon;
use crate::context::use_site_config;
use crate::data::{home_hero_content, service_slides, testimonials};

#[component]
pub fn Home() -> Element {
    let config = use_site_config();

    rsx! {
        div { id: "home-hero",
            HeroCarousel {
                background_image: "/updatedImages/HeroBack1.webp",
                foreground_image: "/updatedImages/HeroFont1.webp",
                title: "An independent consultancy to the minerals industry.",
                content: home_hero_content(),
                carousel_enabled: true,
                carousel_interval: config.rotation.hero_interval_ms,
                text_position: TextPosition::TopLeft,
                parallax_strength: config.parallax.strength,
            }
            BottomIcon {}
        }

        section { class: "page-section services",
            div { class: "section-label", h1 { "Services and Offerings" } }
            ServicesCarousel {
                slides: service_slides(),
                transition_ms: config.rotation.transition_ms,
            }
        }

        section { class: "page-section tinted",
            TestimonialCarousel {
                testimonials: testimonials(),
                transition_ms: config.rotation.transition_ms,
                heading: "What our clients say",
            }
        }
    }
}
