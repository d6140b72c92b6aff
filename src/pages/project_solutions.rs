use dioxus::prelude::*;
use pmde_core::{TextAlign, TextPosition};
use pmde_ui::{CtaButton, ParallaxHero, TestimonialCarousel};

use super::BottomIcon;
use crate::context::use_site_config;
use crate::data::testimonials;

#[component]
pub fn ProjectSolutions() -> Element {
    let config = use_site_config();

    rsx! {
        div { id: "project-hero",
            ParallaxHero {
                background_image: "/images/TechBg.webp",
                foreground_image: "/updatedImages/HeroFront4.webp",
                title: "Drive Success in your Mining Projects",
                subtitle: "Expert project management and execution for the minerals industry.",
                description: "Project Management and Execution",
                text_position: TextPosition::TopLeft,
                text_align: TextAlign::Left,
                parallax_strength: config.parallax.strength,
                content_parallax_factor: 0.5,
                middle_image_parallax_factor: 0.5,
            }
            BottomIcon {}
        }

        section { class: "page-section project-tabs", id: "solutions-container",
            div { class: "section-label", h1 { "Project Management & Execution" } }
            img { class: "section-image", src: "/images/Side image group 1.webp", alt: "Side Image" }
            CtaButton { href: "/contact", "Speak to an Expert" }
        }

        section { class: "page-section tinted",
            TestimonialCarousel {
                testimonials: testimonials(),
                transition_ms: config.rotation.transition_ms,
            }
        }
    }
}
