use dioxus::prelude::*;
use pmde_core::{ScrollDirectionX, ScrollDirectionY, TextAlign, TextPosition};
use pmde_ui::{CtaButton, CtaVariant, ParallaxHero, TestimonialCarousel};

use super::BottomIcon;
use crate::context::use_site_config;
use crate::data::testimonials;

#[component]
pub fn TechnicalExpertise() -> Element {
    let config = use_site_config();

    rsx! {
        div { id: "technical-hero",
            ParallaxHero {
                background_image: "/updatedImages/HeroBack3.webp",
                foreground_image: "/updatedImages/HeroFront3.webp",
                title: "Enhance the value of minerals projects across their lifecycle.",
                subtitle: "Technical excellence in the minerals industry.",
                description: "Technical Expertise",
                text_position: TextPosition::TopLeft,
                text_align: TextAlign::Left,
                parallax_strength: config.parallax.strength,
                content_parallax_factor: 0.5,
                middle_image_parallax_factor: 0.5,
                content_scroll_direction_x: ScrollDirectionX::None,
                content_scroll_direction_y: ScrollDirectionY::Down,
            }
            BottomIcon {}
        }

        section { class: "page-section technical-tabs", id: "solutions-container",
            div { class: "section-label", h1 { "Technical Expertise" } }
            img { class: "section-image", src: "/images/Truck.webp", alt: "Trucks" }
            CtaButton { href: "/contact", "Speak to an Expert" }
        }

        section { class: "page-section did-you-know",
            h1 { "Did you know?" }
            div {
                p {
                    span {
                        "On average, it takes 10 to 20 years to develop a mine from initial discovery to first production"
                    }
                    ", with permitting, feasibility studies and financing often causing the biggest delays."
                }
                CtaButton { href: "/contact", variant: CtaVariant::Light, "Speak to an expert" }
            }
        }

        section { class: "page-section tinted",
            TestimonialCarousel {
                testimonials: testimonials(),
                transition_ms: config.rotation.transition_ms,
            }
        }
    }
}
