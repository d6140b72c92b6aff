use dioxus::prelude::*;
use pmde_core::{ScrollDirectionX, ScrollDirectionY, TextAlign, TextPosition};
use pmde_ui::{CtaButton, ParallaxHero, TestimonialCarousel};

use super::BottomIcon;
use crate::context::use_site_config;
use crate::data::testimonials;

#[component]
pub fn PeopleExcellence() -> Element {
    let config = use_site_config();

    rsx! {
        div { id: "people-hero",
            ParallaxHero {
                background_image: "/updatedImages/HeroBack6.webp",
                foreground_image: "/updatedImages/HeroFront6.webp",
                title: "Empowering the Future of Mining",
                subtitle: "Customised education and training programmes for industry excellence.",
                description: "People Excellence",
                text_position: TextPosition::TopLeft,
                text_align: TextAlign::Left,
                parallax_strength: config.parallax.strength,
                content_parallax_factor: 0.5,
                middle_image_parallax_factor: 0.5,
                content_scroll_direction_x: ScrollDirectionX::Right,
                content_scroll_direction_y: ScrollDirectionY::None,
            }
            BottomIcon {}
        }

        section { class: "page-section two-sided-tabs", id: "solutions-container",
            div { class: "section-label", h1 { "People Excellence" } }
            CtaButton { href: "/contact", "Find out more" }
            img { class: "section-image", src: "/images/Loose rock 6.webp", alt: "" }
        }

        section { class: "page-section tinted",
            TestimonialCarousel {
                testimonials: testimonials(),
                transition_ms: config.rotation.transition_ms,
            }
        }
    }
}
