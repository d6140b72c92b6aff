use dioxus::prelude::*;
use pmde_core::{TextAlign, TextPosition};
use pmde_ui::ParallaxHero;

use super::BottomIcon;

#[component]
pub fn AboutUs() -> Element {
    rsx! {
        div { id: "about-us-hero-container",
            ParallaxHero {
                background_image: "/updatedImages/HeroBack2.webp",
                title: "About Us",
                subtitle: "Your global partners in mining excellence.",
                text_position: TextPosition::Center,
                text_align: TextAlign::Left,
                parallax_strength: 30.0,
                content_parallax_factor: 0.5,
                middle_image_parallax_factor: 0.5,
            }
            BottomIcon {}
        }

        section { class: "page-section",
            div { class: "section-label", h1 { "Our Journey in Mining Excellence" } }
            p { class: "section-copy",
                "With decades of experience and global reach, we support the minerals industry through expert consulting and strategy."
            }
        }

        section { class: "page-section tinted",
            div { class: "section-label", h1 { "Our Global Reach" } }
            img { class: "section-image", src: "/images/Group 1230.webp", alt: "World Map" }
        }
    }
}
