//! Hero Carousel
//!
//! A ParallaxHero whose title stays fixed while the subtitle and
//! description rotate on a timer. Dots below the text jump to a slide
//! without disturbing the rotation cadence.

use dioxus::prelude::*;
use pmde_core::{
    HeroContent, HeroSlide, RotationTiming, ScrollDirectionX, ScrollDirectionY, SlideDirection,
    TextAlign, TextPosition,
};

use super::ParallaxHero;
use crate::hooks::use_rotation;

/// Properties for the HeroCarousel component
#[derive(Clone, PartialEq, Props)]
pub struct HeroCarouselProps {
    #[props(default, into)]
    pub background_image: Option<String>,
    #[props(default, into)]
    pub middle_image: Option<String>,
    #[props(default, into)]
    pub foreground_image: Option<String>,
    #[props(into)]
    pub title: String,
    /// One or more subtitle/description pairs
    pub content: HeroContent,
    #[props(default = false)]
    pub carousel_enabled: bool,
    /// Milliseconds between slides
    #[props(default = 5000)]
    pub carousel_interval: u64,
    #[props(default)]
    pub text_position: TextPosition,
    /// Ignored while the carousel is running; rotating copy is left-aligned
    #[props(default)]
    pub text_align: TextAlign,
    #[props(default)]
    pub slide_direction: SlideDirection,
    #[props(default = 10.0)]
    pub parallax_strength: f64,
    #[props(default = 0.5)]
    pub title_parallax_factor: f64,
    #[props(default = 0.5)]
    pub content_parallax_factor: f64,
    #[props(default = 0.5)]
    pub middle_image_parallax_factor: f64,
    #[props(default)]
    pub content_scroll_direction_y: ScrollDirectionY,
    #[props(default)]
    pub content_scroll_direction_x: ScrollDirectionX,
}

fn rotation_timing(carousel_enabled: bool, slides: usize, interval_ms: u64) -> RotationTiming {
    if carousel_enabled && slides > 1 {
        RotationTiming::hero(interval_ms)
    } else {
        RotationTiming::manual()
    }
}

fn effective_align(carousel_enabled: bool, requested: TextAlign) -> TextAlign {
    if carousel_enabled {
        TextAlign::Left
    } else {
        requested
    }
}

/// Hero banner with rotating sub-content
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     HeroCarousel {
///         background_image: "/updatedImages/HeroBack1.webp",
///         foreground_image: "/updatedImages/HeroFont1.webp",
///         title: "MINERAL PROJECT DEVELOPMENT EXPERTS",
///         content: HeroContent::Slides(home_slides()),
///         carousel_enabled: true,
///         text_position: TextPosition::TopLeft,
///     }
/// }
/// ```
#[component]
pub fn HeroCarousel(props: HeroCarouselProps) -> Element {
    let slides: Vec<HeroSlide> = props.content.clone().into_slides();
    let count = slides.len();
    let rotating = props.carousel_enabled && count > 1;
    let rotation = use_rotation(count, rotation_timing(props.carousel_enabled, count, props.carousel_interval));

    let index = rotation.index();
    let slide = slides.get(index).or_else(|| slides.first()).cloned().unwrap_or_default();

    let content = rsx! {
        // Keyed so each slide change remounts and replays the enter animation
        for current in std::iter::once(slide) {
            div {
                key: "{index}",
                class: "hero-slide hero-slide-enter",
                if let Some(subtitle) = current.subtitle.clone() {
                    h2 { class: "hero-subtitle", "{subtitle}" }
                }
                if let Some(description) = current.description.clone() {
                    p { class: "hero-description", "{description}" }
                }
            }
        }
        if rotating {
            div { class: "hero-dots",
                for i in 0..count {
                    button {
                        key: "{i}",
                        class: if i == index { "hero-dot active" } else { "hero-dot" },
                        r#type: "button",
                        "aria-label": "Go to slide {i + 1}",
                        onclick: move |_| rotation.goto(i),
                    }
                }
            }
        }
    };

    rsx! {
        ParallaxHero {
            background_image: props.background_image.clone(),
            middle_image: props.middle_image.clone(),
            foreground_image: props.foreground_image.clone(),
            title: props.title.clone(),
            text_position: props.text_position,
            text_align: effective_align(props.carousel_enabled, props.text_align),
            slide_direction: props.slide_direction,
            parallax_strength: props.parallax_strength,
            title_parallax_factor: props.title_parallax_factor,
            content_parallax_factor: props.content_parallax_factor,
            middle_image_parallax_factor: props.middle_image_parallax_factor,
            content_scroll_direction_y: props.content_scroll_direction_y,
            content_scroll_direction_x: props.content_scroll_direction_x,
            content: content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_slide_never_schedules_ticks() {
        assert!(!rotation_timing(true, 1, 5000).auto_enabled());
        assert!(!rotation_timing(false, 3, 5000).auto_enabled());
        assert_eq!(rotation_timing(true, 2, 4000).interval_ms, Some(4000));
    }

    #[test]
    fn parallax_factor_defaults() {
        let props = HeroCarouselProps::builder()
            .title("Title")
            .content(HeroContent::Slides(Vec::new()))
            .build();
        assert_eq!(props.title_parallax_factor, 0.5);
        assert_eq!(props.content_parallax_factor, 0.5);
        assert_eq!(props.middle_image_parallax_factor, 0.5);
        assert_eq!(props.carousel_interval, 5000);
    }

    #[test]
    fn carousel_mode_forces_left_alignment() {
        assert_eq!(effective_align(true, TextAlign::Center), TextAlign::Left);
        assert_eq!(effective_align(false, TextAlign::Right), TextAlign::Right);
    }
}
