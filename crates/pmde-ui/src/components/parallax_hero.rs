//! Parallax Hero
//!
//! Full-width hero banner with up to three image layers and a text block.
//! The middle and foreground layers follow the pointer anywhere in the
//! window; the middle layer and the text also drift with page scroll. The
//! text slides in whenever at least 30% of the section comes on screen and
//! slides back out when it drops below that, so every entry replays it.

use std::rc::Rc;

use dioxus::prelude::*;
use pmde_core::parallax::{stagger_delay_ms, visible_fraction, ENTRANCE_DURATION_MS, TEXT_Z_INDEX};
use pmde_core::{
    Entrance, Extent, HeroMotion, Layer, Offset, ParallaxSettings, Point, ScrollDirectionX,
    ScrollDirectionY, SlideDirection, TextAlign, TextPosition,
};

use crate::viewport::{use_viewport, use_window_pointer};

/// Section geometry relative to the window
#[derive(Debug, Clone, Copy, PartialEq)]
struct Measured {
    /// Top-left corner in client coordinates
    origin: Point,
    extent: Extent,
}

/// Pointer in the section's own coordinates. Rests at the centre until
/// both the section and the pointer have been seen.
fn section_pointer(client: Option<Point>, measured: Option<Measured>) -> Point {
    match (client, measured) {
        (Some(at), Some(section)) => at.relative_to(section.origin),
        (_, section) => section.map(|s| s.extent).unwrap_or_default().center(),
    }
}

/// Properties for the ParallaxHero component
#[derive(Clone, PartialEq, Props)]
pub struct ParallaxHeroProps {
    #[props(default, into)]
    pub background_image: Option<String>,
    #[props(default, into)]
    pub middle_image: Option<String>,
    #[props(default, into)]
    pub foreground_image: Option<String>,
    #[props(into)]
    pub title: String,
    #[props(default, into)]
    pub subtitle: Option<String>,
    #[props(default, into)]
    pub description: Option<String>,
    #[props(default)]
    pub text_position: TextPosition,
    #[props(default)]
    pub text_align: TextAlign,
    #[props(default)]
    pub slide_direction: SlideDirection,
    #[props(default = 10.0)]
    pub parallax_strength: f64,
    #[props(default = 0.5)]
    pub title_parallax_factor: f64,
    #[props(default = 0.4)]
    pub content_parallax_factor: f64,
    #[props(default = 0.3)]
    pub middle_image_parallax_factor: f64,
    #[props(default)]
    pub content_scroll_direction_y: ScrollDirectionY,
    #[props(default)]
    pub content_scroll_direction_x: ScrollDirectionX,
    /// Replaces the subtitle/description block (used by HeroCarousel)
    #[props(default)]
    pub content: Option<Element>,
}

impl ParallaxHeroProps {
    fn settings(&self) -> ParallaxSettings {
        ParallaxSettings {
            strength: self.parallax_strength,
            title_factor: self.title_parallax_factor,
            content_factor: self.content_parallax_factor,
            middle_image_factor: self.middle_image_parallax_factor,
            scroll_y: self.content_scroll_direction_y,
            scroll_x: self.content_scroll_direction_x,
        }
    }
}

fn layer_style(layer: Layer, offset: Offset) -> String {
    format!("z-index: {}; transform: {};", layer.z_index(), offset.to_css())
}

/// Scroll drift goes through `transform`; the entrance slide uses the
/// separate `translate` property so the two never fight over one value.
fn text_style(drift: Offset, entrance: Entrance, direction: SlideDirection, child: usize) -> String {
    let (slide, opacity) = entrance.target(direction);
    let delay = stagger_delay_ms(child);
    format!(
        "transform: {}; translate: {}px {}px; opacity: {}; \
         transition: translate {ENTRANCE_DURATION_MS}ms ease-out {delay}ms, \
         opacity {ENTRANCE_DURATION_MS}ms ease-out {delay}ms;",
        drift.to_css(),
        slide.x,
        slide.y,
        opacity,
    )
}

fn text_block_style(position: TextPosition) -> String {
    format!(
        "z-index: {TEXT_Z_INDEX}; justify-content: {}; align-items: {};",
        position.justify_content(),
        position.align_items()
    )
}

/// Layered hero banner with pointer and scroll parallax
///
/// # Design Notes
///
/// - Layers are only rendered for the images that are provided
/// - Stacking order is background 1, middle 2, text 3, foreground 4
/// - The pointer is tracked across the whole window, not just the section
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     ParallaxHero {
///         background_image: "/updatedImages/AboutUsBack.webp",
///         foreground_image: "/updatedImages/AboutUsFont.webp",
///         title: "ABOUT US",
///         subtitle: "Trusted advisors to the minerals industry",
///         text_position: TextPosition::BottomLeft,
///     }
/// }
/// ```
#[component]
pub fn ParallaxHero(props: ParallaxHeroProps) -> Element {
    let viewport = use_viewport();
    let mut section = use_signal(|| None::<Rc<MountedData>>);
    let mut measured = use_signal(|| None::<Measured>);
    let pointer = use_window_pointer();
    let mut entrance = use_signal(Entrance::default);

    // Re-measure whenever the page scrolls or resizes
    use_effect(move || {
        let window = viewport();
        let Some(element) = section() else {
            return;
        };
        spawn(async move {
            match element.get_client_rect().await {
                Ok(rect) => {
                    let next = Measured {
                        origin: Point::new(rect.origin.x, rect.origin.y),
                        extent: Extent::new(rect.size.width, rect.size.height),
                    };
                    if *measured.peek() != Some(next) {
                        measured.set(Some(next));
                    }
                    let height = window.height_or(next.extent.height);
                    let fraction = visible_fraction(next.origin.y, next.extent.height, height);
                    let current = *entrance.peek();
                    if let Some(state) = current.observe(fraction) {
                        tracing::trace!(fraction, ?state, "hero visibility changed");
                        entrance.set(state);
                    }
                }
                Err(err) => tracing::debug!(error = ?err, "hero measurement unavailable"),
            }
        });
    });

    let section_box = measured();
    let extent = section_box.map(|m| m.extent).unwrap_or_default();
    let pointer_at = section_pointer(pointer(), section_box);
    let motion = HeroMotion::compute(&props.settings(), pointer_at, extent, viewport().scroll_y);
    let shown = entrance();
    let direction = props.slide_direction;

    let text_class = format!("hero-text {} {}", props.text_position.class(), props.text_align.class());
    let body = match props.content.clone() {
        Some(content) => content,
        None => rsx! {
            if let Some(subtitle) = props.subtitle.clone() {
                h2 { class: "hero-subtitle", "{subtitle}" }
            }
            if let Some(description) = props.description.clone() {
                p { class: "hero-description", "{description}" }
            }
        },
    };

    rsx! {
        section {
            class: "parallax-hero",
            onmounted: move |evt| section.set(Some(evt.data())),

            if let Some(src) = props.background_image.clone() {
                img {
                    class: Layer::Background.class(),
                    src: "{src}",
                    alt: "",
                    style: layer_style(Layer::Background, Offset::ZERO),
                }
            }
            if let Some(src) = props.middle_image.clone() {
                img {
                    class: Layer::Middle.class(),
                    src: "{src}",
                    alt: "",
                    style: layer_style(Layer::Middle, motion.middle),
                }
            }

            div {
                class: "{text_class}",
                style: text_block_style(props.text_position),
                h1 {
                    class: "hero-title",
                    style: text_style(motion.title, shown, direction, 0),
                    "{props.title}"
                }
                div {
                    class: "hero-content",
                    style: text_style(motion.content, shown, direction, 1),
                    {body}
                }
            }

            if let Some(src) = props.foreground_image.clone() {
                img {
                    class: Layer::Foreground.class(),
                    src: "{src}",
                    alt: "",
                    style: layer_style(Layer::Foreground, motion.foreground),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layer_style_carries_stacking_order() {
        let style = layer_style(Layer::Foreground, Offset::new(2.0, -1.0));
        assert!(style.starts_with("z-index: 4;"));
        assert!(style.contains("translate(2.00px, -1.00px)"));
    }

    #[test]
    fn hidden_text_is_offset_and_transparent() {
        let style = text_style(Offset::ZERO, Entrance::Hidden, SlideDirection::Left, 0);
        assert!(style.contains("translate: -50px 0px;"));
        assert!(style.contains("opacity: 0;"));
    }

    #[test]
    fn visible_text_rests_at_origin_with_stagger() {
        for direction in [SlideDirection::Left, SlideDirection::Right, SlideDirection::Up, SlideDirection::Down] {
            let style = text_style(Offset::ZERO, Entrance::Visible, direction, 1);
            assert!(style.contains("translate: 0px 0px;"), "{direction:?}");
            assert!(style.contains("opacity: 1;"));
            assert!(style.contains("500ms ease-out 100ms"));
        }
    }

    #[test]
    fn window_pointer_is_relative_to_section() {
        let section = Measured {
            origin: Point::new(100.0, -200.0),
            extent: Extent::new(1200.0, 600.0),
        };
        assert_eq!(
            section_pointer(Some(Point::new(700.0, 100.0)), Some(section)),
            Point::new(600.0, 300.0)
        );
        // Outside the section still counts
        assert_eq!(
            section_pointer(Some(Point::new(50.0, 500.0)), Some(section)),
            Point::new(-50.0, 700.0)
        );
    }

    #[test]
    fn unseen_pointer_rests_at_centre() {
        let section = Measured {
            origin: Point::new(0.0, 80.0),
            extent: Extent::new(1000.0, 500.0),
        };
        assert_eq!(section_pointer(None, Some(section)), Point::new(500.0, 250.0));
        assert_eq!(section_pointer(Some(Point::new(10.0, 10.0)), None), Extent::default().center());
    }

    #[test]
    fn entrance_replays_on_every_entry() {
        let viewport_height = 800.0;
        let section_height = 600.0;
        let mut entrance = Entrance::default();
        let mut entries = 0;
        // Section top relative to the window as the page scrolls down, away, and back
        for top in [900.0, 300.0, -100.0, -550.0, -900.0, -100.0, 1000.0, 200.0] {
            let fraction = visible_fraction(top, section_height, viewport_height);
            if let Some(state) = entrance.observe(fraction) {
                if state.is_visible() {
                    entries += 1;
                }
                entrance = state;
            }
        }
        assert_eq!(entries, 3);
        assert!(entrance.is_visible());
    }

    #[test]
    fn text_block_sits_between_layers() {
        let style = text_block_style(TextPosition::TopLeft);
        assert!(style.starts_with("z-index: 3;"));
        assert!(Layer::Middle.z_index() < TEXT_Z_INDEX);
        assert!(TEXT_Z_INDEX < Layer::Foreground.z_index());
    }
}
