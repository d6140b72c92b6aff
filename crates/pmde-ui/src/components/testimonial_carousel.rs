//! Testimonial Carousel
//!
//! Client quotes with previous/next arrows and indicator dots. The outgoing
//! quote slides away in the direction of travel and the incoming one slides
//! in from the opposite side.

use dioxus::prelude::*;
use pmde_core::{Direction, Phase, RotationTiming, Testimonial};

use super::{ArrowButton, ArrowDirection};
use crate::hooks::use_rotation;

/// CSS class for the visible quote in a given rotation state
pub fn slide_class(phase: Phase, direction: Direction) -> &'static str {
    match (phase, direction) {
        (Phase::Idle, _) => "testimonial-slide",
        (Phase::TransitioningOut { .. }, Direction::Backward) => "testimonial-slide slide-exit-right",
        (Phase::TransitioningOut { .. }, _) => "testimonial-slide slide-exit-left",
        (Phase::TransitioningIn, Direction::Backward) => "testimonial-slide slide-enter-from-left",
        (Phase::TransitioningIn, _) => "testimonial-slide slide-enter-from-right",
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct TestimonialCarouselProps {
    pub testimonials: Vec<Testimonial>,
    /// Duration of each half of the slide animation
    #[props(default = 300)]
    pub transition_ms: u64,
    #[props(default, into)]
    pub heading: Option<String>,
}

#[component]
pub fn TestimonialCarousel(props: TestimonialCarouselProps) -> Element {
    let count = props.testimonials.len();
    let rotation = use_rotation(count, RotationTiming::faded(props.transition_ms));

    let index = rotation.index();
    let class = slide_class(rotation.phase(), rotation.direction());
    let busy = rotation.is_animating();
    let controls = rotation.can_navigate();

    rsx! {
        section { class: "testimonial-carousel",
            if let Some(heading) = props.heading.clone() {
                h2 { class: "testimonial-heading", "{heading}" }
            }

            div { class: "testimonial-stage",
                if controls {
                    ArrowButton {
                        direction: ArrowDirection::Previous,
                        disabled: busy,
                        onclick: move |_| rotation.previous(),
                    }
                }

                if let Some(quote) = props.testimonials.get(index) {
                    blockquote { class: "{class}",
                        p { class: "testimonial-text", "“{quote.text}”" }
                        footer { class: "testimonial-author",
                            span { class: "testimonial-name", "{quote.name}" }
                            span { class: "testimonial-role", "{quote.attribution()}" }
                        }
                    }
                }

                if controls {
                    ArrowButton {
                        direction: ArrowDirection::Next,
                        disabled: busy,
                        onclick: move |_| rotation.next(),
                    }
                }
            }

            if controls {
                div { class: "testimonial-indicators",
                    for i in 0..count {
                        button {
                            key: "{i}",
                            class: if i == index { "indicator active" } else { "indicator" },
                            r#type: "button",
                            "aria-label": "Show testimonial {i + 1}",
                            onclick: move |_| rotation.goto(i),
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_slide_has_no_motion_class() {
        assert_eq!(slide_class(Phase::Idle, Direction::Forward), "testimonial-slide");
    }

    #[test]
    fn forward_exits_left_and_enters_from_right() {
        let out = Phase::TransitioningOut { target: 3 };
        assert!(slide_class(out, Direction::Forward).ends_with("slide-exit-left"));
        assert!(slide_class(Phase::TransitioningIn, Direction::Forward).ends_with("slide-enter-from-right"));
    }

    #[test]
    fn backward_mirrors_forward() {
        let out = Phase::TransitioningOut { target: 0 };
        assert!(slide_class(out, Direction::Backward).ends_with("slide-exit-right"));
        assert!(slide_class(Phase::TransitioningIn, Direction::Backward).ends_with("slide-enter-from-left"));
    }
}
