//! Services Carousel
//!
//! One service line at a time, faded out and back in on navigation.
//! There is no auto-rotation; the arrows and dots are the only way to move.

use dioxus::prelude::*;
use pmde_core::{Phase, RotationTiming, ServiceSlide};

use super::{ArrowButton, ArrowDirection, CtaButton, CtaVariant};
use crate::hooks::use_rotation;

pub fn fade_class(phase: Phase) -> &'static str {
    match phase {
        Phase::Idle => "service-slide",
        Phase::TransitioningOut { .. } => "service-slide fade-out",
        Phase::TransitioningIn => "service-slide fade-in",
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct ServicesCarouselProps {
    pub slides: Vec<ServiceSlide>,
    #[props(default = 300)]
    pub transition_ms: u64,
}

#[component]
pub fn ServicesCarousel(props: ServicesCarouselProps) -> Element {
    let count = props.slides.len();
    let rotation = use_rotation(count, RotationTiming::faded(props.transition_ms));

    let index = rotation.index();
    let busy = rotation.is_animating();
    let controls = rotation.can_navigate();

    let Some(slide) = props.slides.get(index).cloned() else {
        tracing::debug!("services carousel has no slides");
        return rsx! {};
    };

    rsx! {
        section { class: "services-carousel",
            div {
                class: fade_class(rotation.phase()),
                style: "background-image: url('{slide.background_illustration}');",
                img { class: "service-icon", src: "{slide.icon}", alt: "" }
                h3 { class: "service-title", "{slide.title}" }
                div {
                    class: "service-description",
                    dangerous_inner_html: "{slide.description}",
                }
                CtaButton {
                    href: slide.link.clone(),
                    variant: CtaVariant::Light,
                    "{slide.button_text}"
                }
            }

            if controls {
                div { class: "services-controls",
                    ArrowButton {
                        direction: ArrowDirection::Previous,
                        disabled: busy,
                        onclick: move |_| rotation.previous(),
                    }
                    div { class: "services-indicators",
                        for i in 0..count {
                            button {
                                key: "{i}",
                                class: if i == index { "indicator active" } else { "indicator" },
                                r#type: "button",
                                disabled: busy,
                                "aria-label": "Show service {i + 1}",
                                onclick: move |_| rotation.goto(i),
                            }
                        }
                    }
                    ArrowButton {
                        direction: ArrowDirection::Next,
                        disabled: busy,
                        onclick: move |_| rotation.next(),
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
    fn fade_classes_follow_phase() {
        assert_eq!(fade_class(Phase::Idle), "service-slide");
        assert_eq!(fade_class(Phase::TransitioningOut { target: 1 }), "service-slide fade-out");
        assert_eq!(fade_class(Phase::TransitioningIn), "service-slide fade-in");
    }
}
