//! Standard Tab Content
//!
//! Image on the left, copy and a rotating row of sub-item icons on the
//! right. Content changes fade out, swap while invisible, then fade back in.
//! Hovering an icon highlights it and pauses the rotation until the pointer
//! leaves; a click pins it the same way.

use dioxus::prelude::*;
use pmde_core::tabs::FADE_DURATION_MS;
use pmde_core::{ContentFade, RotationTiming, StandardContent, SubItem};

use super::CtaButton;
use crate::hooks::use_rotation;
use crate::timer::sleep_ms;

#[derive(Clone, PartialEq, Props)]
pub struct StandardTabContentProps {
    pub content: StandardContent,
    /// Milliseconds between sub-item highlights
    #[props(default = 3000)]
    pub sub_item_interval: u64,
    #[props(default = FADE_DURATION_MS)]
    pub fade_ms: u64,
}

fn sub_item_class(active: bool) -> &'static str {
    if active {
        "subtab-item active"
    } else {
        "subtab-item"
    }
}

#[component]
pub fn StandardTabContent(props: StandardTabContentProps) -> Element {
    let mut fade = use_signal(|| ContentFade::new(props.content.clone()));
    let mut fade_task = use_signal(|| None::<Task>);
    let fade_ms = props.fade_ms;

    let content = props.content.clone();
    use_effect(use_reactive!(|(content,)| {
        if !fade.write().request(content) {
            return;
        }
        if let Some(stale) = fade_task.take() {
            stale.cancel();
        }
        let task = spawn(async move {
            sleep_ms(fade_ms).await;
            fade.write().complete_fade_out();
        });
        fade_task.set(Some(task));
    }));

    let shown = fade.read().displayed().clone();
    let fade_class = fade.read().state().class();

    let icons = use_rotation(shown.items.len(), RotationTiming::sub_items(props.sub_item_interval));
    let items: Vec<SubItem> = shown.items.clone();
    use_effect(use_reactive!(|(items,)| {
        icons.reset(items.len());
    }));
    let highlighted = icons.index();

    rsx! {
        div { class: "tab-layout {fade_class}",
            div { class: "tab-left",
                if let Some(logo_title) = shown.logo_title.clone() {
                    h2 { class: "tab-logo-title", "{logo_title}" }
                }
                img {
                    src: "{shown.image}",
                    alt: "{shown.alt_text}",
                }
            }

            div { class: "tab-right",
                h2 { class: "tab-heading", strong { "{shown.heading}" } }
                div { class: "tab-copy",
                    if let Some(strong_text) = shown.p1_strong.clone() {
                        p { class: "tab-lead", strong { "{strong_text}" } }
                    }
                    p { "{shown.p1_regular}" }
                }
                if let Some(sub_heading) = shown.sub_heading.clone() {
                    h3 { class: "tab-sub-heading", strong { "{sub_heading}" } }
                }

                if !shown.items.is_empty() {
                    div { class: "subtabs-container",
                        for (i, item) in shown.items.iter().enumerate() {
                            div {
                                key: "{item.label}-{i}",
                                class: sub_item_class(i == highlighted),
                                onmouseenter: move |_| icons.hover(i),
                                onmouseleave: move |_| icons.leave(),
                                onclick: move |_| icons.select(i),
                                div { class: "icon-container",
                                    img {
                                        class: "subtab-icon",
                                        src: "{item.icon(i == highlighted)}",
                                        alt: "{item.label}",
                                    }
                                }
                                span { class: "subtab-label", "{item.label}" }
                            }
                        }
                    }
                } else if let Some(extra) = shown.extra_image.clone() {
                    div { class: "extra-image-container",
                        img { src: "{extra}", alt: "{shown.alt_text}" }
                    }
                }

                div { class: "cta-button-container",
                    CtaButton { href: shown.cta_href.clone(), "{shown.cta_text}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlighted_item_gets_active_class() {
        assert_eq!(sub_item_class(true), "subtab-item active");
        assert_eq!(sub_item_class(false), "subtab-item");
    }
}
