//! Tab Panel
//!
//! A row of tab buttons above the active tab's content. Labels with no
//! content record, or with a layout this site does not know, show a
//! placeholder naming the tab instead of failing.

use dioxus::prelude::*;
use pmde_core::tabs::TabPanel as ActiveTab;
use pmde_core::{ResolvedTab, TabSet};

use super::StandardTabContent;

/// Index of `label` in `tabs`, falling back to the first tab
fn initial_index(tabs: &TabSet, label: Option<&str>) -> usize {
    let Some(label) = label else {
        return 0;
    };
    match tabs.position(label) {
        Ok(index) => index,
        Err(err) => {
            tracing::warn!(error = %err, "falling back to first tab");
            0
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct TabPanelProps {
    pub tabs: TabSet,
    /// Label of the tab to open first
    #[props(default, into)]
    pub initial_tab: Option<String>,
    #[props(default = 3000)]
    pub sub_item_interval: u64,
}

#[component]
pub fn TabPanel(props: TabPanelProps) -> Element {
    let mut active = use_signal(|| {
        let mut state = ActiveTab::new();
        state.select(initial_index(&props.tabs, props.initial_tab.as_deref()), &props.tabs);
        state
    });

    let current = active.read().active();
    let body = match active.read().resolve(&props.tabs) {
        ResolvedTab::Standard(content) => rsx! {
            StandardTabContent {
                content: content.clone(),
                sub_item_interval: props.sub_item_interval,
            }
        },
        degraded => {
            let message = degraded.placeholder().unwrap_or_default();
            rsx! {
                p { class: "tab-placeholder", "{message}" }
            }
        }
    };

    rsx! {
        div { class: "tab-panel",
            div { class: "tab-list", role: "tablist",
                for (i, label) in props.tabs.labels.iter().enumerate() {
                    {
                        let tabs = props.tabs.clone();
                        rsx! {
                            button {
                                key: "{label}",
                                class: if i == current { "tab-button active" } else { "tab-button" },
                                r#type: "button",
                                role: "tab",
                                "aria-selected": i == current,
                                onclick: move |_| {
                                    active.write().select(i, &tabs);
                                },
                                "{label}"
                            }
                        }
                    }
                }
            }
            div { class: "tab-body", role: "tabpanel", {body} }
        }
    }
}
