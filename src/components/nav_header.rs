//! Navigation Header Component
//!
//! Desktop: logo, primary links and a services dropdown in one row.
//! Narrow screens: the links collapse behind a toggle button.

use dioxus::prelude::*;

use crate::app::Route;
use crate::data::{primary_nav, service_nav, NavEntry};

fn link_class(entry: &NavEntry, current: &Route) -> &'static str {
    if entry.route == *current {
        "nav-link active"
    } else {
        "nav-link"
    }
}

/// Navigation Header component
#[component]
pub fn NavHeader() -> Element {
    let current = use_route::<Route>();
    let mut menu_open = use_signal(|| false);
    let mut services_open = use_signal(|| false);

    let primary = primary_nav();
    let services = service_nav();
    let on_service_page = services.iter().any(|entry| entry.route == current);
    let (before_services, after_services) = primary.split_at(primary.len().min(2));

    rsx! {
        header { class: "nav-header",
            Link {
                class: "nav-logo",
                to: Route::Home {},
                onclick: move |_| menu_open.set(false),
                img { src: "/images/PMDELogo.svg", alt: "PMDE" }
            }

            button {
                class: "nav-toggle",
                r#type: "button",
                "aria-label": "Toggle navigation",
                "aria-expanded": menu_open(),
                onclick: move |_| menu_open.toggle(),
                "☰"
            }

            ul { class: if menu_open() { "nav-links open" } else { "nav-links" },
                for entry in before_services.iter().cloned() {
                    li { key: "{entry.label}",
                        Link {
                            class: link_class(&entry, &current),
                            to: entry.route.clone(),
                            onclick: move |_| menu_open.set(false),
                            "{entry.label}"
                        }
                    }
                }

                li {
                    class: if services_open() { "nav-dropdown open" } else { "nav-dropdown" },
                    onmouseleave: move |_| services_open.set(false),
                    button {
                        class: if on_service_page { "nav-link active" } else { "nav-link" },
                        r#type: "button",
                        "aria-haspopup": "true",
                        onclick: move |_| services_open.toggle(),
                        "Services"
                    }
                    ul { class: "nav-dropdown-menu",
                        for entry in services.iter().cloned() {
                            li { key: "{entry.label}",
                                Link {
                                    class: link_class(&entry, &current),
                                    to: entry.route.clone(),
                                    onclick: move |_| {
                                        services_open.set(false);
                                        menu_open.set(false);
                                    },
                                    "{entry.label}"
                                }
                            }
                        }
                    }
                }

                for entry in after_services.iter().cloned() {
                    li { key: "{entry.label}",
                        Link {
                            class: link_class(&entry, &current),
                            to: entry.route.clone(),
                            onclick: move |_| menu_open.set(false),
                            "{entry.label}"
                        }
                    }
                }
            }
        }
    }
}
