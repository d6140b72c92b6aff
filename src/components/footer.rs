//! Footer Component
//!
//! Copyright line, privacy policy link and the LinkedIn icon.

use chrono::Datelike;
use dioxus::prelude::*;

use crate::context::use_site_config;
use crate::data::{LINKEDIN_URL, PRIVACY_POLICY_PATH};

fn copyright_line(site_name: &str, year: i32) -> String {
    format!("Copyright {year} {site_name}")
}

#[component]
pub fn Footer() -> Element {
    let config = use_site_config();
    let copyright = copyright_line(&config.site_name, chrono::Utc::now().year());

    rsx! {
        footer { class: "footer",
            div { class: "container",
                div { class: "footer-content",
                    p { "{copyright}" }
                    a {
                        href: PRIVACY_POLICY_PATH,
                        target: "_blank",
                        rel: "noopener",
                        "Privacy Policy"
                    }
                }
                div { class: "social-icons",
                    a {
                        class: "social-link",
                        href: LINKEDIN_URL,
                        target: "_blank",
                        rel: "noopener",
                        img { src: "/images/linkedin.svg", alt: "linkedin" }
                    }
                }
            }
        }
    }
}
