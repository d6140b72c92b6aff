use dioxus::prelude::*;
use pmde_ui::{CtaButton, CtaVariant};

use crate::data::LINKEDIN_URL;

#[component]
pub fn Contact() -> Element {
    rsx! {
        section { class: "contact-section",
            h1 { "Contact Us" }
            p { class: "section-copy",
                "Get in touch to discuss your next minerals project. Contact our team for expert guidance, tailored solutions, and responsive support."
            }
            div { class: "contact-actions",
                CtaButton {
                    href: LINKEDIN_URL,
                    variant: CtaVariant::Outline,
                    new_tab: true,
                    "Message us on LinkedIn"
                }
            }
        }
    }
}
