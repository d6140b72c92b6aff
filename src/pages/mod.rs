//! Page components for the PMDE site.

mod about_us;
mod contact;
mod corporate_advisory;
mod home;
mod insights;
mod not_found;
mod people_excellence;
mod project_solutions;
mod social_environmental;
mod technical_expertise;

pub use about_us::AboutUs;
pub use contact::Contact;
pub use corporate_advisory::CorporateAdvisory;
pub use home::Home;
pub use insights::Insights;
pub use not_found::NotFound;
pub use people_excellence::PeopleExcellence;
pub use project_solutions::ProjectSolutions;
pub use social_environmental::SocialEnvironmental;
pub use technical_expertise::TechnicalExpertise;

use dioxus::prelude::*;

/// Brand arch that overlaps the bottom edge of every hero
#[component]
fn BottomIcon() -> Element {
    rsx! {
        div { class: "bottom-icon",
            img { src: "/images/PMDEIcon.svg", alt: "Arch" }
        }
    }
}
