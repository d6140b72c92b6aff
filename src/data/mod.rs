//! Page copy and imagery.
//!
//! Tab sets live in JSON next to this module; carousel slides are built
//! in code.

mod corporate_advisory;
mod home;
mod navigation;
mod services;
mod testimonials;

pub use corporate_advisory::corporate_advisory_tabs;
pub use home::home_hero_content;
pub use navigation::{primary_nav, service_nav, NavEntry, LINKEDIN_URL, PRIVACY_POLICY_PATH};
pub use services::service_slides;
pub use testimonials::testimonials;
