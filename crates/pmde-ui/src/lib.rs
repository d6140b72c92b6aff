//! PMDE Site UI Components
//!
//! Dioxus components for the consultancy's marketing pages. Each component
//! is a thin shell over the state machines in `pmde-core`: it feeds pointer,
//! scroll, timer and click events in and renders the resulting state.
//!
//! ## Components
//!
//! - **ParallaxHero**: layered hero banner with pointer and scroll parallax
//! - **HeroCarousel**: hero with a fixed title and rotating sub-content
//! - **TestimonialCarousel**: directional quote carousel with arrows and dots
//! - **ServicesCarousel**: faded service-line carousel
//! - **TabPanel** / **StandardTabContent**: tabbed detail panels with a
//!   sub-item icon rotation
//!
//! ## Timers
//!
//! Every carousel owns its own timer task through [`hooks::use_rotation`].
//! The task belongs to the component scope, so unmounting cancels it.

pub mod components;
pub mod hooks;
pub mod timer;
pub mod viewport;

pub use components::*;
pub use hooks::{use_rotation, RotationHandle};
