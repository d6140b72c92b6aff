//! PMDE Site Core Library
//!
//! Renderer-independent logic behind the site's animated components.
//!
//! ## Overview
//!
//! - [`parallax`]: pointer and scroll offsets for layered hero banners
//! - [`rotation`]: carousel state machine (idle, transitioning out, in)
//! - [`timeline`]: tick and transition deadlines driving a rotation
//! - [`tabs`]: tab sets, active-tab resolution and content fades
//! - [`slides`]: testimonial, service and hero slide records
//! - [`config`]: site configuration file
//!
//! ## Quick Start
//!
//! ```
//! use pmde_core::{RotationCommand, RotationTiming, Timeline};
//!
//! // Seven testimonials, manual navigation with a 300ms fade
//! let mut carousel = Timeline::new(7, RotationTiming::faded(300), 0);
//! carousel.apply(RotationCommand::Previous, 0);
//! carousel.advance_to(600);
//! assert_eq!(carousel.index(), 6);
//! ```

pub mod config;
pub mod error;
pub mod parallax;
pub mod rotation;
pub mod slides;
pub mod tabs;
pub mod timeline;

// Re-exports
pub use config::{ParallaxConfig, RotationConfig, SiteConfig};
pub use error::{SiteError, SiteResult};
pub use parallax::{
    Entrance, Extent, HeroMotion, Layer, Offset, ParallaxSettings, Point, ScrollDirectionX,
    ScrollDirectionY, SlideDirection, TextAlign, TextPosition,
};
pub use rotation::{Direction, Phase, Rotation, Transition};
pub use slides::{HeroContent, HeroSlide, ServiceSlide, Testimonial};
pub use tabs::{
    ContentFade, FadeState, Identified, ResolvedTab, StandardContent, SubItem, TabContent,
    TabPanel, TabSet,
};
pub use timeline::{RotationCommand, RotationTiming, Timeline};
