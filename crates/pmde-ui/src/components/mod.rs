//! Reusable site components
//!
//! Heroes, carousels and tab panels shared by the content pages.

mod button;
mod hero_carousel;
mod parallax_hero;
mod services_carousel;
mod standard_tab_content;
mod tab_panel;
mod testimonial_carousel;

pub use button::*;
pub use hero_carousel::*;
pub use parallax_hero::*;
pub use services_carousel::*;
pub use standard_tab_content::*;
pub use tab_panel::*;
pub use testimonial_carousel::*;
