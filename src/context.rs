//! Site configuration context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(crate::site_config);
//!
//! // In child components
//! let config = use_site_config();
//! let interval = config.rotation.hero_interval_ms;
//! ```

use dioxus::prelude::*;
use pmde_core::SiteConfig;

/// Hook to access the site configuration provided by `App`.
pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>()
}
