//! Site chrome: header, footer and the layout that wraps every page.

mod footer;
mod layout;
mod nav_header;

pub use footer::Footer;
pub use layout::SiteLayout;
pub use nav_header::NavHeader;
