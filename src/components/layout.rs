use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{Footer, NavHeader};

/// Header, routed page, footer
#[component]
pub fn SiteLayout() -> Element {
    rsx! {
        NavHeader {}
        main { class: "site-main", Outlet::<Route> {} }
        Footer {}
    }
}
