use dioxus::prelude::*;

use crate::components::SiteLayout;
use crate::pages::{
    AboutUs, Contact, CorporateAdvisory, Home, Insights, NotFound, PeopleExcellence,
    ProjectSolutions, SocialEnvironmental, TechnicalExpertise,
};
use crate::theme::{palette_css, GLOBAL_STYLES};

/// Application routes.
///
/// - `/` - Home with the hero carousel, services and testimonials
/// - `/services` - Redirects home; the service pages have their own paths
/// - anything unmatched renders the not-found page
#[derive(Clone, Routable, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(SiteLayout)]
        #[redirect("/services", || Route::Home {})]
        #[route("/")]
        Home {},
        #[route("/about-us")]
        AboutUs {},
        #[route("/corporate-advisory")]
        CorporateAdvisory {},
        #[route("/technical-expertise")]
        TechnicalExpertise {},
        #[route("/project-solutions")]
        ProjectSolutions {},
        #[route("/social-and-environmental-solutions")]
        SocialEnvironmental {},
        #[route("/people-excellence")]
        PeopleExcellence {},
        #[route("/insights")]
        Insights {},
        #[route("/contact")]
        Contact {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

/// Root application component.
///
/// Provides global styles, site configuration and routing.
#[component]
pub fn App() -> Element {
    use_context_provider(crate::site_config);

    rsx! {
        style { {palette_css()} }
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_pages_have_kebab_case_paths() {
        assert_eq!(Route::SocialEnvironmental {}.to_string(), "/social-and-environmental-solutions");
        assert_eq!(Route::AboutUs {}.to_string(), "/about-us");
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        let route: Route = "/no/such/page".parse().unwrap();
        assert!(matches!(route, Route::NotFound { .. }));
    }
}
