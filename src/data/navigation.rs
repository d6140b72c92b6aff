use crate::app::Route;

pub const LINKEDIN_URL: &str = "https://www.linkedin.com/company/pmde/";
pub const PRIVACY_POLICY_PATH: &str = "/privacy-policy";

/// One link in the site navigation
#[derive(Clone, PartialEq, Debug)]
pub struct NavEntry {
    pub label: &'static str,
    pub route: Route,
}

impl NavEntry {
    fn new(label: &'static str, route: Route) -> Self {
        Self { label, route }
    }
}

/// Top-level links, in header order. Services sit in their own dropdown.
pub fn primary_nav() -> Vec<NavEntry> {
    vec![
        NavEntry::new("Home", Route::Home {}),
        NavEntry::new("About Us", Route::AboutUs {}),
        NavEntry::new("Insights", Route::Insights {}),
        NavEntry::new("Contact", Route::Contact {}),
    ]
}

pub fn service_nav() -> Vec<NavEntry> {
    vec![
        NavEntry::new("Corporate Advisory", Route::CorporateAdvisory {}),
        NavEntry::new("Technical Expertise", Route::TechnicalExpertise {}),
        NavEntry::new("Project Management and Execution", Route::ProjectSolutions {}),
        NavEntry::new("Social and Environmental Solutions", Route::SocialEnvironmental {}),
        NavEntry::new("People Excellence", Route::PeopleExcellence {}),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::service_slides;

    #[test]
    fn service_dropdown_matches_service_slides() {
        let nav: Vec<String> = service_nav().iter().map(|e| e.route.to_string()).collect();
        let slides: Vec<String> = service_slides().into_iter().map(|s| s.link).collect();
        assert_eq!(nav, slides);
    }

    #[test]
    fn contact_is_last_primary_link() {
        let nav = primary_nav();
        assert_eq!(nav.last().map(|e| e.route.to_string()), Some("/contact".to_string()));
    }
}
