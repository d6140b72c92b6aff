use pmde_core::{SiteResult, TabSet};

const CORPORATE_ADVISORY_JSON: &str = include_str!("corporate_advisory.json");

/// Advisory services tab set
pub fn corporate_advisory_tabs() -> SiteResult<TabSet> {
    let tabs = TabSet::from_json(CORPORATE_ADVISORY_JSON)?;
    for label in tabs.missing_labels() {
        tracing::warn!(tab = label, "advisory tab has no content");
    }
    Ok(tabs)
}

#[cfg(test)]
mod tests {
    use pmde_core::{ResolvedTab, TabContent, TabPanel};

    use super::*;

    #[test]
    fn every_advisory_tab_has_standard_content() {
        let tabs = corporate_advisory_tabs().unwrap();
        assert_eq!(tabs.len(), 6);
        assert!(tabs.missing_labels().is_empty());
        for label in &tabs.labels {
            assert!(
                matches!(tabs.contents.get(label), Some(TabContent::Standard(_))),
                "{label}"
            );
        }
    }

    #[test]
    fn valuations_uses_extra_image_instead_of_items() {
        let tabs = corporate_advisory_tabs().unwrap();
        let mut panel = TabPanel::new();
        panel.select(tabs.position("Valuations").unwrap(), &tabs);
        let ResolvedTab::Standard(content) = panel.resolve(&tabs) else {
            panic!("valuations should resolve");
        };
        assert!(content.items.is_empty());
        assert_eq!(content.extra_image.as_deref(), Some("/images/Group 3 logos.webp"));
    }

    #[test]
    fn due_diligence_lists_eight_factors() {
        let tabs = corporate_advisory_tabs().unwrap();
        let Some(TabContent::Standard(content)) = tabs.contents.get("Due Diligence") else {
            panic!("due diligence missing");
        };
        assert_eq!(content.items.len(), 8);
        assert_eq!(content.cta_href, "/contact");
    }
}
