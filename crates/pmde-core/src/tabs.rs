//! Tab panel content model and selection logic.
//!
//! A [`TabSet`] pairs an ordered list of labels with a content record per
//! label. [`TabPanel`] tracks the active label and resolves it to something
//! renderable. Missing or unrecognized content degrades to a placeholder
//! message; nothing here returns an error to the renderer.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{SiteError, SiteResult};

/// Duration of the content fade-out (and fade-in) when the tab changes
pub const FADE_DURATION_MS: u64 = 300;

/// One icon in a tab's sub-item rotation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubItem {
    pub inactive_icon: String,
    pub active_icon: String,
    pub label: String,
}

impl SubItem {
    pub fn new(inactive_icon: &str, active_icon: &str, label: &str) -> Self {
        Self {
            inactive_icon: inactive_icon.to_string(),
            active_icon: active_icon.to_string(),
            label: label.to_string(),
        }
    }

    pub fn icon(&self, active: bool) -> &str {
        if active {
            &self.active_icon
        } else {
            &self.inactive_icon
        }
    }
}

/// The "standard" tab layout: image on the left, copy, sub-items and a CTA
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandardContent {
    #[serde(default)]
    pub logo_title: Option<String>,
    pub image: String,
    pub alt_text: String,
    pub heading: String,
    #[serde(default)]
    pub p1_strong: Option<String>,
    pub p1_regular: String,
    #[serde(default)]
    pub sub_heading: Option<String>,
    #[serde(default)]
    pub items: Vec<SubItem>,
    #[serde(default)]
    pub extra_image: Option<String>,
    pub cta_text: String,
    pub cta_href: String,
}

/// Content record, dispatched on its `type` field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TabContent {
    Standard(StandardContent),
    /// Any `type` this site has no layout for
    #[serde(other)]
    Unrecognized,
}

/// Ordered tab labels plus their content
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TabSet {
    pub labels: Vec<String>,
    pub contents: HashMap<String, TabContent>,
}

impl TabSet {
    pub fn new(labels: Vec<String>, contents: HashMap<String, TabContent>) -> Self {
        Self { labels, contents }
    }

    pub fn from_json(raw: &str) -> SiteResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Labels with no content record; these render a placeholder
    pub fn missing_labels(&self) -> Vec<&str> {
        self.labels
            .iter()
            .filter(|label| !self.contents.contains_key(label.as_str()))
            .map(String::as_str)
            .collect()
    }

    pub fn position(&self, label: &str) -> SiteResult<usize> {
        self.labels
            .iter()
            .position(|l| l == label)
            .ok_or_else(|| SiteError::UnknownTab(label.to_string()))
    }
}

/// What the active tab resolves to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedTab<'a> {
    Standard(&'a StandardContent),
    Missing { label: String },
    Unrecognized { label: String },
}

impl ResolvedTab<'_> {
    /// Placeholder text for degraded states
    pub fn placeholder(&self) -> Option<String> {
        match self {
            ResolvedTab::Standard(_) => None,
            ResolvedTab::Missing { label } => Some(format!("No content available for {label}.")),
            ResolvedTab::Unrecognized { label } => {
                Some(format!("Content format not recognized for {label}."))
            }
        }
    }
}

/// Active-tab state of one tab panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TabPanel {
    active: usize,
}

impl TabPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> usize {
        self.active
    }

    /// Switch tabs. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize, tabs: &TabSet) -> bool {
        if index >= tabs.len() {
            tracing::debug!(index, len = tabs.len(), "ignoring out-of-range tab");
            return false;
        }
        self.active = index;
        true
    }

    pub fn active_label<'a>(&self, tabs: &'a TabSet) -> Option<&'a str> {
        tabs.labels.get(self.active).map(String::as_str)
    }

    pub fn resolve<'a>(&self, tabs: &'a TabSet) -> ResolvedTab<'a> {
        let Some(label) = self.active_label(tabs) else {
            return ResolvedTab::Missing {
                label: String::new(),
            };
        };
        match tabs.contents.get(label) {
            None => ResolvedTab::Missing {
                label: label.to_string(),
            },
            Some(TabContent::Standard(content)) => ResolvedTab::Standard(content),
            Some(TabContent::Unrecognized) => {
                tracing::warn!(tab = label, "unknown tab content type");
                ResolvedTab::Unrecognized {
                    label: label.to_string(),
                }
            }
        }
    }
}

/// Something whose identity decides whether a content swap needs a fade
pub trait Identified {
    fn identity(&self) -> &str;
}

impl Identified for StandardContent {
    fn identity(&self) -> &str {
        &self.heading
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FadeState {
    #[default]
    FadeIn,
    FadeOut,
}

impl FadeState {
    pub fn class(&self) -> &'static str {
        match self {
            FadeState::FadeIn => "fade-in",
            FadeState::FadeOut => "fade-out",
        }
    }
}

/// Fade-out, swap, fade-in sequencing for changing content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentFade<T> {
    displayed: T,
    pending: Option<T>,
    state: FadeState,
}

impl<T: Identified + Clone> ContentFade<T> {
    pub fn new(initial: T) -> Self {
        Self {
            displayed: initial,
            pending: None,
            state: FadeState::FadeIn,
        }
    }

    pub fn displayed(&self) -> &T {
        &self.displayed
    }

    pub fn state(&self) -> FadeState {
        self.state
    }

    pub fn is_fading(&self) -> bool {
        self.pending.is_some()
    }

    /// Offer new content. Starts a fade-out (returns true) when its identity
    /// differs from what is on screen; a newer request replaces a pending one.
    pub fn request(&mut self, next: T) -> bool {
        if next.identity() == self.displayed.identity() {
            self.pending = None;
            self.state = FadeState::FadeIn;
            return false;
        }
        self.pending = Some(next);
        self.state = FadeState::FadeOut;
        true
    }

    /// Fade-out finished: swap in the pending content and fade back in.
    pub fn complete_fade_out(&mut self) -> bool {
        match self.pending.take() {
            Some(next) => {
                self.displayed = next;
                self.state = FadeState::FadeIn;
                true
            }
            None => false,
        }
    }
}
