//! Slide records for the carousels.

use serde::{Deserialize, Serialize};

/// A client quote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub text: String,
    pub name: String,
    pub job: String,
    pub company: String,
    #[serde(default)]
    pub corp: String,
}

impl Testimonial {
    /// "job, company (corp)", skipping empty parts
    pub fn attribution(&self) -> String {
        let mut out = String::new();
        if !self.job.is_empty() {
            out.push_str(&self.job);
            out.push_str(", ");
        }
        out.push_str(&self.company);
        if !self.corp.is_empty() {
            out.push_str(&format!(" ({})", self.corp));
        }
        out
    }
}

/// One service line in the services carousel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceSlide {
    pub title: String,
    pub description: String,
    pub icon: String,
    pub background_illustration: String,
    pub button_text: String,
    pub link: String,
}

/// Rotating part of a hero carousel; the title stays fixed
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HeroSlide {
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl HeroSlide {
    pub fn new(subtitle: &str, description: &str) -> Self {
        Self {
            subtitle: Some(subtitle.to_string()),
            description: Some(description.to_string()),
        }
    }
}

/// Hero content in any of the shapes pages pass it in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HeroContent {
    Text(String),
    Texts(Vec<String>),
    Slide(HeroSlide),
    Slides(Vec<HeroSlide>),
}

impl HeroContent {
    /// Normalize to a non-empty slide list. Plain strings become subtitles.
    pub fn into_slides(self) -> Vec<HeroSlide> {
        let slides = match self {
            HeroContent::Text(subtitle) => vec![HeroSlide {
                subtitle: Some(subtitle),
                description: None,
            }],
            HeroContent::Texts(texts) => texts
                .into_iter()
                .map(|subtitle| HeroSlide {
                    subtitle: Some(subtitle),
                    description: None,
                })
                .collect(),
            HeroContent::Slide(slide) => vec![slide],
            HeroContent::Slides(slides) => slides,
        };
        if slides.is_empty() {
            vec![HeroSlide::default()]
        } else {
            slides
        }
    }
}
