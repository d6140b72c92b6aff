use pmde_core::{HeroContent, HeroSlide};

pub fn home_hero_content() -> HeroContent {
    HeroContent::Slides(vec![
        HeroSlide::new(
            "Project Managers and Design Engineers (PMDE) provides sound solutions across the",
            "full spectrum of scientific, engineering, financial, and corporate consulting services.",
        ),
        HeroSlide::new("We support clients throughout", "every stage of the mining lifecycle."),
    ])
}
