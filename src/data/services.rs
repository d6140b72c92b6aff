use pmde_core::ServiceSlide;

fn slide(title: &str, description: &str, icon: &str, illustration: &str, link: &str) -> ServiceSlide {
    ServiceSlide {
        title: title.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        background_illustration: illustration.to_string(),
        button_text: "EXPLORE SOLUTIONS".to_string(),
        link: link.to_string(),
    }
}

/// Service lines shown on the home page
pub fn service_slides() -> Vec<ServiceSlide> {
    vec![
        slide(
            "Corporate Advisory",
            "We provide independent advisory services, providing expert insights to support funding decisions for banks, equity firms, stock exchanges, funds, and legal firms.",
            "/images/Page-1.svg",
            "/images/bg-illustration1.svg",
            "/corporate-advisory",
        ),
        slide(
            "Technical Expertise",
            "Our geoscience, engineering, mining, and processing specialists optimise mineral projects, delivering technical solutions that enhance project viability and efficiency.",
            "/images/Group 1221.svg",
            "/images/bg-illustration2.svg",
            "/technical-expertise",
        ),
        slide(
            "Project Management and Execution",
            "We offer project management and turnkey solutions, ensuring seamless execution, from infrastructure development to site closure and rehabilitation.",
            "/images/content-management_9130095.svg",
            "/images/bg-illustration3.svg",
            "/project-solutions",
        ),
        slide(
            "Social and Environmental Solutions",
            "We help companies achieve their Sustainability Development Goals and maintain compliance with their Environmental and Social licence to operate.",
            "/images/Group 1229.svg",
            "/images/bg-illustration3.svg",
            "/social-and-environmental-solutions",
        ),
        slide(
            "People Xcellence",
            "Through tailored education, training, and industry networking, we equip professionals and learners with the skills needed to thrive in the minerals industry.",
            "/images/g5631.svg",
            "/images/bg-illustration3.svg",
            "/people-excellence",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Route;

    #[test]
    fn five_service_lines() {
        assert_eq!(service_slides().len(), 5);
    }

    #[test]
    fn every_slide_links_to_a_page() {
        for slide in service_slides() {
            let route: Route = slide.link.parse().unwrap_or_else(|_| panic!("{}", slide.link));
            assert!(!matches!(route, Route::NotFound { .. }), "{}", slide.link);
        }
    }
}
