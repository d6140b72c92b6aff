use dioxus::prelude::*;
use pmde_ui::CtaButton;

fn requested_path(segments: &[String]) -> String {
    format!("/{}", segments.join("/"))
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = requested_path(&segments);
    tracing::debug!(path = %path, "no route matched");

    rsx! {
        section { class: "not-found",
            h1 { "404" }
            p { "We couldn't find " code { "{path}" } "." }
            CtaButton { href: "/", "Back to home" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_is_rebuilt_from_segments() {
        assert_eq!(requested_path(&["old".to_string(), "page".to_string()]), "/old/page");
        assert_eq!(requested_path(&[]), "/");
    }
}
