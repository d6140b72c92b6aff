//! Button Components
//!
//! - CtaButton: call-to-action link ("Speak to an Expert", "Learn More")
//! - ArrowButton: previous/next control for carousels

use dioxus::prelude::*;

/// Call-to-action style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum CtaVariant {
    /// Solid brand-green pill
    #[default]
    Primary,
    /// Green border on a light section
    Outline,
    /// White pill for dark hero and carousel backgrounds
    Light,
}

impl CtaVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            CtaVariant::Primary => "cta-primary",
            CtaVariant::Outline => "cta-outline",
            CtaVariant::Light => "cta-light",
        }
    }
}

fn cta_class(variant: CtaVariant, extra: Option<&str>) -> String {
    match extra.filter(|c| !c.is_empty()) {
        Some(extra) => format!("cta {} {}", variant.class(), extra),
        None => format!("cta {}", variant.class()),
    }
}

/// Properties for the CtaButton component
#[derive(Clone, PartialEq, Props)]
pub struct CtaButtonProps {
    /// Route path or external URL
    #[props(into)]
    pub href: String,
    /// Button label
    pub children: Element,
    #[props(default)]
    pub variant: CtaVariant,
    /// Open in a new tab (external links)
    #[props(default = false)]
    pub new_tab: bool,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Call-to-action link styled as a button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     CtaButton { href: "/contact", "Speak to an Expert" }
/// }
/// ```
#[component]
pub fn CtaButton(props: CtaButtonProps) -> Element {
    let class = cta_class(props.variant, props.class.as_deref());

    rsx! {
        Link {
            class: "{class}",
            to: props.href.clone(),
            new_tab: props.new_tab,
            {props.children}
            span { class: "cta-arrow", "aria-hidden": "true", "→" }
        }
    }
}

/// Which way an arrow control points
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ArrowDirection {
    Previous,
    Next,
}

impl ArrowDirection {
    pub fn glyph(&self) -> &'static str {
        match self {
            ArrowDirection::Previous => "\u{2039}",
            ArrowDirection::Next => "\u{203A}",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ArrowDirection::Previous => "Previous slide",
            ArrowDirection::Next => "Next slide",
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            ArrowDirection::Previous => "carousel-arrow carousel-arrow-prev",
            ArrowDirection::Next => "carousel-arrow carousel-arrow-next",
        }
    }
}

/// Carousel arrow control
#[derive(Clone, PartialEq, Props)]
pub struct ArrowButtonProps {
    pub direction: ArrowDirection,
    pub onclick: EventHandler<()>,
    #[props(default = false)]
    pub disabled: bool,
}

#[component]
pub fn ArrowButton(props: ArrowButtonProps) -> Element {
    let direction = props.direction;

    rsx! {
        button {
            class: direction.class(),
            r#type: "button",
            "aria-label": direction.label(),
            disabled: props.disabled,
            onclick: move |_| props.onclick.call(()),
            "{direction.glyph()}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cta_variant_classes() {
        assert_eq!(CtaVariant::Primary.class(), "cta-primary");
        assert_eq!(CtaVariant::Outline.class(), "cta-outline");
        assert_eq!(CtaVariant::Light.class(), "cta-light");
    }

    #[test]
    fn cta_variant_default() {
        assert_eq!(CtaVariant::default(), CtaVariant::Primary);
    }

    #[test]
    fn cta_class_skips_empty_extra() {
        assert_eq!(cta_class(CtaVariant::Light, None), "cta cta-light");
        assert_eq!(cta_class(CtaVariant::Light, Some("")), "cta cta-light");
        assert_eq!(
            cta_class(CtaVariant::Outline, Some("services-cta")),
            "cta cta-outline services-cta"
        );
    }

    #[test]
    fn arrow_labels() {
        assert_eq!(ArrowDirection::Previous.label(), "Previous slide");
        assert!(ArrowDirection::Next.class().ends_with("carousel-arrow-next"));
    }
}
