//! Brand colour palette.
//!
//! Emitted as CSS custom properties so the stylesheet only refers to
//! `var(--name)`.

// === BRAND ===
pub const FOREST: &str = "#0f3d2e";
pub const FOREST_DEEP: &str = "#082a1f";
pub const LEAF: &str = "#3fa34d";
pub const LEAF_GLOW: &str = "rgba(63, 163, 77, 0.35)";
pub const SAND: &str = "#e8dcc4";

// === SURFACES ===
pub const PAPER: &str = "#ffffff";
pub const MIST: &str = "#f3f5f2";
pub const SHADOW: &str = "rgba(8, 42, 31, 0.6)";

// === TEXT ===
pub const INK: &str = "#1c2621";
pub const INK_MUTED: &str = "#5d6b63";
pub const TEXT_ON_DARK: &str = "#f5f7f4";

/// CSS custom property name and value, in declaration order
pub const PALETTE: &[(&str, &str)] = &[
    ("--forest", FOREST),
    ("--forest-deep", FOREST_DEEP),
    ("--leaf", LEAF),
    ("--leaf-glow", LEAF_GLOW),
    ("--sand", SAND),
    ("--paper", PAPER),
    ("--mist", MIST),
    ("--shadow", SHADOW),
    ("--ink", INK),
    ("--ink-muted", INK_MUTED),
    ("--text-on-dark", TEXT_ON_DARK),
];

/// `:root` block declaring every palette entry
pub fn palette_css() -> String {
    let mut css = String::from(":root {\n");
    for (name, value) in PALETTE {
        css.push_str(&format!("  {name}: {value};\n"));
    }
    css.push('}');
    css
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_declares_every_colour() {
        let css = palette_css();
        assert!(css.starts_with(":root {"));
        for (name, value) in PALETTE {
            assert!(css.contains(&format!("{name}: {value};")), "{name}");
        }
    }

    #[test]
    fn stylesheet_only_uses_declared_variables() {
        let styles = super::super::GLOBAL_STYLES;
        for used in styles.split("var(").skip(1) {
            let name = used.split(')').next().unwrap_or_default();
            assert!(PALETTE.iter().any(|(n, _)| *n == name), "undeclared {name}");
        }
    }
}
