//! Built-in color swatches offered by the customizer panel

/// A labelled color choice
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Swatch {
    pub label: &'static str,
    pub value: &'static str,
}

const fn swatch(label: &'static str, value: &'static str) -> Swatch {
    Swatch { label, value }
}

/// Accent colors. The first entry is the theme default.
pub const ACCENT_SWATCHES: [Swatch; 8] = [
    swatch("Default", "#1A1F27"),
    swatch("Blue", "#2563eb"),
    swatch("Red", "#dc2626"),
    swatch("Green", "#16a34a"),
    swatch("Violet", "#7c3aed"),
    swatch("Orange", "#ea580c"),
    swatch("Teal", "#0d9488"),
    swatch("Pink", "#db2777"),
];

/// Surface colors. The first entry is the theme default.
pub const SURFACE_SWATCHES: [Swatch; 6] = [
    swatch("Default", "#F2F3EF"),
    swatch("White", "#FFFFFF"),
    swatch("Warm", "#FAF8F5"),
    swatch("Cool", "#F0F4F8"),
    swatch("Gray", "#F3F4F6"),
    swatch("Dark", "#1E1E2E"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::HexColor;
    use crate::theme::ThemeValues;

    #[test]
    fn swatches_are_valid_colors() {
        for s in ACCENT_SWATCHES.iter().chain(SURFACE_SWATCHES.iter()) {
            assert!(HexColor::parse(s.value).is_ok(), "{} is not a color", s.label);
        }
    }

    #[test]
    fn first_swatch_is_the_default() {
        let defaults = ThemeValues::default();
        assert_eq!(ACCENT_SWATCHES[0].value, defaults.primary_color.as_str());
        assert_eq!(SURFACE_SWATCHES[0].value, defaults.surface_color.as_str());
    }

    #[test]
    fn only_the_dark_surface_is_dark() {
        let dark: Vec<&str> = SURFACE_SWATCHES
            .iter()
            .filter(|s| HexColor::parse(s.value).unwrap().is_dark())
            .map(|s| s.label)
            .collect();
        assert_eq!(dark, vec!["Dark"]);
    }
}
