//! CSS custom property overrides derived from [`ThemeValues`]
//!
//! Each rule is keyed by the field that gates it. A rule runs only when its
//! field differs from the default, so an absent key means "keep the
//! stylesheet's base value".

use indexmap::IndexMap;

use crate::color::{darken, lighten};
use crate::theme::{ThemeField, ThemeValues};
use crate::tokens::{RadiusToken, ShadowSize, TextSize};

/// Ink and accent used on dark surfaces when the accent was left alone
const DARK_SURFACE_INK: [(&str, &str); 5] = [
    ("--color-ink", "#F2F3EF"),
    ("--color-ink-muted", "#A0A7B2"),
    ("--color-ink-faint", "#6B7280"),
    ("--color-accent", "#F2F3EF"),
    ("--color-accent-hover", "#D4D5D1"),
];

/// Surface raised above a light background
const LIGHT_SURFACE_RAISED: &str = "#FFFFFF";

/// Ordered map of CSS variable name to value
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CssOverrides {
    vars: IndexMap<String, String>,
}

impl CssOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.vars.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.into_iter()
    }

    /// Render as an inline `style` attribute body, e.g. `--radius-lg: 16px`
    pub fn to_inline_style(&self) -> String {
        self.iter()
            .map(|(name, value)| format!("{name}: {value}"))
            .collect::<Vec<_>>()
            .join("; ")
    }

    pub fn into_inner(self) -> IndexMap<String, String> {
        self.vars
    }
}

type VarPair<'a> = (&'a str, &'a str);
type VarIter<'a> = std::iter::Map<
    indexmap::map::Iter<'a, String, String>,
    fn((&'a String, &'a String)) -> VarPair<'a>,
>;

fn as_var_pair<'a>((name, value): (&'a String, &'a String)) -> VarPair<'a> {
    (name.as_str(), value.as_str())
}

impl<'a> IntoIterator for &'a CssOverrides {
    type Item = VarPair<'a>;
    type IntoIter = VarIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.vars.iter().map(as_var_pair as fn(_) -> _)
    }
}

struct OverrideRule {
    field: ThemeField,
    derive: fn(&ThemeValues, &mut CssOverrides),
}

const RULES: [OverrideRule; 6] = [
    OverrideRule {
        field: ThemeField::PrimaryColor,
        derive: primary_color_vars,
    },
    OverrideRule {
        field: ThemeField::SurfaceColor,
        derive: surface_color_vars,
    },
    OverrideRule {
        field: ThemeField::BorderRadius,
        derive: radius_vars,
    },
    OverrideRule {
        field: ThemeField::FontSize,
        derive: text_size_vars,
    },
    OverrideRule {
        field: ThemeField::Shadow,
        derive: shadow_vars,
    },
    OverrideRule {
        field: ThemeField::BorderWidth,
        derive: border_width_vars,
    },
];

/// Compute the overrides for `values`. Pure; same input, same map.
pub fn css_overrides(values: &ThemeValues) -> CssOverrides {
    let mut vars = CssOverrides::new();
    for rule in &RULES {
        if values.differs_from_default(rule.field) {
            (rule.derive)(values, &mut vars);
        }
    }
    tracing::trace!("derived {} css overrides", vars.len());
    vars
}

fn primary_color_vars(values: &ThemeValues, vars: &mut CssOverrides) {
    let primary = &values.primary_color;
    vars.insert("--color-ink", primary.as_str());
    vars.insert("--color-accent", primary.as_str());
    vars.insert("--color-accent-hover", darken(primary, 0.15));
    vars.insert("--color-ink-muted", lighten(primary, 0.45));
    vars.insert("--color-ink-faint", lighten(primary, 0.65));
}

fn surface_color_vars(values: &ThemeValues, vars: &mut CssOverrides) {
    let surface = &values.surface_color;
    let dark = surface.is_dark();

    vars.insert("--color-surface", surface.as_str());
    if dark {
        vars.insert("--color-surface-raised", lighten(surface, 0.08));
        vars.insert("--color-surface-muted", lighten(surface, 0.05));
    } else {
        vars.insert("--color-surface-raised", LIGHT_SURFACE_RAISED);
        vars.insert("--color-surface-muted", darken(surface, 0.04));
    }

    if !dark {
        return;
    }

    // Keyed off surface darkness: the default ink would vanish on a dark background.
    if !values.differs_from_default(ThemeField::PrimaryColor) {
        for (name, value) in DARK_SURFACE_INK {
            vars.insert(name, value);
        }
    }

    vars.insert("--color-border-subtle", lighten(surface, 0.15));
    vars.insert("--color-border", lighten(surface, 0.25));
}

fn radius_vars(values: &ThemeValues, vars: &mut CssOverrides) {
    for token in RadiusToken::ALL {
        vars.insert(
            token.var_name(),
            format!("{}px", token.resolve(values.border_radius)),
        );
    }
}

fn text_size_vars(values: &ThemeValues, vars: &mut CssOverrides) {
    for size in TextSize::ALL {
        vars.insert(
            size.var_name(),
            format!("{:.4}rem", size.base_rem() * values.font_size),
        );
    }
}

fn shadow_vars(values: &ThemeValues, vars: &mut CssOverrides) {
    let set = values.shadow.shadows();
    for size in ShadowSize::ALL {
        vars.insert(size.var_name(), set.get(size));
    }
}

fn border_width_vars(values: &ThemeValues, vars: &mut CssOverrides) {
    vars.insert("--border-width", format!("{}px", values.border_width));
}
