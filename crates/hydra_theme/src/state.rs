//! Theme customizer state
//!
//! `ThemeCustomizer` is owned by the single UI context hosting the theming
//! panel. Setters validate their input, so derivation never sees a malformed
//! color or an out-of-domain number.
//! - Every effective change sets the repaint flag and calls the redraw callback
//! - `css_overrides()` recomputes from the current values on each call

use tracing::debug;

use crate::color::HexColor;
use crate::config::CustomizerConfig;
use crate::error::ThemeError;
use crate::overrides::{css_overrides, CssOverrides};
use crate::presets::{PresetStore, ThemePreset, DEFAULT_STORAGE_KEY};
use crate::storage::{KeyValueStore, NullStore};
use crate::theme::{check_non_negative, check_positive, ThemeField, ThemeValues};
use crate::tokens::ShadowLevel;

/// Theme inputs, saved presets and change notification
#[derive(Debug)]
pub struct ThemeCustomizer {
    values: ThemeValues,
    presets: PresetStore,
    is_open: bool,
    needs_repaint: bool,
    redraw: Option<fn()>,
}

impl ThemeCustomizer {
    /// Create a customizer backed by `storage`, loading any saved presets
    pub fn new(storage: Box<dyn KeyValueStore>) -> Self {
        Self::with_storage_key(DEFAULT_STORAGE_KEY, storage)
    }

    pub fn with_storage_key(key: impl Into<String>, storage: Box<dyn KeyValueStore>) -> Self {
        Self {
            values: ThemeValues::default(),
            presets: PresetStore::open(key, storage),
            is_open: false,
            needs_repaint: false,
            redraw: None,
        }
    }

    /// Create a customizer with no durable storage
    pub fn in_memory() -> Self {
        Self::new(Box::new(NullStore))
    }

    pub fn from_config(config: &CustomizerConfig) -> Self {
        Self::with_storage_key(config.storage_key.clone(), config.store.open())
    }

    /// Register the function that asks the host to re-apply overrides
    pub fn set_redraw_callback(&mut self, callback: fn()) {
        self.redraw = Some(callback);
    }

    // ========== Values ==========

    pub fn values(&self) -> &ThemeValues {
        &self.values
    }

    pub fn primary_color(&self) -> &HexColor {
        &self.values.primary_color
    }

    pub fn surface_color(&self) -> &HexColor {
        &self.values.surface_color
    }

    pub fn border_radius(&self) -> f64 {
        self.values.border_radius
    }

    pub fn font_size(&self) -> f64 {
        self.values.font_size
    }

    pub fn shadow(&self) -> ShadowLevel {
        self.values.shadow
    }

    pub fn border_width(&self) -> f64 {
        self.values.border_width
    }

    pub fn set_primary_color(&mut self, hex: &str) -> Result<(), ThemeError> {
        let color = HexColor::parse(hex)?;
        self.update(ThemeField::PrimaryColor, |v| {
            v.primary_color = color;
        });
        Ok(())
    }

    pub fn set_surface_color(&mut self, hex: &str) -> Result<(), ThemeError> {
        let color = HexColor::parse(hex)?;
        self.update(ThemeField::SurfaceColor, |v| {
            v.surface_color = color;
        });
        Ok(())
    }

    pub fn set_border_radius(&mut self, px: f64) -> Result<(), ThemeError> {
        let px = check_non_negative(ThemeField::BorderRadius, px)?;
        self.update(ThemeField::BorderRadius, |v| v.border_radius = px);
        Ok(())
    }

    pub fn set_font_size(&mut self, scale: f64) -> Result<(), ThemeError> {
        check_positive(ThemeField::FontSize, scale)?;
        self.update(ThemeField::FontSize, |v| v.font_size = scale);
        Ok(())
    }

    pub fn set_shadow(&mut self, level: ShadowLevel) {
        self.update(ThemeField::Shadow, |v| v.shadow = level);
    }

    pub fn set_border_width(&mut self, px: f64) -> Result<(), ThemeError> {
        let px = check_non_negative(ThemeField::BorderWidth, px)?;
        self.update(ThemeField::BorderWidth, |v| v.border_width = px);
        Ok(())
    }

    /// Restore every field to its default
    pub fn reset(&mut self) {
        debug!("ThemeCustomizer::reset");
        self.replace_values(ThemeValues::default());
    }

    pub fn is_customized(&self) -> bool {
        self.values.is_customized()
    }

    pub fn is_dark_surface(&self) -> bool {
        self.values.is_dark_surface()
    }

    /// CSS variables to apply on the scoping element
    pub fn css_overrides(&self) -> CssOverrides {
        css_overrides(&self.values)
    }

    // ========== Presets ==========

    pub fn saved_presets(&self) -> &[ThemePreset] {
        self.presets.presets()
    }

    /// Snapshot the current values under `name` and persist the list
    pub fn save_preset(&mut self, name: impl Into<String>) -> ThemePreset {
        let preset = ThemePreset::new(name, self.values.clone());
        self.presets.add(preset)
    }

    /// Overwrite every field with the preset's values.
    ///
    /// A preset holding an out-of-domain number is rejected and the current
    /// values are left as they were.
    pub fn load_preset(&mut self, preset: &ThemePreset) -> Result<(), ThemeError> {
        debug!("ThemeCustomizer::load_preset - `{}`", preset.name);
        let values = preset.values.checked()?;
        self.replace_values(values);
        Ok(())
    }

    pub fn delete_preset(&mut self, id: &str) {
        self.presets.remove(id);
    }

    // ========== Panel ==========

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn set_open(&mut self, open: bool) {
        self.is_open = open;
    }

    pub fn toggle_open(&mut self) {
        self.is_open = !self.is_open;
    }

    // ========== Dirty Flag ==========

    /// Check if values changed since the host last applied overrides
    pub fn needs_repaint(&self) -> bool {
        self.needs_repaint
    }

    pub fn clear_repaint(&mut self) {
        self.needs_repaint = false;
    }

    fn update(&mut self, field: ThemeField, apply: impl FnOnce(&mut ThemeValues)) {
        let mut next = self.values.clone();
        apply(&mut next);
        if next == self.values && same_text(&next, &self.values) {
            return;
        }
        debug!("ThemeCustomizer: {field} changed");
        self.values = next;
        self.mark_changed();
    }

    fn replace_values(&mut self, values: ThemeValues) {
        if values == self.values && same_text(&values, &self.values) {
            return;
        }
        self.values = values;
        self.mark_changed();
    }

    fn mark_changed(&mut self) {
        self.needs_repaint = true;
        if let Some(redraw) = self.redraw {
            redraw();
        }
    }
}

impl Default for ThemeCustomizer {
    fn default() -> Self {
        Self::in_memory()
    }
}

/// Colors compare by value; a respelling still has to be stored.
fn same_text(a: &ThemeValues, b: &ThemeValues) -> bool {
    a.primary_color.as_str() == b.primary_color.as_str()
        && a.surface_color.as_str() == b.surface_color.as_str()
}
