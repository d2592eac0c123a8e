//! The six customizable theme inputs

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::{HexColor, Rgb};
use crate::error::ThemeError;
use crate::tokens::ShadowLevel;

pub const DEFAULT_PRIMARY_COLOR: Rgb = Rgb::from_hex(0x1A1F27);
pub const DEFAULT_SURFACE_COLOR: Rgb = Rgb::from_hex(0xF2F3EF);
pub const DEFAULT_BORDER_RADIUS: f64 = 8.0;
pub const DEFAULT_FONT_SIZE: f64 = 1.0;
pub const DEFAULT_SHADOW: ShadowLevel = ShadowLevel::Default;
pub const DEFAULT_BORDER_WIDTH: f64 = 1.0;

/// Field keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ThemeField {
    PrimaryColor,
    SurfaceColor,
    BorderRadius,
    FontSize,
    Shadow,
    BorderWidth,
}

impl ThemeField {
    pub const ALL: [ThemeField; 6] = [
        ThemeField::PrimaryColor,
        ThemeField::SurfaceColor,
        ThemeField::BorderRadius,
        ThemeField::FontSize,
        ThemeField::Shadow,
        ThemeField::BorderWidth,
    ];

    /// Name used in the persisted preset records
    pub fn key(self) -> &'static str {
        match self {
            Self::PrimaryColor => "primaryColor",
            Self::SurfaceColor => "surfaceColor",
            Self::BorderRadius => "borderRadius",
            Self::FontSize => "fontSize",
            Self::Shadow => "shadow",
            Self::BorderWidth => "borderWidth",
        }
    }
}

impl fmt::Display for ThemeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Current values of every customizable input
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeValues {
    pub primary_color: HexColor,
    pub surface_color: HexColor,
    pub border_radius: f64,
    pub font_size: f64,
    pub shadow: ShadowLevel,
    pub border_width: f64,
}

impl ThemeValues {
    /// Whether `field` holds something other than its default.
    ///
    /// Every override rule and the customized indicator go through here.
    pub fn differs_from_default(&self, field: ThemeField) -> bool {
        match field {
            ThemeField::PrimaryColor => self.primary_color.rgb() != DEFAULT_PRIMARY_COLOR,
            ThemeField::SurfaceColor => self.surface_color.rgb() != DEFAULT_SURFACE_COLOR,
            ThemeField::BorderRadius => self.border_radius != DEFAULT_BORDER_RADIUS,
            ThemeField::FontSize => self.font_size != DEFAULT_FONT_SIZE,
            ThemeField::Shadow => self.shadow != DEFAULT_SHADOW,
            ThemeField::BorderWidth => self.border_width != DEFAULT_BORDER_WIDTH,
        }
    }

    pub fn is_customized(&self) -> bool {
        ThemeField::ALL
            .iter()
            .any(|field| self.differs_from_default(*field))
    }

    pub fn is_dark_surface(&self) -> bool {
        self.surface_color.is_dark()
    }

    /// Check the numeric fields against their domains
    pub fn validate(&self) -> Result<(), ThemeError> {
        check_non_negative(ThemeField::BorderRadius, self.border_radius)?;
        check_positive(ThemeField::FontSize, self.font_size)?;
        check_non_negative(ThemeField::BorderWidth, self.border_width)?;
        Ok(())
    }

    /// Validate, folding `-0.0` into `0.0` so it never reaches a CSS value
    pub(crate) fn checked(&self) -> Result<Self, ThemeError> {
        Ok(Self {
            border_radius: check_non_negative(ThemeField::BorderRadius, self.border_radius)?,
            font_size: check_positive(ThemeField::FontSize, self.font_size)?,
            border_width: check_non_negative(ThemeField::BorderWidth, self.border_width)?,
            ..self.clone()
        })
    }
}

impl Default for ThemeValues {
    fn default() -> Self {
        Self {
            primary_color: HexColor::from_rgb(DEFAULT_PRIMARY_COLOR),
            surface_color: HexColor::from_rgb(DEFAULT_SURFACE_COLOR),
            border_radius: DEFAULT_BORDER_RADIUS,
            font_size: DEFAULT_FONT_SIZE,
            shadow: DEFAULT_SHADOW,
            border_width: DEFAULT_BORDER_WIDTH,
        }
    }
}

/// Returns `value` with a negative zero normalised to `0.0`
pub(crate) fn check_non_negative(field: ThemeField, value: f64) -> Result<f64, ThemeError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value + 0.0)
    } else {
        Err(ThemeError::OutOfRange {
            field,
            value,
            expected: "a finite number >= 0",
        })
    }
}

pub(crate) fn check_positive(field: ThemeField, value: f64) -> Result<f64, ThemeError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ThemeError::OutOfRange {
            field,
            value,
            expected: "a finite number > 0",
        })
    }
}
