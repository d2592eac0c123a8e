//! Shadow tokens for theming

use std::fmt;

use serde::{Deserialize, Serialize};

/// Elevation preset picked in the customizer panel
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShadowLevel {
    None,
    Subtle,
    #[default]
    Default,
    Medium,
    Strong,
}

impl ShadowLevel {
    pub fn all() -> &'static [ShadowLevel] {
        const LEVELS: [ShadowLevel; 5] = [
            ShadowLevel::None,
            ShadowLevel::Subtle,
            ShadowLevel::Default,
            ShadowLevel::Medium,
            ShadowLevel::Strong,
        ];
        &LEVELS
    }

    /// Stable id, also the serialized form
    pub fn id(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Subtle => "subtle",
            Self::Default => "default",
            Self::Medium => "medium",
            Self::Strong => "strong",
        }
    }

    /// Box-shadow values for every size at this level
    pub fn shadows(self) -> &'static ShadowSet {
        match self {
            Self::None => &NONE,
            Self::Subtle => &SUBTLE,
            Self::Default => &DEFAULT,
            Self::Medium => &MEDIUM,
            Self::Strong => &STRONG,
        }
    }
}

impl fmt::Display for ShadowLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Semantic shadow size keys
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ShadowSize {
    Xs,
    Sm,
    Default,
    Md,
    Lg,
    Xl,
}

impl ShadowSize {
    pub const ALL: [ShadowSize; 6] = [
        ShadowSize::Xs,
        ShadowSize::Sm,
        ShadowSize::Default,
        ShadowSize::Md,
        ShadowSize::Lg,
        ShadowSize::Xl,
    ];

    /// CSS custom property overridden for this size
    pub fn var_name(self) -> &'static str {
        match self {
            Self::Xs => "--shadow-xs",
            Self::Sm => "--shadow-sm",
            Self::Default => "--shadow",
            Self::Md => "--shadow-md",
            Self::Lg => "--shadow-lg",
            Self::Xl => "--shadow-xl",
        }
    }
}

/// One elevation level, as literal CSS `box-shadow` values
#[derive(Clone, Copy, Debug)]
pub struct ShadowSet {
    pub xs: &'static str,
    pub sm: &'static str,
    pub default: &'static str,
    pub md: &'static str,
    pub lg: &'static str,
    pub xl: &'static str,
}

impl ShadowSet {
    pub fn get(&self, size: ShadowSize) -> &'static str {
        match size {
            ShadowSize::Xs => self.xs,
            ShadowSize::Sm => self.sm,
            ShadowSize::Default => self.default,
            ShadowSize::Md => self.md,
            ShadowSize::Lg => self.lg,
            ShadowSize::Xl => self.xl,
        }
    }
}

const NONE: ShadowSet = ShadowSet {
    xs: "none",
    sm: "none",
    default: "none",
    md: "none",
    lg: "none",
    xl: "none",
};

const SUBTLE: ShadowSet = ShadowSet {
    xs: "0 1px 1px 0 rgb(0 0 0 / 0.02)",
    sm: "0 1px 2px 0 rgb(0 0 0 / 0.03)",
    default: "0 1px 2px 0 rgb(0 0 0 / 0.05)",
    md: "0 2px 4px -1px rgb(0 0 0 / 0.05)",
    lg: "0 4px 6px -2px rgb(0 0 0 / 0.05)",
    xl: "0 8px 12px -4px rgb(0 0 0 / 0.05)",
};

const DEFAULT: ShadowSet = ShadowSet {
    xs: "0 1px 2px 0 rgb(0 0 0 / 0.03)",
    sm: "0 1px 2px 0 rgb(0 0 0 / 0.05)",
    default: "0 1px 3px 0 rgb(0 0 0 / 0.1), 0 1px 2px -1px rgb(0 0 0 / 0.1)",
    md: "0 4px 6px -1px rgb(0 0 0 / 0.1), 0 2px 4px -2px rgb(0 0 0 / 0.1)",
    lg: "0 10px 15px -3px rgb(0 0 0 / 0.1), 0 4px 6px -4px rgb(0 0 0 / 0.1)",
    xl: "0 20px 25px -5px rgb(0 0 0 / 0.1), 0 8px 10px -6px rgb(0 0 0 / 0.1)",
};

const MEDIUM: ShadowSet = ShadowSet {
    xs: "0 1px 2px 0 rgb(0 0 0 / 0.05)",
    sm: "0 2px 4px 0 rgb(0 0 0 / 0.08)",
    default: "0 4px 6px -1px rgb(0 0 0 / 0.12), 0 2px 4px -2px rgb(0 0 0 / 0.08)",
    md: "0 6px 10px -2px rgb(0 0 0 / 0.12), 0 3px 6px -3px rgb(0 0 0 / 0.08)",
    lg: "0 14px 20px -4px rgb(0 0 0 / 0.12), 0 6px 8px -4px rgb(0 0 0 / 0.08)",
    xl: "0 24px 32px -6px rgb(0 0 0 / 0.14), 0 10px 14px -6px rgb(0 0 0 / 0.08)",
};

const STRONG: ShadowSet = ShadowSet {
    xs: "0 2px 4px 0 rgb(0 0 0 / 0.08)",
    sm: "0 3px 6px 0 rgb(0 0 0 / 0.12)",
    default: "0 6px 12px -2px rgb(0 0 0 / 0.16), 0 3px 6px -3px rgb(0 0 0 / 0.1)",
    md: "0 10px 16px -3px rgb(0 0 0 / 0.16), 0 4px 8px -4px rgb(0 0 0 / 0.1)",
    lg: "0 20px 28px -5px rgb(0 0 0 / 0.16), 0 8px 12px -6px rgb(0 0 0 / 0.1)",
    xl: "0 32px 40px -8px rgb(0 0 0 / 0.2), 0 14px 18px -8px rgb(0 0 0 / 0.1)",
};
