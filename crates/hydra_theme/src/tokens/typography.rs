//! Typography tokens for theming

/// Named text sizes overridden by the font scale
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum TextSize {
    Xs,
    Sm,
    Base,
    Lg,
    Xl,
    Xl2,
}

impl TextSize {
    pub const ALL: [TextSize; 6] = [
        TextSize::Xs,
        TextSize::Sm,
        TextSize::Base,
        TextSize::Lg,
        TextSize::Xl,
        TextSize::Xl2,
    ];

    pub fn var_name(self) -> &'static str {
        match self {
            Self::Xs => "--text-xs",
            Self::Sm => "--text-sm",
            Self::Base => "--text-base",
            Self::Lg => "--text-lg",
            Self::Xl => "--text-xl",
            Self::Xl2 => "--text-2xl",
        }
    }

    /// Unscaled size in rem
    pub fn base_rem(self) -> f64 {
        match self {
            Self::Xs => 0.75,
            Self::Sm => 0.875,
            Self::Base => 1.0,
            Self::Lg => 1.125,
            Self::Xl => 1.25,
            Self::Xl2 => 1.5,
        }
    }
}
