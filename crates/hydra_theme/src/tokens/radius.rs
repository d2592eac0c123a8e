//! Radius tokens for theming

/// Semantic radius token keys
///
/// The configured radius is the `Lg` anchor; every other step is a fixed
/// multiple of it.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum RadiusToken {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
    Xl2,
    Xl3,
}

impl RadiusToken {
    pub const ALL: [RadiusToken; 7] = [
        RadiusToken::Xs,
        RadiusToken::Sm,
        RadiusToken::Md,
        RadiusToken::Lg,
        RadiusToken::Xl,
        RadiusToken::Xl2,
        RadiusToken::Xl3,
    ];

    pub fn var_name(self) -> &'static str {
        match self {
            Self::Xs => "--radius-xs",
            Self::Sm => "--radius-sm",
            Self::Md => "--radius-md",
            Self::Lg => "--radius-lg",
            Self::Xl => "--radius-xl",
            Self::Xl2 => "--radius-2xl",
            Self::Xl3 => "--radius-3xl",
        }
    }

    /// Multiple of the `lg` anchor
    pub fn factor(self) -> f64 {
        match self {
            Self::Xs => 0.25,
            Self::Sm => 0.5,
            Self::Md => 0.75,
            Self::Lg => 1.0,
            Self::Xl => 1.5,
            Self::Xl2 => 2.0,
            Self::Xl3 => 3.0,
        }
    }

    /// Radius in pixels for a given anchor, never negative
    pub fn resolve(self, anchor: f64) -> f64 {
        (anchor * self.factor()).max(0.0)
    }
}
