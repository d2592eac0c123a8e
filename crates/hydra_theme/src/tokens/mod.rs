//! Design tokens driven by the customizer
//!
//! - Shadows (five elevation levels)
//! - Border radii
//! - Typography sizes
//! - Color swatches

mod radius;
mod shadow;
mod swatch;
mod typography;

pub use radius::*;
pub use shadow::*;
pub use swatch::*;
pub use typography::*;
