//! Hydra Theme Customizer
//!
//! The engine behind the component catalog's theming panel: six user inputs
//! in, a map of CSS custom properties out, plus named presets persisted
//! through a pluggable key-value store.
//!
//! # Quick Start
//!
//! ```rust
//! use hydra_theme::{MemoryStore, ShadowLevel, ThemeCustomizer};
//!
//! let mut theme = ThemeCustomizer::new(Box::new(MemoryStore::new()));
//! assert!(theme.css_overrides().is_empty());
//!
//! theme.set_border_radius(16.0).unwrap();
//! theme.set_shadow(ShadowLevel::Strong);
//!
//! let vars = theme.css_overrides();
//! assert_eq!(vars.get("--radius-lg"), Some("16px"));
//!
//! let preset = theme.save_preset("Rounded");
//! theme.reset();
//! theme.load_preset(&preset).unwrap();
//! assert_eq!(theme.border_radius(), 16.0);
//! ```
//!
//! # Overrides
//!
//! Each input gates one group of variables, emitted only when the input
//! differs from its default:
//!
//! - **Primary color**: `--color-ink`, `--color-accent` and their hover/muted/faint shades
//! - **Surface color**: `--color-surface*`; dark surfaces also lighten borders
//!   and, if the accent is untouched, switch ink to light-on-dark
//! - **Border radius**: `--radius-xs` .. `--radius-3xl`, anchored at `lg`
//! - **Font size**: `--text-xs` .. `--text-2xl`, scaled
//! - **Shadow**: `--shadow-xs` .. `--shadow-xl` from the elevation table
//! - **Border width**: `--border-width`
//!
//! # Storage
//!
//! Presets are written as JSON under a single key. Use [`NullStore`] when the
//! host has no durable storage, [`MemoryStore`] for tests, or [`FileStore`]
//! for desktop hosts. [`CustomizerConfig`] picks one from TOML.

pub mod color;
pub mod config;
pub mod error;
pub mod overrides;
pub mod presets;
pub mod state;
pub mod storage;
pub mod theme;
pub mod tokens;

// Re-export commonly used types
pub use color::{darken, hex_to_rgb, lighten, rgb_to_hex, HexColor, Rgb};
pub use config::{CustomizerConfig, StoreConfig};
pub use error::{ColorError, StorageError, ThemeError};
pub use overrides::{css_overrides, CssOverrides};
pub use presets::{PresetStore, ThemePreset, DEFAULT_STORAGE_KEY};
pub use state::ThemeCustomizer;
pub use storage::{FileStore, KeyValueStore, MemoryStore, NullStore};
pub use theme::{ThemeField, ThemeValues};
pub use tokens::*;
