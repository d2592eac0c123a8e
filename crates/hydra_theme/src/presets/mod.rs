//! User-saved theme presets and their persisted layout.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::StorageError;
use crate::storage::KeyValueStore;
use crate::theme::ThemeValues;

/// Storage key the presets live under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "hydra-theme-presets";

/// Version written into the persisted envelope.
pub const PRESET_SCHEMA_VERSION: u32 = 1;

/// A named snapshot of every theme input.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThemePreset {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub values: ThemeValues,
}

impl ThemePreset {
    /// Snapshot `values` under a freshly generated id.
    pub fn new(name: impl Into<String>, values: ThemeValues) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            values,
        }
    }
}

#[derive(Serialize)]
struct PresetEnvelopeRef<'a> {
    version: u32,
    presets: &'a [ThemePreset],
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredPresets {
    Versioned { version: u32, presets: Vec<ThemePreset> },
    // Layout written before the envelope existed.
    Legacy(Vec<ThemePreset>),
}

/// Serialize presets into the persisted envelope.
pub fn encode_presets(presets: &[ThemePreset]) -> Result<String, StorageError> {
    Ok(serde_json::to_string(&PresetEnvelopeRef {
        version: PRESET_SCHEMA_VERSION,
        presets,
    })?)
}

/// Parse a persisted value, accepting the envelope and bare arrays.
///
/// Records with out-of-domain numbers are dropped individually.
pub fn decode_presets(raw: &str) -> Option<Vec<ThemePreset>> {
    let presets = match serde_json::from_str::<StoredPresets>(raw) {
        Ok(StoredPresets::Versioned { version, presets }) if version == PRESET_SCHEMA_VERSION => {
            presets
        }
        Ok(StoredPresets::Versioned { version, .. }) => {
            warn!("ignoring stored presets with unknown schema version {version}");
            return None;
        }
        Ok(StoredPresets::Legacy(presets)) => presets,
        Err(e) => {
            warn!("ignoring unreadable stored presets: {e}");
            return None;
        }
    };

    Some(
        presets
            .into_iter()
            .filter(|p| match p.values.validate() {
                Ok(()) => true,
                Err(e) => {
                    warn!("dropping stored preset `{}`: {e}", p.name);
                    false
                }
            })
            .collect(),
    )
}

/// Ordered preset list mirrored into a key-value store.
pub struct PresetStore {
    key: String,
    storage: Box<dyn KeyValueStore>,
    presets: Vec<ThemePreset>,
}

impl PresetStore {
    /// Open the store, reading whatever was persisted under `key`.
    ///
    /// Read or parse failures leave the list empty; losing presets is not
    /// worth failing startup over.
    pub fn open(key: impl Into<String>, storage: Box<dyn KeyValueStore>) -> Self {
        let key = key.into();
        let presets = match storage.get(&key) {
            Ok(Some(raw)) => decode_presets(&raw).unwrap_or_default(),
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("could not read presets from `{key}`: {e}");
                Vec::new()
            }
        };
        debug!("PresetStore::open - {} presets under `{}`", presets.len(), key);

        Self {
            key,
            storage,
            presets,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn presets(&self) -> &[ThemePreset] {
        &self.presets
    }

    pub fn get(&self, id: &str) -> Option<&ThemePreset> {
        self.presets.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    /// Append a snapshot and persist the full list.
    pub fn add(&mut self, preset: ThemePreset) -> ThemePreset {
        debug!("PresetStore::add - `{}` ({})", preset.name, preset.id);
        self.presets.push(preset.clone());
        self.persist();
        preset
    }

    /// Remove every preset with `id` and persist. Returns whether anything was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.presets.len();
        self.presets.retain(|p| p.id != id);
        let removed = self.presets.len() != before;
        debug!("PresetStore::remove - {id} removed={removed}");
        self.persist();
        removed
    }

    /// Write the current list. Failures are logged, not returned.
    fn persist(&mut self) {
        if let Err(e) = self.try_persist() {
            warn!("could not persist presets to `{}`: {e}", self.key);
        }
    }

    fn try_persist(&mut self) -> Result<(), StorageError> {
        let raw = encode_presets(&self.presets)?;
        self.storage.set(&self.key, &raw)
    }
}

impl std::fmt::Debug for PresetStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PresetStore")
            .field("key", &self.key)
            .field("presets", &self.presets)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::HexColor;
    use crate::storage::{MemoryStore, NullStore};
    use crate::tokens::ShadowLevel;
    use pretty_assertions::assert_eq;

    const LEGACY: &str = r##"[
        {"id":"lq3k9x","name":"Ocean","primaryColor":"#2563eb","surfaceColor":"#F0F4F8",
         "borderRadius":12,"fontSize":1.125,"shadow":"subtle","borderWidth":1},
        {"id":"lq3kb2","name":"Night","primaryColor":"#1A1F27","surfaceColor":"#1E1E2E",
         "borderRadius":8,"fontSize":1,"shadow":"strong","borderWidth":2}
    ]"##;

    fn memory(raw: &str) -> Box<dyn KeyValueStore> {
        Box::new(MemoryStore::new().with_entry(DEFAULT_STORAGE_KEY, raw))
    }

    #[test]
    fn reads_legacy_array_layout() {
        let store = PresetStore::open(DEFAULT_STORAGE_KEY, memory(LEGACY));
        let names: Vec<&str> = store.presets().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Ocean", "Night"]);

        let ocean = store.get("lq3k9x").unwrap();
        assert_eq!(ocean.values.primary_color.as_str(), "#2563eb");
        assert_eq!(ocean.values.border_radius, 12.0);
        assert_eq!(ocean.values.font_size, 1.125);
        assert_eq!(ocean.values.shadow, ShadowLevel::Subtle);
    }

    #[test]
    fn writes_versioned_envelope() {
        let presets = vec![ThemePreset::new("Plain", ThemeValues::default())];
        let raw = encode_presets(&presets).unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();

        assert_eq!(json["version"], 1);
        let record = &json["presets"][0];
        assert_eq!(record["name"], "Plain");
        assert_eq!(record["primaryColor"], "#1A1F27");
        assert_eq!(record["surfaceColor"], "#F2F3EF");
        assert_eq!(record["borderRadius"], 8.0);
        assert_eq!(record["fontSize"], 1.0);
        assert_eq!(record["shadow"], "default");
        assert_eq!(record["borderWidth"], 1.0);

        assert_eq!(decode_presets(&raw), Some(presets));
    }

    #[test]
    fn invalid_json_yields_empty_list() {
        let store = PresetStore::open(DEFAULT_STORAGE_KEY, memory("{not json"));
        assert!(store.is_empty());
    }

    #[test]
    fn unknown_version_yields_empty_list() {
        let store = PresetStore::open(
            DEFAULT_STORAGE_KEY,
            memory(r#"{"version":99,"presets":[]}"#),
        );
        assert!(store.is_empty());
        assert_eq!(decode_presets(r#"{"version":99,"presets":[]}"#), None);
    }

    #[test]
    fn bad_records_are_dropped_individually() {
        let raw = r##"[
            {"id":"a","name":"ok","primaryColor":"#2563eb","surfaceColor":"#F2F3EF",
             "borderRadius":4,"fontSize":1,"shadow":"none","borderWidth":1},
            {"id":"b","name":"neg","primaryColor":"#2563eb","surfaceColor":"#F2F3EF",
             "borderRadius":-4,"fontSize":1,"shadow":"none","borderWidth":1}
        ]"##;
        let presets = decode_presets(raw).unwrap();
        assert_eq!(presets.len(), 1);
        assert_eq!(presets[0].id, "a");
    }

    #[test]
    fn malformed_color_fails_the_whole_value() {
        let raw = r##"[{"id":"a","name":"x","primaryColor":"blue","surfaceColor":"#F2F3EF",
            "borderRadius":4,"fontSize":1,"shadow":"none","borderWidth":1}]"##;
        assert_eq!(decode_presets(raw), None);
    }

    #[test]
    fn remove_keeps_order_of_the_rest() {
        let mut store = PresetStore::open(DEFAULT_STORAGE_KEY, Box::new(NullStore));
        let ids: Vec<String> = ["a", "b", "c", "d"]
            .iter()
            .map(|name| store.add(ThemePreset::new(*name, ThemeValues::default())).id)
            .collect();

        assert!(store.remove(&ids[1]));
        let left: Vec<&str> = store.presets().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(left, vec!["a", "c", "d"]);

        assert!(!store.remove("no-such-id"));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn generated_ids_are_unique() {
        let a = ThemePreset::new("same", ThemeValues::default());
        let b = ThemePreset::new("same", ThemeValues::default());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn preset_values_survive_serialization_exactly() {
        let values = ThemeValues {
            primary_color: HexColor::parse("#7C3AED").unwrap(),
            surface_color: HexColor::parse("#faf8f5").unwrap(),
            border_radius: 6.5,
            font_size: 0.9,
            shadow: ShadowLevel::Medium,
            border_width: 0.5,
        };
        let raw = encode_presets(&[ThemePreset::new("Exact", values.clone())]).unwrap();
        let back = decode_presets(&raw).unwrap();
        assert_eq!(back[0].values.primary_color.as_str(), "#7C3AED");
        assert_eq!(back[0].values.surface_color.as_str(), "#faf8f5");
        assert_eq!(back[0].values, values);
    }
}
