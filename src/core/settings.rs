use std::{
    collections::HashMap,
    path::PathBuf,
};

use serde::{
    Deserialize,
    Serialize,
};
use serde_json::Value;

use super::groups::{
    self,
    GroupFamily,
};
use crate::persistence;

const SETTINGS_FILE: &str = "settings.json";

pub const DEFAULT_DELAY_MS: u64 = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum KanaVariant {
    Hiragana,
    Katakana,
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DrillMode {
    PromptToAnswer,
    AnswerToPrompt,
}

/// The persisted configuration document. Field names match the document
/// written to disk.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub delay: u64,
    pub selected_syllables: HashMap<String, bool>,
    pub selected_voiced_syllables: HashMap<String, bool>,
    pub kana_variant: KanaVariant,
    pub mode: DrillMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            delay: DEFAULT_DELAY_MS,
            selected_syllables: default_group_map(GroupFamily::Unvoiced, true),
            selected_voiced_syllables: default_group_map(GroupFamily::Voiced, false),
            kana_variant: KanaVariant::Both,
            mode: DrillMode::PromptToAnswer,
        }
    }
}

fn default_group_map(family: GroupFamily, enabled: bool) -> HashMap<String, bool> {
    groups::of_family(family).map(|g| (g.id.to_string(), enabled)).collect()
}

impl Settings {
    /// Merges a persisted document over the defaults, field by field. A
    /// non-object document falls back entirely to defaults; a wrong-shaped
    /// field falls back alone. The group maps merge key by key, so every
    /// known group id keeps an entry and stale ids are preserved.
    pub fn from_value(doc: &Value) -> Self {
        let mut settings = Settings::default();

        let Some(obj) = doc.as_object() else {
            return settings;
        };

        if let Some(delay) = obj.get("delay").and_then(Value::as_u64) {
            settings.delay = delay;
        }

        merge_group_map(&mut settings.selected_syllables, obj.get("selectedSyllables"));
        merge_group_map(&mut settings.selected_voiced_syllables, obj.get("selectedVoicedSyllables"));

        if let Some(variant) = obj.get("kanaVariant").and_then(parse_field::<KanaVariant>) {
            settings.kana_variant = variant;
        }

        if let Some(mode) = obj.get("mode").and_then(parse_field::<DrillMode>) {
            settings.mode = mode;
        }

        settings
    }

    /// Ids of every group, across both families, whose toggle is on.
    /// Unknown ids in the maps are never consulted.
    pub fn enabled_group_ids(&self) -> Vec<&'static str> {
        groups::all()
            .iter()
            .filter(|g| {
                let map = match g.family {
                    GroupFamily::Unvoiced => &self.selected_syllables,
                    GroupFamily::Voiced => &self.selected_voiced_syllables,
                };
                map.get(g.id).copied().unwrap_or(false)
            })
            .map(|g| g.id)
            .collect()
    }
}

fn merge_group_map(target: &mut HashMap<String, bool>, persisted: Option<&Value>) {
    let Some(map) = persisted.and_then(Value::as_object) else {
        return;
    };

    for (id, value) in map {
        if let Some(enabled) = value.as_bool() {
            target.insert(id.clone(), enabled);
        }
    }
}

fn parse_field<T: for<'de> Deserialize<'de>>(value: &Value) -> Option<T> {
    serde_json::from_value(value.clone()).ok()
}

/// A partial update; `Some` fields replace the current value wholesale.
#[derive(Debug, Default, Clone)]
pub struct SettingsPatch {
    pub delay: Option<u64>,
    pub selected_syllables: Option<HashMap<String, bool>>,
    pub selected_voiced_syllables: Option<HashMap<String, bool>>,
    pub kana_variant: Option<KanaVariant>,
    pub mode: Option<DrillMode>,
}

/// Sole owner of the configuration value. Loads once at startup, merges
/// partial updates, and re-persists the full document on every change.
pub struct SettingsStore {
    settings: Settings,
    file_path: PathBuf,
    loaded: bool,
}

impl SettingsStore {
    pub fn new() -> Self {
        Self::with_path(persistence::get_data_file_path(SETTINGS_FILE))
    }

    pub fn with_path(file_path: PathBuf) -> Self {
        Self { settings: Settings::default(), file_path, loaded: false }
    }

    /// Reads the persisted document, degrading to defaults on any failure.
    /// Never raises to the caller.
    pub fn load(&mut self) -> &Settings {
        if let Some(doc) = persistence::load_value(&self.file_path) {
            self.settings = Settings::from_value(&doc);
        }
        self.loaded = true;
        &self.settings
    }

    pub fn get(&self) -> &Settings {
        &self.settings
    }

    /// Applies a shallow top-level merge and persists the result. Updates
    /// before the initial `load` are applied in memory but never written,
    /// so defaults cannot clobber not-yet-read persisted data.
    pub fn update(&mut self, patch: SettingsPatch) -> &Settings {
        if let Some(delay) = patch.delay {
            self.settings.delay = delay;
        }
        if let Some(map) = patch.selected_syllables {
            self.settings.selected_syllables = map;
        }
        if let Some(map) = patch.selected_voiced_syllables {
            self.settings.selected_voiced_syllables = map;
        }
        if let Some(variant) = patch.kana_variant {
            self.settings.kana_variant = variant;
        }
        if let Some(mode) = patch.mode {
            self.settings.mode = mode;
        }

        self.persist();
        &self.settings
    }

    fn persist(&self) {
        if !self.loaded {
            return;
        }
        if let Err(e) = persistence::save_json(&self.settings, &self.file_path) {
            eprintln!("Failed to save settings: {}", e);
        }
    }
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn defaults_enable_unvoiced_and_disable_voiced() {
        let settings = Settings::default();
        assert_eq!(settings.delay, DEFAULT_DELAY_MS);
        assert!(settings.selected_syllables.values().all(|&on| on));
        assert!(settings.selected_voiced_syllables.values().all(|&on| !on));
        assert_eq!(settings.kana_variant, KanaVariant::Both);
        assert_eq!(settings.mode, DrillMode::PromptToAnswer);
    }

    #[test]
    fn missing_fields_default() {
        let settings = Settings::from_value(&json!({ "delay": 500 }));
        assert_eq!(settings.delay, 500);
        assert_eq!(settings.kana_variant, KanaVariant::Both);
        assert_eq!(settings.mode, DrillMode::PromptToAnswer);
        assert!(settings.selected_syllables.values().all(|&on| on));
    }

    #[test]
    fn group_maps_merge_key_by_key() {
        let settings =
            Settings::from_value(&json!({ "selectedSyllables": { "aiueo": false } }));
        assert_eq!(settings.selected_syllables.get("aiueo"), Some(&false));
        assert_eq!(settings.selected_syllables.get("kakikukeko"), Some(&true));
        assert_eq!(settings.selected_syllables.get("wawon"), Some(&true));
    }

    #[test]
    fn stale_group_ids_are_preserved_but_not_consulted() {
        let settings =
            Settings::from_value(&json!({ "selectedSyllables": { "kyakyukyo": true } }));
        assert_eq!(settings.selected_syllables.get("kyakyukyo"), Some(&true));
        assert!(!settings.enabled_group_ids().contains(&"kyakyukyo"));
    }

    #[test]
    fn wrong_shaped_fields_fall_back_alone() {
        let settings = Settings::from_value(&json!({
            "delay": "soon",
            "selectedSyllables": { "aiueo": "yes", "wawon": false },
            "kanaVariant": 3,
            "mode": "answerToPrompt"
        }));
        assert_eq!(settings.delay, DEFAULT_DELAY_MS);
        assert_eq!(settings.selected_syllables.get("aiueo"), Some(&true));
        assert_eq!(settings.selected_syllables.get("wawon"), Some(&false));
        assert_eq!(settings.kana_variant, KanaVariant::Both);
        assert_eq!(settings.mode, DrillMode::AnswerToPrompt);
    }

    #[test]
    fn malformed_top_level_falls_back_entirely() {
        assert_eq!(Settings::from_value(&json!("nonsense")), Settings::default());
        assert_eq!(Settings::from_value(&json!([1, 2, 3])), Settings::default());
    }

    #[test]
    fn enabled_ids_cover_both_families() {
        let mut settings = Settings::default();
        settings.selected_voiced_syllables.insert("gagigugego".to_string(), true);
        let ids = settings.enabled_group_ids();
        assert!(ids.contains(&"aiueo"));
        assert!(ids.contains(&"gagigugego"));
        assert!(!ids.contains(&"zajizuzezo"));
    }

    #[test]
    fn update_replaces_group_maps_wholesale() {
        let mut store = SettingsStore::with_path(PathBuf::from("unused.json"));
        let mut map = HashMap::new();
        map.insert("aiueo".to_string(), true);
        let settings = store.update(SettingsPatch {
            selected_syllables: Some(map),
            ..Default::default()
        });
        assert_eq!(settings.selected_syllables.len(), 1);
        assert_eq!(settings.enabled_group_ids(), vec!["aiueo"]);
    }

    #[test]
    fn updates_before_load_do_not_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let mut store = SettingsStore::with_path(path.clone());
        store.update(SettingsPatch { delay: Some(100), ..Default::default() });
        assert!(!path.exists());

        store.load();
        store.update(SettingsPatch { delay: Some(100), ..Default::default() });
        assert!(path.exists());
    }

    #[test]
    fn round_trip_reproduces_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let mut store = SettingsStore::with_path(path.clone());
        store.load();
        let saved = store
            .update(SettingsPatch {
                delay: Some(750),
                kana_variant: Some(KanaVariant::Katakana),
                mode: Some(DrillMode::AnswerToPrompt),
                ..Default::default()
            })
            .clone();

        let mut fresh = SettingsStore::with_path(path);
        assert_eq!(*fresh.load(), saved);
    }
}
