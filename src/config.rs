//! Editor configuration: where the inventory lives in a document, and which slots exist.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::{EditorError, Result};
use crate::inventory::SlotLayout;

/// Field names of the save format the mapper reads and writes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentLayout {
    /// Optional root child wrapping the level data.
    pub level: String,
    /// Optional list of entity compounds.
    pub entities: String,
    /// String field naming an entity's kind.
    pub entity_id: String,
    /// Kind of the entity whose inventory is edited.
    pub player: String,
    /// List of item compounds on the player entity.
    pub inventory: String,
    pub item_id: String,
    pub item_slot: String,
    pub item_count: String,
    pub item_damage: String,
    /// Root name of a freshly created document.
    pub new_document_name: String,
}

impl Default for DocumentLayout {
    fn default() -> Self {
        Self {
            level: "MinecraftLevel".into(),
            entities: "Entities".into(),
            entity_id: "id".into(),
            player: "LocalPlayer".into(),
            inventory: "Inventory".into(),
            item_id: "id".into(),
            item_slot: "Slot".into(),
            item_count: "Count".into(),
            item_damage: "Damage".into(),
            new_document_name: "Inventory".into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub layout: DocumentLayout,
    pub slots: SlotLayout,
}

impl EditorConfig {
    /// Loads a JSON config. Missing fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(EditorError::io(path))?;
        let config = serde_json::from_str(&contents).map_err(|source| EditorError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("Loaded config from {}.", path.display());
        Ok(config)
    }

    /// Loads `path` if given, or the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let config: EditorConfig =
            serde_json::from_str(r#"{ "layout": { "player": "Steve" }, "slots": [0, 1, 2] }"#)
                .unwrap();
        assert_eq!(config.layout.player, "Steve");
        assert_eq!(config.layout.inventory, "Inventory");
        assert_eq!(config.slots, [0, 1, 2].into_iter().collect());

        let config: EditorConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, EditorConfig::default());
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "slots": [100, 101] }}"#).unwrap();
        let config = EditorConfig::load(file.path()).unwrap();
        assert!(config.slots.contains(101));
        assert!(!config.slots.contains(0));

        write!(file, "not json").unwrap();
        assert!(matches!(
            EditorConfig::load(file.path()),
            Err(EditorError::Config { .. })
        ));
    }

    #[test]
    fn missing_file() {
        assert!(matches!(
            EditorConfig::load(Path::new("/nonexistent/invedit.json")),
            Err(EditorError::Io { .. })
        ));
        assert_eq!(
            EditorConfig::load_or_default(None).unwrap(),
            EditorConfig::default()
        );
    }
}
