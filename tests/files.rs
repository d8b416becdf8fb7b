use std::fs;

use invedit::{EditorConfig, EditorError, InventoryFile, Item, LoadOutcome, SaveOutcome};
use nbt::decode;
use tempfile::tempdir;

#[test]
fn new_file_has_a_player() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("new.dat");
    let config = EditorConfig::default();

    let mut file = InventoryFile::new(&config.slots);
    assert_eq!(file.save(&path, &config).unwrap(), SaveOutcome::Saved { items: 0 });

    let nbt = decode(&fs::read(&path).unwrap()).unwrap();
    assert_eq!(nbt.name(), "Inventory");
    let (_, report) = InventoryFile::open(&path, &config).unwrap();
    assert_eq!(report.outcome, LoadOutcome::Loaded { items: 0 });
}

#[test]
fn copy_between_files() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("source.dat");
    let target = dir.path().join("target.dat");
    let config = EditorConfig::default();

    let mut file = InventoryFile::new(&config.slots);
    file.inventory_mut().set_item(Item::new(17, 32, 5, 2)).unwrap();
    file.save(&source, &config).unwrap();
    InventoryFile::new(&config.slots).save(&target, &config).unwrap();

    let (mut copied, _) = InventoryFile::open(&source, &config).unwrap();
    copied.save(&target, &config).unwrap();

    let (reopened, _) = InventoryFile::open(&target, &config).unwrap();
    assert_eq!(reopened.inventory().item(5), Some(&Item::new(17, 32, 5, 2)));
}

#[test]
fn config_renames_fields() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.json");
    fs::write(
        &config_path,
        r#"{ "layout": { "player": "Steve", "new_document_name": "Save" }, "slots": [0, 1, 2] }"#,
    )
    .unwrap();
    let config = EditorConfig::load(&config_path).unwrap();
    let path = dir.path().join("steve.dat");

    let mut file = InventoryFile::new(&config.slots);
    assert_eq!(file.inventory().slot_count(), 3);
    file.inventory_mut().set_item(Item::new(1, 1, 2, 0)).unwrap();
    file.save(&path, &config).unwrap();

    let nbt = decode(&fs::read(&path).unwrap()).unwrap();
    assert_eq!(nbt.name(), "Save");
    let entity = nbt.list("Entities").unwrap().get(0).unwrap().as_compound().unwrap();
    assert_eq!(entity.string("id"), Ok("Steve"));

    let (_, report) = InventoryFile::open(&path, &EditorConfig::default()).unwrap();
    assert_eq!(report.outcome, LoadOutcome::NoEntity);
}

#[test]
fn truncated_file_is_malformed() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.dat");
    let config = EditorConfig::default();
    InventoryFile::new(&config.slots).save(&path, &config).unwrap();
    let bytes = fs::read(&path).unwrap();
    fs::write(&path, &bytes[..bytes.len() / 2]).unwrap();

    let err = InventoryFile::open(&path, &config).unwrap_err();

    assert!(matches!(err, EditorError::MalformedData(_)));
}
