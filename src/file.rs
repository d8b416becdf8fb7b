//! One open inventory file.

use std::{
    fs,
    path::{Path, PathBuf},
};

use nbt::Nbt;

use crate::config::EditorConfig;
use crate::error::{EditorError, Result};
use crate::inventory::{Inventory, SlotLayout};
use crate::mapper::{InventoryMapper, LoadReport, SaveOutcome};

const LEVEL_EXTENSION: &str = "mclevel";

fn is_level(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(LEVEL_EXTENSION))
}

/// An inventory and the file it was last opened from or saved to.
#[derive(Debug, Clone)]
pub struct InventoryFile {
    path: Option<PathBuf>,
    inventory: Inventory,
}

impl InventoryFile {
    /// An empty inventory that has no file yet.
    pub fn new(slots: &SlotLayout) -> Self {
        Self {
            path: None,
            inventory: Inventory::new(slots),
        }
    }

    pub fn open(path: impl AsRef<Path>, config: &EditorConfig) -> Result<(Self, LoadReport)> {
        let mut file = Self::new(&config.slots);
        file.path = Some(path.as_ref().to_path_buf());
        let report = file.reload(config)?;
        Ok((file, report))
    }

    /// Reads the file again, replacing the inventory.
    pub fn reload(&mut self, config: &EditorConfig) -> Result<LoadReport> {
        let path = self.path.as_deref().ok_or(EditorError::NoPath)?;
        tracing::info!("Opening {}.", path.display());

        let nbt = read_document(path)?;
        InventoryMapper::new(config.layout.clone()).load(&nbt, &mut self.inventory)
    }

    /// Writes the inventory to `path`, which becomes the file's path.
    ///
    /// An existing file is updated in place, keeping everything but the player's inventory.
    /// A missing file is created from a fresh document, unless it is a level file.
    pub fn save(&mut self, path: impl AsRef<Path>, config: &EditorConfig) -> Result<SaveOutcome> {
        let path = path.as_ref();
        let mapper = InventoryMapper::new(config.layout.clone());

        let mut nbt = if path.exists() {
            read_document(path)?
        } else if is_level(path) {
            return Err(EditorError::CannotCreateLevel(path.to_path_buf()));
        } else {
            tracing::debug!("Creating new document for {}.", path.display());
            mapper.new_document()
        };

        let outcome = mapper.save(&mut nbt, &self.inventory)?;
        if outcome == SaveOutcome::NoTargetEntity {
            tracing::warn!("{} has no player entity, nothing saved.", path.display());
            return Ok(outcome);
        }

        let bytes = nbt.to_gzip()?;
        fs::write(path, bytes).map_err(EditorError::io(path))?;
        tracing::info!("Saved {}.", path.display());

        self.path = Some(path.to_path_buf());
        Ok(outcome)
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }
}

/// Reads and decodes a gzip compressed document.
pub fn read_document(path: &Path) -> Result<Nbt> {
    let bytes = fs::read(path).map_err(EditorError::io(path))?;
    Ok(Nbt::from_gzip(&bytes)?)
}
