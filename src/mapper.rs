//! Maps the player's inventory between a document tree and an [`Inventory`].

use std::fmt::Display;

use nbt::{Nbt, NbtCompound, NbtList, NbtValue, Tag};
use serde::Serialize;

use crate::config::DocumentLayout;
use crate::error::Result;
use crate::inventory::{Inventory, SlotObserver};
use crate::item::Item;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LoadOutcome {
    /// The document has no player entity, the inventory was left untouched.
    NoEntity,
    /// The player entity has no inventory field, the inventory was left untouched.
    NoInventory,
    /// The inventory was replaced by the `items` stacks found in the document.
    Loaded { items: usize },
}

/// An item entry that was skipped without failing the load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum LoadWarning {
    UnknownSlot { slot: u8, id: i16 },
}

impl Display for LoadWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadWarning::UnknownSlot { slot, .. } => {
                write!(f, "Unknown slot '{}', discarded item.", slot)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    pub outcome: LoadOutcome,
    pub warnings: Vec<LoadWarning>,
}

impl LoadReport {
    fn new(outcome: LoadOutcome) -> Self {
        Self {
            outcome,
            warnings: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SaveOutcome {
    /// The document has no player entity to attach an inventory to. Nothing was changed.
    NoTargetEntity,
    /// The player's inventory was replaced by `items` stacks.
    Saved { items: usize },
}

/// Refreshes every slot once when dropped, however the scan holding it ends.
struct SlotScan<'a, O>
where
    O: SlotObserver + ?Sized,
{
    inventory: &'a mut Inventory,
    observer: &'a mut O,
}

impl<O> SlotScan<'_, O>
where
    O: SlotObserver + ?Sized,
{
    fn clear(&mut self) {
        self.inventory.clear();
        for slot in self.inventory.iter() {
            self.observer.clear(slot.slot());
        }
    }
}

impl<O> Drop for SlotScan<'_, O>
where
    O: SlotObserver + ?Sized,
{
    fn drop(&mut self) {
        for slot in self.inventory.iter() {
            self.observer.refresh(slot);
        }
    }
}

/// Finds the player entity of a document and converts its inventory. Holds no state
/// between calls besides the field names.
#[derive(Debug, Clone, Default)]
pub struct InventoryMapper {
    layout: DocumentLayout,
}

impl InventoryMapper {
    pub fn new(layout: DocumentLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &DocumentLayout {
        &self.layout
    }

    /// A new document holding a single player entity with no inventory.
    pub fn new_document(&self) -> Nbt {
        let mut player = NbtCompound::new();
        player.set(&self.layout.entity_id, self.layout.player.as_str());

        let mut nbt = Nbt::new(&self.layout.new_document_name);
        nbt.set(&self.layout.entities, NbtList::from_iter([player]));
        nbt
    }

    fn is_player(&self, entity: &NbtCompound) -> bool {
        entity
            .string(&self.layout.entity_id)
            .is_ok_and(|id| id == self.layout.player)
    }

    /// Descends into the level wrapper and the entity list, when present, and returns the
    /// first player entity.
    pub fn find_player<'a>(&self, root: &'a NbtCompound) -> Option<&'a NbtCompound> {
        let level = match root.compound(&self.layout.level) {
            Ok(level) => {
                tracing::debug!("Descending into {:?}.", self.layout.level);
                level
            }
            Err(_) => root,
        };
        let candidates: Box<dyn Iterator<Item = &'a NbtValue> + 'a> =
            match level.get(&self.layout.entities) {
                Ok(NbtValue::List(list)) => Box::new(list.iter()),
                Ok(NbtValue::Compound(compound)) => Box::new(compound.iter().map(|(_, v)| v)),
                _ => Box::new(level.iter().map(|(_, v)| v)),
            };
        candidates
            .filter_map(|entity| entity.as_compound().ok())
            .find(|entity| self.is_player(entity))
    }

    fn find_player_mut<'a>(&self, root: &'a mut NbtCompound) -> Option<&'a mut NbtCompound> {
        let level = if root.compound(&self.layout.level).is_ok() {
            root.compound_mut(&self.layout.level).ok()?
        } else {
            root
        };
        let entities = level.get(&self.layout.entities).map(NbtValue::tag).ok();
        let candidates: Box<dyn Iterator<Item = &'a mut NbtValue> + 'a> = match entities {
            Some(Tag::List) => Box::new(level.list_mut(&self.layout.entities).ok()?.iter_mut()),
            Some(Tag::Compound) => {
                Box::new(level.compound_mut(&self.layout.entities).ok()?.values_mut())
            }
            _ => Box::new(level.values_mut()),
        };
        candidates
            .filter_map(|entity| entity.as_compound_mut().ok())
            .find(|entity| self.is_player(entity))
    }

    /// [`load_with`](Self::load_with) without slot notifications.
    pub fn load(&self, root: &NbtCompound, inventory: &mut Inventory) -> Result<LoadReport> {
        self.load_with(root, inventory, &mut ())
    }

    /// Replaces the contents of `inventory` with the player's inventory in `root`.
    ///
    /// If the player has an inventory field, every slot is cleared first and, once the scan is
    /// over, refreshed exactly once, even when the field or one of its entries has the wrong
    /// shape and the load fails.
    /// Entries with a count of zero are dropped, entries for slots outside the inventory are
    /// dropped with a warning.
    pub fn load_with<O>(
        &self,
        root: &NbtCompound,
        inventory: &mut Inventory,
        observer: &mut O,
    ) -> Result<LoadReport>
    where
        O: SlotObserver + ?Sized,
    {
        let layout = &self.layout;

        let Some(player) = self.find_player(root) else {
            tracing::debug!("No {:?} entity found.", layout.player);
            return Ok(LoadReport::new(LoadOutcome::NoEntity));
        };
        if !player.contains(&layout.inventory) {
            tracing::debug!("{:?} entity has no inventory.", layout.player);
            return Ok(LoadReport::new(LoadOutcome::NoInventory));
        }

        let mut warnings = Vec::new();
        let mut loaded = 0;

        let mut scan = SlotScan {
            inventory,
            observer,
        };
        scan.clear();

        for entry in player.list(&layout.inventory)? {
            let entry = entry.as_compound()?;
            let id = entry.short(&layout.item_id)?;
            let slot = entry.byte(&layout.item_slot)? as u8;
            let count = entry.byte(&layout.item_count)? as u8;
            if count == 0 {
                tracing::trace!("Skipping empty stack of {} in slot {}.", id, slot);
                continue;
            }
            if !scan.inventory.contains_slot(slot) {
                tracing::warn!("Unknown slot {}, discarded item {}.", slot, id);
                warnings.push(LoadWarning::UnknownSlot { slot, id });
                continue;
            }
            let damage = entry.short(&layout.item_damage)?;
            scan.inventory
                .set_item(Item::new(id, count, slot, damage))?;
            loaded += 1;
        }

        tracing::debug!("Loaded {} stacks.", loaded);
        Ok(LoadReport {
            outcome: LoadOutcome::Loaded { items: loaded },
            warnings,
        })
    }

    /// Writes `inventory` into the player entity of `root`, replacing its previous inventory.
    /// Everything else in the document is left alone.
    pub fn save(&self, root: &mut NbtCompound, inventory: &Inventory) -> Result<SaveOutcome> {
        let layout = &self.layout;

        let Some(player) = self.find_player_mut(root) else {
            tracing::debug!("No {:?} entity to save to.", layout.player);
            return Ok(SaveOutcome::NoTargetEntity);
        };

        player.remove(&layout.inventory);
        let entries = player.add_list(&layout.inventory, Tag::Compound);
        for item in inventory.items() {
            let entry = entries.add_compound()?;
            entry.set(&layout.item_id, item.id);
            entry.set(&layout.item_slot, item.slot as i8);
            entry.set(&layout.item_count, item.count as i8);
            entry.set(&layout.item_damage, item.damage);
        }

        tracing::debug!("Saved {} stacks.", entries.len());
        Ok(SaveOutcome::Saved {
            items: entries.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use nbt::NbtAccessError;

    use super::*;
    use crate::error::EditorError;
    use crate::inventory::SlotLayout;
    use crate::item::ItemSlot;

    fn item(id: i16, slot: i8, count: i8, damage: i16) -> NbtCompound {
        let mut entry = NbtCompound::new();
        entry.set("id", id);
        entry.set("Slot", slot);
        entry.set("Count", count);
        entry.set("Damage", damage);
        entry
    }

    fn player(items: Vec<NbtCompound>) -> NbtCompound {
        let mut player = NbtCompound::new();
        player.set("id", "LocalPlayer");
        player.set("Inventory", NbtList::from_iter(items));
        player
    }

    fn document(entities: Vec<NbtCompound>) -> Nbt {
        let mut nbt = Nbt::new("");
        nbt.set("Entities", NbtList::from_iter(entities));
        nbt
    }

    fn small_inventory() -> Inventory {
        Inventory::new(&(0..=35).collect())
    }

    #[derive(Default)]
    struct Recorder {
        cleared: Vec<u8>,
        refreshed: Vec<u8>,
    }

    impl SlotObserver for Recorder {
        fn clear(&mut self, slot: u8) {
            self.cleared.push(slot);
        }

        fn refresh(&mut self, slot: &ItemSlot) {
            self.refreshed.push(slot.slot());
        }
    }

    #[test]
    fn unknown_slot_is_reported() {
        let nbt = document(vec![player(vec![item(1, 0, 5, 0), item(2, 99, 1, 0)])]);
        let mut inventory = small_inventory();

        let report = InventoryMapper::default().load(&nbt, &mut inventory).unwrap();

        assert_eq!(report.outcome, LoadOutcome::Loaded { items: 1 });
        assert_eq!(report.warnings, vec![LoadWarning::UnknownSlot { slot: 99, id: 2 }]);
        assert!(report.warnings[0].to_string().contains("99"));
        assert_eq!(inventory.item(0), Some(&Item::new(1, 5, 0, 0)));
        assert_eq!(inventory.items().count(), 1);
    }

    #[test]
    fn empty_stacks_are_dropped() {
        let nbt = document(vec![player(vec![item(3, 1, 0, 0), item(4, 2, 64, 7)])]);
        let mut inventory = small_inventory();

        let report = InventoryMapper::default().load(&nbt, &mut inventory).unwrap();

        assert!(report.warnings.is_empty());
        assert_eq!(inventory.item(1), None);
        assert_eq!(inventory.item(2), Some(&Item::new(4, 64, 2, 7)));
    }

    #[test]
    fn load_replaces_previous_contents() {
        let nbt = document(vec![player(vec![item(1, 0, 5, 0)])]);
        let mut inventory = small_inventory();
        inventory.set_item(Item::new(9, 1, 10, 0)).unwrap();

        let mapper = InventoryMapper::default();
        mapper.load(&nbt, &mut inventory).unwrap();
        let first = inventory.clone();
        mapper.load(&nbt, &mut inventory).unwrap();

        assert_eq!(inventory.item(10), None);
        assert_eq!(first, inventory);
    }

    #[test]
    fn missing_entity_or_inventory_leaves_slots_alone() {
        let mut inventory = small_inventory();
        inventory.set_item(Item::new(9, 1, 10, 0)).unwrap();
        let mapper = InventoryMapper::default();

        let mut other = NbtCompound::new();
        other.set("id", "Pig");
        let report = mapper.load(&document(vec![other]), &mut inventory).unwrap();
        assert_eq!(report.outcome, LoadOutcome::NoEntity);

        let mut bare = NbtCompound::new();
        bare.set("id", "LocalPlayer");
        let mut recorder = Recorder::default();
        let report = mapper
            .load_with(&document(vec![bare]), &mut inventory, &mut recorder)
            .unwrap();
        assert_eq!(report.outcome, LoadOutcome::NoInventory);
        assert!(recorder.refreshed.is_empty());

        assert_eq!(inventory.item(10), Some(&Item::new(9, 1, 10, 0)));
    }

    #[test]
    fn first_player_wins() {
        let nbt = document(vec![
            player(vec![item(1, 0, 1, 0)]),
            player(vec![item(2, 0, 2, 0)]),
        ]);
        let mut inventory = small_inventory();

        InventoryMapper::default().load(&nbt, &mut inventory).unwrap();

        assert_eq!(inventory.item(0).map(|item| item.id), Some(1));
    }

    #[test]
    fn level_wrapper_is_unwrapped() {
        let mut nbt = Nbt::new("");
        nbt.add_compound("MinecraftLevel")
            .set("Entities", NbtList::from_iter([player(vec![item(5, 3, 2, 1)])]));
        let mut inventory = small_inventory();

        InventoryMapper::default().load(&nbt, &mut inventory).unwrap();

        assert_eq!(inventory.item(3), Some(&Item::new(5, 2, 3, 1)));
    }

    #[test]
    fn player_directly_under_root() {
        let mut nbt = Nbt::new("");
        nbt.set("Player", player(vec![item(5, 3, 2, 1)]));
        let mut inventory = small_inventory();

        InventoryMapper::default().load(&nbt, &mut inventory).unwrap();

        assert_eq!(inventory.item(3), Some(&Item::new(5, 2, 3, 1)));
    }

    #[test]
    fn every_slot_is_refreshed_after_a_failed_scan() {
        let mut broken = item(1, 0, 5, 0);
        broken.set("id", "stone");
        let nbt = document(vec![player(vec![item(1, 0, 5, 0), broken])]);
        let mut inventory = small_inventory();
        let mut recorder = Recorder::default();

        let err = InventoryMapper::default()
            .load_with(&nbt, &mut inventory, &mut recorder)
            .unwrap_err();

        assert!(matches!(
            err,
            EditorError::Structure(NbtAccessError::TypeMismatch {
                expected: Tag::Short,
                found: Tag::String,
            })
        ));
        let all: Vec<u8> = (0..=35).collect();
        assert_eq!(recorder.cleared, all);
        assert_eq!(recorder.refreshed, all);
    }

    #[test]
    fn every_slot_is_refreshed_when_inventory_is_not_a_list() {
        let mut target = NbtCompound::new();
        target.set("id", "LocalPlayer");
        target.set("Inventory", 5i32);
        let nbt = document(vec![target]);
        let mut inventory = small_inventory();
        inventory.set_item(Item::new(9, 1, 10, 0)).unwrap();
        let mut recorder = Recorder::default();

        let err = InventoryMapper::default()
            .load_with(&nbt, &mut inventory, &mut recorder)
            .unwrap_err();

        assert!(matches!(
            err,
            EditorError::Structure(NbtAccessError::TypeMismatch {
                expected: Tag::List,
                found: Tag::Int,
            })
        ));
        let all: Vec<u8> = (0..=35).collect();
        assert_eq!(recorder.cleared, all);
        assert_eq!(recorder.refreshed, all);
        assert_eq!(inventory.item(10), None);
    }

    #[test]
    fn save_then_load() {
        let mapper = InventoryMapper::default();
        let mut inventory = Inventory::new(&SlotLayout::classic());
        inventory.set_item(Item::new(1, 64, 0, 0)).unwrap();
        inventory.set_item(Item::new(310, 1, 103, 12)).unwrap();
        inventory.set_item(Item::new(50, 200, 81, 0)).unwrap();

        let mut nbt = mapper.new_document();
        let outcome = mapper.save(&mut nbt, &inventory).unwrap();
        assert_eq!(outcome, SaveOutcome::Saved { items: 3 });

        let mut loaded = Inventory::new(&SlotLayout::classic());
        mapper.load(&nbt, &mut loaded).unwrap();
        assert_eq!(loaded, inventory);
    }

    #[test]
    fn save_replaces_only_the_inventory() {
        let mapper = InventoryMapper::default();
        let mut target = player(vec![item(7, 4, 1, 0)]);
        target.set("Health", 20i16);
        let mut pig = NbtCompound::new();
        pig.set("id", "Pig");
        let mut nbt = document(vec![pig.clone(), target]);
        nbt.set("Time", 1200i64);

        let mut inventory = small_inventory();
        inventory.set_item(Item::new(1, 5, 0, 0)).unwrap();
        mapper.save(&mut nbt, &inventory).unwrap();

        let entities = nbt.list("Entities").unwrap();
        assert_eq!(entities.get(0), Some(&NbtValue::Compound(pig)));
        let saved = entities.get(1).unwrap().as_compound().unwrap();
        assert_eq!(saved.short("Health"), Ok(20));
        let items = saved.list("Inventory").unwrap();
        assert_eq!(items.element_tag(), Tag::Compound);
        assert_eq!(items.get(0), Some(&NbtValue::Compound(item(1, 0, 5, 0))));
        assert_eq!(items.len(), 1);
        assert_eq!(nbt.long("Time"), Ok(1200));
    }

    #[test]
    fn save_without_target_changes_nothing() {
        let mut pig = NbtCompound::new();
        pig.set("id", "Pig");
        let mut nbt = document(vec![pig]);
        let before = nbt.to_bytes().unwrap();

        let mut inventory = small_inventory();
        inventory.set_item(Item::new(1, 5, 0, 0)).unwrap();
        let outcome = InventoryMapper::default().save(&mut nbt, &inventory).unwrap();

        assert_eq!(outcome, SaveOutcome::NoTargetEntity);
        assert_eq!(nbt.to_bytes().unwrap(), before);
    }

    #[test]
    fn new_document_shape() {
        let nbt = InventoryMapper::default().new_document();

        assert_eq!(nbt.name(), "Inventory");
        let entities = nbt.list("Entities").unwrap();
        assert_eq!(entities.len(), 1);
        let entity = entities.get(0).unwrap().as_compound().unwrap();
        assert_eq!(entity.string("id"), Ok("LocalPlayer"));
        assert!(!entity.contains("Inventory"));
    }
}
