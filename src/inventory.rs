//! Slot-indexed inventory model.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::EditorError;
use crate::item::{Item, ItemSlot};

/// The fixed set of valid slot numbers. Decided once by whoever lays out the slots,
/// never changed while an inventory is open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotLayout {
    slots: BTreeSet<u8>,
}

impl SlotLayout {
    /// Main inventory and hotbar (0-35), crafting grid (80-83), armor (100-103).
    pub fn classic() -> Self {
        (0..=35).chain(80..=83).chain(100..=103).collect()
    }

    pub fn contains(&self, slot: u8) -> bool {
        self.slots.contains(&slot)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.slots.iter().copied()
    }
}

impl Default for SlotLayout {
    fn default() -> Self {
        Self::classic()
    }
}

impl FromIterator<u8> for SlotLayout {
    fn from_iter<T: IntoIterator<Item = u8>>(iter: T) -> Self {
        Self {
            slots: iter.into_iter().collect(),
        }
    }
}

/// UI hooks for keeping slot widgets in sync with the model.
pub trait SlotObserver {
    /// The slot was emptied.
    fn clear(&mut self, slot: u8);
    /// The slot may have changed and should be redrawn.
    fn refresh(&mut self, slot: &ItemSlot);
}

/// A [`SlotObserver`] that ignores everything.
impl SlotObserver for () {
    fn clear(&mut self, _slot: u8) {}

    fn refresh(&mut self, _slot: &ItemSlot) {}
}

/// Every slot of a [`SlotLayout`], iterated in ascending slot order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Inventory {
    slots: BTreeMap<u8, ItemSlot>,
}

impl Inventory {
    /// Makes an inventory with one empty slot per slot number in `layout`.
    pub fn new(layout: &SlotLayout) -> Self {
        Self {
            slots: layout.iter().map(|slot| (slot, ItemSlot::new(slot))).collect(),
        }
    }

    pub fn contains_slot(&self, slot: u8) -> bool {
        self.slots.contains_key(&slot)
    }

    pub fn slot(&self, slot: u8) -> Option<&ItemSlot> {
        self.slots.get(&slot)
    }

    pub fn item(&self, slot: u8) -> Option<&Item> {
        self.slots.get(&slot).and_then(|s| s.item().as_ref())
    }

    /// Puts `item` in its slot, returning the replaced item. Fails for a slot outside the layout.
    pub fn set_item(&mut self, item: Item) -> Result<Option<Item>, EditorError> {
        self.slots
            .get_mut(&item.slot)
            .map(|slot| slot.set_item(item))
            .ok_or(EditorError::UnknownSlot(item.slot))
    }

    pub fn take_item(&mut self, slot: u8) -> Result<Option<Item>, EditorError> {
        self.slots
            .get_mut(&slot)
            .map(ItemSlot::take)
            .ok_or(EditorError::UnknownSlot(slot))
    }

    /// Empties every slot.
    pub fn clear(&mut self) {
        for slot in self.slots.values_mut() {
            slot.clear();
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemSlot> {
        self.slots.values()
    }

    /// Items of the populated slots, in slot order.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.slots.values().filter_map(|slot| slot.item().as_ref())
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items().next().is_none()
    }

    /// The slot numbers this inventory was built with.
    pub fn layout(&self) -> SlotLayout {
        self.slots.keys().copied().collect()
    }
}
