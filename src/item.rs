use getset::{CopyGetters, Getters};
use serde::{Deserialize, Serialize};

/// One stack of a game item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub id: i16,
    pub count: u8,
    pub slot: u8,
    pub damage: i16,
}

impl Item {
    pub fn new(id: i16, count: u8, slot: u8, damage: i16) -> Self {
        Self {
            id,
            count,
            slot,
            damage,
        }
    }
}

/// One fixed inventory address, empty when `item` is `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, CopyGetters, Getters)]
pub struct ItemSlot {
    #[getset(get_copy = "pub")]
    slot: u8,
    #[getset(get = "pub")]
    item: Option<Item>,
}

impl ItemSlot {
    pub fn new(slot: u8) -> Self {
        Self { slot, item: None }
    }

    /// Puts `item` in this slot, returning whatever was there. The item's own slot number
    /// is rewritten to match.
    pub fn set_item(&mut self, item: Item) -> Option<Item> {
        self.item.replace(Item {
            slot: self.slot,
            ..item
        })
    }

    pub fn take(&mut self) -> Option<Item> {
        self.item.take()
    }

    pub fn clear(&mut self) {
        self.item = None;
    }

    pub fn is_empty(&self) -> bool {
        self.item.is_none()
    }
}
