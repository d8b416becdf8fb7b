//! Player inventory editing for gzip-compressed NBT save files.
//!
//! [`InventoryMapper`] finds the `LocalPlayer` entity of a document and converts its
//! inventory list to and from an [`Inventory`] of fixed slots. [`InventoryFile`] ties an
//! inventory to the file it was read from.

pub use crate::config::*;
pub use crate::error::*;
pub use crate::file::*;
pub use crate::inventory::*;
pub use crate::item::*;
pub use crate::mapper::*;

pub(crate) mod config;
pub(crate) mod error;
pub(crate) mod file;
pub(crate) mod inventory;
pub(crate) mod item;
pub mod mapper;
