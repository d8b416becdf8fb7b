//! Marker traits and implementations.

use std::slice;

use crate::{NbtCompound, NbtList, NbtValue};

mod private {
    pub trait Sealed {}
}

use private::Sealed;

impl Sealed for NbtCompound {}
impl Sealed for NbtList {}

/// A container node ([`NbtCompound`] or [`NbtList`]), iterated in stored order.
pub trait NbtContainer: Sealed {
    /// Borrowing iterator over the stored children.
    type Entries<'nbt>: ExactSizeIterator + Clone
    where
        Self: 'nbt;

    fn entries(&self) -> Self::Entries<'_>;
}

impl NbtContainer for NbtCompound {
    type Entries<'nbt> = indexmap::map::Iter<'nbt, String, NbtValue>;

    fn entries(&self) -> Self::Entries<'_> {
        self.entries.iter()
    }
}

impl NbtContainer for NbtList {
    type Entries<'nbt> = slice::Iter<'nbt, NbtValue>;

    fn entries(&self) -> Self::Entries<'_> {
        self.items.iter()
    }
}
