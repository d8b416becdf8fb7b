//! Iterator over NBT containers.

use super::*;

/// An iterator over an NBT compound or list. Uses the `Container` typestate to provide different [`Iterator`] implementations.
pub struct NbtIterator<'nbt, Container>
where
    Container: NbtContainer + 'nbt,
{
    entries: Container::Entries<'nbt>,
}

impl<'nbt, Container> NbtIterator<'nbt, Container>
where
    Container: NbtContainer + 'nbt,
{
    /// Makes an [`NbtIterator`] over the children of `container`.
    pub fn new(container: &'nbt Container) -> Self {
        Self {
            entries: container.entries(),
        }
    }
}

impl<'nbt, Container> Clone for NbtIterator<'nbt, Container>
where
    Container: NbtContainer + 'nbt,
{
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<'nbt> Iterator for NbtIterator<'nbt, NbtCompound> {
    type Item = (&'nbt str, &'nbt NbtValue);

    fn next(&mut self) -> Option<Self::Item> {
        self.entries
            .next()
            .map(|(name, value)| (name.as_str(), value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<'nbt> Iterator for NbtIterator<'nbt, NbtList> {
    type Item = &'nbt NbtValue;

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl ExactSizeIterator for NbtIterator<'_, NbtCompound> {}
impl ExactSizeIterator for NbtIterator<'_, NbtList> {}

impl<'nbt> IntoIterator for &'nbt NbtCompound {
    type Item = (&'nbt str, &'nbt NbtValue);
    type IntoIter = NbtIterator<'nbt, NbtCompound>;

    fn into_iter(self) -> Self::IntoIter {
        NbtIterator::new(self)
    }
}

impl<'nbt> IntoIterator for &'nbt NbtList {
    type Item = &'nbt NbtValue;
    type IntoIter = NbtIterator<'nbt, NbtList>;

    fn into_iter(self) -> Self::IntoIter {
        NbtIterator::new(self)
    }
}
