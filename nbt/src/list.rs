//! Homogeneous, unnamed children.

use super::*;

/// An NBT list. Every element has the list's element type.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NbtList {
    tag: Tag,
    pub(crate) items: Vec<NbtValue>,
}

impl NbtList {
    /// Makes an empty list of `element_tag` values.
    pub fn new(element_tag: Tag) -> Self {
        Self {
            tag: element_tag,
            items: Vec::new(),
        }
    }

    pub(crate) fn with_capacity(element_tag: Tag, capacity: usize) -> Self {
        Self {
            tag: element_tag,
            items: Vec::with_capacity(capacity),
        }
    }

    pub fn element_tag(&self) -> Tag {
        self.tag
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&NbtValue> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut NbtValue> {
        self.items.get_mut(index)
    }

    /// Appends `value`, which must have the list's element type.
    pub fn push(&mut self, value: impl Into<NbtValue>) -> Result<(), NbtAccessError> {
        let value = value.into();
        if value.tag() != self.tag {
            return Err(NbtAccessError::TypeMismatch {
                expected: self.tag,
                found: value.tag(),
            });
        }
        self.items.push(value);
        Ok(())
    }

    /// Appends an empty compound and returns it. The list must be a list of compounds.
    pub fn add_compound(&mut self) -> Result<&mut NbtCompound, NbtAccessError> {
        if self.tag != Tag::Compound {
            return Err(NbtAccessError::TypeMismatch {
                expected: Tag::Compound,
                found: self.tag,
            });
        }
        self.items.push(NbtValue::Compound(NbtCompound::new()));
        match self.items.last_mut() {
            Some(NbtValue::Compound(compound)) => Ok(compound),
            _ => unreachable!(),
        }
    }

    /// Removes the element at `index`, shifting later elements down.
    pub fn remove(&mut self, index: usize) -> Option<NbtValue> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    /// Returns an [`NbtIterator`] over this list's elements.
    pub fn iter(&self) -> NbtIterator<'_, NbtList> {
        NbtIterator::new(self)
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, NbtValue> {
        self.items.iter_mut()
    }
}

/// Collects compounds into a list of compounds.
impl FromIterator<NbtCompound> for NbtList {
    fn from_iter<T: IntoIterator<Item = NbtCompound>>(iter: T) -> Self {
        Self {
            tag: Tag::Compound,
            items: iter.into_iter().map(NbtValue::Compound).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_checks_element_type() {
        let mut list = NbtList::new(Tag::Short);
        list.push(1i16).unwrap();
        assert_eq!(
            list.push(1i32),
            Err(NbtAccessError::TypeMismatch {
                expected: Tag::Short,
                found: Tag::Int
            })
        );
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn add_compound_requires_compound_list() {
        let mut list = NbtList::new(Tag::Compound);
        list.add_compound().unwrap().set("id", 1i16);
        assert_eq!(list.len(), 1);
        assert_eq!(list.get(0).unwrap().get("id"), Ok(&NbtValue::Short(1)));

        let mut ints = NbtList::new(Tag::Int);
        assert_eq!(
            ints.add_compound(),
            Err(NbtAccessError::TypeMismatch {
                expected: Tag::Compound,
                found: Tag::Int
            })
        );
        assert!(ints.is_empty());
    }

    #[test]
    fn collect_compounds() {
        let list: NbtList = (0..3i16)
            .map(|id| {
                let mut compound = NbtCompound::new();
                compound.set("id", id);
                compound
            })
            .collect();
        assert_eq!(list.element_tag(), Tag::Compound);
        assert_eq!(list.len(), 3);
        assert_eq!(list.get(2).unwrap().get("id"), Ok(&NbtValue::Short(2)));

        let empty: NbtList = std::iter::empty::<NbtCompound>().collect();
        assert_eq!(empty.element_tag(), Tag::Compound);
    }

    #[test]
    fn remove_out_of_range() {
        let mut list = NbtList::new(Tag::Byte);
        list.push(1i8).unwrap();
        list.push(2i8).unwrap();
        assert_eq!(list.remove(5), None);
        assert_eq!(list.remove(0), Some(NbtValue::Byte(1)));
        assert_eq!(list.get(0), Some(&NbtValue::Byte(2)));
    }
}
