//! Named, insertion-ordered children.

use indexmap::IndexMap;

use super::*;

macro_rules! item_getter {
    ($name:ident, $accessor:ident, $ret:ty) => {
        pub fn $name(&self, name: &str) -> Result<$ret, NbtAccessError> {
            self.get(name)?.$accessor()
        }
    };
}

macro_rules! item_getter_mut {
    ($name:ident, $accessor:ident, $ret:ty) => {
        pub fn $name(&mut self, name: &str) -> Result<$ret, NbtAccessError> {
            self.get_mut(name)?.$accessor()
        }
    };
}

/// An NBT compound. Names are unique and children keep the order they were first inserted in,
/// so re-encoding an untouched compound reproduces the decoded field order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NbtCompound {
    pub(crate) entries: IndexMap<String, NbtValue>,
}

impl NbtCompound {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Gets the child named `name`.
    pub fn get(&self, name: &str) -> Result<&NbtValue, NbtAccessError> {
        self.entries
            .get(name)
            .ok_or_else(|| NbtAccessError::MissingField {
                name: name.to_string(),
            })
    }

    pub fn get_mut(&mut self, name: &str) -> Result<&mut NbtValue, NbtAccessError> {
        self.entries
            .get_mut(name)
            .ok_or_else(|| NbtAccessError::MissingField {
                name: name.to_string(),
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Inserts or replaces the child `name`, returning the replaced value.
    /// A replaced child keeps its position, a new one goes at the end.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<NbtValue>) -> Option<NbtValue> {
        self.entries.insert(name.into(), value.into())
    }

    /// Removes the child `name`. Does nothing if there is none.
    pub fn remove(&mut self, name: &str) -> Option<NbtValue> {
        self.entries.shift_remove(name)
    }

    /// Attaches an empty list of `element_tag` values named `name` and returns it.
    pub fn add_list(&mut self, name: impl Into<String>, element_tag: Tag) -> &mut NbtList {
        match self.attach(name.into(), NbtList::new(element_tag).into()) {
            NbtValue::List(list) => list,
            _ => unreachable!(),
        }
    }

    /// Attaches an empty compound named `name` and returns it.
    pub fn add_compound(&mut self, name: impl Into<String>) -> &mut NbtCompound {
        match self.attach(name.into(), NbtCompound::new().into()) {
            NbtValue::Compound(compound) => compound,
            _ => unreachable!(),
        }
    }

    fn attach(&mut self, name: String, value: NbtValue) -> &mut NbtValue {
        let (i, _) = self.entries.insert_full(name, value);
        &mut self.entries[i]
    }

    /// Returns an [`NbtIterator`] over this compound's `(name, value)` pairs.
    pub fn iter(&self) -> NbtIterator<'_, NbtCompound> {
        NbtIterator::new(self)
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut NbtValue)> {
        self.entries
            .iter_mut()
            .map(|(name, value)| (name.as_str(), value))
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut NbtValue> {
        self.entries.values_mut()
    }

    item_getter!(byte, as_byte, i8);
    item_getter!(short, as_short, i16);
    item_getter!(int, as_int, i32);
    item_getter!(long, as_long, i64);
    item_getter!(float, as_float, f32);
    item_getter!(double, as_double, f64);
    item_getter!(byte_array, as_byte_array, &[u8]);
    item_getter!(string, as_string, &str);
    item_getter!(list, as_list, &NbtList);
    item_getter!(compound, as_compound, &NbtCompound);
    item_getter!(int_array, as_int_array, &[i32]);
    item_getter_mut!(list_mut, as_list_mut, &mut NbtList);
    item_getter_mut!(compound_mut, as_compound_mut, &mut NbtCompound);
}

#[cfg(feature = "serde")]
impl serde::Serialize for NbtCompound {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_map(self.iter())
    }
}
