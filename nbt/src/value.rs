//! NBT value representation and typed extraction.

use std::fmt::Display;

use derive_more::From;

use super::*;

/// One node of a document. Containers own their children, so a tree never shares nodes.
#[derive(Debug, Clone, PartialEq, From)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum NbtValue {
    End,
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(Vec<u8>),
    String(String),
    List(NbtList),
    Compound(NbtCompound),
    IntArray(Vec<i32>),
}

impl From<&str> for NbtValue {
    fn from(value: &str) -> Self {
        NbtValue::String(value.to_string())
    }
}

macro_rules! value_getter {
    ($name:ident, $variant:ident, $ret:ty) => {
        pub fn $name(&self) -> Result<$ret, NbtAccessError> {
            match self {
                NbtValue::$variant(v) => Ok(*v),
                other => Err(other.mismatch(Tag::$variant)),
            }
        }
    };
}

macro_rules! value_getter_ref {
    ($name:ident, $variant:ident, $ret:ty) => {
        pub fn $name(&self) -> Result<$ret, NbtAccessError> {
            match self {
                NbtValue::$variant(v) => Ok(v),
                other => Err(other.mismatch(Tag::$variant)),
            }
        }
    };
}

macro_rules! value_getter_mut {
    ($name:ident, $variant:ident, $ret:ty) => {
        pub fn $name(&mut self) -> Result<$ret, NbtAccessError> {
            match self {
                NbtValue::$variant(v) => Ok(v),
                other => Err(other.mismatch(Tag::$variant)),
            }
        }
    };
}

impl NbtValue {
    /// The type discriminant of this value.
    pub fn tag(&self) -> Tag {
        match self {
            NbtValue::End => Tag::End,
            NbtValue::Byte(_) => Tag::Byte,
            NbtValue::Short(_) => Tag::Short,
            NbtValue::Int(_) => Tag::Int,
            NbtValue::Long(_) => Tag::Long,
            NbtValue::Float(_) => Tag::Float,
            NbtValue::Double(_) => Tag::Double,
            NbtValue::ByteArray(_) => Tag::ByteArray,
            NbtValue::String(_) => Tag::String,
            NbtValue::List(_) => Tag::List,
            NbtValue::Compound(_) => Tag::Compound,
            NbtValue::IntArray(_) => Tag::IntArray,
        }
    }

    fn mismatch(&self, expected: Tag) -> NbtAccessError {
        NbtAccessError::TypeMismatch {
            expected,
            found: self.tag(),
        }
    }

    value_getter!(as_byte, Byte, i8);
    value_getter!(as_short, Short, i16);
    value_getter!(as_int, Int, i32);
    value_getter!(as_long, Long, i64);
    value_getter!(as_float, Float, f32);
    value_getter!(as_double, Double, f64);
    value_getter_ref!(as_list, List, &NbtList);
    value_getter_ref!(as_compound, Compound, &NbtCompound);
    value_getter_mut!(as_list_mut, List, &mut NbtList);
    value_getter_mut!(as_compound_mut, Compound, &mut NbtCompound);

    pub fn as_byte_array(&self) -> Result<&[u8], NbtAccessError> {
        match self {
            NbtValue::ByteArray(v) => Ok(v),
            other => Err(other.mismatch(Tag::ByteArray)),
        }
    }

    pub fn as_string(&self) -> Result<&str, NbtAccessError> {
        match self {
            NbtValue::String(v) => Ok(v),
            other => Err(other.mismatch(Tag::String)),
        }
    }

    pub fn as_int_array(&self) -> Result<&[i32], NbtAccessError> {
        match self {
            NbtValue::IntArray(v) => Ok(v),
            other => Err(other.mismatch(Tag::IntArray)),
        }
    }

    /// Gets the child `name` of this value. Anything but a Compound has no children.
    pub fn get(&self, name: &str) -> Result<&NbtValue, NbtAccessError> {
        match self {
            NbtValue::Compound(compound) => compound.get(name),
            _ => Err(NbtAccessError::MissingField {
                name: name.to_string(),
            }),
        }
    }
}

impl Display for NbtValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NbtValue::End => f.write_str("END"),
            NbtValue::Byte(v) => write!(f, "{}b", v),
            NbtValue::Short(v) => write!(f, "{}s", v),
            NbtValue::Int(v) => write!(f, "{}", v),
            NbtValue::Long(v) => write!(f, "{}L", v),
            NbtValue::Float(v) => write!(f, "{}f", v),
            NbtValue::Double(v) => write!(f, "{}d", v),
            NbtValue::ByteArray(v) => write!(f, "[{} bytes]", v.len()),
            NbtValue::String(v) => write!(f, "{:?}", v),
            NbtValue::List(v) => write!(f, "[{} {} entries]", v.len(), v.element_tag()),
            NbtValue::Compound(v) => write!(f, "{{{} entries}}", v.len()),
            NbtValue::IntArray(v) => write!(f, "[{} ints]", v.len()),
        }
    }
}
