//! The NBT tag tree: an owned, strongly typed document model and its gzip-compressed
//! big-endian binary codec.

use std::{
    io::{Read, Write},
    ops::{Deref, DerefMut},
};

use flate2::{read::GzDecoder, write::GzEncoder, Compression};

pub use crate::compound::*;
pub use crate::error::*;
pub use crate::iterator::*;
pub use crate::list::*;
pub use crate::marker::*;
pub use crate::parse::MAX_DEPTH;
pub use crate::tag::*;
pub use crate::value::*;
pub use crate::visitor::*;

pub(crate) mod compound;
pub(crate) mod error;
pub mod iterator;
pub(crate) mod list;
pub mod marker;
pub(crate) mod parse;
pub(crate) mod tag;
pub mod value;
pub mod visitor;
pub(crate) mod write;

/// An NBT document, with a named Compound as root tag.
///
/// Derefs to the root [`NbtCompound`], so `nbt.get("name")` looks up a root child.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Nbt {
    pub(crate) name: String,
    pub(crate) root: NbtCompound,
}

impl Nbt {
    /// Makes a document with an empty root compound named `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            root: NbtCompound::new(),
        }
    }

    /// Makes a document out of a root value, which must be a compound.
    pub fn from_value(name: impl Into<String>, value: NbtValue) -> Result<Self, NbtAccessError> {
        match value {
            NbtValue::Compound(root) => Ok(Self {
                name: name.into(),
                root,
            }),
            other => Err(NbtAccessError::TypeMismatch {
                expected: Tag::Compound,
                found: other.tag(),
            }),
        }
    }

    /// Parses an uncompressed document.
    pub fn from_bytes(source: &[u8]) -> Result<Self, NbtParseError> {
        parse::parse(source)
    }

    /// Decompresses and parses a gzip-compressed document.
    pub fn from_gzip(source: &[u8]) -> Result<Self, NbtParseError> {
        let mut decoder = GzDecoder::new(source);
        let mut buf = Vec::with_capacity(source.len() * 4);
        decoder.read_to_end(&mut buf)?;
        Self::from_bytes(&buf)
    }

    /// Encodes this document without compression.
    pub fn to_bytes(&self) -> Result<Vec<u8>, NbtEncodeError> {
        let mut buf = Vec::with_capacity(256);
        write::put_header(&mut buf, Tag::Compound, &self.name)?;
        write::put_compound(&mut buf, &self.root)?;
        Ok(buf)
    }

    /// Encodes and gzip-compresses this document.
    pub fn to_gzip(&self) -> Result<Vec<u8>, NbtEncodeError> {
        let bytes = self.to_bytes()?;
        let mut encoder = GzEncoder::new(
            Vec::with_capacity(bytes.len() / 2),
            Compression::default(),
        );
        encoder.write_all(&bytes)?;
        Ok(encoder.finish()?)
    }

    /// The root compound's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn root(&self) -> &NbtCompound {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut NbtCompound {
        &mut self.root
    }

    pub fn into_root(self) -> NbtCompound {
        self.root
    }

    /// Walks the whole document depth-first, root compound included.
    pub fn visit<V: NbtVisitor>(&self, visitor: &mut V) -> Result<(), V::Err> {
        visitor::walk_compound(Some(self.name.as_str()), &self.root, visitor)
    }
}

impl Deref for Nbt {
    type Target = NbtCompound;

    fn deref(&self) -> &Self::Target {
        &self.root
    }
}

impl DerefMut for Nbt {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.root
    }
}

/// Decodes a gzip-compressed document.
pub fn decode(bytes: &[u8]) -> Result<Nbt, NbtParseError> {
    Nbt::from_gzip(bytes)
}

/// Encodes a document, gzip-compressed.
pub fn encode(nbt: &Nbt) -> Result<Vec<u8>, NbtEncodeError> {
    nbt.to_gzip()
}
