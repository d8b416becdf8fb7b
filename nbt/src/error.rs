use thiserror::Error;

use crate::Tag;

/// The input is not a well-formed document.
#[derive(Debug, Error)]
pub enum NbtParseError {
    #[error("wrong starting NBT tag {tag:?}, expected {expected:?}")]
    WrongStartingTag { tag: Tag, expected: Tag },
    #[error("invalid NBT tag {value} at position {pos}")]
    InvalidTag { value: u8, pos: usize },
    #[error("invalid NBT list type {tag:?} for a list of {len} elements")]
    InvalidListType { tag: Tag, len: usize },
    #[error("negative NBT length {len} at position {pos}")]
    NegativeLength { len: i32, pos: usize },
    #[error("NBT length {len} at position {pos} exceeds the {remaining} remaining bytes")]
    LengthOutOfBounds {
        len: usize,
        remaining: usize,
        pos: usize,
    },
    #[error("sudden end of data at position {pos}, expected {needed} more bytes")]
    SuddenEnd { pos: usize, needed: usize },
    #[error("NBT string at position {pos} is not valid UTF-8")]
    StringDecoding {
        pos: usize,
        #[source]
        source: std::string::FromUtf8Error,
    },
    #[error("NBT containers nested deeper than {} at position {pos}", crate::MAX_DEPTH)]
    TooDeep { pos: usize },
    #[error("NBT decompression error")]
    Decompression(#[from] std::io::Error),
}

/// A field lookup or typed extraction that doesn't match the tree's shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NbtAccessError {
    #[error("missing NBT field {name:?}")]
    MissingField { name: String },
    #[error("NBT type mismatch, expected {expected:?} but found {found:?}")]
    TypeMismatch { expected: Tag, found: Tag },
}

/// A tree that can't be represented in the binary format.
#[derive(Debug, Error)]
pub enum NbtEncodeError {
    #[error("NBT name or string is {len} bytes long, at most {} are allowed", u16::MAX)]
    StringTooLong { len: usize },
    #[error("NBT list or array has {len} elements, at most {} are allowed", i32::MAX)]
    ListTooLong { len: usize },
    #[error("bare NBT end tag can't be written as a value")]
    StrayEnd,
    #[error("NBT list of {expected:?} holds a {found:?} element")]
    MixedList { expected: Tag, found: Tag },
    #[error("NBT compression error")]
    Compression(#[from] std::io::Error),
}
