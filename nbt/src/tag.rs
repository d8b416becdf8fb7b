use std::fmt::{Debug, Display};

/// The one-byte type discriminant written before every named value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[repr(u8)]
pub enum Tag {
    End = 0,
    Byte = 1,
    Short = 2,
    Int = 3,
    Long = 4,
    Float = 5,
    Double = 6,
    ByteArray = 7,
    String = 8,
    List = 9,
    Compound = 10,
    IntArray = 11,
}

impl Tag {
    #[inline]
    pub fn to_u8(self) -> u8 {
        self as u8
    }

    /// The smallest number of bytes a payload of this type can occupy.
    /// Used to reject declared lengths that can't possibly fit in the input.
    #[inline]
    pub const fn min_payload_len(self) -> usize {
        match self {
            Tag::End => 0,
            Tag::Byte => 1,
            Tag::Short => 2,
            Tag::Int | Tag::Float => 4,
            Tag::Long | Tag::Double => 8,
            Tag::ByteArray | Tag::IntArray => 4,
            Tag::String => 2,
            // Element type byte + element count.
            Tag::List => 5,
            // Just the end tag.
            Tag::Compound => 1,
        }
    }
}

impl TryFrom<u8> for Tag {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ok(match value {
            0 => Tag::End,
            1 => Tag::Byte,
            2 => Tag::Short,
            3 => Tag::Int,
            4 => Tag::Long,
            5 => Tag::Float,
            6 => Tag::Double,
            7 => Tag::ByteArray,
            8 => Tag::String,
            9 => Tag::List,
            10 => Tag::Compound,
            11 => Tag::IntArray,
            _ => return Err(value),
        })
    }
}

impl From<Tag> for u8 {
    #[inline]
    fn from(tag: Tag) -> u8 {
        tag.to_u8()
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Tag as Debug>::fmt(self, f)
    }
}
