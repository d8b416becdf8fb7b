use bytes::Buf;

use crate::*;

/// Deepest container nesting accepted by the decoder, counting the root compound.
pub const MAX_DEPTH: usize = 512;

/// A bounds-checked big-endian reader. Every read checks the remaining length first,
/// so truncated input is an error instead of a panic.
struct Reader<'source> {
    // The `&[u8]` is advanced by the `Buf` trait functions.
    source: &'source [u8],
    full_size: usize,
}

macro_rules! reader_get {
    ($name:ident, $ty:ty) => {
        fn $name(&mut self) -> Result<$ty, NbtParseError> {
            self.ensure(std::mem::size_of::<$ty>())?;
            Ok(self.source.$name())
        }
    };
}

impl<'source> Reader<'source> {
    fn new(source: &'source [u8]) -> Self {
        Self {
            source,
            full_size: source.len(),
        }
    }

    fn pos(&self) -> usize {
        self.full_size - self.source.remaining()
    }

    fn ensure(&self, needed: usize) -> Result<(), NbtParseError> {
        if self.source.remaining() < needed {
            return Err(NbtParseError::SuddenEnd {
                pos: self.pos(),
                needed: needed - self.source.remaining(),
            });
        }
        Ok(())
    }

    reader_get!(get_u8, u8);
    reader_get!(get_i8, i8);
    reader_get!(get_u16, u16);
    reader_get!(get_i16, i16);
    reader_get!(get_i32, i32);
    reader_get!(get_i64, i64);
    reader_get!(get_f32, f32);
    reader_get!(get_f64, f64);

    fn get_tag(&mut self) -> Result<Tag, NbtParseError> {
        let pos = self.pos();
        self.get_u8()?
            .try_into()
            .map_err(|value| NbtParseError::InvalidTag { value, pos })
    }

    /// Reads a four-byte element count, rejecting counts that can't fit in what's left
    /// given that each element takes at least `element_len` bytes.
    fn get_len(&mut self, element_len: usize) -> Result<usize, NbtParseError> {
        let pos = self.pos();
        let len = self.get_i32()?;
        let len = usize::try_from(len).map_err(|_| NbtParseError::NegativeLength { len, pos })?;
        let remaining = self.source.remaining();
        if len.saturating_mul(element_len) > remaining {
            return Err(NbtParseError::LengthOutOfBounds {
                len,
                remaining,
                pos,
            });
        }
        Ok(len)
    }

    fn get_string(&mut self) -> Result<String, NbtParseError> {
        let len = self.get_u16()? as usize;
        self.ensure(len)?;
        let pos = self.pos();
        let bytes = self.source[..len].to_vec();
        self.source.advance(len);
        String::from_utf8(bytes).map_err(|source| NbtParseError::StringDecoding { pos, source })
    }

    /// Reads the payload of a non-container value.
    fn get_payload(&mut self, tag: Tag) -> Result<NbtValue, NbtParseError> {
        Ok(match tag {
            Tag::Byte => NbtValue::Byte(self.get_i8()?),
            Tag::Short => NbtValue::Short(self.get_i16()?),
            Tag::Int => NbtValue::Int(self.get_i32()?),
            Tag::Long => NbtValue::Long(self.get_i64()?),
            Tag::Float => NbtValue::Float(self.get_f32()?),
            Tag::Double => NbtValue::Double(self.get_f64()?),
            Tag::ByteArray => {
                let len = self.get_len(1)?;
                let bytes = self.source[..len].to_vec();
                self.source.advance(len);
                NbtValue::ByteArray(bytes)
            }
            Tag::String => NbtValue::String(self.get_string()?),
            Tag::IntArray => {
                let len = self.get_len(4)?;
                let mut ints = Vec::with_capacity(len);
                for _ in 0..len {
                    ints.push(self.source.get_i32());
                }
                NbtValue::IntArray(ints)
            }
            // Containers are opened by the caller, and lists of end tags are rejected when opened.
            Tag::End | Tag::List | Tag::Compound => unreachable!(),
        })
    }
}

/// An open compound/list scope.
struct Scope {
    /// `None` for list elements.
    name: Option<String>,
    container: OpenContainer,
}

enum OpenContainer {
    Compound(NbtCompound),
    List { list: NbtList, remaining: usize },
}

impl Scope {
    fn close(self) -> (Option<String>, NbtValue) {
        let value = match self.container {
            OpenContainer::Compound(compound) => NbtValue::Compound(compound),
            OpenContainer::List { list, .. } => NbtValue::List(list),
        };
        (self.name, value)
    }

    fn attach(&mut self, name: Option<String>, value: NbtValue) {
        match &mut self.container {
            OpenContainer::Compound(compound) => {
                compound.set(name.unwrap_or_default(), value);
            }
            // The element type was fixed when the list was opened.
            OpenContainer::List { list, .. } => list.items.push(value),
        }
    }
}

/// Parses an uncompressed document. The root must be a compound; anything after its end tag is ignored.
///
/// Scopes are kept on an explicit stack instead of recursing. Nesting deeper than [`MAX_DEPTH`]
/// is rejected, since everything that walks the finished tree recurses.
pub(crate) fn parse(source: &[u8]) -> Result<Nbt, NbtParseError> {
    let mut reader = Reader::new(source);

    let tag = reader.get_tag()?;
    if tag != Tag::Compound {
        return Err(NbtParseError::WrongStartingTag {
            tag,
            expected: Tag::Compound,
        });
    }
    let root_name = reader.get_string()?;

    let mut stack = Vec::<Scope>::with_capacity(16);
    stack.push(Scope {
        name: Some(root_name),
        container: OpenContainer::Compound(NbtCompound::new()),
    });

    loop {
        let Some(top) = stack.last_mut() else {
            unreachable!()
        };

        // `None` means the current scope is finished.
        let next = match &mut top.container {
            OpenContainer::List { remaining: 0, .. } => None,
            OpenContainer::List { list, remaining } => {
                // If we are in a list scope, the tag is implied and there is no name.
                *remaining -= 1;
                Some((list.element_tag(), None))
            }
            OpenContainer::Compound(_) => match reader.get_tag()? {
                Tag::End => None,
                tag => Some((tag, Some(reader.get_string()?))),
            },
        };

        if matches!(next, Some((Tag::Compound | Tag::List, _))) && stack.len() >= MAX_DEPTH {
            return Err(NbtParseError::TooDeep { pos: reader.pos() });
        }

        match next {
            None => {
                let Some(scope) = stack.pop() else {
                    unreachable!()
                };
                let (name, value) = scope.close();
                match (stack.last_mut(), value) {
                    (Some(parent), value) => parent.attach(name, value),
                    (None, NbtValue::Compound(root)) => {
                        return Ok(Nbt {
                            name: name.unwrap_or_default(),
                            root,
                        })
                    }
                    (None, _) => unreachable!(),
                }
            }
            Some((Tag::Compound, name)) => stack.push(Scope {
                name,
                container: OpenContainer::Compound(NbtCompound::new()),
            }),
            Some((Tag::List, name)) => {
                let element_tag = reader.get_tag()?;
                let len = reader.get_len(element_tag.min_payload_len())?;
                // List tag may be end tag only if len == 0.
                if element_tag == Tag::End && len > 0 {
                    return Err(NbtParseError::InvalidListType {
                        tag: element_tag,
                        len,
                    });
                }
                stack.push(Scope {
                    name,
                    container: OpenContainer::List {
                        list: NbtList::with_capacity(element_tag, len),
                        remaining: len,
                    },
                });
            }
            Some((tag, name)) => {
                let value = reader.get_payload(tag)?;
                if let Some(parent) = stack.last_mut() {
                    parent.attach(name, value);
                }
            }
        }
    }
}
