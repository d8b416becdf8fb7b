use bytes::BufMut;

use crate::*;

fn put_string<B: BufMut>(buf: &mut B, string: &str) -> Result<(), NbtEncodeError> {
    let len = u16::try_from(string.len())
        .map_err(|_| NbtEncodeError::StringTooLong { len: string.len() })?;
    buf.put_u16(len);
    buf.put_slice(string.as_bytes());
    Ok(())
}

fn put_len<B: BufMut>(buf: &mut B, len: usize) -> Result<(), NbtEncodeError> {
    let len = i32::try_from(len).map_err(|_| NbtEncodeError::ListTooLong { len })?;
    buf.put_i32(len);
    Ok(())
}

/// Writes the tag and name that precede a named payload.
pub(crate) fn put_header<B: BufMut>(
    buf: &mut B,
    tag: Tag,
    name: &str,
) -> Result<(), NbtEncodeError> {
    buf.put_u8(tag.to_u8());
    put_string(buf, name)
}

/// Writes a named value: tag, name length, name, payload.
pub(crate) fn put_named<B: BufMut>(
    buf: &mut B,
    name: &str,
    value: &NbtValue,
) -> Result<(), NbtEncodeError> {
    if let NbtValue::End = value {
        return Err(NbtEncodeError::StrayEnd);
    }
    put_header(buf, value.tag(), name)?;
    put_payload(buf, value)
}

pub(crate) fn put_compound<B: BufMut>(
    buf: &mut B,
    compound: &NbtCompound,
) -> Result<(), NbtEncodeError> {
    for (name, value) in compound {
        put_named(buf, name, value)?;
    }
    buf.put_u8(Tag::End.to_u8());
    Ok(())
}

/// Writes the type-specific payload of `value`. List elements are written with this alone.
fn put_payload<B: BufMut>(buf: &mut B, value: &NbtValue) -> Result<(), NbtEncodeError> {
    match value {
        NbtValue::End => return Err(NbtEncodeError::StrayEnd),
        NbtValue::Byte(v) => buf.put_i8(*v),
        NbtValue::Short(v) => buf.put_i16(*v),
        NbtValue::Int(v) => buf.put_i32(*v),
        NbtValue::Long(v) => buf.put_i64(*v),
        NbtValue::Float(v) => buf.put_f32(*v),
        NbtValue::Double(v) => buf.put_f64(*v),
        NbtValue::ByteArray(v) => {
            put_len(buf, v.len())?;
            buf.put_slice(v);
        }
        NbtValue::String(v) => put_string(buf, v)?,
        NbtValue::List(list) => {
            buf.put_u8(list.element_tag().to_u8());
            put_len(buf, list.len())?;
            for element in list {
                if element.tag() != list.element_tag() {
                    return Err(NbtEncodeError::MixedList {
                        expected: list.element_tag(),
                        found: element.tag(),
                    });
                }
                put_payload(buf, element)?;
            }
        }
        NbtValue::Compound(compound) => put_compound(buf, compound)?,
        NbtValue::IntArray(v) => {
            put_len(buf, v.len())?;
            for int in v {
                buf.put_i32(*int);
            }
        }
    }
    Ok(())
}
