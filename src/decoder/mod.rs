//! JSON decoder.
//!
//! Recursive descent over the text, driven by the destination's descriptor.
//! Before any structural parsing the whole input runs through the
//! balanced-brace pre-pass ([`check_balanced`]); input that fails it leaves
//! the message untouched. Decoded values are written straight into the
//! caller's message, together with presence flags and count fields.
//! Unknown keys are skipped.
//!
//! # Beispiel
//!
//! ```
//! use pbjson::{decode, json_message};
//!
//! #[derive(Default)]
//! struct Point {
//!     x: f32,
//!     y: i32,
//! }
//!
//! json_message!(Point {
//!     singular x: Float,
//!     singular y: Int32,
//! });
//!
//! let mut p = Point::default();
//! decode(br#"{ "y": -25, "z": [1, 2], "x": 1.27 }"#, &mut p).unwrap();
//! assert_eq!(p.x, 1.27);
//! assert_eq!(p.y, -25);
//! ```

mod config;

pub use config::{DecodeConfig, DecodeMode};

use crate::cell::CellMut;
use crate::cursor::{check_balanced, TextCursor, MAX_NESTING_DEPTH};
use crate::descriptor::{Aux, FieldDescriptor, FieldKind, Message, Presence};
use crate::number::{
    narrow, parse_enum_signed, parse_enum_unsigned, parse_f32, parse_f64, parse_signed, parse_unsigned,
};
use crate::{Error, Result};

/// Decodes `text` into `msg` in place.
///
/// `text` ends at its first NUL byte, if any. Bytes after the top-level
/// object are ignored. On a structural error found after the pre-pass,
/// `msg` may be partially updated; use [`decode_with_config`] with
/// [`DecodeMode::Staged`] to avoid that.
pub fn decode<M: Message>(text: &[u8], msg: &mut M) -> Result<()> {
    check_balanced(text, MAX_NESTING_DEPTH)?;
    let mut cursor = TextCursor::new(text);
    decode_object(&mut cursor, msg, false).map(drop)
}

/// Decodes `text` into `msg` with an explicit configuration.
pub fn decode_with_config<M: Message + Clone>(text: &[u8], msg: &mut M, config: &DecodeConfig) -> Result<()> {
    check_balanced(text, config.max_depth)?;
    let mut cursor = TextCursor::new(text);

    match config.mode {
        DecodeMode::InPlace => decode_object(&mut cursor, msg, false).map(drop),
        DecodeMode::Staged => {
            let mut staged = msg.clone();
            match decode_object(&mut cursor, &mut staged, false) {
                Ok(_) => {
                    *msg = staged;
                    Ok(())
                }
                Err(e) => {
                    log::trace!("{}: discarding staged decode: {e}", M::descriptor().name);
                    Err(e)
                }
            }
        }
    }
}

/// Decodes one JSON object into `msg`.
///
/// `{}` yields [`Presence::Absent`] when `optional` is set and
/// [`Error::EmptyMessage`] otherwise.
pub(crate) fn decode_object<M: Message>(
    cursor: &mut TextCursor<'_>,
    msg: &mut M,
    optional: bool,
) -> Result<Presence> {
    cursor.skip_whitespace()?;
    let start = cursor.position();
    cursor.expect_char(b'{')?;
    if cursor.peek_empty(b'}')? {
        if optional {
            return Ok(Presence::Absent);
        }
        return Err(Error::EmptyMessage { position: start });
    }

    let descriptor = M::descriptor();
    loop {
        let key = cursor.read_key()?;
        cursor.expect_char(b':')?;
        match descriptor.field(key) {
            Some(field) => decode_member(cursor, field, msg)?,
            None => cursor.skip_value()?,
        }
        if !cursor.next_separator(b'}')? {
            break;
        }
    }
    Ok(Presence::Present)
}

fn decode_member<M>(cursor: &mut TextCursor<'_>, field: &FieldDescriptor<M>, msg: &mut M) -> Result<()> {
    match field.aux {
        Aux::Count { set, .. } => decode_array(cursor, field, msg, set),
        Aux::Presence { set, .. } if field.kind == FieldKind::Message => {
            set(msg, true);
            let cell = (field.element.get_mut)(msg, 0).ok_or_else(|| mismatch(field))?;
            if decode_value(cursor, field, cell, true)? == Presence::Absent {
                set(msg, false);
            }
            Ok(())
        }
        Aux::Presence { set, .. } => {
            // Flag vor dem Wert setzen; bei Fehler bleibt es gesetzt.
            set(msg, true);
            let cell = (field.element.get_mut)(msg, 0).ok_or_else(|| mismatch(field))?;
            decode_value(cursor, field, cell, false).map(drop)
        }
        Aux::None => {
            let cell = (field.element.get_mut)(msg, 0).ok_or_else(|| mismatch(field))?;
            decode_value(cursor, field, cell, false).map(drop)
        }
    }
}

/// Decodes `[v, v, ...]` into consecutive elements and stores the count.
fn decode_array<M>(
    cursor: &mut TextCursor<'_>,
    field: &FieldDescriptor<M>,
    msg: &mut M,
    set_count: fn(&mut M, u32),
) -> Result<()> {
    cursor.expect_char(b'[')?;
    let mut count = 0usize;
    if !cursor.peek_empty(b']')? {
        loop {
            let Some(cell) = (field.element.get_mut)(msg, count) else {
                return Err(Error::ArrayCapacityExceeded { field: field.name, capacity: count });
            };
            // Array-Elemente sind nie optional.
            decode_value(cursor, field, cell, false)?;
            count += 1;
            if !cursor.next_separator(b']')? {
                break;
            }
        }
    }
    let count = u32::try_from(count).map_err(|_| Error::ArrayCapacityExceeded {
        field: field.name,
        capacity: count,
    })?;
    set_count(msg, count);
    Ok(())
}

/// Decodes one value into `cell` according to the field kind.
fn decode_value<M>(
    cursor: &mut TextCursor<'_>,
    field: &FieldDescriptor<M>,
    cell: CellMut<'_>,
    optional: bool,
) -> Result<Presence> {
    use FieldKind as K;

    cursor.skip_whitespace()?;
    let position = cursor.position();

    match (field.kind, cell) {
        (K::Message, CellMut::Message(sub)) => return sub.decode_json_object(cursor, optional),
        (K::String, CellMut::Str(dst)) => decode_string(cursor, dst)?,
        (K::Bool, CellMut::Bool(dst)) => *dst = decode_bool(cursor)?,

        // Enums: als i32/u32 parsen, dann auf die Zellbreite abschneiden.
        (K::Enum, CellMut::I8(dst)) => *dst = decode_enum(cursor)? as i8,
        (K::Enum, CellMut::I16(dst)) => *dst = decode_enum(cursor)? as i16,
        (K::Enum, CellMut::I32(dst)) => *dst = decode_enum(cursor)?,
        (K::UEnum, CellMut::U8(dst)) => *dst = decode_uenum(cursor)? as u8,
        (K::UEnum, CellMut::U16(dst)) => *dst = decode_uenum(cursor)? as u16,
        (K::UEnum, CellMut::U32(dst)) => *dst = decode_uenum(cursor)?,

        (K::Int32 | K::Int64, CellMut::I8(dst)) => *dst = narrow(parse_signed(cursor)?, position)?,
        (K::Int32 | K::Int64, CellMut::I16(dst)) => *dst = narrow(parse_signed(cursor)?, position)?,
        (K::Int32 | K::Int64, CellMut::I32(dst)) => *dst = narrow(parse_signed(cursor)?, position)?,
        (K::Int64, CellMut::I64(dst)) => *dst = parse_signed(cursor)?,

        (K::UInt32 | K::UInt64, CellMut::U8(dst)) => *dst = narrow(parse_unsigned(cursor)?, position)?,
        (K::UInt32 | K::UInt64, CellMut::U16(dst)) => *dst = narrow(parse_unsigned(cursor)?, position)?,
        (K::UInt32 | K::UInt64, CellMut::U32(dst)) => *dst = narrow(parse_unsigned(cursor)?, position)?,
        (K::UInt64, CellMut::U64(dst)) => *dst = parse_unsigned(cursor)?,

        (K::Float | K::Double, CellMut::F32(dst)) => *dst = parse_f32(cursor)?,
        (K::Double, CellMut::F64(dst)) => *dst = parse_f64(cursor)?,

        _ => return Err(mismatch(field)),
    }
    Ok(Presence::Present)
}

/// Copies a quoted string into a fixed-capacity buffer.
///
/// Stops at the closing quote (which is consumed and replaced by a NUL) or
/// once the buffer is full. In the latter case no terminator is written and
/// the cursor stays inside the literal.
fn decode_string(cursor: &mut TextCursor<'_>, dst: &mut [u8]) -> Result<()> {
    let start = cursor.position();
    cursor.expect_char(b'"')?;
    for slot in dst.iter_mut() {
        match cursor.peek() {
            Some(b'"') => {
                cursor.advance(1);
                *slot = 0;
                return Ok(());
            }
            Some(b) => {
                *slot = b;
                cursor.advance(1);
            }
            None => {
                *slot = 0;
                return Err(Error::UnterminatedString { position: start });
            }
        }
    }
    Ok(())
}

fn decode_bool(cursor: &mut TextCursor<'_>) -> Result<bool> {
    if cursor.eat_literal(b"true") {
        Ok(true)
    } else if cursor.eat_literal(b"false") {
        Ok(false)
    } else {
        Err(Error::InvalidBool { position: cursor.position() })
    }
}

// Enums wrap into 32 bits like the C `int`/`unsigned` they model.
fn decode_enum(cursor: &mut TextCursor<'_>) -> Result<i32> {
    Ok(parse_enum_signed(cursor)? as i32)
}

fn decode_uenum(cursor: &mut TextCursor<'_>) -> Result<u32> {
    Ok(parse_enum_unsigned(cursor)? as u32)
}

fn mismatch<M>(field: &FieldDescriptor<M>) -> Error {
    Error::DescriptorMismatch {
        field: field.name,
        kind: field.kind,
    }
}
