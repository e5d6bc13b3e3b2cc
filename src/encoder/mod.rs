//! JSON encoder.
//!
//! Walks a message's descriptor in declaration order and emits JSON object
//! syntax through the bounded [`JsonWriter`]. Nested messages recurse via
//! [`DynMessage`](crate::descriptor::DynMessage); repeated fields become
//! arrays of `count` elements.
//!
//! # Beispiel
//!
//! ```
//! use pbjson::{encode, json_message};
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
//! let mut buf = [0u8; 64];
//! let len = encode(&mut buf, &Point { x: 1.23, y: -12 }).unwrap();
//! assert_eq!(&buf[..len], br#"{"x":1.230000,"y":-12}"#);
//! assert_eq!(buf[len], 0);
//! ```

mod config;

pub use config::EncodeConfig;

use crate::cell::Cell;
use crate::descriptor::{Aux, FieldDescriptor, FieldKind, Message};
use crate::writer::JsonWriter;
use crate::{Error, Result};

/// Encodes `msg` into `buf` with the default configuration.
///
/// Returns the text length (terminator excluded). The buffer is always
/// NUL-terminated at the writer's final position, also on failure, except
/// when `buf` is shorter than 3 bytes: then nothing is written.
pub fn encode<M: Message>(buf: &mut [u8], msg: &M) -> Result<usize> {
    encode_with_config(buf, msg, &EncodeConfig::default())
}

/// Encodes `msg` into `buf` with an explicit configuration.
pub fn encode_with_config<M: Message>(buf: &mut [u8], msg: &M, config: &EncodeConfig) -> Result<usize> {
    let mut writer = JsonWriter::new(buf, config.float_precision)?;
    let result = encode_object(&mut writer, msg);
    let len = writer.terminate();
    result.map(|()| len)
}

/// Emits one message as a JSON object.
pub(crate) fn encode_object<M: Message>(writer: &mut JsonWriter<'_>, msg: &M) -> Result<()> {
    writer.begin_object()?;
    for field in M::descriptor().fields {
        if !field.is_present(msg) {
            continue;
        }
        writer.put_key(field.name)?;
        match field.aux {
            Aux::Count { get, .. } => encode_array(writer, field, msg, get(msg))?,
            Aux::None | Aux::Presence { .. } => {
                let cell = (field.element.get)(msg, 0).ok_or_else(|| mismatch(field))?;
                encode_value(writer, field, cell)?;
            }
        }
    }
    writer.end_object()
}

fn encode_array<M>(writer: &mut JsonWriter<'_>, field: &FieldDescriptor<M>, msg: &M, count: u32) -> Result<()> {
    writer.put_char(b'[')?;
    for i in 0..count as usize {
        let Some(cell) = (field.element.get)(msg, i) else {
            return Err(Error::ArrayCapacityExceeded { field: field.name, capacity: i });
        };
        if i > 0 {
            writer.put_char(b',')?;
        }
        encode_value(writer, field, cell)?;
    }
    writer.put_char(b']')
}

/// Emits one element according to the field kind and the cell's width.
fn encode_value<M>(writer: &mut JsonWriter<'_>, field: &FieldDescriptor<M>, cell: Cell<'_>) -> Result<()> {
    use FieldKind as K;

    match (field.kind, cell) {
        (K::Message, Cell::Message(sub)) => sub.encode_json_object(writer),
        (K::String, Cell::Str(raw)) => writer.put_string(raw),
        (K::Bool, Cell::Bool(v)) => writer.put_bool(*v),

        (K::Enum | K::Int32 | K::Int64, Cell::I8(v)) => writer.put_signed(i64::from(*v)),
        (K::Enum | K::Int32 | K::Int64, Cell::I16(v)) => writer.put_signed(i64::from(*v)),
        (K::Enum | K::Int32 | K::Int64, Cell::I32(v)) => writer.put_signed(i64::from(*v)),
        (K::Int64, Cell::I64(v)) => writer.put_signed(*v),

        (K::UEnum | K::UInt32 | K::UInt64, Cell::U8(v)) => writer.put_unsigned(u64::from(*v)),
        (K::UEnum | K::UInt32 | K::UInt64, Cell::U16(v)) => writer.put_unsigned(u64::from(*v)),
        (K::UEnum | K::UInt32 | K::UInt64, Cell::U32(v)) => writer.put_unsigned(u64::from(*v)),
        (K::UInt64, Cell::U64(v)) => writer.put_unsigned(*v),

        (K::Float | K::Double, Cell::F32(v)) => writer.put_float(f64::from(*v)),
        (K::Double, Cell::F64(v)) => writer.put_float(*v),

        _ => Err(mismatch(field)),
    }
}

fn mismatch<M>(field: &FieldDescriptor<M>) -> Error {
    Error::DescriptorMismatch {
        field: field.name,
        kind: field.kind,
    }
}
