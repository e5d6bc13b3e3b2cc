//! Field descriptor model.
//!
//! A [`MessageDescriptor`] is the static, read-only table a schema generator
//! emits for one message type: an ordered list of [`FieldDescriptor`]s, each
//! naming the JSON key, the value kind, the cardinality and the typed
//! accessors that replace raw byte offsets.
//!
//! # Beispiel
//!
//! ```
//! use pbjson::{json_message, Cardinality, FieldKind, Message};
//!
//! #[derive(Default)]
//! struct Reading {
//!     celsius: f32,
//!     samples: [i32; 4],
//!     samples_count: u32,
//! }
//!
//! json_message!(Reading {
//!     singular celsius: Float,
//!     repeated samples: Int32 [samples_count],
//! });
//!
//! let desc = Reading::descriptor();
//! assert_eq!(desc.fields[0].name, "celsius");
//! assert_eq!(desc.fields[1].kind, FieldKind::Int32);
//! assert_eq!(desc.fields[1].cardinality(), Cardinality::Repeated);
//! assert_eq!(desc.fields[1].element_size(&Reading::default()), Some(4));
//! ```

use core::fmt;

use crate::cell::{Cell, CellMut};
use crate::cursor::TextCursor;
use crate::writer::JsonWriter;
use crate::Result;

/// Value kind of a field. Numeric kinds fix the signedness class; the width
/// comes from the storage cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Bool,
    /// Signed enum stored in a 1, 2 or 4 byte cell.
    Enum,
    /// Unsigned enum stored in a 1, 2 or 4 byte cell.
    UEnum,
    Float,
    Double,
    Int32,
    Int64,
    UInt32,
    UInt64,
    String,
    Message,
}

impl FieldKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Enum => "enum",
            Self::UEnum => "uenum",
            Self::Float => "float",
            Self::Double => "double",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::UInt32 => "uint32",
            Self::UInt64 => "uint64",
            Self::String => "string",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How many values a field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    /// Always present.
    Singular,
    /// Present iff its presence flag is set.
    Optional,
    /// Fixed-capacity array with a count cell.
    Repeated,
}

/// Auxiliary storage of a field, selected by its cardinality.
pub enum Aux<M> {
    /// Singular field, no auxiliary cell.
    None,
    /// Optional field: boolean presence flag.
    Presence {
        get: fn(&M) -> bool,
        set: fn(&mut M, bool),
    },
    /// Repeated field: number of populated elements.
    Count {
        get: fn(&M) -> u32,
        set: fn(&mut M, u32),
    },
}

impl<M> Clone for Aux<M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M> Copy for Aux<M> {}

/// Typed accessor pair for the elements of a field.
///
/// Singular and optional fields answer index 0 only. Repeated fields answer
/// every index below the array capacity and `None` beyond it.
pub struct Element<M> {
    pub get: for<'a> fn(&'a M, usize) -> Option<Cell<'a>>,
    pub get_mut: for<'a> fn(&'a mut M, usize) -> Option<CellMut<'a>>,
}

impl<M> Clone for Element<M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M> Copy for Element<M> {}

/// Static metadata of one message field.
pub struct FieldDescriptor<M> {
    /// Key as it appears in JSON.
    pub name: &'static str,
    pub kind: FieldKind,
    pub aux: Aux<M>,
    pub element: Element<M>,
}

impl<M> FieldDescriptor<M> {
    pub fn cardinality(&self) -> Cardinality {
        match self.aux {
            Aux::None => Cardinality::Singular,
            Aux::Presence { .. } => Cardinality::Optional,
            Aux::Count { .. } => Cardinality::Repeated,
        }
    }

    /// Whether the encoder emits this field for `msg`.
    ///
    /// Singular and repeated fields are always emitted, optional fields only
    /// when their presence flag is set.
    pub fn is_present(&self, msg: &M) -> bool {
        match self.aux {
            Aux::Presence { get, .. } => get(msg),
            Aux::None | Aux::Count { .. } => true,
        }
    }

    /// Populated element count of a repeated field, `None` otherwise.
    pub fn count(&self, msg: &M) -> Option<u32> {
        match self.aux {
            Aux::Count { get, .. } => Some(get(msg)),
            _ => None,
        }
    }

    /// Size in bytes of one element of this field in `msg`.
    pub fn element_size(&self, msg: &M) -> Option<usize> {
        (self.element.get)(msg, 0).map(|cell| cell.width())
    }

    /// Number of elements the field's storage can hold.
    pub fn capacity(&self, msg: &M) -> usize {
        match self.aux {
            Aux::Count { .. } => (0..).take_while(|&i| (self.element.get)(msg, i).is_some()).count(),
            _ => 1,
        }
    }
}

impl<M> fmt::Debug for FieldDescriptor<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("cardinality", &self.cardinality())
            .finish()
    }
}

/// Ordered field table of one message type.
///
/// Field order is the JSON emission order and the lookup order on decode:
/// the first field whose name matches a key wins.
pub struct MessageDescriptor<M: 'static> {
    pub name: &'static str,
    pub fields: &'static [FieldDescriptor<M>],
}

impl<M: 'static> MessageDescriptor<M> {
    /// First field named `name`.
    pub fn field(&self, name: &[u8]) -> Option<&'static FieldDescriptor<M>> {
        self.fields.iter().find(|f| f.name.as_bytes() == name)
    }
}

impl<M: 'static> fmt::Debug for MessageDescriptor<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageDescriptor")
            .field("name", &self.name)
            .field("fields", &self.fields)
            .finish()
    }
}

/// A message struct with a static descriptor.
///
/// Normally implemented through [`json_message!`](crate::json_message).
pub trait Message: Sized + 'static {
    fn descriptor() -> &'static MessageDescriptor<Self>;
}

/// Result of decoding one JSON object into a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// `{}` for an optional message.
    Absent,
    /// At least one member was decoded.
    Present,
}

/// Object-safe recursion seam for nested messages.
///
/// Nested message cells erase the concrete struct type; this trait brings
/// the struct back together with its own descriptor. Implemented for every
/// [`Message`].
pub trait DynMessage {
    fn encode_json_object(&self, writer: &mut JsonWriter<'_>) -> Result<()>;

    /// `optional` selects what `{}` means: absent for an optional field, an
    /// error for a required message.
    fn decode_json_object(&mut self, cursor: &mut TextCursor<'_>, optional: bool) -> Result<Presence>;
}

impl<M: Message> DynMessage for M {
    fn encode_json_object(&self, writer: &mut JsonWriter<'_>) -> Result<()> {
        crate::encoder::encode_object(writer, self)
    }

    fn decode_json_object(&mut self, cursor: &mut TextCursor<'_>, optional: bool) -> Result<Presence> {
        crate::decoder::decode_object(cursor, self, optional)
    }
}
