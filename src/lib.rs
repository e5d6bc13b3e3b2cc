//! pbjson – descriptor-driven JSON codec for fixed-layout message structs
//!
//! Messages are plain structs with fixed-capacity strings and arrays, the
//! shape a schema compiler for constrained targets emits. A static
//! [`MessageDescriptor`] per struct, usually built with [`json_message!`],
//! tells the codec which fields exist and how to reach their storage.
//! Encoding writes into a caller-supplied buffer and never grows it;
//! decoding writes into the caller's message. Neither path allocates.
//!
//! # Beispiel
//!
//! ```
//! use pbjson::{decode, encode, json_message};
//!
//! #[derive(Debug, Default, Clone, PartialEq)]
//! struct Position {
//!     lat: f64,
//!     lon: f64,
//! }
//!
//! #[derive(Debug, Default, Clone, PartialEq)]
//! struct Report {
//!     device: [u8; 16],
//!     fix: Position,
//!     has_fix: bool,
//!     levels: [u8; 4],
//!     levels_count: u32,
//! }
//!
//! json_message!(Position {
//!     singular lat: Double,
//!     singular lon: Double,
//! });
//!
//! json_message!(Report {
//!     singular device: String,
//!     optional fix: Message [has_fix],
//!     repeated levels: UInt32 [levels_count],
//! });
//!
//! let mut report = Report::default();
//! report.device[..4].copy_from_slice(b"pump");
//! report.levels[..2].copy_from_slice(&[3, 9]);
//! report.levels_count = 2;
//!
//! // Encode
//! let mut buf = [0u8; 128];
//! let len = encode(&mut buf, &report).unwrap();
//! assert_eq!(&buf[..len], br#"{"device":"pump","levels":[3,9]}"#);
//!
//! // Decode
//! let mut decoded = Report::default();
//! decode(&buf[..len], &mut decoded).unwrap();
//! assert_eq!(decoded, report);
//! ```

pub mod cell;
pub mod compat;
pub mod cursor;
pub mod decoder;
pub mod descriptor;
pub mod encoder;
pub mod error;
mod macros;
pub mod number;
pub mod writer;

#[cfg(test)]
mod testing;

pub use error::{Error, ErrorClass, Result};

// Public API: Descriptor-Modell
pub use cell::{AsCell, Cell, CellMut};
pub use descriptor::{
    Aux, Cardinality, DynMessage, Element, FieldDescriptor, FieldKind, Message, MessageDescriptor,
    Presence,
};

// Public API: Encoder / Decoder
pub use decoder::{decode, decode_with_config, DecodeConfig, DecodeMode};
pub use encoder::{encode, encode_with_config, EncodeConfig};
