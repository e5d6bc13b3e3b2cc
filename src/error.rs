//! Central error types for the JSON codec.
//!
//! Every failure is fail-fast: the first error at any recursion depth aborts
//! the whole encode/decode call. Unknown JSON keys are the only condition the
//! decoder recovers from, and they never surface here.

use core::fmt;
use std::borrow::Cow;

use crate::descriptor::FieldKind;

/// All errors the encoder and decoder can report.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The output buffer cannot even hold `{}` plus the terminator.
    BufferTooSmall { capacity: usize },
    /// Encoding would write past the end of the output buffer.
    CapacityOverflow { capacity: usize },
    /// A structural character other than the expected one was found.
    UnexpectedChar {
        position: usize,
        /// Was erwartet wurde (z.B. `'{'` oder `',' or '}'`).
        expected: Cow<'static, str>,
        found: u8,
    },
    /// Input ended in the middle of a structure.
    UnexpectedEnd { position: usize },
    /// A closing brace/bracket does not match its opener, or openers remain
    /// at end of input (balanced-brace pre-pass).
    UnbalancedNesting { position: usize },
    /// Nesting exceeds the depth limit of the balanced-brace pre-pass.
    NestingTooDeep { max_depth: usize },
    /// A string literal has no closing quote.
    UnterminatedString { position: usize },
    /// No numeric characters could be consumed at this position.
    InvalidNumber { position: usize },
    /// A number was parsed but does not fit the destination cell.
    NumberOutOfRange { position: usize },
    /// Neither `true` nor `false` at this position.
    InvalidBool { position: usize },
    /// A required message (top-level or array element) was given as `{}`.
    EmptyMessage { position: usize },
    /// A repeated field has more elements than its fixed array holds.
    ArrayCapacityExceeded { field: &'static str, capacity: usize },
    /// The descriptor's kind does not match the storage cell of the field.
    ///
    /// Deutet auf eine inkonsistente Descriptor-Tabelle hin, nicht auf
    /// fehlerhaften Input.
    DescriptorMismatch { field: &'static str, kind: FieldKind },
}

/// Coarse classification of [`Error`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Output capacity exhausted (encode).
    Overflow,
    /// Malformed JSON text (decode).
    Syntax,
    /// A value could not be converted (decode).
    Format,
    /// Well-formed text that does not fit the message structure (decode).
    Structure,
    /// Internally inconsistent descriptor table.
    Descriptor,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BufferTooSmall { capacity } => {
                write!(f, "output buffer of {capacity} bytes is too small (minimum 3)")
            }
            Self::CapacityOverflow { capacity } => {
                write!(f, "output exceeds buffer capacity of {capacity} bytes")
            }
            Self::UnexpectedChar { position, expected, found } => write!(
                f,
                "unexpected character '{}' at offset {position}, expected {expected}",
                found.escape_ascii()
            ),
            Self::UnexpectedEnd { position } => {
                write!(f, "unexpected end of input at offset {position}")
            }
            Self::UnbalancedNesting { position } => {
                write!(f, "unbalanced braces or brackets at offset {position}")
            }
            Self::NestingTooDeep { max_depth } => {
                write!(f, "nesting deeper than {max_depth} levels")
            }
            Self::UnterminatedString { position } => {
                write!(f, "unterminated string starting at offset {position}")
            }
            Self::InvalidNumber { position } => write!(f, "invalid number at offset {position}"),
            Self::NumberOutOfRange { position } => {
                write!(f, "number at offset {position} out of range for its field")
            }
            Self::InvalidBool { position } => {
                write!(f, "expected 'true' or 'false' at offset {position}")
            }
            Self::EmptyMessage { position } => {
                write!(f, "empty object for a required message at offset {position}")
            }
            Self::ArrayCapacityExceeded { field, capacity } => {
                write!(f, "repeated field '{field}' exceeds its capacity of {capacity} elements")
            }
            Self::DescriptorMismatch { field, kind } => {
                write!(f, "descriptor mismatch: field '{field}' of kind {kind} has incompatible storage")
            }
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    /// Erstellt einen `UnexpectedChar` Fehler.
    pub fn unexpected_char(position: usize, expected: impl Into<Cow<'static, str>>, found: u8) -> Self {
        Self::UnexpectedChar {
            position,
            expected: expected.into(),
            found,
        }
    }

    /// Returns the error class.
    pub fn class(&self) -> ErrorClass {
        match self {
            Self::BufferTooSmall { .. } | Self::CapacityOverflow { .. } => ErrorClass::Overflow,
            Self::UnexpectedChar { .. }
            | Self::UnexpectedEnd { .. }
            | Self::UnbalancedNesting { .. }
            | Self::NestingTooDeep { .. }
            | Self::UnterminatedString { .. } => ErrorClass::Syntax,
            Self::InvalidNumber { .. } | Self::NumberOutOfRange { .. } | Self::InvalidBool { .. } => {
                ErrorClass::Format
            }
            Self::EmptyMessage { .. } | Self::ArrayCapacityExceeded { .. } => ErrorClass::Structure,
            Self::DescriptorMismatch { .. } => ErrorClass::Descriptor,
        }
    }
}

/// A convenience `Result` type alias using [`Error`].
pub type Result<T> = core::result::Result<T, Error>;
