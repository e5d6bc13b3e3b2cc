//! Typed storage cells.
//!
//! A cell is a tagged reference to the storage of exactly one field element.
//! Descriptors hand out cells instead of byte offsets, so the engines can
//! read and write arbitrary message structs without unsafe pointer
//! arithmetic. The variant carries the element's width: an `Enum` field
//! stored in an `I8` cell is narrowed to one byte, a `String` field's cell is
//! the fixed-capacity char buffer itself.

use core::fmt;
use core::mem::size_of_val;

use crate::descriptor::DynMessage;

/// Read-only view on one element's storage.
pub enum Cell<'a> {
    Bool(&'a bool),
    I8(&'a i8),
    I16(&'a i16),
    I32(&'a i32),
    I64(&'a i64),
    U8(&'a u8),
    U16(&'a u16),
    U32(&'a u32),
    U64(&'a u64),
    F32(&'a f32),
    F64(&'a f64),
    /// Fixed-capacity char buffer, NUL-terminated unless completely filled.
    Str(&'a [u8]),
    /// Nested message struct.
    Message(&'a dyn DynMessage),
}

/// Mutable view on one element's storage.
pub enum CellMut<'a> {
    Bool(&'a mut bool),
    I8(&'a mut i8),
    I16(&'a mut i16),
    I32(&'a mut i32),
    I64(&'a mut i64),
    U8(&'a mut u8),
    U16(&'a mut u16),
    U32(&'a mut u32),
    U64(&'a mut u64),
    F32(&'a mut f32),
    F64(&'a mut f64),
    Str(&'a mut [u8]),
    Message(&'a mut dyn DynMessage),
}

impl Cell<'_> {
    /// Size in bytes of the referenced element.
    pub fn width(&self) -> usize {
        match self {
            Cell::Bool(v) => size_of_val(*v),
            Cell::I8(_) | Cell::U8(_) => 1,
            Cell::I16(_) | Cell::U16(_) => 2,
            Cell::I32(_) | Cell::U32(_) | Cell::F32(_) => 4,
            Cell::I64(_) | Cell::U64(_) | Cell::F64(_) => 8,
            Cell::Str(s) => s.len(),
            Cell::Message(m) => size_of_val(*m),
        }
    }

    fn variant_name(&self) -> &'static str {
        match self {
            Cell::Bool(_) => "Bool",
            Cell::I8(_) => "I8",
            Cell::I16(_) => "I16",
            Cell::I32(_) => "I32",
            Cell::I64(_) => "I64",
            Cell::U8(_) => "U8",
            Cell::U16(_) => "U16",
            Cell::U32(_) => "U32",
            Cell::U64(_) => "U64",
            Cell::F32(_) => "F32",
            Cell::F64(_) => "F64",
            Cell::Str(_) => "Str",
            Cell::Message(_) => "Message",
        }
    }
}

impl fmt::Debug for Cell<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cell::{}({} bytes)", self.variant_name(), self.width())
    }
}

/// Storage types that can be exposed as a cell.
///
/// Implemented for `bool`, the fixed-width integers, `f32`/`f64` and
/// `[u8; N]` string buffers. Nested messages are wrapped directly in
/// [`Cell::Message`] by the descriptor macros.
pub trait AsCell {
    fn as_cell(&self) -> Cell<'_>;
    fn as_cell_mut(&mut self) -> CellMut<'_>;
}

macro_rules! impl_as_cell {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl AsCell for $ty {
                #[inline]
                fn as_cell(&self) -> Cell<'_> {
                    Cell::$variant(self)
                }

                #[inline]
                fn as_cell_mut(&mut self) -> CellMut<'_> {
                    CellMut::$variant(self)
                }
            }
        )*
    };
}

impl_as_cell! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
}

impl<const N: usize> AsCell for [u8; N] {
    #[inline]
    fn as_cell(&self) -> Cell<'_> {
        Cell::Str(&self[..])
    }

    #[inline]
    fn as_cell_mut(&mut self) -> CellMut<'_> {
        CellMut::Str(&mut self[..])
    }
}

/// Content of a fixed-capacity string buffer: up to the first NUL, or the
/// whole buffer when it is completely filled.
pub fn str_content(buf: &[u8]) -> &[u8] {
    match memchr::memchr(0, buf) {
        Some(end) => &buf[..end],
        None => buf,
    }
}
