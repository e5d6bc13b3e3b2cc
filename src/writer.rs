//! Bounded JSON writer.
//!
//! Appends text to a caller-supplied, fixed-capacity buffer and fails the
//! moment a write would not fit. One byte is always reserved for the NUL
//! terminator, so after [`JsonWriter::terminate`] the buffer holds a valid
//! C string even when encoding failed half way.

use core::fmt::{self, Write as _};

use crate::cell::str_content;
use crate::{Error, Result};

/// Smallest buffer that can hold `{}` plus the terminator.
pub const MIN_CAPACITY: usize = 3;

/// Decimals used for `Float`/`Double` fields (the `%f` convention).
pub const DEFAULT_FLOAT_PRECISION: usize = 6;

/// Cursor over a fixed-capacity output buffer.
pub struct JsonWriter<'a> {
    buf: &'a mut [u8],
    pos: usize,
    /// Letzte beschreibbare Position + 1 (ein Byte bleibt fuer NUL reserviert).
    limit: usize,
    /// Naechster Key ist der erste im aktuellen Objekt (kein Komma davor).
    first_key: bool,
    float_precision: usize,
}

impl<'a> JsonWriter<'a> {
    /// Creates a writer over `buf`.
    ///
    /// Fails with [`Error::BufferTooSmall`] if `buf` is shorter than
    /// [`MIN_CAPACITY`]; nothing is written in that case.
    pub fn new(buf: &'a mut [u8], float_precision: usize) -> Result<Self> {
        if buf.len() < MIN_CAPACITY {
            return Err(Error::BufferTooSmall { capacity: buf.len() });
        }
        let limit = buf.len() - 1;
        Ok(Self {
            buf,
            pos: 0,
            limit,
            first_key: true,
            float_precision,
        })
    }

    /// Bytes written so far (terminator excluded).
    pub fn len(&self) -> usize {
        self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.pos == 0
    }

    /// Text written so far.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.pos]
    }

    fn overflow(&self) -> Error {
        Error::CapacityOverflow { capacity: self.buf.len() }
    }

    #[inline]
    pub fn put_char(&mut self, c: u8) -> Result<()> {
        if self.pos >= self.limit {
            return Err(self.overflow());
        }
        self.buf[self.pos] = c;
        self.pos += 1;
        Ok(())
    }

    /// Appends `bytes` completely or not at all.
    pub fn put_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        let end = self.pos + bytes.len();
        if end > self.limit {
            return Err(self.overflow());
        }
        self.buf[self.pos..end].copy_from_slice(bytes);
        self.pos = end;
        Ok(())
    }

    /// Emits `,"name":`, without the comma for the first key of an object.
    pub fn put_key(&mut self, name: &str) -> Result<()> {
        if !self.first_key {
            self.put_char(b',')?;
        }
        self.put_char(b'"')?;
        self.put_bytes(name.as_bytes())?;
        self.put_bytes(b"\":")?;
        self.first_key = false;
        Ok(())
    }

    /// Emits a fixed-capacity char buffer as a quoted string, verbatim.
    ///
    /// Content ends at the first NUL or at the buffer's capacity. No
    /// escaping takes place.
    pub fn put_string(&mut self, raw: &[u8]) -> Result<()> {
        let content = str_content(raw);
        if self.pos + content.len() + 2 > self.limit {
            return Err(self.overflow());
        }
        self.put_char(b'"')?;
        self.put_bytes(content)?;
        self.put_char(b'"')
    }

    pub fn put_bool(&mut self, value: bool) -> Result<()> {
        self.put_bytes(if value { b"true" } else { b"false" })
    }

    pub fn put_signed(&mut self, value: i64) -> Result<()> {
        self.put_fmt(format_args!("{value}"))
    }

    pub fn put_unsigned(&mut self, value: u64) -> Result<()> {
        self.put_fmt(format_args!("{value}"))
    }

    /// Fixed notation with the configured number of decimals.
    pub fn put_float(&mut self, value: f64) -> Result<()> {
        let precision = self.float_precision;
        self.put_fmt(format_args!("{value:.precision$}"))
    }

    /// Formats one token. The formatter may emit a token in several pieces,
    /// so a token that does not fit is removed again.
    fn put_fmt(&mut self, args: fmt::Arguments<'_>) -> Result<()> {
        let start = self.pos;
        self.write_fmt(args).map_err(|_| {
            self.pos = start;
            self.overflow()
        })
    }

    /// Emits `{` and starts a fresh key sequence.
    pub fn begin_object(&mut self) -> Result<()> {
        self.put_char(b'{')?;
        self.first_key = true;
        Ok(())
    }

    /// Emits `}`. The enclosing object has at least the key this object was
    /// the value of, so its next key needs a comma.
    pub fn end_object(&mut self) -> Result<()> {
        self.put_char(b'}')?;
        self.first_key = false;
        Ok(())
    }

    /// Writes the NUL terminator at the current position and returns the
    /// text length.
    pub fn terminate(self) -> usize {
        // pos <= limit < buf.len()
        self.buf[self.pos] = 0;
        self.pos
    }
}

impl fmt::Write for JsonWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.put_bytes(s.as_bytes()).map_err(|_| fmt::Error)
    }
}

impl fmt::Debug for JsonWriter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonWriter")
            .field("written", &String::from_utf8_lossy(self.as_bytes()))
            .field("capacity", &self.buf.len())
            .finish()
    }
}
