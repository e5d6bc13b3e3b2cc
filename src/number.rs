//! Numeric text conversion for the decoder.
//!
//! Follows the C `strtol`/`strtod` family: the longest numeric prefix at the
//! cursor is converted, and consuming zero characters is an error. Unlike
//! `strtol`, values that do not fit the destination are rejected instead of
//! being clamped, and unsigned conversions do not accept a minus sign.

use crate::cursor::TextCursor;
use crate::{Error, Result};

/// Length of the `[+-]?[0-9]+` prefix of `bytes`, 0 if there are no digits.
fn integer_prefix_len(bytes: &[u8], allow_minus: bool) -> usize {
    let mut len = 0;
    if let Some(&sign) = bytes.first() {
        if sign == b'+' || (allow_minus && sign == b'-') {
            len = 1;
        }
    }
    let digits = bytes[len..].iter().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        0
    } else {
        len + digits
    }
}

/// Length of the `strtod`-style float prefix of `bytes`, 0 if none.
fn float_prefix_len(bytes: &[u8]) -> usize {
    let mut pos = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        pos = 1;
    }

    // inf / infinity / nan, case-insensitive
    for word in [&b"infinity"[..], b"inf", b"nan"] {
        if bytes.len() >= pos + word.len() && bytes[pos..pos + word.len()].eq_ignore_ascii_case(word) {
            return pos + word.len();
        }
    }

    let int_digits = bytes[pos..].iter().take_while(|b| b.is_ascii_digit()).count();
    pos += int_digits;
    let mut frac_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        frac_digits = bytes[pos + 1..].iter().take_while(|b| b.is_ascii_digit()).count();
        if int_digits > 0 || frac_digits > 0 {
            pos += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return 0;
    }

    // Exponent nur mit mindestens einer Ziffer.
    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let mut exp = pos + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = bytes[exp..].iter().take_while(|b| b.is_ascii_digit()).count();
        if exp_digits > 0 {
            pos = exp + exp_digits;
        }
    }
    pos
}

fn take_prefix<'a>(cursor: &mut TextCursor<'a>, len: usize) -> Result<&'a str> {
    if len == 0 {
        return Err(Error::InvalidNumber { position: cursor.position() });
    }
    let text = &cursor.rest()[..len];
    cursor.advance(len);
    // Der Prefix besteht nur aus ASCII.
    core::str::from_utf8(text).map_err(|_| Error::InvalidNumber { position: cursor.position() - len })
}

/// Converts a signed decimal integer at the cursor.
pub fn parse_signed(cursor: &mut TextCursor<'_>) -> Result<i64> {
    let start = cursor.position();
    let len = integer_prefix_len(cursor.rest(), true);
    let text = take_prefix(cursor, len)?;
    text.parse::<i64>().map_err(|_| Error::NumberOutOfRange { position: start })
}

/// Converts an unsigned decimal integer at the cursor.
pub fn parse_unsigned(cursor: &mut TextCursor<'_>) -> Result<u64> {
    let start = cursor.position();
    let len = integer_prefix_len(cursor.rest(), false);
    let text = take_prefix(cursor, len)?;
    text.parse::<u64>().map_err(|_| Error::NumberOutOfRange { position: start })
}

/// Enum value at the cursor, `strtol` style: out-of-range values saturate at
/// the `i64` bounds instead of failing.
pub fn parse_enum_signed(cursor: &mut TextCursor<'_>) -> Result<i64> {
    let len = integer_prefix_len(cursor.rest(), true);
    let text = take_prefix(cursor, len)?;
    Ok(text.parse::<i64>().unwrap_or(if text.starts_with('-') { i64::MIN } else { i64::MAX }))
}

/// Enum value at the cursor, `strtoul` style: a leading `-` negates modulo
/// 2^64, magnitudes beyond `u64` saturate at `u64::MAX`.
pub fn parse_enum_unsigned(cursor: &mut TextCursor<'_>) -> Result<u64> {
    let len = integer_prefix_len(cursor.rest(), true);
    let text = take_prefix(cursor, len)?;
    let (negative, digits) = match text.strip_prefix('-') {
        Some(digits) => (true, digits),
        None => (false, text.trim_start_matches('+')),
    };
    Ok(match digits.parse::<u64>() {
        Ok(magnitude) if negative => magnitude.wrapping_neg(),
        Ok(magnitude) => magnitude,
        Err(_) => u64::MAX,
    })
}

/// Converts a floating point number at the cursor into an `f32`.
pub fn parse_f32(cursor: &mut TextCursor<'_>) -> Result<f32> {
    let start = cursor.position();
    let len = float_prefix_len(cursor.rest());
    let text = take_prefix(cursor, len)?;
    text.parse::<f32>().map_err(|_| Error::InvalidNumber { position: start })
}

/// Converts a floating point number at the cursor into an `f64`.
pub fn parse_f64(cursor: &mut TextCursor<'_>) -> Result<f64> {
    let start = cursor.position();
    let len = float_prefix_len(cursor.rest());
    let text = take_prefix(cursor, len)?;
    text.parse::<f64>().map_err(|_| Error::InvalidNumber { position: start })
}

/// Narrows a parsed value into the destination type, reporting the value's
/// start offset on failure.
pub fn narrow<T, U>(value: U, position: usize) -> Result<T>
where
    T: TryFrom<U>,
{
    T::try_from(value).map_err(|_| Error::NumberOutOfRange { position })
}
