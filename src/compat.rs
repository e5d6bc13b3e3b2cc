//! Integer-status entry points.
//!
//! For callers that only distinguish success from failure, such as a C
//! shim: the error taxonomy collapses into a single `-1`, the cause is
//! logged at `debug` level.

use crate::descriptor::Message;
use crate::{decoder, encoder};

/// Encodes `msg` into `buf`.
///
/// Returns the text length on success, `-1` on any failure (including a
/// length that does not fit an `i32`).
pub fn pbjson_encode<M: Message>(buf: &mut [u8], msg: &M) -> i32 {
    match encoder::encode(buf, msg) {
        Ok(len) => i32::try_from(len).unwrap_or_else(|_| {
            log::debug!("{}: encoded length {len} exceeds i32", M::descriptor().name);
            -1
        }),
        Err(e) => {
            log::debug!("{}: encode failed: {e}", M::descriptor().name);
            -1
        }
    }
}

/// Decodes `text` into `msg` in place. Returns `0` on success, `-1` on
/// any failure.
pub fn pbjson_decode<M: Message>(text: &[u8], msg: &mut M) -> i32 {
    match decoder::decode(text, msg) {
        Ok(()) => 0,
        Err(e) => {
            log::debug!("{}: decode failed: {e}", M::descriptor().name);
            -1
        }
    }
}
