//! UTF-16 with byte-order-mark detection.
//!
//! A leading `FE FF` or `FF FE` picks the byte order and is not part of the
//! text. Without a mark the input is read big-endian. Unpaired surrogates
//! cannot live in a `String` and decode to U+FFFD.

use strdecode_core::{Charset, DecodeError};

#[derive(Debug, Clone, Copy)]
enum ByteOrder {
    Big,
    Little,
}

pub(crate) fn decode_utf16(bytes: &[u8]) -> Result<String, DecodeError> {
    if !bytes.len().is_multiple_of(2) {
        return Err(DecodeError::MalformedInput {
            charset: Charset::Utf16,
            position: bytes.len() - 1,
            detail: "odd byte count for 2-byte code units",
        });
    }

    let (body, order) = match bytes {
        [0xFE, 0xFF, rest @ ..] => (rest, ByteOrder::Big),
        [0xFF, 0xFE, rest @ ..] => (rest, ByteOrder::Little),
        _ => (bytes, ByteOrder::Big),
    };

    let units = body.chunks_exact(2).map(|pair| {
        let pair = [pair[0], pair[1]];
        match order {
            ByteOrder::Big => u16::from_be_bytes(pair),
            ByteOrder::Little => u16::from_le_bytes(pair),
        }
    });

    let mut out = String::with_capacity(body.len() / 2);
    out.extend(char::decode_utf16(units).map(|unit| unit.unwrap_or(char::REPLACEMENT_CHARACTER)));
    Ok(out)
}
