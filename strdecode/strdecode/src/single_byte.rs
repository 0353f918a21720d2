//! One byte, one char.

/// Bytes above 0x7F decode to U+FFFD, so the output always has one char per byte.
pub(crate) fn decode_ascii(bytes: &[u8]) -> String {
    if let Some(text) = as_ascii_str(bytes) {
        return text.to_owned();
    }
    bytes
        .iter()
        .map(|&b| {
            if b.is_ascii() {
                char::from(b)
            } else {
                char::REPLACEMENT_CHARACTER
            }
        })
        .collect()
}

/// Every byte is the code point of the same value; nothing is invalid.
pub(crate) fn decode_latin1(bytes: &[u8]) -> String {
    if let Some(text) = as_ascii_str(bytes) {
        return text.to_owned();
    }
    // U+0080..=U+00FF take two bytes in UTF-8
    let high = bytes.iter().filter(|b| !b.is_ascii()).count();
    let mut out = String::with_capacity(bytes.len() + high);
    out.extend(bytes.iter().map(|&b| char::from(b)));
    out
}

fn as_ascii_str(bytes: &[u8]) -> Option<&str> {
    if bytes.is_ascii() {
        std::str::from_utf8(bytes).ok()
    } else {
        None
    }
}
