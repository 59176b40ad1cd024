//! Decoding of raw escape sequences in rendered output.
//!
//! Catalogs authored for escape-limited environments sometimes carry
//! `\uXXXX` / `\xXX` sequences as plain text. After a token walk the result
//! is scanned once and any such sequences are decoded back into real
//! characters, combining UTF-16 surrogate pairs.

/// Decode raw `\uXXXX` and `\xXX` sequences in `text`.
///
/// Returns `None` when the text contains no such sequences, so callers can
/// skip the allocation in the common case. Unpaired surrogates decode to
/// U+FFFD.
pub(crate) fn decode_escapes(text: &str) -> Option<String> {
    if !has_escape(text) {
        return None;
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while !rest.is_empty() {
        if let Some((c, len)) = decode_at(rest, 0) {
            out.push(c);
            rest = &rest[len..];
        } else if let Some(c) = rest.chars().next() {
            out.push(c);
            rest = &rest[c.len_utf8()..];
        } else {
            break;
        }
    }
    Some(out)
}

fn has_escape(text: &str) -> bool {
    let bytes = text.as_bytes();
    (0..bytes.len()).any(|i| decode_at(text, i).is_some())
}

/// Try to decode an escape sequence starting at byte offset `i`.
/// Returns the decoded character and the byte length consumed.
fn decode_at(text: &str, i: usize) -> Option<(char, usize)> {
    let bytes = text.as_bytes();
    if bytes.get(i) != Some(&b'\\') {
        return None;
    }
    match bytes.get(i + 1) {
        Some(&b'u') => {
            let unit = hex_units(text, i + 2, 4)?;
            if (0xD800..=0xDBFF).contains(&unit) {
                // High surrogate: combine with a following \uDC00-\uDFFF.
                if bytes.get(i + 6) == Some(&b'\\') && bytes.get(i + 7) == Some(&b'u') {
                    if let Some(low) = hex_units(text, i + 8, 4) {
                        if (0xDC00..=0xDFFF).contains(&low) {
                            let code =
                                0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00);
                            let c = char::from_u32(code).unwrap_or('\u{FFFD}');
                            return Some((c, 12));
                        }
                    }
                }
                Some(('\u{FFFD}', 6))
            } else if (0xDC00..=0xDFFF).contains(&unit) {
                Some(('\u{FFFD}', 6))
            } else {
                Some((char::from_u32(unit).unwrap_or('\u{FFFD}'), 6))
            }
        }
        Some(&b'x') => {
            let unit = hex_units(text, i + 2, 2)?;
            Some((char::from_u32(unit).unwrap_or('\u{FFFD}'), 4))
        }
        _ => None,
    }
}

/// Parse `count` ASCII hex digits at byte offset `start`.
fn hex_units(text: &str, start: usize, count: usize) -> Option<u32> {
    let bytes = text.as_bytes();
    let end = start.checked_add(count)?;
    if end > bytes.len() || !bytes[start..end].iter().all(u8::is_ascii_hexdigit) {
        return None;
    }
    u32::from_str_radix(&text[start..end], 16).ok()
}
