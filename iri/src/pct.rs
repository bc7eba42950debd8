//! Percent-encoding normalization of IRI components,
//! as per [RFC 3987 §5.3.2.3](https://tools.ietf.org/html/rfc3987#section-5.3.2.3).
//!
//! [`normalize`] never fails: malformed input is repaired by percent-encoding
//! the offending bytes, and its output is always valid UTF-8.
//! Applying it to its own output is a no-op.

/// Characters allowed unencoded in `iuserinfo`, besides `iunreserved`.
pub const USERINFO_EXTRA: &[u8] = b"!$&'()*+,;=:";
/// Characters allowed unencoded in `ireg-name`, besides `iunreserved`.
pub const HOST_EXTRA: &[u8] = b"!$&'()*+,;=";
/// Characters allowed unencoded in a path segment, besides `iunreserved`.
pub const SEGMENT_EXTRA: &[u8] = b"!$&'()*+,;=@:";
/// Characters allowed unencoded in `iquery`, besides `iunreserved` and `iprivate`.
pub const QUERY_EXTRA: &[u8] = b"!$&'()*+,;=:@/?";
/// Characters allowed unencoded in `ifragment`, besides `iunreserved`.
pub const FRAGMENT_EXTRA: &[u8] = b"!$&'()*+,;=:@/?";

const HEX: &[u8; 16] = b"0123456789ABCDEF";

/// Normalize the percent-encoding of `input`.
///
/// * a `%` not followed by two hex digits becomes `%25`;
/// * percent-encoded unreserved characters are decoded,
///   all other triplets are kept with uppercase hex digits;
/// * ASCII bytes that are neither unreserved nor in `extra` are encoded;
/// * non-ASCII characters are kept only if they are well formed UTF-8
///   in `ucschar` (or in `iprivate` when `iprivate` is `true`),
///   otherwise each of their bytes is encoded.
///
/// `extra` must only contain ASCII characters other than `%`.
pub fn normalize(input: &[u8], extra: &[u8], iprivate: bool) -> String {
    let mut out = String::with_capacity(input.len());
    let mut i = 0;
    while i < input.len() {
        let byte = input[i];
        if byte == b'%' {
            // a multi-byte sequence never decodes to an unreserved character,
            // so triplets can be handled one by one
            match decode_triplet(&input[i..]) {
                Some(value) if is_unreserved(value) => out.push(char::from(value)),
                Some(value) => push_encoded(&mut out, value),
                None => {
                    out.push_str("%25");
                    i += 1;
                    continue;
                }
            }
            i += 3;
        } else if byte < 0x80 {
            if is_unreserved(byte) || extra.contains(&byte) {
                out.push(char::from(byte));
            } else {
                push_encoded(&mut out, byte);
            }
            i += 1;
        } else {
            i += push_non_ascii(&mut out, &input[i..], iprivate);
        }
    }
    out
}

/// Percent-encode every non-ASCII byte of `txt`.
///
/// This turns a normalized IRI (or part thereof) into a URI.
pub fn to_uri(txt: &str) -> String {
    let mut out = String::with_capacity(txt.len());
    for &byte in txt.as_bytes() {
        if byte < 0x80 {
            out.push(char::from(byte));
        } else {
            push_encoded(&mut out, byte);
        }
    }
    out
}

/// Lowercase the ASCII letters of `txt`, leaving percent-encoded triplets untouched.
///
/// `txt` is expected to be the output of [`normalize`].
pub fn lowercase_outside_triplets(txt: &str) -> String {
    let mut out = String::with_capacity(txt.len());
    let mut in_triplet = 0;
    for c in txt.chars() {
        if in_triplet > 0 {
            in_triplet -= 1;
            out.push(c);
        } else if c == '%' {
            in_triplet = 2;
            out.push(c);
        } else {
            out.push(c.to_ascii_lowercase());
        }
    }
    out
}

/// Whether `x` matches the `ucschar` rule of RFC 3987.
///
/// Surrogates, U+FDD0–U+FDEF and the last two codepoints of every plane are excluded.
pub const fn is_ucschar(x: u32) -> bool {
    matches!(x, 0xa0..=0xd7ff | 0xf900..=0xfdcf | 0xfdf0..=0xffef)
        || (x >= 0x10000 && x <= 0xdffff && (x & 0xffff) <= 0xfffd)
        || (x >= 0xe1000 && x <= 0xefffd)
}

/// Whether `x` matches the `iprivate` rule of RFC 3987.
pub const fn is_iprivate(x: u32) -> bool {
    (x >= 0xe000 && x <= 0xf8ff) || (x >= 0xf0000 && x <= 0x10fffd && (x & 0xffff) <= 0xfffd)
}

fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'.' | b'_' | b'~')
}

fn decode_triplet(bytes: &[u8]) -> Option<u8> {
    match bytes {
        [b'%', hi, lo, ..] => Some((hex_value(*hi)? << 4) | hex_value(*lo)?),
        _ => None,
    }
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        _ => None,
    }
}

fn push_encoded(out: &mut String, byte: u8) {
    out.push('%');
    out.push(char::from(HEX[usize::from(byte >> 4)]));
    out.push(char::from(HEX[usize::from(byte & 0x0F)]));
}

/// Push the UTF-8 sequence starting at `bytes[0]` (a non-ASCII byte),
/// and return the number of bytes consumed.
fn push_non_ascii(out: &mut String, bytes: &[u8], iprivate: bool) -> usize {
    let lead = bytes[0];
    let (len, mut cp) = match lead {
        0xC0..=0xDF => (2, u32::from(lead & 0x1F)),
        0xE0..=0xEF => (3, u32::from(lead & 0x0F)),
        0xF0..=0xF7 => (4, u32::from(lead & 0x07)),
        _ => {
            push_encoded(out, lead);
            return 1;
        }
    };
    for k in 1..len {
        match bytes.get(k) {
            Some(&byte) if byte & 0xC0 == 0x80 => cp = (cp << 6) | u32::from(byte & 0x3F),
            _ => {
                // the byte at k starts something else and is processed again
                for &byte in &bytes[..k] {
                    push_encoded(out, byte);
                }
                return k;
            }
        }
    }
    let shortest = match len {
        2 => cp >= 0x80,
        3 => cp >= 0x800,
        _ => cp >= 0x10000,
    };
    let allowed = shortest && (is_ucschar(cp) || (iprivate && is_iprivate(cp)));
    match char::from_u32(cp).filter(|_| allowed) {
        Some(c) => out.push(c),
        None => {
            for &byte in &bytes[..len] {
                push_encoded(out, byte);
            }
        }
    }
    len
}
