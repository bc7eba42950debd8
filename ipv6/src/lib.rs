//! This crate is part of the metrika IRI toolkit.
//!
//! It provides helpers for textual IPv6 addresses,
//! as they appear inside the brackets of an IRI host
//! (see [RFC 4291 §2.2](https://tools.ietf.org/html/rfc4291#section-2.2)):
//! expanding a `::` run, compressing an address to its shortest form,
//! and checking that an address is well formed.
//!
//! All functions are pure and operate on `&str`.

#![deny(missing_docs)]

/// Expand the `::` run of `addr` into the right number of `0` hextets.
///
/// A trailing dotted-decimal tail counts as two hextets.
/// Addresses with no `::`, or with more than one, are returned unchanged.
///
/// ```
/// assert_eq!(metrika_ipv6::uncompress("FF01::101"), "FF01:0:0:0:0:0:0:101");
/// assert_eq!(metrika_ipv6::uncompress("::1"), "0:0:0:0:0:0:0:1");
/// ```
pub fn uncompress(addr: &str) -> String {
    if addr.matches("::").count() != 1 {
        return addr.to_string();
    }
    let Some((left, right)) = addr.split_once("::") else {
        return addr.to_string();
    };
    let left_groups = count_groups(left);
    let mut right_groups = count_groups(right);
    if right.contains('.') {
        right_groups += 1;
    }
    let missing = 8usize.saturating_sub(left_groups + right_groups);

    let mut pieces: Vec<&str> = Vec::with_capacity(8);
    if !left.is_empty() {
        pieces.push(left);
    }
    pieces.extend(std::iter::repeat("0").take(missing));
    if !right.is_empty() {
        pieces.push(right);
    }
    pieces.join(":")
}

/// Compress `addr` into its shortest textual form.
///
/// Leading zeros of each hextet are stripped (letter case is kept),
/// and the longest run of zero hextets is replaced by `::`
/// (the first one wins when several runs have the same length).
/// A dotted-decimal tail is re-attached unmodified.
///
/// ```
/// assert_eq!(metrika_ipv6::compress("FF01:0:0:0:0:0:0:101"), "FF01::101");
/// assert_eq!(metrika_ipv6::compress("0:0:0:0:0:0:0:1"), "::1");
/// ```
pub fn compress(addr: &str) -> String {
    let full = uncompress(addr);
    let (v6, v4) = split_v6_v4(&full);
    let hextets: Vec<&str> = v6.split(':').map(strip_leading_zeros).collect();

    let mut best: Option<(usize, usize)> = None;
    let mut run_start = 0;
    let mut run_len = 0;
    for (i, hextet) in hextets.iter().enumerate() {
        if *hextet == "0" {
            if run_len == 0 {
                run_start = i;
            }
            run_len += 1;
            if best.map_or(true, |(_, len)| run_len > len) {
                best = Some((run_start, run_len));
            }
        } else {
            run_len = 0;
        }
    }

    let mut compressed = match best {
        Some((start, len)) => format!(
            "{}::{}",
            hextets[..start].join(":"),
            hextets[start + len..].join(":")
        ),
        None => hextets.join(":"),
    };
    if !v4.is_empty() {
        if !compressed.ends_with("::") {
            compressed.push(':');
        }
        compressed.push_str(v4);
    }
    compressed
}

/// Check whether `addr` is a well formed IPv6 address.
///
/// After uncompression, the address must consist of either 8 hextets,
/// or 6 hextets followed by a 4-part dotted-decimal tail.
/// Hextets must be non-empty hexadecimal numbers fitting in 16 bits;
/// octets must be decimal numbers in 0–255 without leading zeros.
///
/// ```
/// assert!(metrika_ipv6::check("::ffff:192.0.2.1"));
/// assert!(!metrika_ipv6::check("1:2:3:4:5:6:7:8:9"));
/// ```
pub fn check(addr: &str) -> bool {
    let full = uncompress(addr);
    let (v6, v4) = split_v6_v4(&full);
    let hextets: Vec<&str> = v6.split(':').collect();
    let octets: Vec<&str> = if v4.is_empty() {
        Vec::new()
    } else {
        v4.split('.').collect()
    };
    matches!((hextets.len(), octets.len()), (8, 0) | (6, 4))
        && hextets.iter().all(|h| is_hextet(h))
        && octets.iter().all(|o| is_octet(o))
}

/// Split `addr` into its hexadecimal part and its dotted-decimal tail.
///
/// The tail is empty if `addr` contains no `.`.
///
/// ```
/// assert_eq!(
///     metrika_ipv6::split_v6_v4("0:0:0:0:0:FFFF:129.144.52.38"),
///     ("0:0:0:0:0:FFFF", "129.144.52.38"),
/// );
/// ```
pub fn split_v6_v4(addr: &str) -> (&str, &str) {
    if !addr.contains('.') {
        return (addr, "");
    }
    match addr.rfind(':') {
        Some(pos) => (&addr[..pos], &addr[pos + 1..]),
        None => ("", addr),
    }
}

fn count_groups(txt: &str) -> usize {
    if txt.is_empty() {
        0
    } else {
        txt.matches(':').count() + 1
    }
}

fn strip_leading_zeros(hextet: &str) -> &str {
    let stripped = hextet.trim_start_matches('0');
    if stripped.is_empty() && !hextet.is_empty() {
        "0"
    } else {
        stripped
    }
}

fn is_hextet(txt: &str) -> bool {
    !txt.is_empty()
        && txt.bytes().all(|b| b.is_ascii_hexdigit())
        && txt.trim_start_matches('0').len() <= 4
}

fn is_octet(txt: &str) -> bool {
    match txt.parse::<u8>() {
        Ok(value) => value.to_string() == txt,
        Err(_) => false,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use test_case::test_case;

    #[test_case("FF01::101", "FF01:0:0:0:0:0:0:101"; "middle run")]
    #[test_case("::1", "0:0:0:0:0:0:0:1"; "leading run")]
    #[test_case("1::", "1:0:0:0:0:0:0:0"; "trailing run")]
    #[test_case("::", "0:0:0:0:0:0:0:0"; "unspecified")]
    #[test_case("::ffff:192.0.2.1", "0:0:0:0:0:ffff:192.0.2.1"; "mapped ipv4")]
    #[test_case("::13.1.68.3", "0:0:0:0:0:0:13.1.68.3"; "compatible ipv4")]
    #[test_case("1:2:3:4:5:6:7:8", "1:2:3:4:5:6:7:8"; "nothing to expand")]
    #[test_case("1::2::3", "1::2::3"; "ambiguous left alone")]
    fn uncompress_expands(addr: &str, expected: &str) {
        assert_eq!(uncompress(addr), expected);
    }

    #[test_case("FF01:0:0:0:0:0:0:101", "FF01::101"; "middle run")]
    #[test_case("0:0:0:0:0:0:0:1", "::1"; "leading run")]
    #[test_case("1:0:0:0:0:0:0:0", "1::"; "trailing run")]
    #[test_case("0:0:0:0:0:0:0:0", "::"; "unspecified")]
    #[test_case("2001:0db8:0000:0000:0001:0000:0000:0001", "2001:db8::1:0:0:1"; "first run wins ties")]
    #[test_case("1:0:0:2:0:0:0:3", "1:0:0:2::3"; "longest run wins")]
    #[test_case("1:2:3:4:5:6:7:8", "1:2:3:4:5:6:7:8"; "no zero run")]
    #[test_case("0:0:0:0:0:FFFF:129.144.52.38", "::FFFF:129.144.52.38"; "dotted tail kept")]
    #[test_case("0:0:0:0:0:0:13.1.68.3", "::13.1.68.3"; "zero run before dotted tail")]
    #[test_case("1:2:3:4:5:0:10.0.0.1", "1:2:3:4:5::10.0.0.1"; "single zero before dotted tail")]
    #[test_case("FF01::0101", "FF01::101"; "already compressed")]
    fn compress_shortens(addr: &str, expected: &str) {
        assert_eq!(compress(addr), expected);
    }

    #[test]
    fn compress_is_idempotent() {
        for addr in ["FF01:0:0:0:0:0:0:101", "::ffff:192.0.2.1", "1:0:0:2:0:0:0:3"] {
            let once = compress(addr);
            assert_eq!(compress(&once), once);
        }
    }

    #[test_case("::"; "unspecified")]
    #[test_case("::1"; "loopback")]
    #[test_case("FF01::101"; "multicast")]
    #[test_case("2001:db8:85a3:0:0:8a2e:370:7334"; "full")]
    #[test_case("::ffff:192.0.2.1"; "mapped ipv4")]
    #[test_case("0:0:0:0:0:0:13.1.68.3"; "uncompressed ipv4")]
    #[test_case("0000:0000:0000:0000:0000:0000:0000:0001"; "padded")]
    fn check_accepts(addr: &str) {
        assert!(check(addr), "{addr}");
    }

    #[test_case("1:2:3:4:5:6:7:8:9"; "too many hextets")]
    #[test_case("1:2:3:4:5:6:7"; "too few hextets")]
    #[test_case("1::2::3"; "two runs")]
    #[test_case("12345::"; "hextet too large")]
    #[test_case("g::1"; "not hexadecimal")]
    #[test_case("::ffff:256.0.0.1"; "octet too large")]
    #[test_case("::ffff:01.0.0.1"; "octet leading zero")]
    #[test_case("::ffff:1.2.3"; "short dotted tail")]
    #[test_case("1:2:3:4:5:6:7:1.2.3.4"; "dotted tail after seven hextets")]
    #[test_case(""; "empty")]
    fn check_rejects(addr: &str) {
        assert!(!check(addr), "{addr}");
    }

    #[test]
    fn split_without_tail() {
        assert_eq!(split_v6_v4("FF01::101"), ("FF01::101", ""));
    }
}
