//! URI component percent-encoding.

/// Percent-encodes `input` the way a URI component is encoded.
///
/// Leaves ASCII alphanumerics and `- _ . ! ~ * ' ( )` as they are; every other
/// UTF-8 byte becomes `%XX` with uppercase hex digits. `/`, `:`, `%`, `?` and
/// `#` are all escaped, so the output is a single filesystem-safe name.
pub fn encode_uri_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for &b in input.as_bytes() {
        if is_unreserved(b) {
            out.push(b as char);
        } else {
            out.push('%');
            out.push(hex_upper(b >> 4));
            out.push(hex_upper(b & 0x0f));
        }
    }
    out
}

fn is_unreserved(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(b, b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')')
}

fn hex_upper(nibble: u8) -> char {
    match nibble {
        0..=9 => (b'0' + nibble) as char,
        _ => (b'A' + nibble - 10) as char,
    }
}
