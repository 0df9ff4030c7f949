//! Numeric literal detection.

/// Returns true when the whole string is a plain decimal number.
///
/// Accepts optional surrounding ASCII whitespace, an optional sign, digits
/// with an optional fractional part (or a fractional part alone), and an
/// optional exponent. Thousands separators, hex, `inf` and `nan` are not
/// numbers; neither is the empty string.
pub fn is_numeric_literal(value: &str) -> bool {
    let trimmed = value.trim_matches(|ch: char| ch.is_ascii_whitespace());
    let bytes = trimmed.as_bytes();
    let mut pos = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        pos += 1;
    }

    let int_digits = count_digits(&bytes[pos..]);
    pos += int_digits;

    let mut frac_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        frac_digits = count_digits(&bytes[pos..]);
        pos += frac_digits;
    }

    if int_digits + frac_digits == 0 {
        return false;
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        pos += 1;
        if matches!(bytes.get(pos), Some(b'+' | b'-')) {
            pos += 1;
        }
        let exp_digits = count_digits(&bytes[pos..]);
        if exp_digits == 0 {
            return false;
        }
        pos += exp_digits;
    }

    pos == bytes.len()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
