//! Content line folding.

/// Maximum content line length in octets (not characters) per RFC 6350.
const FOLD_WIDTH: usize = 75;

/// Folds a content line to the maximum length.
///
/// Overlong lines are split with CRLF + space continuations. Splits happen
/// only at UTF-8 character boundaries; continuation lines reserve one octet
/// for the leading space.
#[must_use]
pub fn fold_line(line: &str) -> String {
    if line.len() <= FOLD_WIDTH {
        return line.to_string();
    }

    let mut out = String::with_capacity(line.len() + (line.len() / FOLD_WIDTH) * 3);
    let mut remaining = FOLD_WIDTH;

    for c in line.chars() {
        let octets = c.len_utf8();
        if octets > remaining {
            out.push_str("\r\n ");
            remaining = FOLD_WIDTH - 1;
        }
        out.push(c);
        remaining -= octets;
    }

    out
}
