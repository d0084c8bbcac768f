//! vCard serialization.

mod fold;

pub use fold::fold_line;

use crate::card::Card;

/// ## Summary
/// Serializes a card to vCard 3.0 text.
///
/// Properties appear in a fixed order (N, FN, TEL, NOTE) so output is
/// deterministic. Each content line is folded at 75 octets and terminated
/// with CRLF, including the final `END:VCARD`.
#[must_use]
pub fn serialize(card: &Card) -> String {
    let mut lines = vec![
        "BEGIN:VCARD".to_string(),
        "VERSION:3.0".to_string(),
        format!(
            "N:{};{};;;",
            escape_text(&card.last_name),
            escape_text(&card.first_name)
        ),
        format!("FN:{}", escape_text(&card.formatted_name())),
    ];

    if let Some(cell) = &card.cell_phone {
        lines.push(format!("TEL;TYPE=CELL:{cell}"));
    }
    if let Some(work) = &card.work_phone {
        lines.push(format!("TEL;TYPE=WORK:{work}"));
    }
    if let Some(note) = &card.note {
        lines.push(format!("NOTE:{}", escape_text(note)));
    }

    lines.push("END:VCARD".to_string());

    let mut out = String::new();
    for line in lines {
        out.push_str(&fold_line(&line));
        out.push_str("\r\n");
    }
    out
}

/// Escapes a text property value per RFC 6350 §3.4.
#[must_use]
pub fn escape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            ',' => out.push_str("\\,"),
            ';' => out.push_str("\\;"),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            _ => out.push(c),
        }
    }
    out
}
