//! JSON array-of-objects encoder.
//!
//! The document is one array: `[` on its own line, one object per row with
//! `,\n` between members, `,\n` between rows, and `]` closing the array. The
//! final row of the final (`emit_tail`) invocation is followed by a bare
//! newline instead of a separator so the closing bracket lands on its own
//! line. Text payloads pass through [`escape`] before quoting.

use std::io::Write;

use tabwrite_result::Result;

use crate::schema::TableSchema;
use crate::value::{PlainToken, Value, plain_token};

pub(crate) fn write_header<W: Write>(out: &mut W) -> Result<()> {
    out.write_all(b"[\n")?;
    Ok(())
}

pub(crate) fn write_row<W: Write>(
    out: &mut W,
    schema: &TableSchema,
    row: &[Value],
    last_of_document: bool,
) -> Result<()> {
    out.write_all(b"{")?;
    for (i, (col, cell)) in schema.columns().iter().zip(row).enumerate() {
        if i > 0 {
            out.write_all(b",\n")?;
        }
        match plain_token(col, cell) {
            PlainToken::Null => write!(out, "\"{}\": null", col.name)?,
            PlainToken::Text(s) => write!(out, "\"{}\": \"{}\"", col.name, escape(&s))?,
            PlainToken::Number(n) => write!(out, "\"{}\": {}", col.name, n)?,
        }
    }
    out.write_all(b"}")?;
    if last_of_document {
        out.write_all(b"\n")?;
    } else {
        out.write_all(b",\n")?;
    }
    Ok(())
}

pub(crate) fn write_tail<W: Write>(out: &mut W) -> Result<()> {
    out.write_all(b"]\n")?;
    Ok(())
}

/// Escape a text payload for embedding in a JSON string literal.
///
/// Backspace, form feed, newline, carriage return, tab, the double quote,
/// and the backslash map to their two-character escapes; everything else
/// passes through unchanged.
pub(crate) fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '\u{0008}' => out.push_str("\\b"),
            '\u{000C}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            _ => out.push(ch),
        }
    }
    out
}
