//! CSV and TSV encoder.
//!
//! Both grammars share one encoder parameterized by delimiter and quoting:
//! CSV double-quotes text fields, TSV emits them raw. The header is the
//! delimiter-joined column names; null cells render as empty fields.

use std::io::Write;

use tabwrite_result::Result;

use crate::schema::TableSchema;
use crate::value::{PlainToken, Value, plain_token};

pub(crate) fn write_header<W: Write>(
    out: &mut W,
    schema: &TableSchema,
    delimiter: u8,
) -> Result<()> {
    for (i, col) in schema.columns().iter().enumerate() {
        if i > 0 {
            out.write_all(&[delimiter])?;
        }
        out.write_all(col.name.as_bytes())?;
    }
    out.write_all(b"\n")?;
    Ok(())
}

pub(crate) fn write_row<W: Write>(
    out: &mut W,
    schema: &TableSchema,
    row: &[Value],
    delimiter: u8,
    quote_text: bool,
) -> Result<()> {
    for (i, (col, cell)) in schema.columns().iter().zip(row).enumerate() {
        if i > 0 {
            out.write_all(&[delimiter])?;
        }
        match plain_token(col, cell) {
            PlainToken::Null => {}
            PlainToken::Text(s) => {
                if quote_text {
                    write!(out, "\"{s}\"")?;
                } else {
                    out.write_all(s.as_bytes())?;
                }
            }
            PlainToken::Number(n) => out.write_all(n.as_bytes())?,
        }
    }
    out.write_all(b"\n")?;
    Ok(())
}
