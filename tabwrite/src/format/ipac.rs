//! IPAC ASCII table encoder.
//!
//! Fixed-width, pipe-delimited text: four header lines (names, types, units,
//! and a literal `null` row), each field left-justified and padded to its
//! column's declared display width, framed by leading and trailing `|`. Data
//! rows open with a single space and render each field per the column's own
//! format directive, space-terminated. The grammar has no tail beyond its
//! rows. Column descriptions in the header are reserved and not emitted.

use std::io::Write;

use tabwrite_result::Result;

use crate::schema::{ColumnDescriptor, TableSchema};
use crate::value::{self, Value};

const NULL_TOKEN: &str = "null";

pub(crate) fn write_header<W: Write>(out: &mut W, schema: &TableSchema) -> Result<()> {
    let names: Vec<&str> = schema.columns().iter().map(|c| c.name.as_str()).collect();
    let types: Vec<&str> = schema
        .columns()
        .iter()
        .map(|c| c.col_type.as_str())
        .collect();
    let units: Vec<&str> = schema.columns().iter().map(|c| c.units.as_str()).collect();
    let nulls: Vec<&str> = schema.columns().iter().map(|_| NULL_TOKEN).collect();

    write_header_line(out, schema, &names)?;
    write_header_line(out, schema, &types)?;
    write_header_line(out, schema, &units)?;
    write_header_line(out, schema, &nulls)?;
    Ok(())
}

fn write_header_line<W: Write>(out: &mut W, schema: &TableSchema, fields: &[&str]) -> Result<()> {
    out.write_all(b"|")?;
    for (col, field) in schema.columns().iter().zip(fields) {
        write!(out, "{field:<width$}|", width = col.width)?;
    }
    out.write_all(b"\n")?;
    Ok(())
}

pub(crate) fn write_row<W: Write>(out: &mut W, schema: &TableSchema, row: &[Value]) -> Result<()> {
    out.write_all(b" ")?;
    for (col, cell) in schema.columns().iter().zip(row) {
        let token = field_token(col, cell);
        write!(out, "{token} ")?;
    }
    out.write_all(b"\n")?;
    Ok(())
}

/// Render one cell per its column's directive.
///
/// Null renders as the literal `null` padded to the display width; every
/// other cell follows the column's own format directive rather than the
/// generic width.
fn field_token(col: &ColumnDescriptor, cell: &Value) -> String {
    match cell {
        Value::Null => value::pad(NULL_TOKEN, Some(col.width)),
        _ if col.treats_as_text() => {
            let text = match cell {
                Value::Text(s) => s.as_str(),
                _ => "",
            };
            value::format_text(&col.format, text)
        }
        _ if col.col_type.is_integer() => match cell {
            Value::Integer(v) => value::format_integer(&col.format, *v),
            _ => String::new(),
        },
        _ => match cell {
            Value::Real(v) => value::format_real(&col.format, *v),
            Value::Integer(v) => value::format_real(&col.format, *v as f64),
            _ => String::new(),
        },
    }
}
