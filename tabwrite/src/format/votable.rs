//! VOTable XML encoder.
//!
//! Emits the subset of VOTable 1.3 needed for query-result output: a
//! `<RESOURCE>`/`<TABLE>` header with one `<FIELD>` per column, a
//! `QUERY_STATUS` INFO element reflecting the overflow flag, and a
//! `<DATA><TABLEDATA>` body of `<TR>`/`<TD>` rows. Text payloads travel in
//! CDATA sections so markup characters need no escaping.

use std::io::Write;

use tabwrite_result::Result;

use crate::schema::{ColumnDescriptor, ColumnType, TableSchema};
use crate::value::{PlainToken, Value, plain_token};

pub(crate) fn write_header<W: Write>(
    out: &mut W,
    schema: &TableSchema,
    overflow: bool,
) -> Result<()> {
    out.write_all(b"<?xml version=\"1.0\" encoding=\"utf-8\"?>\n")?;
    writeln!(
        out,
        "<VOTABLE version=\"1.3\" xmlns=\"http://www.ivoa.net/xml/VOTable/v1.3\" \
         xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\" \
         xsi:noNamespaceSchemaLocation=\"http://www.ivoa.net/xml/VOTable/v1.3\">"
    )?;
    writeln!(out, "  <RESOURCE type=\"results\">")?;
    let status = if overflow { "OVERFLOW" } else { "OK" };
    writeln!(out, "  <INFO name=\"QUERY_STATUS\" value=\"{status}\"/>")?;
    writeln!(out, "  <TABLE>")?;
    for col in schema.columns() {
        write_field(out, col)?;
    }
    Ok(())
}

fn write_field<W: Write>(out: &mut W, col: &ColumnDescriptor) -> Result<()> {
    let mut attrs = format!("ID=\"{}\"", col.name);
    if col.col_type == ColumnType::Char {
        attrs.push_str(" arraysize=\"*\"");
    }
    attrs.push_str(&format!(
        " datatype=\"{}\" name=\"{}\"",
        col.col_type.as_str(),
        col.name
    ));
    if !col.units.is_empty() {
        attrs.push_str(&format!(" unit=\"{}\"", col.units));
    }

    if col.description.is_empty() {
        writeln!(out, "    <FIELD {attrs}/>")?;
    } else {
        writeln!(out, "    <FIELD {attrs}>")?;
        writeln!(
            out,
            "      <DESCRIPTION><![CDATA[ {} ]]></DESCRIPTION>",
            col.description
        )?;
        writeln!(out, "    </FIELD>")?;
    }
    Ok(())
}

pub(crate) fn begin_body<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "    <DATA>")?;
    writeln!(out, "      <TABLEDATA>")?;
    Ok(())
}

pub(crate) fn write_row<W: Write>(out: &mut W, schema: &TableSchema, row: &[Value]) -> Result<()> {
    writeln!(out, "        <TR>")?;
    for (col, cell) in schema.columns().iter().zip(row) {
        match plain_token(col, cell) {
            PlainToken::Null => writeln!(out, "        <TD></TD>")?,
            PlainToken::Text(s) => writeln!(out, "        <TD><![CDATA[{s}]]></TD>")?,
            PlainToken::Number(n) => writeln!(out, "        <TD>{n}</TD>")?,
        }
    }
    writeln!(out, "        </TR>")?;
    Ok(())
}

/// Close the document.
///
/// The zero-row header+tail case never opens a `<DATA>` block, so the empty
/// variant closes straight from `<TABLE>`.
pub(crate) fn write_tail<W: Write>(out: &mut W, empty_table: bool) -> Result<()> {
    if !empty_table {
        writeln!(out, "      </TABLEDATA>")?;
        writeln!(out, "    </DATA>")?;
    }
    writeln!(out, "  </TABLE>")?;
    writeln!(out, "  </RESOURCE>")?;
    writeln!(out, "</VOTABLE>")?;
    Ok(())
}
