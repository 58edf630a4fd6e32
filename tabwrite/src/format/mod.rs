//! Output grammar selection and encoder dispatch.
//!
//! One [`OutputFormat`] variant per grammar. The writer drives the shared
//! header/body/tail contract through the free functions here, which dispatch
//! to the per-grammar encoder modules.

use std::io::Write;
use std::str::FromStr;

use tabwrite_result::{Error, Result};

use crate::schema::TableSchema;
use crate::value::Value;

mod delimited;
mod ipac;
mod json;
mod votable;

/// The five supported output grammars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Ipac,
    Votable,
    Csv,
    Tsv,
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Ipac => "ipac",
            OutputFormat::Votable => "votable",
            OutputFormat::Csv => "csv",
            OutputFormat::Tsv => "tsv",
            OutputFormat::Json => "json",
        }
    }

    /// File extension used for result artifacts (`result.tbl`, `result.xml`, ...).
    pub fn file_extension(&self) -> &'static str {
        match self {
            OutputFormat::Ipac => "tbl",
            OutputFormat::Votable => "xml",
            OutputFormat::Csv => "csv",
            OutputFormat::Tsv => "tsv",
            OutputFormat::Json => "json",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    /// Match a format name case-insensitively.
    ///
    /// An unrecognized name fails instead of selecting a no-op grammar.
    fn from_str(s: &str) -> Result<Self> {
        let lowered = s.to_ascii_lowercase();
        match lowered.as_str() {
            "ipac" => Ok(OutputFormat::Ipac),
            "votable" => Ok(OutputFormat::Votable),
            "csv" => Ok(OutputFormat::Csv),
            "tsv" => Ok(OutputFormat::Tsv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(Error::InvalidArgumentError(format!(
                "unrecognized output format '{s}' (expected ipac, votable, csv, tsv, or json)"
            ))),
        }
    }
}

/// Write the grammar's header block.
pub(crate) fn write_header<W: Write>(
    out: &mut W,
    format: OutputFormat,
    schema: &TableSchema,
    overflow: bool,
) -> Result<()> {
    match format {
        OutputFormat::Ipac => ipac::write_header(out, schema),
        OutputFormat::Votable => votable::write_header(out, schema, overflow),
        OutputFormat::Csv => delimited::write_header(out, schema, b','),
        OutputFormat::Tsv => delimited::write_header(out, schema, b'\t'),
        OutputFormat::Json => json::write_header(out),
    }
}

/// Open the grammar's body section, where one exists.
///
/// Only VOTable wraps its rows in explicit structure (`<DATA><TABLEDATA>`);
/// every other grammar's body starts at the first row.
pub(crate) fn begin_body<W: Write>(out: &mut W, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Votable => votable::begin_body(out),
        _ => Ok(()),
    }
}

/// Write one data row.
///
/// `last_of_document` is true for the final row of an `emit_tail` invocation;
/// JSON uses it to drop the trailing row separator.
pub(crate) fn write_row<W: Write>(
    out: &mut W,
    format: OutputFormat,
    schema: &TableSchema,
    row: &[Value],
    last_of_document: bool,
) -> Result<()> {
    match format {
        OutputFormat::Ipac => ipac::write_row(out, schema, row),
        OutputFormat::Votable => votable::write_row(out, schema, row),
        OutputFormat::Csv => delimited::write_row(out, schema, row, b',', true),
        OutputFormat::Tsv => delimited::write_row(out, schema, row, b'\t', false),
        OutputFormat::Json => json::write_row(out, schema, row, last_of_document),
    }
}

/// Write the grammar's closing structure.
///
/// `empty_table` marks the zero-row header+tail case, where VOTable closes
/// straight from `<TABLE>` without ever opening a `<DATA>` block. IPAC, CSV,
/// and TSV have no tail beyond their rows.
pub(crate) fn write_tail<W: Write>(
    out: &mut W,
    format: OutputFormat,
    empty_table: bool,
) -> Result<()> {
    match format {
        OutputFormat::Votable => votable::write_tail(out, empty_table),
        OutputFormat::Json => json::write_tail(out),
        OutputFormat::Ipac | OutputFormat::Csv | OutputFormat::Tsv => Ok(()),
    }
}
