//! Streaming header/body/tail phase protocol over an output sink.
//!
//! [`ResultWriter`] drives one invocation of the shared encoder contract:
//! parse the descriptor matrix, open the target (truncate when the header is
//! requested, append otherwise), emit header, rows, and tail as the flags
//! direct, and flush after every structurally meaningful unit so partial
//! progress is durable. A caller accumulates one well-formed document across
//! invocations by emitting the header in the first call, body batches in the
//! middle calls, and the tail in the last — or all three at once.
//!
//! The writer performs no locking: callers guarantee at most one active
//! writer per target and strict header → body → tail call order.

use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

use tabwrite_result::{Error, Result};

use crate::format::{self, OutputFormat};
use crate::schema::TableSchema;
use crate::value::Row;

/// Flags controlling one writer invocation.
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Emit the grammar's header block, truncating the target.
    pub emit_header: bool,
    /// Reserved. Column descriptions in the IPAC header are accepted but not
    /// emitted.
    pub include_column_descriptions: bool,
    /// Result set was truncated upstream; surfaced only in the VOTable
    /// QUERY_STATUS INFO element.
    pub overflow: bool,
    /// Emit the grammar's closing structure after this batch.
    pub emit_tail: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            emit_header: true,
            include_column_descriptions: false,
            overflow: false,
            emit_tail: true,
        }
    }
}

/// Streaming writer for one output target.
#[derive(Debug, Clone)]
pub struct ResultWriter {
    format: OutputFormat,
    options: WriteOptions,
}

impl ResultWriter {
    /// Writer with default options (header and tail in one call).
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            options: WriteOptions::default(),
        }
    }

    pub fn with_options(format: OutputFormat, options: WriteOptions) -> Self {
        Self { format, options }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn options(&self) -> &WriteOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut WriteOptions {
        &mut self.options
    }

    /// Run one invocation against a file path.
    ///
    /// The file opens in truncate mode when `emit_header` is set and append
    /// mode otherwise, and closes on every exit path. Inputs are validated
    /// before the file is touched, so a validation failure writes nothing.
    pub fn write_batch_to_path<P: AsRef<Path>>(
        &self,
        path: P,
        matrix: &[Row],
        rows: &[Row],
    ) -> Result<()> {
        tracing::trace!(
            "[RESULT_WRITE] write_batch_to_path: format={} rows={} header={} tail={}",
            self.format.as_str(),
            rows.len(),
            self.options.emit_header,
            self.options.emit_tail,
        );

        let schema = TableSchema::parse(matrix)?;
        validate_rows(&schema, rows)?;

        let file = if self.options.emit_header {
            OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(path.as_ref())?
        } else {
            OpenOptions::new()
                .append(true)
                .create(true)
                .open(path.as_ref())?
        };

        let mut sink = BufWriter::new(file);
        self.write_phases(&mut sink, &schema, rows)?;
        sink.flush()?;
        tracing::trace!("[RESULT_WRITE] write_batch_to_path: invocation complete");
        Ok(())
    }

    /// Run one invocation against an arbitrary sink.
    ///
    /// Open-mode handling is the caller's concern when supplying a sink
    /// directly; the phase protocol is otherwise identical to
    /// [`ResultWriter::write_batch_to_path`].
    pub fn write_batch_to_writer<W: Write>(
        &self,
        mut sink: W,
        matrix: &[Row],
        rows: &[Row],
    ) -> Result<()> {
        let schema = TableSchema::parse(matrix)?;
        validate_rows(&schema, rows)?;
        self.write_phases(&mut sink, &schema, rows)
    }

    fn write_phases<W: Write>(&self, out: &mut W, schema: &TableSchema, rows: &[Row]) -> Result<()> {
        if self.options.emit_header {
            format::write_header(out, self.format, schema, self.options.overflow)?;
            out.flush()?;
            tracing::trace!("[RESULT_WRITE] header written");
        }

        // One-call empty document: header then the empty-table tail, with no
        // body section ever opened.
        if rows.is_empty() && self.options.emit_header && self.options.emit_tail {
            format::write_tail(out, self.format, true)?;
            out.flush()?;
            tracing::trace!("[RESULT_WRITE] empty-table tail written");
            return Ok(());
        }

        if self.options.emit_header {
            format::begin_body(out, self.format)?;
        }

        for (idx, row) in rows.iter().enumerate() {
            let last_of_document = self.options.emit_tail && idx == rows.len() - 1;
            format::write_row(out, self.format, schema, row, last_of_document)?;
            out.flush()?;
        }

        if self.options.emit_tail {
            format::write_tail(out, self.format, false)?;
            out.flush()?;
            tracing::trace!("[RESULT_WRITE] tail written");
        }

        Ok(())
    }
}

fn validate_rows(schema: &TableSchema, rows: &[Row]) -> Result<()> {
    for (idx, row) in rows.iter().enumerate() {
        if row.len() != schema.ncols() {
            return Err(Error::InvalidArgumentError(format!(
                "row {idx} has {} cells but the schema has {} columns",
                row.len(),
                schema.ncols()
            )));
        }
    }
    Ok(())
}
