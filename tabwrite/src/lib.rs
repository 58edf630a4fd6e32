//! Streaming multi-format tabular result writer.
//!
//! Given a 7×ncols column descriptor matrix and batches of row data, the
//! writer emits a syntactically valid document in one of five grammars:
//! fixed-width pipe-delimited IPAC ASCII, VOTable XML, CSV, TSV, or a JSON
//! array of objects. Invocations are incremental: a caller may emit the
//! header in one call, body rows across many calls, and the closing
//! structure in a final call, accumulating one well-formed artifact on disk.
//! A single call with `emit_header` and `emit_tail` both set and an empty
//! batch produces a complete, well-formed empty document.
//!
//! ```
//! use tabwrite::{OutputFormat, ResultWriter, Row, Value};
//!
//! let matrix: Vec<Row> = vec![
//!     vec!["ra".into(), "name".into()],
//!     vec!["double".into(), "char".into()],
//!     vec!["binary_double".into(), "varchar2".into()],
//!     vec!["12.6f".into(), "20s".into()],
//!     vec!["deg".into(), "".into()],
//!     vec!["".into(), "".into()],
//!     vec![Value::Integer(14), Value::Integer(20)],
//! ];
//! let rows: Vec<Row> = vec![vec![Value::Real(10.123456), "Obj A".into()]];
//!
//! let writer = ResultWriter::new(OutputFormat::Json);
//! let mut out = Vec::new();
//! writer.write_batch_to_writer(&mut out, &matrix, &rows).unwrap();
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "[\n{\"ra\": 10.123456,\n\"name\": \"Obj A\"}\n]\n"
//! );
//! ```

pub mod format;
pub mod schema;
pub mod value;
pub mod writer;

pub use format::OutputFormat;
pub use schema::{ColumnDescriptor, ColumnType, TableSchema};
pub use tabwrite_result::{Error, Result};
pub use value::{Row, Value};
pub use writer::{ResultWriter, WriteOptions};
