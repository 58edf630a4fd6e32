//! Column descriptor parsing.
//!
//! The descriptor matrix is the 7×ncols table of per-column metadata supplied
//! with every invocation, in row order: name, type, dbtype, format, units,
//! description, width. Rows 0–5 hold text cells (a `Null` cell reads as the
//! empty string); the final row holds integer display widths. The parser
//! transposes the attribute rows into one owned [`ColumnDescriptor`] per
//! column, sized once and cleaned up by scope.

use tabwrite_result::{Error, Result};

use crate::value::{Row, Value};

/// Number of attribute rows in a descriptor matrix.
pub const DESCRIPTOR_ROWS: usize = 7;

const ROW_NAME: usize = 0;
const ROW_TYPE: usize = 1;
const ROW_DBTYPE: usize = 2;
const ROW_FORMAT: usize = 3;
const ROW_UNITS: usize = 4;
const ROW_DESCRIPTION: usize = 5;
const ROW_WIDTH: usize = 6;

/// Presentation type of a column.
///
/// `date` and `timestamp` type strings coerce to [`ColumnType::Char`] at
/// parse time; the three integer variants format identically and are kept
/// distinct only because descriptor tables distinguish them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Char,
    Int,
    Long,
    Integer,
    Float,
    Double,
}

impl ColumnType {
    /// Parse a raw type string, case-insensitively.
    pub fn from_type_name(raw: &str) -> Option<ColumnType> {
        let lowered = raw.to_ascii_lowercase();
        match lowered.as_str() {
            "char" | "date" | "timestamp" => Some(ColumnType::Char),
            "int" => Some(ColumnType::Int),
            "long" => Some(ColumnType::Long),
            "integer" => Some(ColumnType::Integer),
            "float" => Some(ColumnType::Float),
            "double" => Some(ColumnType::Double),
            _ => None,
        }
    }

    /// Lowercase name, used verbatim as the VOTable `datatype` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Char => "char",
            ColumnType::Int => "int",
            ColumnType::Long => "long",
            ColumnType::Integer => "integer",
            ColumnType::Float => "float",
            ColumnType::Double => "double",
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, ColumnType::Int | ColumnType::Long | ColumnType::Integer)
    }

    pub fn is_floating(&self) -> bool {
        matches!(self, ColumnType::Float | ColumnType::Double)
    }
}

/// Typed metadata for one output column.
#[derive(Debug, Clone)]
pub struct ColumnDescriptor {
    /// Lowercased column identifier.
    pub name: String,
    pub col_type: ColumnType,
    /// Raw database type string, retained separately from `col_type`.
    pub db_type: String,
    /// printf-style width/precision directive, e.g. `12.6f`.
    pub format: String,
    pub units: String,
    pub description: String,
    /// Display width for the fixed-width grammars.
    pub width: usize,
}

impl ColumnDescriptor {
    /// True when the column's values format as text.
    ///
    /// Both the parse-time `date`/`timestamp` coercion and the raw dbtype
    /// check exist in the upstream contract; honor both.
    pub fn treats_as_text(&self) -> bool {
        self.col_type == ColumnType::Char || self.db_type.eq_ignore_ascii_case("timestamp")
    }
}

/// Parsed per-column metadata for one table.
#[derive(Debug, Clone)]
pub struct TableSchema {
    columns: Vec<ColumnDescriptor>,
}

impl TableSchema {
    /// Parse a raw 7×ncols descriptor matrix.
    ///
    /// ncols derives from the first row's length; every row must match it.
    /// Fails with [`Error::InvalidArgumentError`] naming the offending row or
    /// column on any cardinality or width violation.
    pub fn parse(matrix: &[Row]) -> Result<TableSchema> {
        if matrix.is_empty() {
            return Err(Error::InvalidArgumentError(
                "descriptor matrix is empty".into(),
            ));
        }
        if matrix.len() != DESCRIPTOR_ROWS {
            return Err(Error::InvalidArgumentError(format!(
                "descriptor matrix has {} rows but {DESCRIPTOR_ROWS} are required \
                 (name, type, dbtype, format, units, description, width)",
                matrix.len()
            )));
        }

        let ncols = matrix[ROW_NAME].len();
        if ncols == 0 {
            return Err(Error::InvalidArgumentError(
                "descriptor matrix has no columns".into(),
            ));
        }
        for (idx, row) in matrix.iter().enumerate() {
            if row.len() != ncols {
                return Err(Error::InvalidArgumentError(format!(
                    "descriptor row {idx} has {} cells but the table has {ncols} columns",
                    row.len()
                )));
            }
        }

        let mut columns = Vec::with_capacity(ncols);
        for i in 0..ncols {
            let name = text_cell(&matrix[ROW_NAME][i]).to_lowercase();
            let raw_type = text_cell(&matrix[ROW_TYPE][i]);
            let col_type = ColumnType::from_type_name(&raw_type).ok_or_else(|| {
                Error::InvalidArgumentError(format!(
                    "column '{name}' has unsupported type '{raw_type}'"
                ))
            })?;
            let width = match &matrix[ROW_WIDTH][i] {
                Value::Integer(w) if *w >= 0 => *w as usize,
                other => {
                    return Err(Error::InvalidArgumentError(format!(
                        "width for column '{name}' must be a non-negative integer, got {other:?}"
                    )));
                }
            };
            columns.push(ColumnDescriptor {
                name,
                col_type,
                db_type: text_cell(&matrix[ROW_DBTYPE][i]),
                format: text_cell(&matrix[ROW_FORMAT][i]),
                units: text_cell(&matrix[ROW_UNITS][i]),
                description: text_cell(&matrix[ROW_DESCRIPTION][i]),
                width,
            });
        }

        Ok(TableSchema { columns })
    }

    pub fn columns(&self) -> &[ColumnDescriptor] {
        &self.columns
    }

    pub fn ncols(&self) -> usize {
        self.columns.len()
    }
}

fn text_cell(cell: &Value) -> String {
    match cell {
        Value::Text(s) => s.clone(),
        _ => String::new(),
    }
}
