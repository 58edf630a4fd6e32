//! Cell values and the printf-style column directive engine.
//!
//! Every cell arrives as a tagged [`Value`]; formatting decisions switch on
//! this tag plus the column's declared type, never on runtime inspection.
//! Column directives are the printf-style width/precision strings carried in
//! the descriptor matrix (`12.6f`, `10d`, `20s`); the fixed-width IPAC grammar
//! applies them as-is, while every other grammar drops the width component
//! because column alignment is meaningless outside fixed-width output.

use crate::schema::ColumnDescriptor;

/// A single table cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Text(String),
    Integer(i64),
    Real(f64),
}

/// One table row, position-aligned to the schema's columns.
pub type Row = Vec<Value>;

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Real(v)
    }
}

/// Parsed form of a column directive: `[width][.precision][conversion]`.
///
/// Left-justification is implied throughout; fields always render
/// flush-left. Conversions outside `s`/`d`/`i`/`f`/`e` (or a missing
/// conversion) fall back to plain `Display` rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Directive {
    width: Option<usize>,
    precision: Option<usize>,
    conversion: Option<char>,
}

impl Directive {
    fn parse(raw: &str) -> Self {
        let mut chars = raw.chars().peekable();
        let width = take_digits(&mut chars);
        let precision = if chars.peek() == Some(&'.') {
            chars.next();
            // printf treats a bare `.` as precision zero
            Some(take_digits(&mut chars).unwrap_or(0))
        } else {
            None
        };
        let conversion = chars.next().filter(|c| c.is_ascii_alphabetic());
        Directive {
            width,
            precision,
            conversion,
        }
    }

    /// Drop the width component, keeping only the `.`-prefixed suffix.
    ///
    /// A directive without a `.` is used unmodified.
    fn strip_width(self) -> Self {
        if self.precision.is_some() {
            Directive {
                width: None,
                ..self
            }
        } else {
            self
        }
    }
}

fn take_digits(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> Option<usize> {
    let mut digits = String::new();
    while let Some(c) = chars.peek() {
        if c.is_ascii_digit() {
            digits.push(*c);
            chars.next();
        } else {
            break;
        }
    }
    digits.parse().ok()
}

/// Left-justify `base` to `width` when a width is present.
pub(crate) fn pad(base: &str, width: Option<usize>) -> String {
    match width {
        Some(w) => format!("{base:<w$}"),
        None => base.to_string(),
    }
}

/// Render a text cell per its column directive (IPAC grammar).
pub(crate) fn format_text(directive: &str, text: &str) -> String {
    let d = Directive::parse(directive);
    pad(text, d.width)
}

/// Render an integer cell per its column directive (IPAC grammar).
pub(crate) fn format_integer(directive: &str, value: i64) -> String {
    let d = Directive::parse(directive);
    pad(&value.to_string(), d.width)
}

/// Render a floating cell with the full directive, width included (IPAC).
pub(crate) fn format_real(directive: &str, value: f64) -> String {
    render_real(Directive::parse(directive), value)
}

/// Render a floating cell with the width component stripped (non-IPAC).
pub(crate) fn format_real_plain(directive: &str, value: f64) -> String {
    render_real(Directive::parse(directive).strip_width(), value)
}

fn render_real(d: Directive, value: f64) -> String {
    let base = match d.conversion {
        Some('d') | Some('i') => (value as i64).to_string(),
        Some('e') => {
            let p = d.precision.unwrap_or(6);
            format!("{value:.p$e}")
        }
        Some('f') => {
            let p = d.precision.unwrap_or(6);
            format!("{value:.p$}")
        }
        _ => match d.precision {
            Some(p) => format!("{value:.p$}"),
            None => value.to_string(),
        },
    };
    pad(&base, d.width)
}

/// Grammar-independent cell classification for the non-fixed-width grammars.
///
/// CSV, TSV, VOTable, and JSON all share these tokens and differ only in how
/// they frame them (quoting, CDATA, the `null` literal).
pub(crate) enum PlainToken {
    Null,
    Text(String),
    Number(String),
}

/// Produce the plain token for one cell.
///
/// A cell whose tag does not match its column's declared type renders as the
/// empty token; callers are expected to uphold the alignment contract.
pub(crate) fn plain_token(col: &ColumnDescriptor, cell: &Value) -> PlainToken {
    match cell {
        Value::Null => PlainToken::Null,
        _ if col.treats_as_text() => PlainToken::Text(match cell {
            Value::Text(s) => s.clone(),
            _ => String::new(),
        }),
        _ if col.col_type.is_integer() => PlainToken::Number(match cell {
            Value::Integer(v) => v.to_string(),
            _ => String::new(),
        }),
        _ => PlainToken::Number(match cell {
            Value::Real(v) => format_real_plain(&col.format, *v),
            Value::Integer(v) => format_real_plain(&col.format, *v as f64),
            _ => String::new(),
        }),
    }
}
