//! Ordered row tables with CSV export and parsing.

use crate::{ResultsError, ResultsResult};
use serde::Serialize;

/// A fixed-width record with a stable column order.
pub trait TableRow: Sized {
    /// Column names, in export order.
    const HEADERS: &'static [&'static str];

    /// One text cell per header.
    fn to_fields(&self) -> Vec<String>;

    /// Inverse of `to_fields`.
    fn from_fields(fields: &[&str]) -> Result<Self, String>;
}

/// Immutable, ordered result rows. Row order is significant (curve order).
#[derive(Debug, Clone, PartialEq)]
pub struct ResultTable<R> {
    rows: Vec<R>,
}

impl<R: TableRow> ResultTable<R> {
    pub fn new(rows: Vec<R>) -> Self {
        Self { rows }
    }

    pub fn headers(&self) -> &'static [&'static str] {
        R::HEADERS
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn into_rows(self) -> Vec<R> {
        self.rows
    }

    /// Header line plus one line per row.
    pub fn to_csv(&self) -> String {
        let mut csv = R::HEADERS.join(",");
        csv.push('\n');
        for row in &self.rows {
            csv.push_str(&row.to_fields().join(","));
            csv.push('\n');
        }
        csv
    }

    pub fn from_csv(text: &str) -> ResultsResult<Self> {
        let mut lines = text.lines().enumerate().filter(|(_, l)| !l.trim().is_empty());

        let expected = R::HEADERS.join(",");
        let header = lines.next().map(|(_, l)| l.trim()).unwrap_or_default();
        if header != expected {
            return Err(ResultsError::Header {
                expected,
                found: header.to_string(),
            });
        }

        let mut rows = Vec::new();
        for (idx, line) in lines {
            let fields: Vec<&str> = line.trim().split(',').map(str::trim).collect();
            if fields.len() != R::HEADERS.len() {
                return Err(ResultsError::Parse {
                    line: idx + 1,
                    message: format!(
                        "expected {} fields, found {}",
                        R::HEADERS.len(),
                        fields.len()
                    ),
                });
            }
            let row = R::from_fields(&fields).map_err(|message| ResultsError::Parse {
                line: idx + 1,
                message,
            })?;
            rows.push(row);
        }

        Ok(Self { rows })
    }
}

impl<R: TableRow + Serialize> ResultTable<R> {
    pub fn to_json(&self) -> ResultsResult<String> {
        Ok(serde_json::to_string_pretty(&self.rows)?)
    }
}

impl<'a, R> IntoIterator for &'a ResultTable<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

pub(crate) fn format_f64(v: f64) -> String {
    format!("{v}")
}

pub(crate) fn format_opt(v: Option<f64>) -> String {
    v.map(format_f64).unwrap_or_default()
}

pub(crate) fn parse_f64(field: &str, name: &str) -> Result<f64, String> {
    field
        .parse::<f64>()
        .map_err(|e| format!("{name}: '{field}' is not a number ({e})"))
}

pub(crate) fn parse_opt(field: &str, name: &str) -> Result<Option<f64>, String> {
    if field.is_empty() {
        Ok(None)
    } else {
        parse_f64(field, name).map(Some)
    }
}

pub(crate) fn parse_bool(field: &str, name: &str) -> Result<bool, String> {
    field
        .parse::<bool>()
        .map_err(|_| format!("{name}: '{field}' is not true/false"))
}
