//! Two-column `truth,prediction` CSV parsing.
//!
//! Every non-blank row must hold exactly two fields. A row that does not, or
//! a field that fails to parse, aborts the whole read: no partial columns are
//! ever returned.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use ::csv::{ReaderBuilder, StringRecord, Trim};
use mlmetrics_core::{MetricsError, Result};

/// Ground-truth and prediction columns of equal length.
#[derive(Debug, Clone, PartialEq)]
pub struct PairColumns<T> {
    pub y_true: Vec<T>,
    pub y_pred: Vec<T>,
}

impl<T> PairColumns<T> {
    /// Number of rows read.
    pub fn len(&self) -> usize {
        self.y_true.len()
    }

    /// Whether the input had no data rows.
    pub fn is_empty(&self) -> bool {
        self.y_true.is_empty()
    }

    /// Convert every element of both columns, failing on the first error.
    pub fn try_map<U, F>(self, mut f: F) -> Result<PairColumns<U>>
    where
        F: FnMut(T) -> Result<U>,
    {
        let y_true = self.y_true.into_iter().map(&mut f).collect::<Result<Vec<_>>>()?;
        let y_pred = self.y_pred.into_iter().map(&mut f).collect::<Result<Vec<_>>>()?;
        Ok(PairColumns { y_true, y_pred })
    }
}

/// Reader settings.
#[derive(Debug, Clone, Copy)]
pub struct ReadOptions {
    /// Skip the first row.
    pub has_header: bool,
    /// Field separator.
    pub delimiter: u8,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            has_header: false,
            delimiter: b',',
        }
    }
}

/// Read a file whose two columns are real numbers.
///
/// # Errors
///
/// Returns [`MetricsError::Io`] if the file cannot be opened and
/// [`MetricsError::Parse`] for a row with other than two fields or a field
/// that is not a finite number (`NaN` and `inf` are rejected).
pub fn read_numeric_pairs(path: impl AsRef<Path>, options: ReadOptions) -> Result<PairColumns<f64>> {
    read_pairs(open(path.as_ref())?, options, parse_finite)
}

/// Read a file whose two columns are categorical labels, kept verbatim.
///
/// # Errors
///
/// Returns [`MetricsError::Io`] if the file cannot be opened and
/// [`MetricsError::Parse`] for a row with other than two fields.
pub fn read_label_pairs(path: impl AsRef<Path>, options: ReadOptions) -> Result<PairColumns<String>> {
    read_pairs(open(path.as_ref())?, options, |field, _| Ok(field.to_string()))
}

/// Read pairs from any reader, converting each field with `parse`.
///
/// `parse` receives the trimmed field and the row it came from.
pub fn read_pairs<R, T, F>(reader: R, options: ReadOptions, mut parse: F) -> Result<PairColumns<T>>
where
    R: Read,
    F: FnMut(&str, &StringRecord) -> Result<T>,
{
    let mut reader = ReaderBuilder::new()
        .has_headers(options.has_header)
        .delimiter(options.delimiter)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut y_true = Vec::new();
    let mut y_pred = Vec::new();

    for result in reader.records() {
        let record = result.map_err(|e| MetricsError::Parse(e.to_string()))?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        if record.len() != 2 {
            return Err(MetricsError::Parse(format!(
                "line {}: expected 2 columns, found {} in '{}'",
                line_of(&record),
                record.len(),
                row_text(&record)
            )));
        }
        y_true.push(parse(&record[0], &record)?);
        y_pred.push(parse(&record[1], &record)?);
    }

    tracing::debug!(rows = y_true.len(), "read truth/prediction pairs");
    Ok(PairColumns { y_true, y_pred })
}

fn open(path: &Path) -> Result<File> {
    tracing::debug!(path = %path.display(), "opening pair file");
    File::open(path).map_err(|e| {
        MetricsError::Io(std::io::Error::new(
            e.kind(),
            format!("{}: {}", path.display(), e),
        ))
    })
}

fn parse_field<T: FromStr>(field: &str, record: &StringRecord) -> Result<T> {
    field.parse::<T>().map_err(|_| {
        MetricsError::Parse(format!(
            "line {}: invalid number '{}' in '{}'",
            line_of(record),
            field,
            row_text(record)
        ))
    })
}

fn parse_finite(field: &str, record: &StringRecord) -> Result<f64> {
    let value = parse_field::<f64>(field, record)?;
    if !value.is_finite() {
        return Err(MetricsError::Parse(format!(
            "line {}: non-finite number '{}' in '{}'",
            line_of(record),
            field,
            row_text(record)
        )));
    }
    Ok(value)
}

fn line_of(record: &StringRecord) -> u64 {
    record.position().map_or(0, |pos| pos.line())
}

fn row_text(record: &StringRecord) -> String {
    record.iter().collect::<Vec<_>>().join(",")
}
