use crate::error::{Error, Result};
use crate::schema::SIZE_COLUMN;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// A named column of numeric values.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    values: Vec<f64>,
}

impl Column {
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

/// Selects the columns to be rescaled by `BenchmarkTable::normalize`.
#[derive(Debug, Clone)]
pub enum Selector {
    /// exactly these columns; all of them must exist
    Columns(Vec<String>),
    /// every column whose name contains the marker
    Marker(String),
}

impl Selector {
    fn matches(&self, name: &str) -> bool {
        match self {
            Selector::Columns(columns) => columns.iter().any(|c| c == name),
            Selector::Marker(marker) => name.contains(marker.as_str()),
        }
    }
}

/// Benchmark measurements, stored column by column. Column order and row
/// order are the ones from the input file, and all columns have the same
/// length.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkTable {
    origin: String,
    columns: Vec<Column>,
}

impl BenchmarkTable {
    pub fn new(
        origin: impl Into<String>,
        columns: Vec<Column>,
    ) -> Result<Self> {
        if let Some(first) = columns.first() {
            let mismatch = columns
                .iter()
                .find(|column| column.values.len() != first.values.len());
            if let Some(column) = mismatch {
                return Err(Error::LengthMismatch {
                    x: first.name.clone(),
                    y: column.name.clone(),
                });
            }
        }
        Ok(Self {
            origin: origin.into(),
            columns,
        })
    }

    /// Loads a comma-separated benchmark file with a header row.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let origin = path.display().to_string();
        let file = File::open(path).map_err(|source| Error::NotFound {
            path: origin.clone(),
            source,
        })?;
        Self::from_reader(BufReader::new(file), origin)
    }

    /// Same as `BenchmarkTable::load`, but reading from `reader`; `origin`
    /// is only used in diagnostics.
    pub fn from_reader<R: Read>(
        reader: R,
        origin: impl Into<String>,
    ) -> Result<Self> {
        let origin = origin.into();
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        // parse header
        let headers = reader
            .headers()
            .map_err(|e| csv_error(&origin, e))?
            .clone();
        if headers.iter().all(|name| name.is_empty()) {
            return Err(Error::Parse {
                path: origin,
                line: 1,
                reason: String::from("missing header row"),
            });
        }
        let mut seen = HashSet::new();
        for name in headers.iter() {
            if !seen.insert(name) {
                return Err(Error::Parse {
                    path: origin,
                    line: 1,
                    reason: format!("duplicate column {:?}", name),
                });
            }
        }
        let mut columns: Vec<_> = headers
            .iter()
            .map(|name| Column::new(name, Vec::new()))
            .collect();

        // parse rows; `csv` rejects rows whose arity differs from the header
        for record in reader.records() {
            let record = record.map_err(|e| csv_error(&origin, e))?;
            let line = record.position().map(|pos| pos.line()).unwrap_or(0);
            for (column, cell) in columns.iter_mut().zip(record.iter()) {
                let value = cell.parse::<f64>().map_err(|_| Error::Parse {
                    path: origin.clone(),
                    line,
                    reason: format!(
                        "column {:?}: {:?} is not a number",
                        column.name, cell
                    ),
                })?;
                column.values.push(value);
            }
        }

        let table = Self { origin, columns };
        match table.column(SIZE_COLUMN) {
            Some(sizes) => {
                tracing::info!(
                    "loaded {} experiments from {} | sizes: {:?}",
                    table.len(),
                    table.origin,
                    sizes
                );
            }
            None => {
                tracing::info!(
                    "loaded {} experiments from {} | no {:?} column",
                    table.len(),
                    table.origin,
                    SIZE_COLUMN
                );
            }
        }
        Ok(table)
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.columns
            .first()
            .map(|column| column.values.len())
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|column| column.name())
    }

    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.columns
            .iter()
            .find(|column| column.name == name)
            .map(|column| column.values())
    }

    /// Returns row `index` as `(column name, value)` pairs.
    pub fn row(&self, index: usize) -> Option<Vec<(&str, f64)>> {
        if index >= self.len() {
            return None;
        }
        let row = self
            .columns
            .iter()
            .map(|column| (column.name(), column.values[index]))
            .collect();
        Some(row)
    }

    /// Returns a copy of this table where the values of every column
    /// selected by `selector` are divided by `divisor`. Other columns are
    /// copied as they are.
    pub fn normalize(
        &self,
        selector: &Selector,
        divisor: f64,
    ) -> Result<Self> {
        if !divisor.is_finite() || divisor <= 0.0 {
            return Err(Error::InvalidDivisor(divisor));
        }
        if let Selector::Columns(names) = selector {
            if let Some(missing) =
                names.iter().find(|name| self.column(name).is_none())
            {
                return Err(Error::ColumnNotFound {
                    column: missing.clone(),
                });
            }
        }

        let columns = self
            .columns
            .iter()
            .map(|column| {
                if selector.matches(&column.name) {
                    tracing::debug!(
                        "normalize: dividing {:?} by {}",
                        column.name,
                        divisor
                    );
                    let values =
                        column.values.iter().map(|v| v / divisor).collect();
                    Column::new(column.name.clone(), values)
                } else {
                    column.clone()
                }
            })
            .collect();
        Ok(Self {
            origin: self.origin.clone(),
            columns,
        })
    }
}

fn csv_error(origin: &str, error: csv::Error) -> Error {
    let line = error.position().map(|pos| pos.line()).unwrap_or(0);
    match error.into_kind() {
        csv::ErrorKind::Io(source) => Error::NotFound {
            path: origin.to_string(),
            source,
        },
        csv::ErrorKind::UnequalLengths {
            expected_len, len, ..
        } => Error::Parse {
            path: origin.to_string(),
            line,
            reason: format!(
                "row has {} fields but the header has {}",
                len, expected_len
            ),
        },
        kind => Error::Parse {
            path: origin.to_string(),
            line,
            reason: format!("{:?}", kind),
        },
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use quickcheck_macros::quickcheck;

    const MEDIAN: &str = "a_insert_median";

    fn table(rows: &[(u32, f64, f64)]) -> BenchmarkTable {
        let column = |name: &str, f: fn(&(u32, f64, f64)) -> f64| {
            Column::new(name, rows.iter().map(f).collect())
        };
        let columns = vec![
            column("n", |row| row.0 as f64),
            column(MEDIAN, |row| row.1),
            column("notes", |row| row.2),
        ];
        BenchmarkTable::new("prop", columns).expect("columns have same length")
    }

    fn bits(values: Option<&[f64]>) -> Vec<u64> {
        values
            .expect("column should exist")
            .iter()
            .map(|v| v.to_bits())
            .collect()
    }

    #[quickcheck]
    fn normalize_preserves_shape(
        rows: Vec<(u32, f64, f64)>,
        divisor: u16,
    ) -> bool {
        let divisor = divisor as f64 + 1.0;
        let table = table(&rows);
        let selector = Selector::Marker(String::from("median"));
        let normalized =
            table.normalize(&selector, divisor).expect("valid divisor");

        let same_names = table.column_names().eq(normalized.column_names());
        let same_len = table.len() == normalized.len();
        let untouched = ["n", "notes"].iter().all(|name| {
            bits(table.column(name)) == bits(normalized.column(name))
        });
        let scaled: Vec<_> = rows.iter().map(|row| row.1 / divisor).collect();
        let scaled =
            bits(Some(scaled.as_slice())) == bits(normalized.column(MEDIAN));
        same_names && same_len && untouched && scaled
    }

    #[quickcheck]
    fn normalize_is_pure(rows: Vec<(u32, f64, f64)>) -> bool {
        let table = table(&rows);
        let selector = Selector::Columns(vec![String::from(MEDIAN)]);
        let first = table.normalize(&selector, 1000.0).expect("valid divisor");
        let second = table.normalize(&selector, 1000.0).expect("valid divisor");
        let original: Vec<_> = rows.iter().map(|row| row.1.to_bits()).collect();
        bits(first.column(MEDIAN)) == bits(second.column(MEDIAN))
            && bits(table.column(MEDIAN)) == original
    }
}
