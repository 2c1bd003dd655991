use crate::error::{Error, Result};
use crate::table::BenchmarkTable;
use serde::Serialize;

/// Two aligned sequences, ordered by `x`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricSeries {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl MetricSeries {
    /// Extracts `(x_col, y_col)` from `table`, sorted by `x`. The sort is
    /// stable: rows with the same `x` keep their file order.
    pub fn extract(
        table: &BenchmarkTable,
        x_col: &str,
        y_col: &str,
    ) -> Result<Self> {
        let column = |name: &str| {
            table.column(name).ok_or_else(|| Error::ColumnNotFound {
                column: name.to_string(),
            })
        };
        let x = column(x_col)?;
        let y = column(y_col)?;
        if x.len() != y.len() {
            return Err(Error::LengthMismatch {
                x: x_col.to_string(),
                y: y_col.to_string(),
            });
        }

        let mut pairs: Vec<_> =
            x.iter().copied().zip(y.iter().copied()).collect();
        pairs.sort_by(|(a, _), (b, _)| a.total_cmp(b));
        let (x, y) = pairs.into_iter().unzip();
        Ok(Self { x, y })
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::table::Column;
    use quickcheck_macros::quickcheck;

    fn table(rows: &[(u8, u32)]) -> BenchmarkTable {
        let columns = vec![
            Column::new("n", rows.iter().map(|row| row.0 as f64).collect()),
            Column::new("a", rows.iter().map(|row| row.1 as f64).collect()),
        ];
        BenchmarkTable::new("prop", columns).expect("columns have equal length")
    }

    #[quickcheck]
    fn extract_is_sorted_stable_permutation(rows: Vec<(u8, u32)>) -> bool {
        let series = MetricSeries::extract(&table(&rows), "n", "a").unwrap();
        let sorted = series.x().windows(2).all(|w| w[0] <= w[1]);

        // a stable sort by `n` of the original pairs must give the same result
        let mut expected: Vec<_> = rows
            .iter()
            .map(|(n, a)| (*n as f64, *a as f64))
            .collect();
        expected.sort_by(|(a, _), (b, _)| a.total_cmp(b));
        let actual: Vec<_> = series
            .x()
            .iter()
            .copied()
            .zip(series.y().iter().copied())
            .collect();
        sorted && actual == expected
    }

    #[quickcheck]
    fn extract_is_idempotent(rows: Vec<(u8, u32)>) -> bool {
        let first = MetricSeries::extract(&table(&rows), "n", "a").unwrap();
        let sorted_rows: Vec<_> = first
            .x()
            .iter()
            .zip(first.y())
            .map(|(n, a)| (*n as u8, *a as u32))
            .collect();
        let second =
            MetricSeries::extract(&table(&sorted_rows), "n", "a").unwrap();
        first == second
    }
}
