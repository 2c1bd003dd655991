// This module contains the definition of `BenchmarkTable` and `Selector`.
pub mod table;

// This module contains the definition of `Variant`, `Operation`,
// `ColumnRole` and `Schema`.
pub mod schema;

// This module contains the definition of `MetricSeries`.
pub mod series;

// This module contains the definition of `ChartSpec`, `Panel` and `render`.
pub mod chart;

// This module contains the definition of `Layout`, `Report` and `compose`.
pub mod report;

// This module contains the definition of `RenderConfig` and `TimeUnit`.
pub mod config;

// This module contains the definition of `Error`.
pub mod error;

// This module contains the definition of `PlotFmt`.
pub mod fmt;

// This module contains the matplotlib sink.
#[cfg(feature = "pyo3")]
pub mod plot;

// Re-exports.
pub use chart::{render, ChartSpec, Panel, Scale};
pub use config::{RenderConfig, TimeUnit};
pub use error::{Error, Result};
pub use fmt::PlotFmt;
pub use report::{compose, Layout, Report};
pub use schema::{ColumnRole, Operation, Schema, Variant};
pub use series::MetricSeries;
pub use table::{BenchmarkTable, Selector};

use std::path::Path;

/// Print python errors (with their traceback) and bail.
#[cfg(feature = "pyo3")]
#[macro_export]
macro_rules! pytry {
    ($py:expr, $e:expr) => {{
        match $e {
            Ok(v) => v,
            Err(e) => {
                e.print($py);
                return Err(color_eyre::eyre::eyre!("python error: {}", e));
            }
        }
    }};
}

#[cfg(feature = "pyo3")]
#[macro_export]
macro_rules! pydict {
    ($py:expr, $($tup:expr),* $(,)?) => {{
        let dict = pyo3::types::PyDict::new($py);
        $(
            let (key, value) = $tup;
            $crate::pytry!($py, dict.set_item(key, value));
        )*
        dict
    }};
}

/// Loads the benchmark file at `path` and builds its report.
pub fn run(path: impl AsRef<Path>, config: &RenderConfig) -> Result<Report> {
    let table = BenchmarkTable::load(path)?;
    build_report(&table, config)
}

/// Builds the node tree vs leaf tree report: one panel per operation in
/// `config`, each comparing the median duration of both variants.
pub fn build_report(
    table: &BenchmarkTable,
    config: &RenderConfig,
) -> Result<Report> {
    let schema = config.schema().unwrap_or_else(|| Schema::detect(table));

    // convert durations; a column missing here is reported when extracted
    let durations = schema
        .duration_columns()
        .into_iter()
        .filter(|column| table.column(column).is_some())
        .collect();
    let table = table
        .normalize(&Selector::Columns(durations), config.unit().divisor())?;

    let size = schema.column(ColumnRole::Size);
    let panels = config
        .operations()
        .iter()
        .enumerate()
        .map(|(index, &operation)| {
            let mut spec =
                ChartSpec::new(PlotFmt::panel_title(index, operation))
                    .x_label(PlotFmt::x_label())
                    .y_label(PlotFmt::y_label(operation, config.unit()))
                    .scales(config.x_scale(), config.y_scale());
            for variant in Variant::all() {
                let column =
                    schema.column(ColumnRole::Median(variant, operation));
                let series = MetricSeries::extract(&table, &size, &column)?;
                spec = spec.series(PlotFmt::variant_name(variant), series);
            }
            render(&spec, config)
        })
        .collect::<Result<Vec<_>>>()?;

    compose(panels, config.layout(), PlotFmt::report_title())
}
