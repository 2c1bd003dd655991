use crate::chart::AxisKind;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong between reading the benchmark table and
/// handing a `Report` to a sink.
#[derive(Debug, Error)]
pub enum Error {
    #[error("load: cannot read benchmark file {path}: {source}")]
    NotFound {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("load: malformed benchmark file {path} (line {line}): {reason}")]
    Parse {
        path: String,
        line: u64,
        reason: String,
    },
    #[error("extract: column {column:?} not found in table")]
    ColumnNotFound { column: String },
    #[error("extract: columns {x:?} and {y:?} have different lengths")]
    LengthMismatch { x: String, y: String },
    #[error("normalize: divisor must be finite and positive, got {0}")]
    InvalidDivisor(f64),
    #[error(
        "render: panel {panel:?}, series {series:?} has value {value} on the \
         {axis} axis, which is not allowed in log scale"
    )]
    InvalidScale {
        panel: String,
        series: String,
        axis: AxisKind,
        value: f64,
    },
    #[error("render: panel {panel:?} has no series")]
    EmptyChart { panel: String },
    #[error(
        "compose: {panels} panels do not fit in a layout with {capacity} cells"
    )]
    LayoutOverflow { panels: usize, capacity: usize },
}
