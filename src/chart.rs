use crate::config::RenderConfig;
use crate::error::{Error, Result};
use crate::series::MetricSeries;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Scale {
    Linear,
    Log,
}

impl Scale {
    /// Name of the scale in matplotlib.
    pub fn name(&self) -> &'static str {
        match self {
            Scale::Linear => "linear",
            Scale::Log => "log",
        }
    }
}

impl FromStr for Scale {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "linear" => Ok(Scale::Linear),
            "log" => Ok(Scale::Log),
            _ => Err(format!("unsupported scale {:?}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisKind {
    X,
    Y,
}

impl fmt::Display for AxisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisKind::X => write!(f, "x"),
            AxisKind::Y => write!(f, "y"),
        }
    }
}

/// What to draw in one panel. Built with the consuming setters below and not
/// changed afterwards.
#[derive(Debug, Clone)]
pub struct ChartSpec {
    title: String,
    x_label: String,
    y_label: String,
    x_scale: Scale,
    y_scale: Scale,
    series: Vec<(String, MetricSeries)>,
}

impl ChartSpec {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            x_label: String::new(),
            y_label: String::new(),
            x_scale: Scale::Linear,
            y_scale: Scale::Linear,
            series: Vec::new(),
        }
    }

    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = label.into();
        self
    }

    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = label.into();
        self
    }

    pub fn scales(mut self, x_scale: Scale, y_scale: Scale) -> Self {
        self.x_scale = x_scale;
        self.y_scale = y_scale;
        self
    }

    /// Adds a series; its legend entry will be `label`.
    pub fn series(
        mut self,
        label: impl Into<String>,
        series: MetricSeries,
    ) -> Self {
        self.series.push((label.into(), series));
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

/// One series, ready to be drawn.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Line {
    pub label: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub color: &'static str,
    pub marker: &'static str,
    pub line_width: f64,
    pub marker_size: f64,
    pub alpha: f64,
}

impl Line {
    /// matplotlib format string: markers connected by a solid line
    pub fn fmt(&self) -> String {
        format!("{}-", self.marker)
    }
}

/// A rendered chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Panel {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub x_scale: Scale,
    pub y_scale: Scale,
    pub grid_alpha: f64,
    pub lines: Vec<Line>,
}

impl Panel {
    /// Legend labels, in drawing order.
    pub fn labels(&self) -> Vec<&str> {
        self.lines.iter().map(|line| line.label.as_str()).collect()
    }
}

pub fn render(spec: &ChartSpec, config: &RenderConfig) -> Result<Panel> {
    if spec.series.is_empty() {
        return Err(Error::EmptyChart {
            panel: spec.title.clone(),
        });
    }

    // log scales require strictly positive values
    for (label, series) in spec.series.iter() {
        let axes = [
            (AxisKind::X, spec.x_scale, series.x()),
            (AxisKind::Y, spec.y_scale, series.y()),
        ];
        for (axis, scale, values) in axes {
            if scale != Scale::Log {
                continue;
            }
            // `!(v > 0)` also rejects NaN
            if let Some(value) = values.iter().find(|v| !(**v > 0.0)) {
                return Err(Error::InvalidScale {
                    panel: spec.title.clone(),
                    series: label.clone(),
                    axis,
                    value: *value,
                });
            }
        }
    }

    let lines = spec
        .series
        .iter()
        .enumerate()
        .map(|(index, (label, series))| Line {
            label: label.clone(),
            x: series.x().to_vec(),
            y: series.y().to_vec(),
            color: config.color(index),
            marker: config.marker(index),
            line_width: config.line_width(),
            marker_size: config.marker_size(),
            alpha: config.line_alpha(),
        })
        .collect();
    tracing::debug!(
        "rendered panel {:?} with {} series",
        spec.title,
        spec.series.len()
    );

    Ok(Panel {
        title: spec.title.clone(),
        x_label: spec.x_label.clone(),
        y_label: spec.y_label.clone(),
        x_scale: spec.x_scale,
        y_scale: spec.y_scale,
        grid_alpha: config.grid_alpha(),
        lines,
    })
}
