use crate::chart::Scale;
use crate::report::Layout;
use crate::schema::{Operation, Schema};
use serde::Serialize;
use std::str::FromStr;

/// Unit the benchmark durations are plotted in. The upstream benchmark
/// always writes nanoseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TimeUnit {
    Nanos,
    Micros,
    Millis,
}

impl TimeUnit {
    /// Returns by how much nanoseconds must be divided to get this unit.
    pub fn divisor(&self) -> f64 {
        match self {
            TimeUnit::Nanos => 1.0,
            TimeUnit::Micros => 1_000.0,
            TimeUnit::Millis => 1_000_000.0,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            TimeUnit::Nanos => "ns",
            TimeUnit::Micros => "µs",
            TimeUnit::Millis => "ms",
        }
    }
}

impl FromStr for TimeUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ns" => Ok(TimeUnit::Nanos),
            "us" | "µs" => Ok(TimeUnit::Micros),
            "ms" => Ok(TimeUnit::Millis),
            _ => Err(format!("unsupported time unit {:?}", s)),
        }
    }
}

// seaborn's "husl" palette with 6 colors
const PALETTE: [&str; 6] = [
    "#f77189", "#bb9832", "#50b131", "#36ada4", "#3ba3ec", "#e866f4",
];

// matplotlib marker codes
const MARKERS: [&str; 4] = ["o", "s", "^", "D"];

/// How a report is rendered. Built once before the run and only read
/// afterwards.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// unit durations are converted to
    unit: TimeUnit,
    /// column naming; if not set, it's detected from the table
    schema: Option<Schema>,
    /// operations to plot, one panel each
    operations: Vec<Operation>,
    x_scale: Scale,
    y_scale: Scale,
    layout: Layout,
    /// series `i` is drawn with `palette[i % len]` and `markers[i % len]`
    palette: Vec<&'static str>,
    markers: Vec<&'static str>,
    line_width: f64,
    marker_size: f64,
    line_alpha: f64,
    grid_alpha: f64,
    /// matplotlib style sheet
    style: Option<String>,
    /// figure size in inches (width, height)
    figure_size: (f64, f64),
    title_font_size: f64,
}

impl RenderConfig {
    /// Create a new `RenderConfig` for a 2x2 log-log report in
    /// microseconds.
    pub fn new() -> Self {
        Self {
            unit: TimeUnit::Micros,
            schema: None,
            operations: Operation::all().to_vec(),
            x_scale: Scale::Log,
            y_scale: Scale::Log,
            layout: Layout::Grid { rows: 2, cols: 2 },
            palette: PALETTE.to_vec(),
            markers: MARKERS.to_vec(),
            line_width: 2.0,
            marker_size: 6.0,
            line_alpha: 1.0,
            grid_alpha: 0.3,
            style: Some(String::from("seaborn-v0_8")),
            figure_size: (15.0, 12.0),
            title_font_size: 16.0,
        }
    }

    pub fn unit(&self) -> TimeUnit {
        self.unit
    }

    pub fn set_unit(&mut self, unit: TimeUnit) {
        self.unit = unit;
    }

    pub fn schema(&self) -> Option<Schema> {
        self.schema
    }

    pub fn set_schema(&mut self, schema: Option<Schema>) {
        self.schema = schema;
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn set_operations(&mut self, operations: Vec<Operation>) {
        self.operations = operations;
    }

    pub fn x_scale(&self) -> Scale {
        self.x_scale
    }

    pub fn y_scale(&self) -> Scale {
        self.y_scale
    }

    /// Sets the scale of both axes.
    pub fn set_scale(&mut self, scale: Scale) {
        self.x_scale = scale;
        self.y_scale = scale;
    }

    pub fn set_x_scale(&mut self, scale: Scale) {
        self.x_scale = scale;
    }

    pub fn set_y_scale(&mut self, scale: Scale) {
        self.y_scale = scale;
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn set_layout(&mut self, layout: Layout) {
        self.layout = layout;
    }

    pub fn color(&self, index: usize) -> &'static str {
        self.palette[index % self.palette.len()]
    }

    pub fn marker(&self, index: usize) -> &'static str {
        self.markers[index % self.markers.len()]
    }

    /// Replaces the palette; an empty palette is ignored.
    pub fn set_palette(&mut self, palette: Vec<&'static str>) {
        if !palette.is_empty() {
            self.palette = palette;
        }
    }

    pub fn line_width(&self) -> f64 {
        self.line_width
    }

    pub fn marker_size(&self) -> f64 {
        self.marker_size
    }

    pub fn line_alpha(&self) -> f64 {
        self.line_alpha
    }

    pub fn set_line_alpha(&mut self, alpha: f64) {
        self.line_alpha = alpha;
    }

    pub fn grid_alpha(&self) -> f64 {
        self.grid_alpha
    }

    pub fn style(&self) -> Option<&str> {
        self.style.as_deref()
    }

    pub fn set_style(&mut self, style: Option<String>) {
        self.style = style;
    }

    pub fn figure_size(&self) -> (f64, f64) {
        self.figure_size
    }

    pub fn title_font_size(&self) -> f64 {
        self.title_font_size
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_unit() {
        assert_eq!("ns".parse::<TimeUnit>(), Ok(TimeUnit::Nanos));
        assert_eq!("us".parse::<TimeUnit>(), Ok(TimeUnit::Micros));
        assert_eq!("ms".parse::<TimeUnit>(), Ok(TimeUnit::Millis));
        assert!("s".parse::<TimeUnit>().is_err());
        assert_eq!(TimeUnit::Micros.divisor(), 1000.0);
        assert_eq!(TimeUnit::Nanos.divisor(), 1.0);
    }

    #[test]
    fn palette_cycles() {
        let mut config = RenderConfig::new();
        config.set_palette(vec!["red", "blue"]);
        assert_eq!(config.color(0), "red");
        assert_eq!(config.color(1), "blue");
        assert_eq!(config.color(2), "red");

        config.set_palette(Vec::new());
        assert_eq!(config.color(3), "blue");
        assert_eq!(config.marker(4), config.marker(0));
    }

    #[test]
    fn scales_per_axis() {
        let mut config = RenderConfig::new();
        config.set_y_scale(Scale::Linear);
        assert_eq!(config.x_scale(), Scale::Log);
        assert_eq!(config.y_scale(), Scale::Linear);
        config.set_scale(Scale::Linear);
        config.set_x_scale(Scale::Log);
        assert_eq!(config.x_scale(), Scale::Log);
        assert_eq!(config.y_scale(), Scale::Linear);
    }
}
