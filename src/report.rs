use crate::chart::Panel;
use crate::error::{Error, Result};
use serde::Serialize;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// all panels in a single figure, filled row by row
    Grid { rows: usize, cols: usize },
    /// one standalone figure per panel
    Sequence,
}

impl Layout {
    /// Maximum number of panels; `None` if unbounded. A grid too large for
    /// `usize` is unbounded as well.
    pub fn capacity(&self) -> Option<usize> {
        match self {
            Layout::Grid { rows, cols } => rows.checked_mul(*cols),
            Layout::Sequence => None,
        }
    }
}

impl FromStr for Layout {
    type Err = String;

    /// Accepts `sequence`, `grid` (2x2) or `ROWSxCOLS`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "sequence" => Ok(Layout::Sequence),
            "grid" => Ok(Layout::Grid { rows: 2, cols: 2 }),
            _ => {
                let parse = |dim: &str| dim.trim().parse::<usize>().ok();
                s.split_once('x')
                    .and_then(|(rows, cols)| Some((parse(rows)?, parse(cols)?)))
                    .map(|(rows, cols)| Layout::Grid { rows, cols })
                    .ok_or_else(|| format!("unsupported layout {:?}", s))
            }
        }
    }
}

/// A panel and where it goes. For `Layout::Sequence`, `row` is the figure
/// index and `col` is always 0.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedPanel {
    pub row: usize,
    pub col: usize,
    pub panel: Panel,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    title: String,
    layout: Layout,
    panels: Vec<PlacedPanel>,
}

impl Report {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn panels(&self) -> &[PlacedPanel] {
        &self.panels
    }

    /// Number of figures a sink has to produce.
    pub fn figure_count(&self) -> usize {
        match self.layout {
            Layout::Grid { .. } => 1,
            Layout::Sequence => self.panels.len(),
        }
    }

    /// Output file for each figure: `base` itself for a grid; for a
    /// sequence, `base` with `_1`, `_2`, ... before its extension.
    pub fn figure_paths(&self, base: &str) -> Vec<String> {
        match self.layout {
            Layout::Grid { .. } => vec![base.to_string()],
            Layout::Sequence => {
                let path = Path::new(base);
                let extension = path
                    .extension()
                    .map(|ext| format!(".{}", ext.to_string_lossy()))
                    .unwrap_or_default();
                (1..=self.panels.len())
                    .map(|index| match path.file_stem() {
                        Some(stem) => {
                            let name = format!(
                                "{}_{}{}",
                                stem.to_string_lossy(),
                                index,
                                extension
                            );
                            path.with_file_name(name)
                                .to_string_lossy()
                                .into_owned()
                        }
                        // `base` is a directory (e.g. `plots/..`)
                        None => format!("{}_{}", base, index),
                    })
                    .collect()
            }
        }
    }
}

pub fn compose(
    panels: Vec<Panel>,
    layout: Layout,
    title: impl Into<String>,
) -> Result<Report> {
    if let Some(capacity) = layout.capacity() {
        if panels.len() > capacity {
            return Err(Error::LayoutOverflow {
                panels: panels.len(),
                capacity,
            });
        }
    }

    let panels: Vec<_> = panels
        .into_iter()
        .enumerate()
        .map(|(index, panel)| {
            let (row, col) = match layout {
                Layout::Grid { cols, .. } => (index / cols, index % cols),
                Layout::Sequence => (index, 0),
            };
            PlacedPanel { row, col, panel }
        })
        .collect();
    let title = title.into();
    tracing::info!(
        "composed report {:?} with {} panels ({:?})",
        title,
        panels.len(),
        layout
    );
    Ok(Report {
        title,
        layout,
        panels,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::Scale;

    fn panel(title: &str) -> Panel {
        Panel {
            title: title.to_string(),
            x_label: String::from("n"),
            y_label: String::from("time"),
            x_scale: Scale::Linear,
            y_scale: Scale::Linear,
            grid_alpha: 0.3,
            lines: Vec::new(),
        }
    }

    fn panels(count: usize) -> Vec<Panel> {
        (0..count).map(|i| panel(&format!("panel {}", i))).collect()
    }

    #[test]
    fn compose_full_grid() {
        let layout = Layout::Grid { rows: 2, cols: 2 };
        let report = compose(panels(4), layout, "title").unwrap();
        assert_eq!(report.title(), "title");
        assert_eq!(report.figure_count(), 1);
        let places: Vec<_> = report
            .panels()
            .iter()
            .map(|placed| (placed.row, placed.col, placed.panel.title.as_str()))
            .collect();
        assert_eq!(
            places,
            vec![
                (0, 0, "panel 0"),
                (0, 1, "panel 1"),
                (1, 0, "panel 2"),
                (1, 1, "panel 3"),
            ]
        );
    }

    #[test]
    fn compose_partial_grid() {
        let layout = Layout::Grid { rows: 2, cols: 3 };
        let report = compose(panels(4), layout, "title").unwrap();
        assert_eq!(report.panels().len(), 4);
        assert_eq!((report.panels()[3].row, report.panels()[3].col), (1, 0));
    }

    #[test]
    fn compose_overflow() {
        let layout = Layout::Grid { rows: 1, cols: 3 };
        match compose(panels(4), layout, "title") {
            Err(Error::LayoutOverflow { panels, capacity }) => {
                assert_eq!(panels, 4);
                assert_eq!(capacity, 3);
            }
            other => panic!("expected layout overflow, got {:?}", other),
        }

        let layout = Layout::Grid { rows: 0, cols: 2 };
        assert!(matches!(
            compose(panels(1), layout, "title"),
            Err(Error::LayoutOverflow { .. })
        ));
        assert!(compose(Vec::new(), layout, "title").is_ok());
    }

    #[test]
    fn compose_huge_grid() {
        let layout: Layout = "18446744073709551615x2".parse().unwrap();
        assert_eq!(layout.capacity(), None);
        let report = compose(panels(3), layout, "title").unwrap();
        let places: Vec<_> = report
            .panels()
            .iter()
            .map(|placed| (placed.row, placed.col))
            .collect();
        assert_eq!(places, vec![(0, 0), (0, 1), (1, 0)]);

        let layout = Layout::Grid {
            rows: usize::MAX / 2,
            cols: 2,
        };
        assert_eq!(layout.capacity(), Some(usize::MAX - 1));
        assert!(compose(panels(4), layout, "title").is_ok());
    }

    #[test]
    fn compose_sequence() {
        let report = compose(panels(5), Layout::Sequence, "title").unwrap();
        assert_eq!(report.figure_count(), 5);
        assert!(report
            .panels()
            .iter()
            .enumerate()
            .all(|(i, placed)| placed.row == i && placed.col == 0));
    }

    #[test]
    fn figure_paths() {
        let grid = compose(panels(4), Layout::Grid { rows: 2, cols: 2 }, "t")
            .unwrap();
        assert_eq!(grid.figure_paths("plots/report.pdf"), ["plots/report.pdf"]);

        let sequence = compose(panels(2), Layout::Sequence, "t").unwrap();
        assert_eq!(
            sequence.figure_paths("plots/report.pdf"),
            ["plots/report_1.pdf", "plots/report_2.pdf"]
        );
        assert_eq!(sequence.figure_paths("report"), ["report_1", "report_2"]);
        assert_eq!(
            sequence.figure_paths("../out/.hidden"),
            ["../out/.hidden_1", "../out/.hidden_2"]
        );
        assert_eq!(
            sequence.figure_paths("plots/v1.2/report"),
            ["plots/v1.2/report_1", "plots/v1.2/report_2"]
        );
    }

    #[cfg(windows)]
    #[test]
    fn figure_paths_windows() {
        let sequence = compose(panels(2), Layout::Sequence, "t").unwrap();
        assert_eq!(
            sequence.figure_paths(r"C:\plots.d\report.pdf"),
            [r"C:\plots.d\report_1.pdf", r"C:\plots.d\report_2.pdf"]
        );
        assert_eq!(
            sequence.figure_paths(r"plots.d\report"),
            [r"plots.d\report_1", r"plots.d\report_2"]
        );
    }

    #[test]
    fn layout_from_str() {
        assert_eq!("sequence".parse::<Layout>(), Ok(Layout::Sequence));
        assert_eq!(
            "grid".parse::<Layout>(),
            Ok(Layout::Grid { rows: 2, cols: 2 })
        );
        assert_eq!(
            "1x4".parse::<Layout>(),
            Ok(Layout::Grid { rows: 1, cols: 4 })
        );
        assert!("4".parse::<Layout>().is_err());
        assert!("ax2".parse::<Layout>().is_err());
    }
}
