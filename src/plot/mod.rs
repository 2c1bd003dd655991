pub mod axes;
pub mod figure;
pub mod pyplot;
pub mod style;

use crate::chart::Panel;
use crate::config::RenderConfig;
use crate::report::{Layout, Report};
use crate::{pydict, pytry};
use axes::Axes;
use color_eyre::eyre;
use figure::Figure;
use pyo3::prelude::*;
use pyplot::PyPlot;
use style::Style;

/// Draws `report` with matplotlib. If `output` is set, figures are saved
/// there (see `Report::figure_paths`); otherwise they are shown on screen.
pub fn draw(
    report: &Report,
    config: &RenderConfig,
    output: Option<&str>,
) -> eyre::Result<()> {
    Python::with_gil(|py| {
        // set style for this draw only
        if let Some(name) = config.style() {
            let style = pytry!(py, Style::new(py));
            pytry!(py, style.use_(name));
        }
        let plt = pytry!(py, PyPlot::new(py));

        let paths = output.map(|base| report.figure_paths(base));
        let path = |index: usize| {
            paths
                .as_ref()
                .and_then(|paths| paths.get(index))
                .map(String::as_str)
        };

        match report.layout() {
            Layout::Grid { rows, cols } => {
                let kwargs = pydict!(py, ("figsize", config.figure_size()));
                let fig = pytry!(py, plt.figure(Some(kwargs)));
                set_title(py, &fig, report.title(), config)?;
                for placed in report.panels() {
                    let index = placed.row * cols + placed.col + 1;
                    let ax = pytry!(py, fig.add_subplot(rows, cols, index));
                    draw_panel(py, &ax, &placed.panel)?;
                }
                end_figure(py, &plt, fig, path(0))?;
            }
            Layout::Sequence => {
                for (index, placed) in report.panels().iter().enumerate() {
                    let fig = pytry!(py, plt.figure(None));
                    set_title(py, &fig, report.title(), config)?;
                    let ax = pytry!(py, fig.add_subplot(1, 1, 1));
                    draw_panel(py, &ax, &placed.panel)?;
                    end_figure(py, &plt, fig, path(index))?;
                }
            }
        }

        if output.is_none() {
            pytry!(py, plt.show());
        }
        Ok(())
    })
}

fn set_title(
    py: Python<'_>,
    fig: &Figure<'_>,
    title: &str,
    config: &RenderConfig,
) -> eyre::Result<()> {
    let kwargs = pydict!(
        py,
        ("fontsize", config.title_font_size()),
        ("fontweight", "bold"),
    );
    pytry!(py, fig.suptitle(title, Some(kwargs)));
    Ok(())
}

fn draw_panel(
    py: Python<'_>,
    ax: &Axes<'_>,
    panel: &Panel,
) -> eyre::Result<()> {
    for line in panel.lines.iter() {
        let kwargs = pydict!(
            py,
            ("label", line.label.as_str()),
            ("color", line.color),
            ("linewidth", line.line_width),
            ("markersize", line.marker_size),
            ("alpha", line.alpha),
        );
        let fmt = line.fmt();
        let (x, y) = (line.x.clone(), line.y.clone());
        pytry!(py, ax.plot(x, y, Some(fmt.as_str()), Some(kwargs)));
    }

    pytry!(py, ax.set_xlabel(&panel.x_label));
    pytry!(py, ax.set_ylabel(&panel.y_label));
    pytry!(py, ax.set_title(&panel.title));
    pytry!(py, ax.legend(None));
    let kwargs = pydict!(py, ("alpha", panel.grid_alpha));
    pytry!(py, ax.grid(true, Some(kwargs)));
    pytry!(py, ax.set_xscale(panel.x_scale.name()));
    pytry!(py, ax.set_yscale(panel.y_scale.name()));
    Ok(())
}

// Saves the figure if there's a `path`; otherwise it's kept open so that it
// is shown at the end.
fn end_figure(
    py: Python<'_>,
    plt: &PyPlot<'_>,
    fig: Figure<'_>,
    path: Option<&str>,
) -> eyre::Result<()> {
    let kwargs = pydict!(py, ("rect", vec![0.0, 0.0, 1.0, 0.96]));
    pytry!(py, fig.tight_layout(Some(kwargs)));
    if let Some(path) = path {
        pytry!(py, fig.savefig(path, None));
        tracing::info!("saved figure to {}", path);
        pytry!(py, plt.close(fig));
    }
    Ok(())
}
