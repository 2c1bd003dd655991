use crate::plot::axes::Axes;
use pyo3::prelude::*;
use pyo3::types::PyDict;

// https://matplotlib.org/stable/api/figure_api.html#matplotlib.figure.Figure
pub struct Figure<'a> {
    fig: &'a PyAny,
}

impl<'a> Figure<'a> {
    pub fn new(fig: &'a PyAny) -> Self {
        Self { fig }
    }

    pub fn fig(&self) -> &PyAny {
        self.fig
    }

    /// Adds the `index`-th (starting at 1) subplot of a `nrows x ncols` grid.
    pub fn add_subplot(
        &self,
        nrows: usize,
        ncols: usize,
        index: usize,
    ) -> PyResult<Axes<'_>> {
        let ax =
            self.fig.call_method1("add_subplot", (nrows, ncols, index))?;
        Ok(Axes::new(ax))
    }

    pub fn suptitle(
        &self,
        title: &str,
        kwargs: Option<&PyDict>,
    ) -> PyResult<()> {
        self.fig.call_method("suptitle", (title,), kwargs)?;
        Ok(())
    }

    pub fn tight_layout(&self, kwargs: Option<&PyDict>) -> PyResult<()> {
        self.fig.call_method("tight_layout", (), kwargs)?;
        Ok(())
    }

    pub fn savefig(
        &self,
        path: &str,
        kwargs: Option<&PyDict>,
    ) -> PyResult<()> {
        self.fig.call_method("savefig", (path,), kwargs)?;
        Ok(())
    }
}
