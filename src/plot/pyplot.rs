use crate::plot::figure::Figure;
use pyo3::prelude::*;
use pyo3::types::PyDict;

pub struct PyPlot<'p> {
    plt: &'p PyModule,
}

impl<'p> PyPlot<'p> {
    pub fn new(py: Python<'p>) -> PyResult<Self> {
        let plt = PyModule::import(py, "matplotlib.pyplot")?;
        Ok(Self { plt })
    }

    pub fn figure(&self, kwargs: Option<&PyDict>) -> PyResult<Figure<'_>> {
        let fig = self.plt.getattr("figure")?.call((), kwargs)?;
        Ok(Figure::new(fig))
    }

    /// Shows all open figures, blocking until their windows are closed.
    pub fn show(&self) -> PyResult<()> {
        self.plt.getattr("show")?.call0()?;
        Ok(())
    }

    pub fn close(&self, figure: Figure<'_>) -> PyResult<()> {
        self.plt.getattr("close")?.call1((figure.fig(),))?;
        Ok(())
    }
}
