use pyo3::exceptions::{PyIndexError, PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::session::SsspSession;
use crate::Error;

fn to_py_err(err: Error) -> PyErr {
    match &err {
        Error::VertexOutOfRange(..) | Error::InvalidSource(..) => {
            PyIndexError::new_err(err.to_string())
        }
        Error::InvalidVertexCount(_) | Error::NegativeWeight(..) => {
            PyValueError::new_err(err.to_string())
        }
        _ => PyRuntimeError::new_err(err.to_string()),
    }
}

/// Python view of a shortest-path session; vertex ids are 0-based.
#[pyclass]
pub struct PySsspSession {
    session: SsspSession<i64>,
}

#[pymethods]
impl PySsspSession {
    #[new]
    fn new(vertex_count: usize) -> PyResult<Self> {
        Ok(PySsspSession {
            session: SsspSession::new(vertex_count).map_err(to_py_err)?,
        })
    }

    fn reset(&mut self, vertex_count: usize) -> PyResult<()> {
        self.session.reset(vertex_count).map_err(to_py_err)
    }

    fn clear(&mut self) {
        self.session.clear()
    }

    #[pyo3(signature = (u, v, weight, directed = true))]
    fn add_edge(&mut self, u: usize, v: usize, weight: i64, directed: bool) -> PyResult<()> {
        let inserted = if directed {
            self.session.add_edge(u, v, weight)
        } else {
            self.session.add_edge_undirected(u, v, weight)
        };
        inserted.map_err(to_py_err)
    }

    fn compute(&mut self, source: usize) -> PyResult<()> {
        self.session.compute(source).map_err(to_py_err)
    }

    /// None means the vertex was never reached
    fn distance_to(&self, vertex: usize) -> PyResult<Option<i64>> {
        self.session.distance_to(vertex).map_err(to_py_err)
    }

    fn distances(&self) -> PyResult<Vec<Option<i64>>> {
        Ok(self.session.distances().map_err(to_py_err)?.to_vec())
    }

    /// Empty list means the destination was never reached
    fn path_to(&self, destination: usize) -> PyResult<Vec<usize>> {
        self.session.path_to(destination).map_err(to_py_err)
    }

    fn vertex_count(&self) -> usize {
        self.session.vertex_count()
    }

    fn edge_count(&self) -> usize {
        self.session.edge_count()
    }
}

#[pymodule]
fn dijkstra_sssp_py(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<PySsspSession>()?;
    Ok(())
}
