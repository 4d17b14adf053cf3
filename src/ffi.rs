/*
 * Notice of Provisional Patent Filing:
 * The methods and algorithms implemented in this file are the subject of a
 * United States Provisional Patent Application (63/988,438)
 * filed on February 23, 2026.
 *
 * This source code is licensed under the Business Source License 1.1.
 */

//! Python FFI bindings via PyO3.
//!
//! Exposes the muxer to Python for offline tuning and plotting of transition
//! windows against recorded model traces.
//!
//! # Building the Python extension
//!
//! ```bash
//! pip install maturin
//! maturin develop --features python-ffi
//! ```
//!
//! # Usage
//!
//! ```python
//! from mux_core import ModelMux
//!
//! mux = ModelMux(max_transition_secs=1.0, convergence_epsilon=0.01)
//!
//! dt = 0.02
//! trace = []
//! for tick in range(100):
//!     models = [estimator(tick), control_law(tick)]
//!     selected = 1 if tick >= 50 else 0
//!     trace.append(mux.update(models, selected, dt))
//! # trace is continuous across the switch at tick 50
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::error::MuxError;
use crate::mux::{ModelMux as RustModelMux, MuxConfig};

fn mux_err(e: MuxError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

// ── ModelMux ─────────────────────────────────────────────────────────────────

/// The muxing state machine — blends model outputs across selection switches.
#[pyclass(name = "ModelMux")]
#[derive(Clone)]
pub struct PyModelMux {
    inner: RustModelMux,
}

#[pymethods]
impl PyModelMux {
    /// Create a ready muxer.
    ///
    /// Args:
    ///     max_transition_secs: Upper bound on a switch-induced blend, seconds (default 1.0)
    ///     convergence_epsilon: Distance to target at which the blend ends early (default 0.01)
    #[new]
    #[pyo3(signature = (max_transition_secs=1.0, convergence_epsilon=0.01))]
    pub fn new(max_transition_secs: f32, convergence_epsilon: f32) -> Self {
        Self {
            inner: RustModelMux::new(MuxConfig::new(max_transition_secs, convergence_epsilon)),
        }
    }

    /// Advance one control tick and return the blended output.
    ///
    /// Args:
    ///     models: Freshly computed output of every candidate model
    ///     selected: Index of the model to publish
    ///     dt: Elapsed time since the previous tick, seconds
    ///
    /// Raises:
    ///     ValueError: on a degenerate dt, an empty model list, or an
    ///         out-of-range selection. The muxer state is left untouched.
    pub fn update(&mut self, models: Vec<f32>, selected: usize, dt: f32) -> PyResult<f32> {
        self.inner.update(&models, selected, dt).map_err(mux_err)
    }

    /// Re-initialize in place, discarding any blend in progress.
    #[pyo3(signature = (max_transition_secs=1.0, convergence_epsilon=0.01))]
    pub fn init(&mut self, max_transition_secs: f32, convergence_epsilon: f32) {
        self.inner
            .init(MuxConfig::new(max_transition_secs, convergence_epsilon));
    }

    /// Last published output.
    #[getter]
    pub fn output(&self) -> f32 {
        self.inner.output()
    }

    /// Index used in the last successful update, or None before the first.
    #[getter]
    pub fn selected(&self) -> Option<usize> {
        self.inner.selected()
    }

    /// Seconds left in the active blend; zero when settled.
    #[getter]
    pub fn remaining_transition(&self) -> f32 {
        self.inner.remaining_transition()
    }

    /// True while a switch-induced blend is in progress.
    #[getter]
    pub fn is_blending(&self) -> bool {
        self.inner.is_blending()
    }

    /// Python repr string.
    pub fn __repr__(&self) -> String {
        format!(
            "ModelMux(output={:.4}, selected={:?}, remaining={:.4})",
            self.inner.output(),
            self.inner.selected(),
            self.inner.remaining_transition(),
        )
    }
}

/// Python module definition.
#[pymodule]
pub fn mux_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyModelMux>()?;
    m.add("MIN_DT", crate::mux::MIN_DT)?;
    m.add("FALLBACK_OUTPUT", crate::mux::FALLBACK_OUTPUT)?;
    Ok(())
}
