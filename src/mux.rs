/*
 * Notice of Provisional Patent Filing:
 * The methods and algorithms implemented in this file are the subject of a
 * United States Provisional Patent Application (63/988,438)
 * filed on February 23, 2026.
 *
 * This source code is licensed under the Business Source License 1.1.
 */

//! The output muxer — blend-on-switch smoothing of model outputs.
//!
//! A control loop computes several candidate outputs per tick (estimators,
//! control laws) and selects one. Feeding the selected value straight to an
//! actuator steps discontinuously at every switch. [`ModelMux`] instead ramps
//! the published output from the previously active value toward the newly
//! selected model over a bounded window:
//!
//! ```text
//!          ┌─ settled ──────────────── output = models[selected]
//! update ──┤
//!          └─ blending ─ step toward target, at most max_transition_secs,
//!                        ending early on convergence within epsilon
//! ```
//!
//! States are: uninitialized, initialized with no prior selection, settled
//! (`remaining == 0`), and blending (`remaining > 0`). A selection change
//! always restarts the full window, even mid-blend.
//!
//! # Invariants
//!
//! - **MUX-001**: `remaining` stays in `[0.0, max_transition_secs]`. The
//!   decrement is clamped; the overshoot guard makes a negative value
//!   unreachable in the first place (see `test_countdown_stays_in_range`).
//! - **MUX-002**: a failed [`ModelMux::update`] leaves the state untouched.
//! - **MUX-003**: immediately after a switch, the first step magnitude is
//!   bounded by `|target − output| × dt / max_transition_secs` — never the
//!   full jump.
//! - no_std compatible; no heap allocation; zero unsafe code.

use log::trace;

use crate::error::MuxError;

/// Smallest accepted time step, in seconds.
///
/// `update` rejects any `dt` at or below this threshold — the proportional
/// step divides by `remaining / dt`, and a degenerate `dt` would make that
/// division unstable.
pub const MIN_DT: f32 = 1e-6;

/// Output published when a legacy caller polls through an error.
///
/// See [`ModelMux::update_or_fallback`].
pub const FALLBACK_OUTPUT: f32 = 0.0;

/// Absolute value of an f32 without the std float intrinsics.
/// no_std compatible at the crate's MSRV.
#[inline]
fn fabs(x: f32) -> f32 {
    if x < 0.0 {
        -x
    } else {
        x
    }
}

// ─── MuxConfig ───────────────────────────────────────────────────────────────

/// Configuration for a [`ModelMux`]. Immutable after [`ModelMux::init`].
///
/// Both parameters must be positive for meaningful behavior. This is the
/// caller's responsibility — the muxer does not enforce it, matching the
/// contract that `init` never fails.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MuxConfig {
    /// Upper bound on how long a switch-induced blend may run, in seconds.
    ///
    /// Must be positive. Default 1.0.
    pub max_transition_secs: f32,
    /// Once the output is within this distance of the target, the blend is
    /// complete and the output snaps to the target.
    ///
    /// Must be positive. Default 0.01.
    pub convergence_epsilon: f32,
}

impl MuxConfig {
    /// Construct a config from explicit transition window and epsilon.
    pub fn new(max_transition_secs: f32, convergence_epsilon: f32) -> Self {
        Self {
            max_transition_secs,
            convergence_epsilon,
        }
    }
}

impl Default for MuxConfig {
    fn default() -> Self {
        Self {
            max_transition_secs: 1.0,
            convergence_epsilon: 0.01,
        }
    }
}

// ─── ModelMux ────────────────────────────────────────────────────────────────

/// The muxing state machine. One logical control loop owns one instance and
/// drives it once per tick with the freshly computed model outputs.
///
/// Independent instances are fully independent; for several signals in the
/// same loop see the `bank` feature.
///
/// ```rust
/// use mux_core::{ModelMux, MuxConfig};
///
/// let mut mux = ModelMux::new(MuxConfig::default());
/// let models = [1.0_f32, 3.0];
///
/// let out = mux.update(&models, 0, 0.02).unwrap();
/// assert_eq!(out, 1.0); // first selection publishes directly
///
/// let out = mux.update(&models, 1, 0.02).unwrap();
/// assert!(out < 3.0);   // switch ramps instead of stepping
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModelMux {
    config: MuxConfig,
    /// Guards `update`. False only for `Default`-constructed instances that
    /// have not been through `init` yet (static allocation path).
    initialized: bool,
    /// `None` before the first successful update; afterwards always the index
    /// used in the last successful update.
    previous: Option<usize>,
    /// Seconds left in the active blend. Zero means settled (MUX-001).
    remaining: f32,
    /// Last published output; the blend's starting point for the next tick.
    output: f32,
}

impl ModelMux {
    /// Construct a ready muxer with the given configuration.
    pub fn new(config: MuxConfig) -> Self {
        Self {
            config,
            initialized: true,
            previous: None,
            remaining: 0.0,
            output: 0.0,
        }
    }

    /// Initialize (or re-initialize) in place.
    ///
    /// Supports the static-allocation pattern on embedded targets: construct
    /// with `Default`, call `init` once the configuration is known. A
    /// re-`init` discards any blend in progress and forgets the prior
    /// selection.
    pub fn init(&mut self, config: MuxConfig) {
        self.config = config;
        self.initialized = true;
        self.previous = None;
        self.remaining = 0.0;
        self.output = 0.0;
    }

    /// Advance one control tick.
    ///
    /// `models` holds the freshly computed output of every candidate model,
    /// `selected` the index the caller wants published, `dt` the elapsed time
    /// since the previous tick in seconds.
    ///
    /// Returns the blended output. On the first successful call the selected
    /// value is published directly (there is nothing to blend from). A change
    /// of `selected` restarts the full transition window; while the window is
    /// open, the output moves by `diff / (remaining / dt)` per tick, snapping
    /// to the target once within `convergence_epsilon` or when less than one
    /// tick remains (overshoot guard).
    ///
    /// # Errors
    ///
    /// [`MuxError::NotInitialized`] before [`ModelMux::init`],
    /// [`MuxError::InvalidTimeStep`] for `dt <= MIN_DT`,
    /// [`MuxError::EmptyModelSet`] for an empty `models`,
    /// [`MuxError::SelectionOutOfRange`] for `selected >= models.len()`.
    /// Every error leaves the state exactly as it was (MUX-002).
    pub fn update(&mut self, models: &[f32], selected: usize, dt: f32) -> Result<f32, MuxError> {
        if !self.initialized {
            return Err(MuxError::NotInitialized);
        }
        if dt <= MIN_DT {
            return Err(MuxError::InvalidTimeStep { dt });
        }
        if models.is_empty() {
            return Err(MuxError::EmptyModelSet);
        }
        if selected >= models.len() {
            return Err(MuxError::SelectionOutOfRange {
                selected,
                available: models.len(),
            });
        }

        let target = models[selected];

        match self.previous {
            None => {
                // First selection ever, nothing to blend from.
                self.remaining = 0.0;
                self.output = target;
            }
            Some(previous) => {
                if previous != selected {
                    trace!(
                        "selection {previous} -> {selected}, restarting {}s window",
                        self.config.max_transition_secs
                    );
                    self.remaining = self.config.max_transition_secs;
                }
                if self.remaining > 0.0 {
                    let diff = target - self.output;
                    if fabs(diff) <= self.config.convergence_epsilon {
                        trace!("converged at {target}, ending blend early");
                        self.output = target;
                        self.remaining = 0.0;
                    } else {
                        // Sized so the countdown reaching zero coincides with
                        // the output reaching the target.
                        let step = diff / (self.remaining / dt);
                        if fabs(step) > fabs(diff) {
                            // Less than one tick remains; the proportional
                            // step would overshoot. Land on the target.
                            self.output = target;
                        } else {
                            self.output += step;
                        }
                        // MUX-001: clamp; cannot go negative given the guard above.
                        self.remaining = (self.remaining - dt).max(0.0);
                    }
                } else {
                    // Settled: track the selected model with no smoothing.
                    self.output = target;
                }
            }
        }

        self.previous = Some(selected);
        Ok(self.output)
    }

    /// [`ModelMux::update`], but with the legacy value-on-error contract:
    /// callers that cannot branch on the error kind receive
    /// [`FALLBACK_OUTPUT`] and the state is left untouched.
    pub fn update_or_fallback(&mut self, models: &[f32], selected: usize, dt: f32) -> f32 {
        self.update(models, selected, dt).unwrap_or(FALLBACK_OUTPUT)
    }

    /// Last published output.
    pub fn output(&self) -> f32 {
        self.output
    }

    /// Index used in the last successful update, `None` before the first.
    pub fn selected(&self) -> Option<usize> {
        self.previous
    }

    /// Seconds left in the active blend; zero when settled.
    pub fn remaining_transition(&self) -> f32 {
        self.remaining
    }

    /// True while a switch-induced blend is in progress.
    pub fn is_blending(&self) -> bool {
        self.remaining > 0.0
    }

    /// True once `new` or `init` has run.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// The active configuration.
    pub fn config(&self) -> &MuxConfig {
        &self.config
    }
}

impl Default for ModelMux {
    /// An uninitialized muxer for the static-allocation path. Every `update`
    /// fails with [`MuxError::NotInitialized`] until [`ModelMux::init`] runs.
    fn default() -> Self {
        Self {
            config: MuxConfig::default(),
            initialized: false,
            previous: None,
            remaining: 0.0,
            output: 0.0,
        }
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
