//! # mux-core
//!
//! Discontinuity-free muxing of model outputs for autonomous control loops.
//!
//! ---
//!
//! ## The problem
//!
//! A control loop rarely has one source of truth. It computes several
//! candidate outputs per tick — a Kalman estimate, a fallback dead-reckoning
//! law, a safety override — and selects one. Publishing the selected value
//! directly means every switch is a step: the actuator jerks, the downstream
//! filter rings, the display jumps.
//!
//! [`ModelMux`] sits between the selector and the consumer. On a switch it
//! ramps the published output from the previously active value toward the
//! newly selected model over a bounded window, snapping to the target once
//! within a configured epsilon. While settled it tracks the selected model
//! exactly, with no added lag.
//!
//! ```text
//! model 0 ─┐
//! model 1 ─┼─► selector ─► ModelMux ─► actuator / filter / display
//! model N ─┘      ▲            ▲
//!            (caller's      MuxConfig
//!             policy)
//! ```
//!
//! The blend is linear with an overshoot guard: the per-tick step is sized so
//! that the countdown reaching zero coincides with the output reaching the
//! target, and a step that would pass the target lands on it instead. A new
//! switch always restarts the full window, even mid-blend.
//!
//! ## Module overview
//!
//! | Module | Key types | What it does |
//! |--------|-----------|--------------|
//! | [`mux`] | [`ModelMux`], [`MuxConfig`] | The blending state machine — init, per-tick update, convergence, overshoot guard |
//! | [`error`] | [`MuxError`] | Typed, recoverable rejection reasons; failed updates never mutate |
//! | [`bank`] | [`bank::MuxBank`] | Fixed-capacity bank of independent per-channel muxers (requires `bank` feature) |
//!
//! ## Quick start
//!
//! ```rust
//! use mux_core::{ModelMux, MuxConfig};
//!
//! let mut mux = ModelMux::new(MuxConfig {
//!     max_transition_secs: 1.0,
//!     convergence_epsilon: 0.01,
//! });
//!
//! let dt = 0.02;
//! let models = [1.0_f32, 3.0];
//!
//! assert_eq!(mux.update(&models, 0, dt).unwrap(), 1.0);
//! let first = mux.update(&models, 1, dt).unwrap();
//! assert!(first < 1.05, "switch ramps instead of stepping");
//! ```
//!
//! ## `no_std`
//!
//! This crate is `#![no_std]` by default with no heap required — the muxer is
//! a plain value type safe for static allocation (`ModelMux::default()` then
//! [`ModelMux::init`]). Enable the `std` feature for host builds, `serde` for
//! serialisable configs and state, `bank` for the multi-channel bank, and
//! `python-ffi` for the PyO3 bindings.
//!
//! ## License
//!
//! Business Source License 1.1. Free for evaluation and non-production use.
//! Commercial production use requires a license from Flout Labs
//! (cbyrne@floutlabs.com).

#![cfg_attr(not(any(feature = "std", feature = "python-ffi")), no_std)]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(any(feature = "std", feature = "python-ffi"))]
extern crate std;

pub mod error;
pub mod mux;

/// Multi-channel bank of independent muxers.
///
/// Enabled by `features = ["bank"]`. Compiles to nothing when the feature
/// is absent.
#[cfg(feature = "bank")]
pub mod bank;

#[cfg(feature = "python-ffi")]
pub mod ffi;

pub use error::MuxError;
pub use mux::{ModelMux, MuxConfig, FALLBACK_OUTPUT, MIN_DT};
