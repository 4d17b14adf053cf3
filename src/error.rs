/*
 * Notice of Provisional Patent Filing:
 * The methods and algorithms implemented in this file are the subject of a
 * United States Provisional Patent Application (63/988,438)
 * filed on February 23, 2026.
 *
 * This source code is licensed under the Business Source License 1.1.
 */

//! Error taxonomy for the muxer.
//!
//! Every variant is a local, recoverable condition detected synchronously
//! inside a single update call. The core never prints or logs an error —
//! reporting is a caller-side concern. Callers that cannot branch on the
//! kind can poll through [`crate::mux::ModelMux::update_or_fallback`]
//! instead, which publishes [`crate::mux::FALLBACK_OUTPUT`] on any error.

use thiserror::Error;

/// Reasons an update call can be rejected. The rejected call leaves the
/// muxer state exactly as it was (MUX-002).
#[derive(Error, Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MuxError {
    /// `update` ran on a `Default`-constructed muxer before `init`.
    #[error("muxer used before init")]
    NotInitialized,

    /// The supplied time step is at or below [`crate::mux::MIN_DT`].
    #[error("time step {dt} s is at or below the 1e-6 s minimum")]
    InvalidTimeStep {
        /// The rejected time step, in seconds.
        dt: f32,
    },

    /// No model outputs were supplied this tick.
    #[error("model set is empty")]
    EmptyModelSet,

    /// The selected index does not address a supplied model output.
    #[error("selected model {selected} out of range ({available} models)")]
    SelectionOutOfRange {
        /// The rejected selection index.
        selected: usize,
        /// Number of model outputs supplied this tick.
        available: usize,
    },

    /// The addressed bank channel does not exist (`bank` feature).
    #[error("channel {channel} out of range ({available} channels)")]
    ChannelOutOfRange {
        /// The rejected channel index.
        channel: usize,
        /// Number of channels currently in the bank.
        available: usize,
    },
}
