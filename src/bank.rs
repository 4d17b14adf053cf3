/*
 * Notice of Provisional Patent Filing:
 * The methods and algorithms implemented in this file are the subject of a
 * United States Provisional Patent Application (63/988,438)
 * filed on February 23, 2026.
 *
 * This source code is licensed under the Business Source License 1.1.
 */

//! Fixed-capacity bank of independent muxers — one per smoothed signal.
//!
//! A control loop that publishes several actuator signals (wheel speed, head
//! pan, LED intensity) smooths each one independently. [`MuxBank`] packages
//! up to [`MAX_CHANNELS`] muxers behind channel indices so the loop carries
//! one value instead of a struct field per signal. Channels never share
//! state: a switch on one channel does not disturb another.
//!
//! Gated behind `features = ["bank"]` — compiles to nothing when the feature
//! is disabled. No heap allocation; channels live in a `heapless` vector.

use heapless::Vec as HVec;

use crate::error::MuxError;
use crate::mux::{ModelMux, MuxConfig};

/// Maximum number of channels a bank can hold.
///
/// A larger value increases struct size; sixteen covers every output channel
/// on the reference robot with room to spare.
pub const MAX_CHANNELS: usize = 16;

// ─── MuxBank ─────────────────────────────────────────────────────────────────

/// A bank of up to [`MAX_CHANNELS`] independent [`ModelMux`] instances.
///
/// ```rust
/// use mux_core::bank::MuxBank;
/// use mux_core::MuxConfig;
///
/// let mut bank = MuxBank::new();
/// let speed = bank.add_channel(MuxConfig::new(0.5, 0.01)).unwrap();
/// let pan = bank.add_channel(MuxConfig::new(2.0, 0.001)).unwrap();
///
/// bank.update(speed, &[0.2, 0.4], 0, 0.02).unwrap();
/// bank.update(pan, &[-0.3, 0.1, 0.0], 2, 0.02).unwrap();
/// ```
#[derive(Clone, Debug, Default)]
pub struct MuxBank {
    channels: HVec<ModelMux, MAX_CHANNELS>,
}

impl MuxBank {
    /// An empty bank.
    pub fn new() -> Self {
        Self {
            channels: HVec::new(),
        }
    }

    /// Add a channel with its own configuration and return its index.
    ///
    /// Returns `None` once the bank holds [`MAX_CHANNELS`] channels.
    pub fn add_channel(&mut self, config: MuxConfig) -> Option<usize> {
        if self.channels.is_full() {
            return None;
        }
        let channel = self.channels.len();
        // Cannot fail: fullness checked above.
        let _ = self.channels.push(ModelMux::new(config));
        Some(channel)
    }

    /// Number of channels currently in the bank.
    pub fn len(&self) -> usize {
        self.channels.len()
    }

    /// True when the bank holds no channels.
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    /// Read access to one channel's muxer.
    pub fn channel(&self, channel: usize) -> Option<&ModelMux> {
        self.channels.get(channel)
    }

    /// Mutable access to one channel's muxer.
    pub fn channel_mut(&mut self, channel: usize) -> Option<&mut ModelMux> {
        self.channels.get_mut(channel)
    }

    /// Advance one channel by one control tick.
    ///
    /// Delegates to [`ModelMux::update`] on the addressed channel.
    ///
    /// # Errors
    ///
    /// [`MuxError::ChannelOutOfRange`] for an unknown channel, otherwise
    /// whatever the channel's own update reports.
    pub fn update(
        &mut self,
        channel: usize,
        models: &[f32],
        selected: usize,
        dt: f32,
    ) -> Result<f32, MuxError> {
        let available = self.channels.len();
        let mux = self
            .channels
            .get_mut(channel)
            .ok_or(MuxError::ChannelOutOfRange { channel, available })?;
        mux.update(models, selected, dt)
    }

    /// Copy each channel's last published output into `out`, in channel
    /// order. Returns the number of values written
    /// (`min(out.len(), self.len())`).
    pub fn outputs(&self, out: &mut [f32]) -> usize {
        let n = self.channels.len().min(out.len());
        for (slot, mux) in out[..n].iter_mut().zip(self.channels.iter()) {
            *slot = mux.output();
        }
        n
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
