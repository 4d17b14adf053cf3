//! Integration tests for the multi-channel bank.
//!
//! Tests are run with `cargo test --features bank`.

#![cfg(feature = "bank")]

use mux_core::bank::{MuxBank, MAX_CHANNELS};
use mux_core::{MuxConfig, MuxError};

const DT: f32 = 0.02;

/// Two channels with different windows blend at their own pace from the same
/// model values.
#[test]
fn channels_blend_at_their_own_pace() {
    let mut bank = MuxBank::new();
    let fast = bank.add_channel(MuxConfig::new(0.1, 0.001)).unwrap();
    let slow = bank.add_channel(MuxConfig::new(2.0, 0.001)).unwrap();
    let models = [0.0_f32, 1.0];

    bank.update(fast, &models, 0, DT).unwrap();
    bank.update(slow, &models, 0, DT).unwrap();

    // Same switch on both; the fast channel settles long before the slow one.
    for _ in 0..10 {
        bank.update(fast, &models, 1, DT).unwrap();
        bank.update(slow, &models, 1, DT).unwrap();
    }
    assert_eq!(bank.channel(fast).unwrap().output(), 1.0);
    assert!(!bank.channel(fast).unwrap().is_blending());
    assert!(bank.channel(slow).unwrap().is_blending());
    assert!(bank.channel(slow).unwrap().output() < 0.5);
}

/// A channel's own precondition errors pass through untouched, with the
/// channel state preserved.
#[test]
fn channel_errors_pass_through() {
    let mut bank = MuxBank::new();
    let ch = bank.add_channel(MuxConfig::default()).unwrap();
    bank.update(ch, &[2.0], 0, DT).unwrap();

    assert_eq!(
        bank.update(ch, &[2.0], 0, 0.0),
        Err(MuxError::InvalidTimeStep { dt: 0.0 })
    );
    assert_eq!(
        bank.update(ch, &[2.0], 5, DT),
        Err(MuxError::SelectionOutOfRange {
            selected: 5,
            available: 1
        })
    );
    assert_eq!(bank.channel(ch).unwrap().output(), 2.0);
}

/// Channel indices beyond the bank are a distinct, typed rejection.
#[test]
fn channel_index_is_checked_first() {
    let mut bank = MuxBank::new();
    bank.add_channel(MuxConfig::default()).unwrap();
    // Bad channel AND bad dt: the channel check wins.
    assert_eq!(
        bank.update(9, &[1.0], 0, 0.0),
        Err(MuxError::ChannelOutOfRange {
            channel: 9,
            available: 1
        })
    );
}

/// The bank is bounded and reports its outputs in channel order.
#[test]
fn full_bank_snapshot() {
    let mut bank = MuxBank::new();
    for i in 0..MAX_CHANNELS {
        let ch = bank.add_channel(MuxConfig::default()).unwrap();
        bank.update(ch, &[i as f32], 0, DT).unwrap();
    }
    assert!(bank.add_channel(MuxConfig::default()).is_none());

    let mut out = [f32::NAN; MAX_CHANNELS];
    assert_eq!(bank.outputs(&mut out), MAX_CHANNELS);
    for (i, v) in out.iter().enumerate() {
        assert_eq!(*v, i as f32);
    }
}
