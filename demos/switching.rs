//! # Model switching demo
//!
//! Two constant models (1.0 and 3.0), selection alternating every half
//! transition window. Shows the ramp leaving mid-blend when the selection
//! switches back, and the convergence snap when a leg runs long enough.
//!
//! Run with `RUST_LOG=trace` to see the muxer's switch and convergence events:
//!
//! ```bash
//! RUST_LOG=trace cargo run --example switching
//! ```

use mux_core::{ModelMux, MuxConfig};

// ── Display helpers ───────────────────────────────────────────────────────────

fn bar(v: f32, lo: f32, hi: f32) -> String {
    let t = ((v - lo) / (hi - lo)).clamp(0.0, 1.0);
    let filled = (t * 20.0).round() as usize;
    let empty = 20usize.saturating_sub(filled);
    format!("[{}{}] {:.3}", "█".repeat(filled), "░".repeat(empty), v)
}

fn main() {
    env_logger::init();

    const DT: f32 = 0.02;
    const MAX_TRANSITION: f32 = 1.0;
    let ticks_per_window = (MAX_TRANSITION / DT) as usize;

    let mut mux = ModelMux::new(MuxConfig {
        max_transition_secs: MAX_TRANSITION,
        convergence_epsilon: 0.01,
    });
    let models = [1.0_f32, 3.0];

    println!("models: {models:?}, dt: {DT}, window: {MAX_TRANSITION}s\n");

    for leg in 0..3 {
        let selected = leg % 2;
        println!("── leg {leg}: model {selected} ({}) ──", models[selected]);
        for _ in 0..ticks_per_window / 2 {
            match mux.update(&models, selected, DT) {
                Ok(out) => println!("  {}", bar(out, 1.0, 3.0)),
                Err(e) => eprintln!("  muxer rejected tick: {e}"),
            }
        }
    }
}
