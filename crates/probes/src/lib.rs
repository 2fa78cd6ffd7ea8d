//! Measures of presortedness.
//!
//! A probe scans a sequence once and reports how far it is from sorted, with
//! `0` meaning already sorted. Adaptive sorts use the value to pick a
//! strategy; benchmarks use it to characterise inputs.
//!
//! ```
//! use presort_probes::{Mono, Probe, mono};
//!
//! assert_eq!(mono(&[1, 2, 3, 2, 1, 4, 5]), 2);
//! assert_eq!(Mono.measure(&[5, 5, 5, 5]), 0);
//! ```

/// Monotonic run counting.
pub mod mono;
/// Uniform surface shared by probes.
mod probe;

// Dev-dependencies used only by other test targets.
#[cfg(test)]
use {criterion as _, tracing_subscriber as _};

pub use mono::{max_for_size, mono, mono_by, mono_by_key, mono_with};
pub use probe::{Mono, Probe};
