//! Forced alignment between two feature sequences via Dynamic Time
//! Warping with Boundary Detection (`DTWBD`), accelerated by a
//! `FastDTW`-style multi-resolution driver (`FastDTWBD`).
//!
//! The entry point is [`align`]: it coarsens both sequences down,
//! solves the coarse alignment, and refines the solution back up one
//! resolution level at a time, each level searching only a narrow band
//! around the previous level's path. Call [`dtw_bd_windowed`] directly
//! to skip the multi-resolution driver and solve a single resolution
//! level, optionally restricted to an explicit [`Window`].
//!
//! Unlike ordinary DTW, the warping path is not required to start at
//! `(0, 0)` or end at `(n-1, m-1)`: a per-step `skip_penalty` lets the
//! optimal path begin and end anywhere, leaving unmatched head/tail
//! frames in either sequence unaligned. This is the "boundary
//! detection" half of the name.

mod cell;
mod coarsen;
mod config;
mod dtwbd;
mod error;
mod fastdtwbd;
mod metric;
mod project;
mod sequence;
mod store;
mod window;

pub use cell::{Back, Cell};
pub use config::AlignConfig;
pub use dtwbd::{dtw_bd_windowed, AlignResult};
pub use error::AlignError;
pub use metric::euclidean;
pub use sequence::Frames;
pub use window::Window;

/// Align `s` against `t` under `config`, running the full
/// `FastDTWBD` multi-resolution recursion.
pub fn align(s: &Frames, t: &Frames, config: &AlignConfig) -> Result<AlignResult, AlignError> {
    fastdtwbd::fast_dtw_bd(s, t, config)
}
