//! `FastDTWBD`: the multi-resolution driver. Recursively coarsens both
//! sequences, solves the coarse problem, projects the coarse path into a
//! refined window, and resolves at the next resolution up, bottoming out
//! into a direct [`dtw_bd_windowed`] call once either sequence is short
//! enough that windowing would add no benefit.

use crate::config::AlignConfig;
use crate::coarsen::coarsen;
use crate::dtwbd::{dtw_bd_windowed, AlignResult};
use crate::error::AlignError;
use crate::project::project;
use crate::sequence::Frames;

/// Align `s` against `t` under `config`. Equivalent to `dtw_bd_windowed`
/// run over the full matrix when either sequence is shorter than the
/// recursion's base length, and otherwise near-linear in `max(|s|, |t|)`.
pub fn fast_dtw_bd(s: &Frames, t: &Frames, config: &AlignConfig) -> Result<AlignResult, AlignError> {
    if s.l() != t.l() {
        return Err(AlignError::InvalidArgument(format!(
            "feature width mismatch: {} vs {}",
            s.l(),
            t.l()
        )));
    }
    log::trace!(
        "fast_dtw_bd: entry n={} m={} radius={} skip_penalty={}",
        s.n(),
        t.n(),
        config.radius,
        config.skip_penalty
    );
    fast_dtw_bd_rec(s, t, config)
}

fn fast_dtw_bd_rec(s: &Frames, t: &Frames, config: &AlignConfig) -> Result<AlignResult, AlignError> {
    let base = config.base_len();
    if s.n() < base || t.n() < base {
        return dtw_bd_windowed(s, t, config.skip_penalty, None);
    }

    let coarse_s = coarsen(s);
    let coarse_t = coarsen(t);
    let coarse_result = fast_dtw_bd_rec(&coarse_s, &coarse_t, config)?;

    let window = project(&coarse_result.path, config.radius, s.n(), t.n());
    log::debug!(
        "fast_dtw_bd: refining n={} m={} from coarse path of length {} (bandwidth={})",
        s.n(),
        t.n(),
        coarse_result.path.len(),
        window.bandwidth()
    );

    dtw_bd_windowed(s, t, config.skip_penalty, Some(&window))
}
