//! The `DTWBD` recurrence engine: fills the windowed DP matrix, selects
//! an endpoint that may leave head/tail frames unaligned, and
//! reconstructs the warping path.

use crate::cell::{Back, Cell};
use crate::error::AlignError;
use crate::metric::euclidean;
use crate::sequence::Frames;
use crate::store::{DpStore, Store};
use crate::window::Window;

/// The result of a successful alignment: the warping path and its total
/// distance, including any boundary-skip cost.
#[derive(Clone, Debug, PartialEq)]
pub struct AlignResult {
    pub path: Vec<(usize, usize)>,
    pub distance: f64,
}

/// Run `DTWBD` directly, optionally restricted to `window`. This is the
/// inner entry point `FastDTWBD` (see [`crate::fastdtwbd`]) wraps; call it
/// directly to bypass the multi-resolution driver.
pub fn dtw_bd_windowed(
    s: &Frames,
    t: &Frames,
    skip_penalty: f64,
    window: Option<&Window>,
) -> Result<AlignResult, AlignError> {
    if s.l() != t.l() {
        return Err(AlignError::InvalidArgument(format!(
            "feature width mismatch: {} vs {}",
            s.l(),
            t.l()
        )));
    }
    if !(skip_penalty >= 0.0) {
        return Err(AlignError::InvalidArgument(format!(
            "skip_penalty must be >= 0, got {skip_penalty}"
        )));
    }

    let n = s.n();
    let m = t.n();

    let window = match window {
        Some(w) => {
            if w.n() != n || w.m() != m {
                return Err(AlignError::InvalidArgument(format!(
                    "window shape {}x{} does not match sequence shape {}x{}",
                    w.n(),
                    w.m(),
                    n,
                    m
                )));
            }
            w.clone()
        }
        None => Window::full(n, m),
    };

    log::trace!(
        "dtw_bd_windowed: entry n={n} m={m} l={} skip_penalty={skip_penalty} bandwidth={}",
        s.l(),
        window.bandwidth()
    );

    let mut store = Store::try_for_window(window.clone())?;

    // Row-major, left-to-right fill: required so the (i-1, *) and
    // (i, j-1) predecessors are always already written.
    for i in 0..n {
        for j in window.lo(i)..window.hi(i) {
            let d = euclidean(s.frame(i), t.frame(j));

            // Candidates in tie-break priority order: diagonal, skip-in-s,
            // skip-in-t, start. On an exact tie the earliest-pushed
            // candidate wins.
            let mut candidates: Vec<(f64, Back)> = Vec::with_capacity(4);
            if i > 0 && j > 0 {
                if let Some(c) = store.get(i - 1, j - 1) {
                    candidates.push((c.distance, Back::Diag));
                }
            }
            if i > 0 {
                if let Some(c) = store.get(i - 1, j) {
                    candidates.push((c.distance + skip_penalty, Back::SkipS));
                }
            }
            if j > 0 {
                if let Some(c) = store.get(i, j - 1) {
                    candidates.push((c.distance + skip_penalty, Back::SkipT));
                }
            }
            candidates.push((skip_penalty * (i + j) as f64, Back::Start));

            let (best, back) = candidates
                .into_iter()
                .fold(None, |acc: Option<(f64, Back)>, (v, b)| match acc {
                    None => Some((v, b)),
                    Some((bv, bb)) => {
                        if v < bv {
                            Some((v, b))
                        } else {
                            Some((bv, bb))
                        }
                    }
                })
                .expect("the START candidate is always present");

            store.put(i, j, Cell::new(d + best, back));
        }
    }

    // Endpoint selection: among every filled cell, pick the one that
    // minimizes accumulated cost plus the cost of skipping the remaining
    // suffix of both sequences.
    let mut best_end: Option<(f64, usize, usize)> = None;
    for i in 0..n {
        for j in window.lo(i)..window.hi(i) {
            if let Some(cell) = store.get(i, j) {
                let total = cell.distance
                    + skip_penalty * ((n as f64 - i as f64) + (m as f64 - j as f64) - 2.0);
                best_end = match best_end {
                    None => Some((total, i, j)),
                    Some((bt, ..)) if total < bt => Some((total, i, j)),
                    other => other,
                };
            }
        }
    }

    let (distance, end_i, end_j) = match best_end {
        Some(v) => v,
        None => {
            log::warn!("dtw_bd_windowed: no reachable cell in window");
            return Err(AlignError::NoPath);
        }
    };

    log::debug!("dtw_bd_windowed: match end=({end_i},{end_j}) distance={distance}");

    let mut path = Vec::with_capacity(n + m);
    let (mut i, mut j) = (end_i, end_j);
    loop {
        let cell = store
            .get(i, j)
            .expect("every cell on the reconstructed path was filled during the fill pass");
        path.push((i, j));
        match cell.back {
            Back::Start => break,
            Back::Diag => {
                i -= 1;
                j -= 1;
            }
            Back::SkipS => i -= 1,
            Back::SkipT => j -= 1,
        }
    }
    path.reverse();

    Ok(AlignResult { path, distance })
}
