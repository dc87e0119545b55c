//! Per-row column intervals constraining which `(i, j)` cells may be
//! filled by the recurrence engine.

use crate::error::AlignError;

/// A per-row `[lo(i), hi(i))` interval window over an `n x m` matrix.
/// `hi(i) == lo(i)` means row `i` is empty: legal, but no path can
/// traverse it.
#[derive(Clone, Debug, PartialEq)]
pub struct Window {
    lo: Vec<usize>,
    hi: Vec<usize>,
    m: usize,
}

impl Window {
    /// The full, unconstrained matrix: every row spans `[0, m)`.
    pub fn full(n: usize, m: usize) -> Self {
        Self {
            lo: vec![0; n],
            hi: vec![m; n],
            m,
        }
    }

    /// Build a window from explicit per-row bounds, validating that every
    /// row satisfies `0 <= lo(i) <= hi(i) <= m`. A malformed window is a
    /// caller bug and is reported, never silently clamped.
    pub fn from_bounds(lo: Vec<usize>, hi: Vec<usize>, m: usize) -> Result<Self, AlignError> {
        if lo.len() != hi.len() {
            return Err(AlignError::InvalidArgument(
                "window lo/hi length mismatch".into(),
            ));
        }
        for (&l, &h) in lo.iter().zip(hi.iter()) {
            if l > h || h > m {
                return Err(AlignError::InvalidArgument(format!(
                    "malformed window row: lo={l}, hi={h}, m={m}"
                )));
            }
        }
        Ok(Self { lo, hi, m })
    }

    pub fn n(&self) -> usize {
        self.lo.len()
    }

    pub fn m(&self) -> usize {
        self.m
    }

    pub fn lo(&self, i: usize) -> usize {
        self.lo[i]
    }

    pub fn hi(&self, i: usize) -> usize {
        self.hi[i]
    }

    pub fn contains(&self, i: usize, j: usize) -> bool {
        i < self.lo.len() && j >= self.lo[i] && j < self.hi[i]
    }

    /// `max_i (hi(i) - lo(i))`.
    pub fn bandwidth(&self) -> usize {
        self.lo
            .iter()
            .zip(self.hi.iter())
            .map(|(&l, &h)| h - l)
            .max()
            .unwrap_or(0)
    }

    /// Sum of per-row widths, used as a cheap predictor of filled cells
    /// for the banded-vs-sparse store heuristic.
    pub fn filled_estimate(&self) -> usize {
        self.lo.iter().zip(self.hi.iter()).map(|(&l, &h)| h - l).sum()
    }
}
