//! Storage for the windowed DP matrix.
//!
//! Two representations, grounded in the original `helper.c`'s dense
//! `D_matrix` array and its linked-list `sparse_matrix`: a dense banded
//! store for the narrow, uniform bands FastDTW-BD projects, and a
//! hash-keyed sparse store for irregular or very sparse windows. Both
//! must produce identical results for the same window and writes.

use std::collections::HashMap;

use crate::cell::Cell;
use crate::error::AlignError;
use crate::window::Window;

/// Storage contract for the DP matrix under a fixed window.
///
/// `get` returns `None` ("absent") for any `(i, j)` outside the window,
/// inside but not yet written, or out of bounds. `put` on a cell outside
/// the window is a caller bug.
pub trait DpStore {
    fn put(&mut self, i: usize, j: usize, cell: Cell);
    fn get(&self, i: usize, j: usize) -> Option<Cell>;
}

/// Dense `n * bandwidth` array, indexed `row * bandwidth + (j - lo(i))`.
/// Fast and cache-friendly when the window is narrow and row-uniform.
pub struct BandedStore {
    cells: Vec<Option<Cell>>,
    window: Window,
    bandwidth: usize,
}

impl BandedStore {
    pub fn try_new(window: Window) -> Result<Self, AlignError> {
        let bandwidth = window.bandwidth().max(1);
        let n = window.n();
        let mut cells = Vec::new();
        cells.try_reserve_exact(n * bandwidth).map_err(|_| {
            log::error!(
                "BandedStore::try_new: allocation failed for n={n} bandwidth={bandwidth}"
            );
            AlignError::OutOfMemory
        })?;
        cells.resize(n * bandwidth, None);
        Ok(Self {
            cells,
            window,
            bandwidth,
        })
    }

    fn index(&self, i: usize, j: usize) -> Option<usize> {
        if !self.window.contains(i, j) {
            return None;
        }
        Some(i * self.bandwidth + (j - self.window.lo(i)))
    }
}

impl DpStore for BandedStore {
    fn put(&mut self, i: usize, j: usize, cell: Cell) {
        let idx = self.index(i, j).expect("put outside window");
        self.cells[idx] = Some(cell);
    }

    fn get(&self, i: usize, j: usize) -> Option<Cell> {
        self.index(i, j).and_then(|idx| self.cells[idx])
    }
}

/// Hash-keyed store. Simpler than the banded form and correct for any
/// window shape, at the cost of per-access hashing — the right choice
/// when the window is irregular or admits few cells relative to `n * m`.
pub struct SparseStore {
    cells: HashMap<(usize, usize), Cell>,
    window: Window,
}

impl SparseStore {
    pub fn try_new(window: Window) -> Result<Self, AlignError> {
        let mut cells = HashMap::new();
        let estimate = window.filled_estimate();
        cells.try_reserve(estimate).map_err(|_| {
            log::error!("SparseStore::try_new: allocation failed for estimate={estimate}");
            AlignError::OutOfMemory
        })?;
        Ok(Self { cells, window })
    }
}

impl DpStore for SparseStore {
    fn put(&mut self, i: usize, j: usize, cell: Cell) {
        debug_assert!(self.window.contains(i, j), "put outside window");
        self.cells.insert((i, j), cell);
    }

    fn get(&self, i: usize, j: usize) -> Option<Cell> {
        if !self.window.contains(i, j) {
            return None;
        }
        self.cells.get(&(i, j)).copied()
    }
}

/// Picks a banded or sparse backing store per call: sparse when the
/// window is predicted to fill less than a tenth of the full `n * m`
/// matrix, banded otherwise.
pub enum Store {
    Banded(BandedStore),
    Sparse(SparseStore),
}

impl Store {
    pub fn try_for_window(window: Window) -> Result<Self, AlignError> {
        let n = window.n() as f64;
        let m = window.m() as f64;
        let estimate = window.filled_estimate() as f64;
        if m > 0.0 && estimate < 0.1 * n * m {
            Ok(Store::Sparse(SparseStore::try_new(window)?))
        } else {
            Ok(Store::Banded(BandedStore::try_new(window)?))
        }
    }
}

impl DpStore for Store {
    fn put(&mut self, i: usize, j: usize, cell: Cell) {
        match self {
            Store::Banded(s) => s.put(i, j, cell),
            Store::Sparse(s) => s.put(i, j, cell),
        }
    }

    fn get(&self, i: usize, j: usize) -> Option<Cell> {
        match self {
            Store::Banded(s) => s.get(i, j),
            Store::Sparse(s) => s.get(i, j),
        }
    }
}
