//! Dense, row-major feature sequences — the engine's only input type.

use crate::error::AlignError;

/// A dense sequence of `n` frames of `l` real-valued features each,
/// stored row-major and contiguous: frame `i` occupies
/// `data[i*l .. (i+1)*l]`. Both `n` and `l` are strictly positive by
/// construction — there is no way to build a zero-sized `Frames`.
#[derive(Clone, Debug, PartialEq)]
pub struct Frames {
    data: Vec<f64>,
    n: usize,
    l: usize,
}

impl Frames {
    /// Build a sequence from a flat row-major buffer of length `n * l`.
    pub fn from_flat(data: Vec<f64>, n: usize, l: usize) -> Result<Self, AlignError> {
        if n == 0 || l == 0 {
            return Err(AlignError::InvalidArgument(format!(
                "sequence must have n >= 1 and l >= 1, got n={n}, l={l}"
            )));
        }
        if data.len() != n * l {
            return Err(AlignError::InvalidArgument(format!(
                "flat buffer length {} does not match n*l = {}",
                data.len(),
                n * l
            )));
        }
        Ok(Self { data, n, l })
    }

    /// Build a sequence from `n` rows of `l` features each.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, AlignError> {
        let n = rows.len();
        if n == 0 {
            return Err(AlignError::InvalidArgument(
                "sequence must have n >= 1".into(),
            ));
        }
        let l = rows[0].len();
        if l == 0 {
            return Err(AlignError::InvalidArgument(
                "sequence must have l >= 1".into(),
            ));
        }
        if rows.iter().any(|r| r.len() != l) {
            return Err(AlignError::InvalidArgument(
                "all frames must share the same feature width".into(),
            ));
        }
        let mut data = Vec::with_capacity(n * l);
        rows.into_iter().for_each(|r| data.extend_from_slice(&r));
        Ok(Self { data, n, l })
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn l(&self) -> usize {
        self.l
    }

    /// The feature row for frame `i`.
    pub fn frame(&self, i: usize) -> &[f64] {
        &self.data[i * self.l..(i + 1) * self.l]
    }
}
