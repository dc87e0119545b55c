//! Coarsening: halve a sequence by pairwise averaging, the first step of
//! each `FastDTWBD` recursion level.

use crate::sequence::Frames;

/// `coarsen(seq)[k] = (seq[2k] + seq[2k+1]) / 2` for `k = 0 .. n/2 - 1`.
/// An odd trailing frame is discarded, not carried into the coarse
/// sequence, matching `get_coarsed_sequence`'s `2*i+1 < n` loop bound,
/// and keeps the choice stable under repeated coarsening.
pub fn coarsen(seq: &Frames) -> Frames {
    let l = seq.l();
    let half = seq.n() / 2;
    let mut data = Vec::with_capacity(half * l);
    for k in 0..half {
        let a = seq.frame(2 * k);
        let b = seq.frame(2 * k + 1);
        for f in 0..l {
            data.push((a[f] + b[f]) / 2.0);
        }
    }
    Frames::from_flat(data, half, l).expect("coarsened sequence length always matches n/2 * l")
}
