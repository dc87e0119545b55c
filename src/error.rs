//! Error types surfaced by the alignment engine.

/// Everything that can go wrong inside [`crate::align`] or
/// [`crate::dtw_bd_windowed`]. The engine never panics on user input —
/// every failure path returns one of these instead, and any partial
/// allocation is released before the error propagates.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AlignError {
    /// A precondition on the inputs or parameters was violated: a
    /// zero-sized sequence, mismatched feature width, a negative
    /// `skip_penalty`, or a malformed window (`hi(i) < lo(i)` or
    /// `hi(i) > m` for some row).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// Allocating the DP store (or a transient buffer) failed.
    #[error("allocation failed while solving the alignment")]
    OutOfMemory,
    /// The supplied window left no cell reachable, so no path exists.
    /// Distinct from an empty-path result, which cannot occur for
    /// well-formed inputs.
    #[error("no path: the search window admits no reachable cell")]
    NoPath,
}
