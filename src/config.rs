//! Configuration bundled for a `FastDTWBD` call.

use crate::error::AlignError;

/// Parameters for [`crate::align`]: the boundary-skip penalty, the
/// projection radius carried through every recursion level, and the
/// sequence length below which the recursion bottoms out into a single
/// direct `DTWBD` solve.
#[derive(Clone, Debug, PartialEq)]
pub struct AlignConfig {
    pub skip_penalty: f64,
    pub radius: usize,
    min_base_len: Option<usize>,
}

impl AlignConfig {
    /// `skip_penalty` must be non-negative; it is added once per
    /// boundary-skip or head/tail-skip step.
    pub fn new(skip_penalty: f64, radius: usize) -> Result<Self, AlignError> {
        if !(skip_penalty >= 0.0) {
            return Err(AlignError::InvalidArgument(format!(
                "skip_penalty must be >= 0, got {skip_penalty}"
            )));
        }
        Ok(Self {
            skip_penalty,
            radius,
            min_base_len: None,
        })
    }

    /// Overrides the recursion base-case length. Exposed for testing the
    /// multi-resolution recursion at small sequence sizes; left unset in
    /// ordinary use, where it defaults to `2 * (radius + 1) + 1`.
    pub fn with_min_base_len(mut self, min_base_len: usize) -> Self {
        self.min_base_len = Some(min_base_len);
        self
    }

    /// The shortest sequence length the recursion will still coarsen
    /// rather than solve directly.
    pub(crate) fn base_len(&self) -> usize {
        self.min_base_len.unwrap_or(2 * (self.radius + 1) + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_negative_skip_penalty() {
        assert!(AlignConfig::new(-0.1, 1).is_err());
    }

    #[test]
    fn default_base_len_matches_formula() {
        let config = AlignConfig::new(1.0, 3).unwrap();
        assert_eq!(config.base_len(), 2 * (3 + 1) + 1);
    }

    #[test]
    fn explicit_base_len_overrides_default() {
        let config = AlignConfig::new(1.0, 3).unwrap().with_min_base_len(50);
        assert_eq!(config.base_len(), 50);
    }
}
