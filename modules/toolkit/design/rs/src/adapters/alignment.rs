use derive_getters::{Dissolve, Getters};
use derive_more::Constructor;
use serde::{Deserialize, Serialize};

use sirnakit_core_rs::loc::Strand;

/// One reported alignment of a candidate against the reference index.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Constructor, Dissolve, Getters, Serialize, Deserialize)]
pub struct AlignmentHit {
    /// Candidate identifier as handed to the aligner (`sirna{position}`).
    candidate: String,
    strand: Strand,
    /// Matched reference sequence (transcript) identifier.
    target: String,
    /// 0-based offset of the alignment on the target.
    reference_position: u64,
    /// Aligned read sequence as reported by the aligner.
    sequence: String,
    mismatches: u32,
}

impl AlignmentHit {
    /// Shorthand for a perfect forward-strand hit.
    pub fn forward(
        candidate: impl Into<String>,
        target: impl Into<String>,
        reference_position: u64,
        sequence: impl Into<String>,
    ) -> Self {
        Self::new(
            candidate.into(),
            Strand::Forward,
            target.into(),
            reference_position,
            sequence.into(),
            0,
        )
    }

    /// Last reference coordinate covered by a hit of `length` nucleotides, clamped to `u64::MAX`.
    pub fn reference_end(&self, length: usize) -> u64 {
        footprint_end(self.reference_position, length)
    }
}

/// Closed footprint `[start, end]` of `length` nucleotides aligned at `start`.
pub(crate) fn footprint_end(start: u64, length: usize) -> u64 {
    start.saturating_add((length as u64).saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_hit() {
        let hit = AlignmentHit::forward("sirna1", "geneX", 5, "ACGT");
        assert_eq!(hit.strand(), &Strand::Forward);
        assert_eq!(*hit.mismatches(), 0);
        assert_eq!(hit.reference_end(21), 25);
        assert_eq!(hit.reference_end(0), 5);
    }

    #[test]
    fn test_reference_end_saturates() {
        let hit = AlignmentHit::forward("sirna1", "geneX", u64::MAX - 3, "ACGT");
        assert_eq!(hit.reference_end(4), u64::MAX);
        assert_eq!(hit.reference_end(21), u64::MAX);
        assert_eq!(hit.reference_end(1), u64::MAX - 3);
    }
}
