use derive_getters::Getters;

use sirnakit_core_rs::seq;

use crate::error::DesignError;

const CANDIDATE_PREFIX: &str = "sirna";

/// A contiguous siRNA candidate cut from the query.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Getters)]
pub struct Candidate {
    /// 1-based start of the window on the query.
    position: usize,
    sequence: Vec<u8>,
}

impl Candidate {
    pub fn new(position: usize, sequence: Vec<u8>) -> Self {
        Self { position, sequence }
    }

    /// Identifier under which the candidate is handed to the aligner, e.g. `sirna12`.
    pub fn name(&self) -> String {
        format!("{CANDIDATE_PREFIX}{}", self.position)
    }

    pub fn sequence_str(&self) -> &str {
        // Normalized sequences are plain ASCII
        std::str::from_utf8(&self.sequence).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

/// Parse the 1-based position out of a candidate identifier (`sirna12` -> 12).
pub fn parse_candidate_name(name: &str) -> Option<usize> {
    name.trim()
        .strip_prefix(CANDIDATE_PREFIX)
        .and_then(|x| x.parse::<usize>().ok())
        .filter(|&x| x >= 1)
}

/// Sliding-window decomposition of one query sequence.
///
/// Produced once per query and never mutated afterwards; every later stage borrows it.
#[derive(Clone, PartialEq, Eq, Debug, Getters)]
pub struct Windows {
    query: String,
    sequence: Vec<u8>,
    size: usize,
    candidates: Vec<Candidate>,
}

impl Windows {
    /// Normalize the query and cut it into all `n - k + 1` windows of length `size`.
    pub fn new(query: impl Into<String>, sequence: &[u8], size: usize) -> Result<Self, DesignError> {
        let query = query.into();
        let sequence = seq::normalize(sequence).map_err(|err| DesignError::InvalidSequence {
            query: query.clone(),
            position: err.index + 1,
            symbol: err.symbol as char,
        })?;

        if size < 1 || size > sequence.len() {
            return Err(DesignError::InvalidWindowSize {
                size,
                length: sequence.len(),
            });
        }

        let candidates = sequence
            .windows(size)
            .enumerate()
            .map(|(ind, window)| Candidate::new(ind + 1, window.to_vec()))
            .collect::<Vec<_>>();
        log::debug!(
            "Query {query}: {} windows of size {size} over {} nt",
            candidates.len(),
            sequence.len()
        );

        Ok(Self {
            query,
            sequence,
            size,
            candidates,
        })
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Candidate starting at the given 1-based position.
    pub fn get(&self, position: usize) -> Option<&Candidate> {
        position
            .checked_sub(1)
            .and_then(|ind| self.candidates.get(ind))
    }

    /// Candidate referenced by an aligner identifier such as `sirna12`.
    pub fn by_name(&self, name: &str) -> Option<&Candidate> {
        parse_candidate_name(name).and_then(|position| self.get(position))
    }

    /// The overlapping upstream neighbour used for dangling-end corrections.
    ///
    /// The first two windows have none: the window at position 2 only has a single upstream
    /// nucleotide, which is not enough to pair the 3' overhang of its antisense strand.
    pub fn preceding(&self, position: usize) -> Option<&Candidate> {
        if position <= 2 {
            None
        } else {
            self.get(position - 1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_windows_count_and_positions() {
        let seq = b"ACGTACGTACGTAC";
        for size in 1..=seq.len() {
            let windows = Windows::new("q", seq, size).unwrap();
            assert_eq!(windows.len(), seq.len() - size + 1);
            for (ind, candidate) in windows.candidates().iter().enumerate() {
                assert_eq!(*candidate.position(), ind + 1);
                assert_eq!(candidate.sequence(), &seq[ind..ind + size]);
            }
        }
    }

    #[test]
    fn test_windows_reject_invalid_size() {
        for size in [0, 15, 100] {
            let err = Windows::new("q", b"ACGTACGTACGTAC", size).unwrap_err();
            assert_eq!(err, DesignError::InvalidWindowSize { size, length: 14 });
        }
    }

    #[test]
    fn test_windows_normalize_rna() {
        let windows = Windows::new("q", b"acguu", 3).unwrap();
        assert_eq!(windows.sequence(), b"ACGTT");
        assert_eq!(windows.candidates()[2].sequence_str(), "GTT");
    }

    #[test]
    fn test_windows_reject_foreign_symbols() {
        let err = Windows::new("q", b"ACGNA", 2).unwrap_err();
        assert_eq!(
            err,
            DesignError::InvalidSequence {
                query: "q".to_string(),
                position: 4,
                symbol: 'N'
            }
        );
    }

    #[test]
    fn test_candidate_names() {
        let windows = Windows::new("q", b"ACGTACGT", 4).unwrap();
        assert_eq!(windows.get(3).unwrap().name(), "sirna3");
        assert_eq!(windows.by_name("sirna5").unwrap().sequence_str(), "ACGT");
        assert!(windows.by_name("sirna6").is_none());
        assert!(windows.by_name("sirna0").is_none());
        assert!(windows.by_name("mirna1").is_none());
        assert_eq!(parse_candidate_name("sirna42"), Some(42));
    }

    #[test]
    fn test_preceding_window() {
        let windows = Windows::new("q", b"AAAAAAAAAAAAAAAAAAAAAAA", 21).unwrap();
        assert_eq!(windows.len(), 3);
        assert!(windows.preceding(1).is_none());
        assert!(windows.preceding(2).is_none());
        assert_eq!(*windows.preceding(3).unwrap().position(), 2);
    }
}
