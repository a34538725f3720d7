use sirnakit_core_rs::seq::has_run;

use super::CandidateFilter;

/// Drops sequences with `length` or more consecutive identical `G` or `C` symbols.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct HomopolymerLimit {
    length: usize,
}

impl HomopolymerLimit {
    pub fn new(length: usize) -> Self {
        Self { length }
    }
}

impl CandidateFilter for HomopolymerLimit {
    fn name(&self) -> &'static str {
        "homopolymer"
    }

    fn retain(&self, seq: &[u8]) -> bool {
        !has_run(seq, b"GC", self.length)
    }
}
