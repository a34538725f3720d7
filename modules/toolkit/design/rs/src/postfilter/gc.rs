use sirnakit_core_rs::seq::gc_content;

use super::CandidateFilter;

/// Keeps sequences whose GC percentage lies strictly inside `(min, max)`.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct GcRange {
    min: f64,
    max: f64,
}

impl GcRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, gc: f64) -> bool {
        self.min < gc && gc < self.max
    }
}

impl CandidateFilter for GcRange {
    fn name(&self) -> &'static str {
        "gc-content"
    }

    fn retain(&self, seq: &[u8]) -> bool {
        self.contains(gc_content(seq))
    }
}
