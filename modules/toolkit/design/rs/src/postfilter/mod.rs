//! Sequence-level filters applied to scored records, followed by SNP annotation.

use std::sync::Arc;

pub use gc::GcRange;
pub use homopolymer::HomopolymerLimit;
pub use motifs::{DamagingMotifs, DEFAULT_MOTIFS};
pub use snp::SnpAnnotator;

use crate::config::FilterConfig;
use crate::result::CandidateRecord;
use crate::snp::SnpTable;

mod gc;
mod homopolymer;
mod motifs;
mod snp;

/// A keep/drop decision over the candidate sequence.
pub trait CandidateFilter: Send + Sync {
    fn name(&self) -> &'static str;

    fn retain(&self, seq: &[u8]) -> bool;
}

/// Post-filters in their fixed order: damaging motifs, GC content, homopolymers.
#[derive(Clone)]
pub struct PostFilterChain {
    filters: Vec<Arc<dyn CandidateFilter>>,
}

impl PostFilterChain {
    pub fn new(config: &FilterConfig, motifs: Arc<DamagingMotifs>) -> Self {
        let mut filters: Vec<Arc<dyn CandidateFilter>> = Vec::with_capacity(3);
        if *config.remove_damaging_motifs() {
            filters.push(motifs);
        }
        filters.push(Arc::new(GcRange::new(*config.min_gc(), *config.max_gc())));
        filters.push(Arc::new(HomopolymerLimit::new(*config.contiguous_num())));
        Self { filters }
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.filters.iter().map(|x| x.name())
    }

    /// Drop records rejected by any filter, then annotate the survivors with known variants.
    pub fn apply(&self, mut records: Vec<CandidateRecord>, snps: &SnpTable) -> Vec<CandidateRecord> {
        for filter in &self.filters {
            let before = records.len();
            records.retain(|x| filter.retain(x.sirna_sequence().as_bytes()));
            log::debug!(
                "Post-filter {}: removed {} of {before} records",
                filter.name(),
                before - records.len()
            );
        }

        SnpAnnotator::new(snps).annotate(&mut records);
        records
    }
}

impl std::fmt::Debug for PostFilterChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
