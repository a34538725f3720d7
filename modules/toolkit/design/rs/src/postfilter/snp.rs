use ahash::HashSet;
use itertools::Itertools;

use crate::adapters::footprint_end;
use crate::result::{CandidateRecord, SnpExist};
use crate::snp::SnpTable;

/// Flags records whose reference footprint overlaps a known variant. Never drops records.
#[derive(Clone, Copy, Debug)]
pub struct SnpAnnotator<'a> {
    table: &'a SnpTable,
}

impl<'a> SnpAnnotator<'a> {
    pub fn new(table: &'a SnpTable) -> Self {
        Self { table }
    }

    pub fn exists(&self, record: &CandidateRecord) -> SnpExist {
        match (record.hit_name(), record.reference_strand_pos()) {
            (Some(target), Some(start)) => {
                let end = footprint_end(*start, record.sirna_sequence().len());
                SnpExist::from(self.table.overlaps(target, *start, end))
            }
            _ => SnpExist::No,
        }
    }

    pub fn annotate(&self, records: &mut [CandidateRecord]) {
        let mut unknown = HashSet::default();
        for record in records.iter_mut() {
            if let Some(target) = record.hit_name() {
                if self.table.targets() > 0 && !self.table.contains_target(target) {
                    unknown.insert(target.clone());
                }
            }
            let exists = self.exists(record);
            record.set_snp_exist(exists);
        }

        if !unknown.is_empty() {
            log::warn!(
                "SNP table holds no variants for {} hit target(s): {}",
                unknown.len(),
                unknown.iter().sorted().join(", ")
            );
        }
    }
}
