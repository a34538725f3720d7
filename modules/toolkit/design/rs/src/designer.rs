use std::collections::BTreeMap;
use std::sync::Arc;

use eyre::{Result, WrapErr};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use sirnakit_core_rs::parallelism;

use crate::adapters::AlignmentHit;
use crate::config::{FilterConfig, ReportMode};
use crate::error::DesignError;
use crate::postfilter::{DamagingMotifs, PostFilterChain};
use crate::result::{CandidateRecord, Design};
use crate::scoring::{EfficiencyScorer, Verdict};
use crate::snp::SnpTable;
use crate::window::Windows;
use crate::workload::Workload;

/// Scores and filters siRNA candidates of independent queries.
///
/// The designer is immutable once built and can be shared between threads.
#[derive(Clone, Debug)]
pub struct Designer {
    config: FilterConfig,
    snps: Arc<SnpTable>,
    motifs: Arc<DamagingMotifs>,
    chain: PostFilterChain,
}

impl Designer {
    pub fn new(config: FilterConfig) -> Self {
        let motifs = Arc::new(DamagingMotifs::default());
        let chain = PostFilterChain::new(&config, motifs.clone());
        Self {
            config,
            snps: Arc::new(SnpTable::default()),
            motifs,
            chain,
        }
    }

    pub fn with_snps(mut self, snps: Arc<SnpTable>) -> Self {
        self.snps = snps;
        self
    }

    pub fn with_motifs(mut self, motifs: Arc<DamagingMotifs>) -> Self {
        self.chain = PostFilterChain::new(&self.config, motifs.clone());
        self.motifs = motifs;
        self
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    pub fn snps(&self) -> &SnpTable {
        &self.snps
    }

    pub fn motifs(&self) -> &DamagingMotifs {
        &self.motifs
    }

    /// Cut the query into candidates of the configured siRNA size.
    pub fn windows(&self, query: impl Into<String>, sequence: &[u8]) -> Result<Windows, DesignError> {
        Windows::new(query, sequence, *self.config.sirna_size())
    }

    /// Design a single query.
    ///
    /// With a `main_target`, hits against any other reference are flagged as off-target. Without
    /// one, the off-target flag stays undetermined unless the query has no hits at all.
    pub fn design(&self, workload: &Workload, main_target: Option<&str>) -> Result<Design> {
        let windows = workload.windows();
        let query = windows.query();
        let targets = workload.targets();

        // Every scored position must have accessibility data before anything is computed
        let positions = targets
            .iter()
            .map(|(candidate, _)| (*candidate.position(), *candidate))
            .collect::<BTreeMap<_, _>>();
        let window = *self.config.accessibility_window();
        if !*self.config.no_efficience() {
            for position in positions.keys() {
                workload
                    .accessibility()
                    .value(*position, window)
                    .wrap_err_with(|| format!("Query {query} cannot be scored"))?;
            }
        }

        // Energies and verdicts are computed once per candidate, however many hits it has
        let scorer = EfficiencyScorer::new(&self.config);
        let mut verdicts: BTreeMap<usize, Verdict> = BTreeMap::new();
        for (position, candidate) in positions {
            match scorer.evaluate(windows, candidate, workload.accessibility()) {
                Ok(verdict) => {
                    verdicts.insert(position, verdict);
                }
                Err(DesignError::InvalidSequenceLength { length, required }) => {
                    log::warn!(
                        "Query {query}: {} excluded, {length} nt is too short for terminal energies (at least {required} nt)",
                        candidate.name()
                    );
                }
                Err(err) => {
                    return Err(err).wrap_err_with(|| {
                        format!("Query {query}: failed to score {}", candidate.name())
                    })
                }
            }
        }
        log::debug!("Query {query}: scored {} candidates", verdicts.len());

        let mut records = targets
            .into_iter()
            .filter_map(|(candidate, hit)| {
                verdicts.get(candidate.position()).map(|verdict| {
                    let off_target = is_off_target(hit, main_target);
                    CandidateRecord::new(query, candidate, verdict, hit, off_target)
                })
            })
            .collect::<Vec<_>>();
        // Stable: hits at the same position keep the aligner order
        records.sort_by_key(|x| *x.sirna_position());

        let mut records = self.chain.apply(records, &self.snps);
        if *self.config.report() == ReportMode::Efficient {
            records.retain(|x| *x.is_efficient());
        }
        log::debug!("Query {query}: {} records reported", records.len());

        Ok(Design::new(
            query.clone(),
            windows.sequence().len(),
            *windows.size(),
            records,
        ))
    }

    /// Design independent queries in parallel. Results keep the input order; a failing query
    /// does not affect the others.
    pub fn design_batch(
        &self,
        pool: &ThreadPool,
        queries: &[(Workload, Option<String>)],
    ) -> Vec<Result<Design>> {
        pool.install(|| {
            queries
                .par_iter()
                .map(|(workload, main_target)| self.design(workload, main_target.as_deref()))
                .collect()
        })
    }
}

/// Thread pool for [`Designer::design_batch`]; see [`parallelism::available`] for `threads`.
pub fn thread_pool(threads: isize) -> Result<ThreadPool> {
    let threads = parallelism::available(threads)?;
    let pool = ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|ind| format!("sirnakit-{ind}"))
        .build()?;
    Ok(pool)
}

fn is_off_target(hit: Option<&AlignmentHit>, main_target: Option<&str>) -> Option<bool> {
    match (hit, main_target) {
        (None, _) => Some(false),
        (Some(hit), Some(main_target)) => Some(hit.target() != main_target),
        (Some(_), None) => None,
    }
}
