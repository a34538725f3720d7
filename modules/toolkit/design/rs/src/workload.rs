use derive_getters::{Dissolve, Getters};

use crate::adapters::{AccessibilityProfile, AlignmentHit};
use crate::error::DesignError;
use crate::window::{Candidate, Windows};

/// Everything the engine needs to design one query: its windows and the parsed outputs of the
/// aligner and the structure predictor.
#[derive(Clone, PartialEq, Debug, Getters, Dissolve)]
pub struct Workload {
    windows: Windows,
    hits: Vec<AlignmentHit>,
    accessibility: AccessibilityProfile,
}

impl Workload {
    /// Bundle and cross-check the inputs of a query.
    ///
    /// Every hit must reference an existing candidate. The accessibility profile is either empty
    /// (efficiency scoring disabled) or holds exactly one row per candidate.
    pub fn new(
        windows: Windows,
        hits: Vec<AlignmentHit>,
        accessibility: AccessibilityProfile,
    ) -> Result<Self, DesignError> {
        if let Some(hit) = hits.iter().find(|x| windows.by_name(x.candidate()).is_none()) {
            return Err(DesignError::UnknownCandidate {
                candidate: hit.candidate().clone(),
            });
        }

        if !accessibility.is_empty() && accessibility.len() != windows.len() {
            return Err(DesignError::accessibility(format!(
                "query {} has {} candidates, but the profile holds {} rows",
                windows.query(),
                windows.len(),
                accessibility.len()
            )));
        }

        Ok(Self {
            windows,
            hits,
            accessibility,
        })
    }

    /// No alignment hits: every candidate is designed against the query itself.
    pub fn is_targetless(&self) -> bool {
        self.hits.is_empty()
    }

    /// Candidates that produce records, paired with their hit, in input order.
    ///
    /// Only forward-strand hits are designed; without hits every candidate is.
    pub fn targets(&self) -> Vec<(&Candidate, Option<&AlignmentHit>)> {
        if self.is_targetless() {
            return self.windows.candidates().iter().map(|x| (x, None)).collect();
        }

        self.hits
            .iter()
            .filter(|x| x.strand().is_forward())
            .filter_map(|hit| self.windows.by_name(hit.candidate()).map(|x| (x, Some(hit))))
            .collect()
    }
}
