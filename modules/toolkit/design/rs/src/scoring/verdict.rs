use derive_getters::Getters;

use crate::energy::EnergyPair;

/// Efficiency assessment of a single candidate.
///
/// `None` marks a signal that was not determined (efficiency scoring disabled).
#[derive(Clone, Copy, PartialEq, Debug, Default, Getters)]
pub struct Verdict {
    energy: Option<EnergyPair>,
    accessibility: Option<f64>,
    strand_selected: Option<bool>,
    end_stable: Option<bool>,
    site_accessible: Option<bool>,
    composite: Option<bool>,
    is_efficient: bool,
}

impl Verdict {
    /// Verdict of a candidate that was never scored.
    pub fn skipped() -> Self {
        Self::default()
    }

    pub(crate) fn new(
        energy: EnergyPair,
        accessibility: f64,
        signals: [bool; 3],
        composite: bool,
        is_efficient: bool,
    ) -> Self {
        let [strand_selected, end_stable, site_accessible] = signals;
        Self {
            energy: Some(energy),
            accessibility: Some(accessibility),
            strand_selected: Some(strand_selected),
            end_stable: Some(end_stable),
            site_accessible: Some(site_accessible),
            composite: Some(composite),
            is_efficient,
        }
    }

    pub fn is_skipped(&self) -> bool {
        self.composite.is_none()
    }
}
