use sirnakit_core_rs::seq::{is_strong, is_weak};

use super::verdict::Verdict;
use crate::adapters::AccessibilityProfile;
use crate::config::FilterConfig;
use crate::energy::{EnergyPair, FreeEnergyEstimator};
use crate::error::DesignError;
use crate::window::{Candidate, Windows};

/// Turns terminal energies and target-site accessibility into an efficiency verdict.
#[derive(Clone, Debug)]
pub struct EfficiencyScorer<'a> {
    config: &'a FilterConfig,
    estimator: FreeEnergyEstimator,
}

impl<'a> EfficiencyScorer<'a> {
    pub fn new(config: &'a FilterConfig) -> Self {
        Self {
            config,
            estimator: FreeEnergyEstimator::new(*config.right_end_type()),
        }
    }

    pub fn config(&self) -> &FilterConfig {
        self.config
    }

    /// Score one candidate of `windows`.
    ///
    /// With efficiency scoring disabled nothing is computed and the accessibility profile is not
    /// consulted.
    pub fn evaluate(
        &self,
        windows: &Windows,
        candidate: &Candidate,
        accessibility: &AccessibilityProfile,
    ) -> Result<Verdict, DesignError> {
        if *self.config.no_efficience() {
            return Ok(Verdict::skipped());
        }

        let position = *candidate.position();
        let energy = self
            .estimator
            .estimate(candidate, windows.preceding(position))?;
        let accessibility = accessibility.value(position, *self.config.accessibility_window())?;
        Ok(self.judge(candidate.sequence(), energy, accessibility))
    }

    pub(crate) fn judge(&self, seq: &[u8], energy: EnergyPair, accessibility: f64) -> Verdict {
        let signals = [
            energy.antisense >= energy.sense,
            energy.delta() >= *self.config.end_stability_threshold(),
            accessibility >= *self.config.accessibility_threshold(),
        ];

        // AND over the enabled signals, vacuously true when none is enabled
        let composite = signals
            .iter()
            .zip(self.config.enabled_signals())
            .filter(|(_, enabled)| *enabled)
            .all(|(signal, _)| *signal);

        let is_efficient = if *self.config.terminal_check() {
            self.terminal(seq, composite, signals[2])
        } else {
            composite
        };

        Verdict::new(energy, accessibility, signals, composite, is_efficient)
    }

    // Nucleotide preferences at the antisense 5' end (k - 3) and the sense 5' end (index 1)
    fn terminal(&self, seq: &[u8], composite: bool, site_accessible: bool) -> bool {
        let k = seq.len();
        let antisense = k.checked_sub(3).and_then(|ind| seq.get(ind)).copied();
        let sense = seq.get(1).copied();

        match (antisense, sense) {
            (Some(antisense), Some(sense)) if is_weak(antisense) => {
                if is_weak(sense) {
                    composite
                } else if *self.config.accessibility_check() {
                    site_accessible
                } else {
                    true
                }
            }
            (Some(_), Some(sense)) if is_strong(sense) => composite,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::energy::EnergyPath;

    fn energy(sense: f64, antisense: f64) -> EnergyPair {
        EnergyPair {
            sense,
            antisense,
            path: EnergyPath::Plain,
        }
    }

    fn config(strand: bool, end: bool, access: bool) -> FilterConfig {
        FilterConfig::builder()
            .strand_check(strand)
            .end_check(end)
            .accessibility_check(access)
            .terminal_check(false)
            .build()
            .unwrap()
    }

    #[test]
    fn test_composite_over_all_toggle_combinations() {
        // strand selected, end stable, site not accessible
        let pair = energy(-2.0, 0.0);
        let accessibility = 0.05;

        for mask in 0..8u8 {
            let toggles = [mask & 1 != 0, mask & 2 != 0, mask & 4 != 0];
            let config = config(toggles[0], toggles[1], toggles[2]);
            let verdict = EfficiencyScorer::new(&config).judge(b"ACGTACGTACGTACGTACGTA", pair, accessibility);

            assert_eq!(*verdict.strand_selected(), Some(true));
            assert_eq!(*verdict.end_stable(), Some(true));
            assert_eq!(*verdict.site_accessible(), Some(false));

            let expected = !toggles[2];
            assert_eq!(*verdict.composite(), Some(expected), "toggles {toggles:?}");
            assert_eq!(*verdict.is_efficient(), expected, "toggles {toggles:?}");
        }
    }

    #[test]
    fn test_strand_selection_at_equality() {
        let config = config(true, false, false);
        let verdict = EfficiencyScorer::new(&config).judge(b"AAAAAAAAAAAAAAAAAAAAA", energy(0.5, 0.5), 1.0);
        assert_eq!(*verdict.strand_selected(), Some(true));
        assert_eq!(*verdict.end_stable(), Some(false));
        assert!(*verdict.is_efficient());
    }

    #[test]
    fn test_end_stability_threshold_is_inclusive() {
        let config = config(false, true, false);
        let scorer = EfficiencyScorer::new(&config);
        let seq = b"AAAAAAAAAAAAAAAAAAAAA";
        assert_eq!(*scorer.judge(seq, energy(-1.0, 0.0), 0.0).end_stable(), Some(true));
        assert_eq!(*scorer.judge(seq, energy(-0.9, 0.0), 0.0).end_stable(), Some(false));
    }

    #[test]
    fn test_terminal_decision_table() {
        // Composite fails on energy, the site is accessible
        let pair = energy(0.0, -1.0);
        let accessibility = 0.5;

        let make = |access: bool| {
            FilterConfig::builder()
                .sirna_size(7)
                .accessibility_window(3)
                .accessibility_check(access)
                .build()
                .unwrap()
        };
        let (with_access, without_access) = (make(true), make(false));

        // (sequence, efficient with accessibility check, efficient without it)
        let cases: [(&[u8; 7], bool, bool); 4] = [
            // weak at k-3, weak at 1: composite
            (b"GAGGAGG", false, false),
            // weak at k-3, strong at 1: accessibility or true
            (b"GCGGTGG", true, true),
            // strong at k-3, strong at 1: composite
            (b"AGAAGAA", false, false),
            // strong at k-3, weak at 1: false
            (b"ATAAGAA", false, false),
        ];
        for (seq, expected_with, expected_without) in cases {
            let verdict = EfficiencyScorer::new(&with_access).judge(seq, pair, accessibility);
            assert_eq!(*verdict.composite(), Some(false));
            assert_eq!(*verdict.is_efficient(), expected_with, "{}", String::from_utf8_lossy(seq));

            let verdict = EfficiencyScorer::new(&without_access).judge(seq, pair, accessibility);
            assert_eq!(*verdict.is_efficient(), expected_without, "{}", String::from_utf8_lossy(seq));
        }

        // Inaccessible site with a strong sense end falls back to the accessibility verdict
        let verdict = EfficiencyScorer::new(&with_access).judge(b"GCGGTGG", pair, 0.0);
        assert!(!*verdict.is_efficient());
        let verdict = EfficiencyScorer::new(&without_access).judge(b"GCGGTGG", pair, 0.0);
        assert!(*verdict.is_efficient());
    }

    #[test]
    fn test_terminal_keeps_passing_composite() {
        let config = FilterConfig::builder()
            .end_check(false)
            .accessibility_check(false)
            .build()
            .unwrap();
        let scorer = EfficiencyScorer::new(&config);
        let pair = energy(-1.0, 0.0);
        // weak/weak and strong/strong follow the composite
        assert!(*scorer.judge(b"AAAAAAAAAAAAAAAAAAAAA", pair, 0.0).is_efficient());
        assert!(*scorer.judge(b"GGGGGGGGGGGGGGGGGGGGG", pair, 0.0).is_efficient());
        // strong at k-3 with a weak sense end is never efficient
        assert!(!*scorer.judge(b"GAGGGGGGGGGGGGGGGGGGG", pair, 0.0).is_efficient());
    }

    #[test]
    fn test_no_efficience_skips_everything() {
        let config = FilterConfig::builder().no_efficience(true).build().unwrap();
        let windows = Windows::new("q", &[b'A'; 25], 21).unwrap();
        let verdict = EfficiencyScorer::new(&config)
            .evaluate(&windows, windows.get(3).unwrap(), &AccessibilityProfile::default())
            .unwrap();
        assert_eq!(verdict, Verdict::skipped());
        assert!(verdict.is_skipped());
        assert!(!*verdict.is_efficient());
    }

    #[test]
    fn test_missing_accessibility_fails() {
        let config = FilterConfig::default();
        let windows = Windows::new("q", &[b'A'; 25], 21).unwrap();
        let profile = AccessibilityProfile::new(vec![vec![0.5; 21]; 2]).unwrap();
        let scorer = EfficiencyScorer::new(&config);
        assert!(scorer.evaluate(&windows, windows.get(2).unwrap(), &profile).is_ok());
        assert!(matches!(
            scorer.evaluate(&windows, windows.get(3).unwrap(), &profile),
            Err(DesignError::MissingAccessibilityData { .. })
        ));
    }
}
