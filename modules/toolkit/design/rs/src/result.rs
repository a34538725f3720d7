use derive_getters::Getters;
use derive_more::Display;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use sirnakit_core_rs::loc::Strand;
use sirnakit_core_rs::seq::gc_content;

use crate::adapters::AlignmentHit;
use crate::scoring::Verdict;
use crate::window::Candidate;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Display, Serialize, Deserialize)]
pub enum SnpExist {
    Yes,
    #[default]
    No,
}

impl From<bool> for SnpExist {
    fn from(value: bool) -> Self {
        if value {
            SnpExist::Yes
        } else {
            SnpExist::No
        }
    }
}

/// Round half away from zero to the given number of decimals.
pub fn round(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

/// One scored candidate, optionally tied to an alignment hit. Serialized field names are stable.
#[derive(Clone, PartialEq, Debug, Getters, Serialize, Deserialize)]
pub struct CandidateRecord {
    query_name: String,
    sirna_name: String,
    sirna_position: usize,
    sirna_sequence: String,
    is_efficient: bool,
    #[serde(rename = "SNP_exist")]
    snp_exist: SnpExist,
    strand_selection: Option<bool>,
    end_stability: Option<bool>,
    #[serde(rename = "sense5_MFE_energy", alias = "sense5_MFE_enegery")]
    sense_energy: Option<f64>,
    #[serde(rename = "anti_sense5_MFE_energy", alias = "anti_sense5_MFE_enegery")]
    antisense_energy: Option<f64>,
    #[serde(rename = "delta_MFE_energy", alias = "delta_MFE_enegery")]
    delta_energy: Option<f64>,
    target_site_accessibility: Option<bool>,
    accessibility_value: Option<f64>,
    gc_content: f64,
    #[serde(alias = "thermo_effcicient")]
    thermo_efficient: Option<bool>,
    is_off_target: Option<bool>,
    hit_name: Option<String>,
    reference_strand_pos: Option<u64>,
    strand: Option<Strand>,
    mismatches: Option<u32>,
}

impl CandidateRecord {
    pub(crate) fn new(
        query: &str,
        candidate: &Candidate,
        verdict: &Verdict,
        hit: Option<&AlignmentHit>,
        is_off_target: Option<bool>,
    ) -> Self {
        let energy = verdict.energy();
        Self {
            query_name: query.to_string(),
            sirna_name: candidate.name(),
            sirna_position: *candidate.position(),
            sirna_sequence: candidate.sequence_str().to_string(),
            is_efficient: *verdict.is_efficient(),
            snp_exist: SnpExist::No,
            strand_selection: *verdict.strand_selected(),
            end_stability: *verdict.end_stable(),
            sense_energy: energy.map(|x| round(x.sense, 4)),
            antisense_energy: energy.map(|x| round(x.antisense, 4)),
            delta_energy: energy.map(|x| round(x.delta(), 4)),
            target_site_accessibility: *verdict.site_accessible(),
            accessibility_value: verdict.accessibility().map(|x| round(x, 4)),
            gc_content: round(gc_content(candidate.sequence()), 2),
            thermo_efficient: *verdict.composite(),
            is_off_target,
            hit_name: hit.map(|x| x.target().clone()),
            reference_strand_pos: hit.map(|x| *x.reference_position()),
            strand: hit.map(|x| *x.strand()),
            mismatches: hit.map(|x| *x.mismatches()),
        }
    }

    pub(crate) fn set_snp_exist(&mut self, snp_exist: SnpExist) {
        self.snp_exist = snp_exist;
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Getters, Serialize)]
pub struct DesignSummary {
    records: usize,
    efficient: usize,
    off_target: usize,
    main_target: usize,
    efficient_positions: usize,
}

/// Final, ordered records of one query.
#[derive(Clone, PartialEq, Debug, Getters, Serialize)]
pub struct Design {
    query: String,
    length: usize,
    sirna_size: usize,
    records: Vec<CandidateRecord>,
}

impl Design {
    pub(crate) fn new(query: String, length: usize, sirna_size: usize, records: Vec<CandidateRecord>) -> Self {
        Self {
            query,
            length,
            sirna_size,
            records,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn efficient(&self) -> impl Iterator<Item = &CandidateRecord> {
        self.records.iter().filter(|x| x.is_efficient)
    }

    pub fn summary(&self) -> DesignSummary {
        DesignSummary {
            records: self.records.len(),
            efficient: self.efficient().count(),
            off_target: self
                .records
                .iter()
                .filter(|x| x.is_off_target == Some(true))
                .count(),
            main_target: self
                .records
                .iter()
                .filter(|x| x.is_off_target == Some(false) && x.hit_name.is_some())
                .count(),
            efficient_positions: self.efficient().map(|x| x.sirna_position).unique().count(),
        }
    }

    /// Number of efficient records starting at each query position (index 0 is position 1).
    pub fn efficiency_histogram(&self) -> Vec<usize> {
        self.histogram(self.efficient())
    }

    /// Number of records hitting the main target at each query position.
    pub fn main_target_histogram(&self) -> Vec<usize> {
        self.histogram(
            self.records
                .iter()
                .filter(|x| x.is_off_target == Some(false) && x.hit_name.is_some()),
        )
    }

    fn histogram<'a>(&self, records: impl Iterator<Item = &'a CandidateRecord>) -> Vec<usize> {
        let mut histogram = vec![0; self.length];
        for record in records {
            if let Some(slot) = record
                .sirna_position
                .checked_sub(1)
                .and_then(|ind| histogram.get_mut(ind))
            {
                *slot += 1;
            }
        }
        histogram
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::energy::{EnergyPair, EnergyPath};
    use crate::window::Windows;

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(round(0.125, 2), 0.13);
        assert_eq!(round(-0.125, 2), -0.13);
        assert_eq!(round(2.5, 0), 3.0);
        assert_eq!(round(41.666_666, 2), 41.67);
        assert_eq!(round(-2.459_42, 4), -2.4594);
        assert_eq!(round(40.0, 2), 40.0);
    }

    #[test]
    fn test_snp_exist_serialization() {
        assert_eq!(serde_json::to_string(&SnpExist::Yes).unwrap(), "\"Yes\"");
        assert_eq!(serde_json::to_string(&SnpExist::from(false)).unwrap(), "\"No\"");
    }

    fn design() -> Design {
        let windows = Windows::new("q", b"ACGTACGTAC", 4).unwrap();
        let skipped = Verdict::skipped();
        let records = vec![
            CandidateRecord::new("q", windows.get(1).unwrap(), &skipped, None, Some(false)),
            CandidateRecord::new(
                "q",
                windows.get(3).unwrap(),
                &skipped,
                Some(&AlignmentHit::forward("sirna3", "geneX", 10, "GTAC")),
                Some(false),
            ),
            CandidateRecord::new(
                "q",
                windows.get(3).unwrap(),
                &skipped,
                Some(&AlignmentHit::forward("sirna3", "geneY", 1, "GTAC")),
                Some(true),
            ),
        ];
        Design::new("q".to_string(), 10, 4, records)
    }

    #[test]
    fn test_summary_and_histograms() {
        let mut design = design();
        for record in &mut design.records {
            record.is_efficient = record.sirna_position == 3;
        }

        let summary = design.summary();
        assert_eq!(*summary.records(), 3);
        assert_eq!(*summary.efficient(), 2);
        assert_eq!(*summary.off_target(), 1);
        assert_eq!(*summary.main_target(), 1);
        assert_eq!(*summary.efficient_positions(), 1);

        assert_eq!(design.efficiency_histogram(), [0, 0, 2, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(design.main_target_histogram(), [0, 0, 1, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_record_fields() {
        let windows = Windows::new("q", b"GCGAAAAAAAAAAAAAGCGTT", 21).unwrap();
        let verdict = Verdict::new(
            EnergyPair {
                sense: -2.459_415,
                antisense: 0.027_426,
                path: EnergyPath::Plain,
            },
            0.123_456,
            [true, true, true],
            true,
            true,
        );
        let hit = AlignmentHit::forward("sirna1", "geneX", 0, "GCGAAAAAAAAAAAAAGCGTT");
        let record = CandidateRecord::new("q", windows.get(1).unwrap(), &verdict, Some(&hit), None);

        assert_eq!(record.sirna_name(), "sirna1");
        assert_eq!(*record.sense_energy(), Some(-2.4594));
        assert_eq!(*record.antisense_energy(), Some(0.0274));
        assert_eq!(*record.delta_energy(), Some(2.4868));
        assert_eq!(*record.accessibility_value(), Some(0.1235));
        assert_eq!(*record.gc_content(), 28.57);
        assert_eq!(*record.is_off_target(), None);
        assert_eq!(*record.strand(), Some(Strand::Forward));
        assert_eq!(*record.snp_exist(), SnpExist::No);
    }

    #[test]
    fn test_legacy_keys_are_accepted() {
        let windows = Windows::new("q", b"ACGTACGTAC", 4).unwrap();
        let verdict = Verdict::new(
            EnergyPair {
                sense: -1.5,
                antisense: 0.25,
                path: EnergyPath::Dangling,
            },
            0.5,
            [true, true, true],
            true,
            true,
        );
        let record = CandidateRecord::new("q", windows.get(2).unwrap(), &verdict, None, Some(false));

        let mut json = serde_json::to_value(&record).unwrap();
        let fields = json.as_object_mut().unwrap();
        for (key, legacy) in [
            ("sense5_MFE_energy", "sense5_MFE_enegery"),
            ("anti_sense5_MFE_energy", "anti_sense5_MFE_enegery"),
            ("delta_MFE_energy", "delta_MFE_enegery"),
            ("thermo_efficient", "thermo_effcicient"),
        ] {
            let value = fields.remove(key).unwrap();
            fields.insert(legacy.to_string(), value);
        }

        let parsed: CandidateRecord = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, record);
        // Output always uses the corrected keys
        let json = serde_json::to_value(&parsed).unwrap();
        assert_eq!(json["delta_MFE_energy"], 1.75);
        assert!(json.get("thermo_effcicient").is_none());
    }
}
