use memchr::memmem::Finder;

use sirnakit_core_rs::seq::{normalize, reverse_complement};

use super::CandidateFilter;
use crate::error::DesignError;

/// Immunostimulatory motifs in the DNA alphabet (`GUCCUUCAA`, `UGUGU`).
pub const DEFAULT_MOTIFS: [&str; 2] = ["GTCCTTCAA", "TGTGT"];

/// Catalogue of sequence motifs that disqualify a candidate on either strand.
#[derive(Clone, Debug)]
pub struct DamagingMotifs {
    motifs: Vec<Vec<u8>>,
    // Forward and reverse-complement searchers for each motif
    finders: Vec<Finder<'static>>,
}

impl DamagingMotifs {
    pub fn new<T: AsRef<[u8]>>(motifs: impl IntoIterator<Item = T>) -> Result<Self, DesignError> {
        let mut normalized = Vec::new();
        for motif in motifs {
            let motif = motif.as_ref();
            if motif.is_empty() {
                return Err(DesignError::config("damaging motifs must not be empty"));
            }
            let motif = normalize(motif).map_err(|err| {
                DesignError::config(format!(
                    "damaging motif {:?} holds an invalid symbol {:?} at position {}",
                    String::from_utf8_lossy(motif),
                    err.symbol as char,
                    err.index + 1
                ))
            })?;
            normalized.push(motif);
        }

        Ok(Self::from_normalized(normalized))
    }

    fn from_normalized(motifs: Vec<Vec<u8>>) -> Self {
        let finders = motifs
            .iter()
            .flat_map(|x| {
                [
                    Finder::new(x).into_owned(),
                    Finder::new(&reverse_complement(x)).into_owned(),
                ]
            })
            .collect();
        Self { motifs, finders }
    }

    pub fn motifs(&self) -> &[Vec<u8>] {
        &self.motifs
    }

    /// Whether the sequence holds any motif or its reverse complement.
    pub fn is_damaging(&self, seq: &[u8]) -> bool {
        self.finders.iter().any(|x| x.find(seq).is_some())
    }
}

impl Default for DamagingMotifs {
    fn default() -> Self {
        Self::from_normalized(DEFAULT_MOTIFS.iter().map(|x| x.as_bytes().to_vec()).collect())
    }
}

impl CandidateFilter for DamagingMotifs {
    fn name(&self) -> &'static str {
        "damaging-motifs"
    }

    fn retain(&self, seq: &[u8]) -> bool {
        !self.is_damaging(seq)
    }
}
