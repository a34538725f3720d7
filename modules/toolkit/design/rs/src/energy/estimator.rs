use derive_more::Display;
use sirnakit_core_rs::seq::reverse_complement;

use super::duplex::duplex_energy;
use crate::config::RightEndType;
use crate::error::DesignError;
use crate::window::Candidate;

/// Length of the 3' overhang of the siRNA duplex.
pub const OVERHANG: usize = 2;
/// Number of terminal nucleotides whose pairing defines the terminal free energy.
pub const TERMINUS: usize = 3;
/// Shortest candidate with both termini and the overhang.
pub const MIN_LENGTH: usize = OVERHANG + TERMINUS;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Display)]
pub enum EnergyPath {
    /// No upstream neighbour: both termini are scored as isolated duplexes.
    #[display("plain")]
    Plain,
    /// The upstream neighbour supplies a dangling-end correction.
    #[display("dangling")]
    Dangling,
}

/// Terminal free energies (kcal/mol) of a candidate duplex. Lower is more stable.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct EnergyPair {
    pub sense: f64,
    pub antisense: f64,
    pub path: EnergyPath,
}

impl EnergyPair {
    /// Antisense minus sense energy; positive values favour loading of the antisense strand.
    pub fn delta(&self) -> f64 {
        self.antisense - self.sense
    }
}

/// Approximates the free energy of the sense 5' terminus and the antisense 5' terminus.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct FreeEnergyEstimator {
    right_end: RightEndType,
}

impl FreeEnergyEstimator {
    pub fn new(right_end: RightEndType) -> Self {
        Self { right_end }
    }

    pub fn right_end(&self) -> RightEndType {
        self.right_end
    }

    /// Estimate both terminal energies of `candidate`.
    ///
    /// `preceding` must be the window directly upstream of the candidate (see
    /// [`crate::window::Windows::preceding`]). Without it, both termini are scored on the plain
    /// path.
    pub fn estimate(
        &self,
        candidate: &Candidate,
        preceding: Option<&Candidate>,
    ) -> Result<EnergyPair, DesignError> {
        let seq = candidate.sequence().as_slice();
        let k = seq.len();
        if k < MIN_LENGTH {
            return Err(DesignError::InvalidSequenceLength {
                length: k,
                required: MIN_LENGTH,
            });
        }

        let prev = match preceding {
            None => {
                return Ok(EnergyPair {
                    sense: duplex_energy(&seq[..TERMINUS], None, 0)?,
                    antisense: duplex_energy(&seq[k - MIN_LENGTH..k - OVERHANG], None, 0)?,
                    path: EnergyPath::Plain,
                })
            }
            Some(prev) => prev,
        };
        if prev.position() + 1 != *candidate.position() {
            return Err(DesignError::DetachedWindow {
                position: *candidate.position(),
                preceding: *prev.position(),
            });
        }
        if prev.len() != k {
            return Err(DesignError::InvalidSequenceLength {
                length: prev.len(),
                required: k,
            });
        }

        // The nucleotide upstream of the window dangles off the sense 5' end
        let upstream = reverse_complement(prev.sequence());
        let bottom = reversed(&upstream[k - TERMINUS - 1..]);
        let sense = duplex_energy(&seq[..TERMINUS], Some(&bottom), 1)?;

        let antisense = match self.right_end {
            RightEndType::Complement => {
                duplex_energy(&reverse_complement(&seq[k - TERMINUS - 1..]), None, 0)?
            }
            RightEndType::Dangling => {
                let bottom = reversed(&seq[k - MIN_LENGTH..k - 1]);
                duplex_energy(&upstream[1..TERMINUS + 1], Some(&bottom), 1)?
            }
        };

        Ok(EnergyPair {
            sense,
            antisense,
            path: EnergyPath::Dangling,
        })
    }
}

fn reversed(seq: &[u8]) -> Vec<u8> {
    seq.iter().rev().copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::Windows;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-4,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_poly_a_paths() {
        let windows = Windows::new("polyA", &[b'A'; 23], 21).unwrap();
        let estimator = FreeEnergyEstimator::default();

        for position in [1, 2] {
            let candidate = windows.get(position).unwrap();
            let energy = estimator
                .estimate(candidate, windows.preceding(position))
                .unwrap();
            assert_eq!(energy.path, EnergyPath::Plain);
            assert_close(energy.sense, 0.02743);
            assert_close(energy.antisense, 0.02743);
            assert_eq!(energy.delta(), 0.0);
        }

        let energy = estimator
            .estimate(windows.get(3).unwrap(), windows.preceding(3))
            .unwrap();
        assert_eq!(energy.path, EnergyPath::Dangling);
        assert_close(energy.sense, -0.29813);
        assert_close(energy.antisense, -0.98724);
    }

    #[test]
    fn test_dangling_antisense() {
        let windows = Windows::new("polyA", &[b'A'; 23], 21).unwrap();
        let estimator = FreeEnergyEstimator::new(RightEndType::Dangling);
        let energy = estimator
            .estimate(windows.get(3).unwrap(), windows.preceding(3))
            .unwrap();
        assert_close(energy.sense, -0.29813);
        // .T/AA + 2 x A/T initiation + 2 x TT/AA
        assert_close(energy.antisense, -11.7 + 0.0373 * 310.15);
    }

    #[test]
    fn test_mixed_window_offsets() {
        let windows = Windows::new("q", b"GACTAGCATGCATCGATCGTACATGCA", 21).unwrap();
        let (candidate, preceding) = (windows.get(4).unwrap(), windows.preceding(4));
        assert_eq!(candidate.sequence_str(), "TAGCATGCATCGATCGTACAT");

        let complement = FreeEnergyEstimator::new(RightEndType::Complement)
            .estimate(candidate, preceding)
            .unwrap();
        let dangling = FreeEnergyEstimator::new(RightEndType::Dangling)
            .estimate(candidate, preceding)
            .unwrap();

        // .T/GA + A/T and G/C initiation + TA/AT + AG/TC
        assert_close(complement.sense, -16.7 + 0.0541 * 310.15);
        assert_eq!(complement.sense, dangling.sense);
        // ATGT duplex: 2 x A/T initiation + AT/TA + TG/AC + GT/CA
        assert_close(complement.antisense, -19.5 + 0.0573 * 310.15);
        // GTA over ACAT: .G/AC + G/C and A/T initiation + GT/CA + TA/AT
        assert_close(dangling.antisense, -19.1 + 0.0589 * 310.15);
    }

    #[test]
    fn test_plain_offsets() {
        let windows = Windows::new("q", b"GCGAAAAAAAAAAAAAGCGTT", 21).unwrap();
        let energy = FreeEnergyEstimator::default()
            .estimate(windows.get(1).unwrap(), None)
            .unwrap();
        // Antisense terminus sits right before the 2-nt overhang
        assert_close(energy.sense, -2.45942);
        assert_close(energy.antisense, -2.45942);
    }

    #[test]
    fn test_short_candidate() {
        let windows = Windows::new("q", b"ACGTACGT", 4).unwrap();
        let err = FreeEnergyEstimator::default()
            .estimate(windows.get(1).unwrap(), None)
            .unwrap_err();
        assert_eq!(
            err,
            DesignError::InvalidSequenceLength {
                length: 4,
                required: 5
            }
        );
    }

    #[test]
    fn test_detached_neighbour() {
        let windows = Windows::new("q", &[b'A'; 30], 21).unwrap();
        let err = FreeEnergyEstimator::default()
            .estimate(windows.get(5).unwrap(), windows.get(3))
            .unwrap_err();
        assert_eq!(
            err,
            DesignError::DetachedWindow {
                position: 5,
                preceding: 3
            }
        );
    }
}
