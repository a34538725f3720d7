use derive_getters::Getters;

use crate::error::DesignError;

/// Unpaired probabilities predicted for the query, one row per complete window.
///
/// Row `i` belongs to the window starting at position `i + 1`; column `j` holds the probability
/// that the stretch ending at offset `j` within that window is unpaired. Leading rows for the
/// `k - 1` incomplete windows are dropped by the predictor adapter before the engine sees them.
#[derive(Clone, PartialEq, Debug, Default, Getters)]
pub struct AccessibilityProfile {
    rows: Vec<Vec<f64>>,
}

impl AccessibilityProfile {
    /// Build the profile, rejecting values that are not probabilities.
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, DesignError> {
        for (ind, row) in rows.iter().enumerate() {
            if let Some(value) = row.iter().find(|x| !(0.0..=1.0).contains(*x)) {
                return Err(DesignError::accessibility(format!(
                    "row {} holds {value}, which is not a probability",
                    ind + 1
                )));
            }
        }
        Ok(Self { rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Unpaired probability at `offset` of the window starting at 1-based `position`.
    pub fn value(&self, position: usize, offset: usize) -> Result<f64, DesignError> {
        let row = position
            .checked_sub(1)
            .and_then(|ind| self.rows.get(ind))
            .ok_or_else(|| {
                DesignError::accessibility(format!(
                    "no accessibility row for the window at position {position} ({} rows available)",
                    self.rows.len()
                ))
            })?;
        row.get(offset).copied().ok_or_else(|| {
            DesignError::accessibility(format!(
                "row for the window at position {position} has {} columns, offset {offset} requested",
                row.len()
            ))
        })
    }
}
