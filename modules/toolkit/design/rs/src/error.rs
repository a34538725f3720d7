use derive_more::{Display, Error};

/// Failure kinds of the design engine.
///
/// Orchestration entry points return [`eyre::Result`]; the kind can be recovered with
/// `report.downcast_ref::<DesignError>()`.
#[derive(Clone, PartialEq, Debug, Display, Error)]
pub enum DesignError {
    #[display("window size {size} is invalid for a sequence of length {length}")]
    InvalidWindowSize { size: usize, length: usize },

    #[display("query {query:?}: symbol {symbol:?} at position {position} is not a nucleotide")]
    InvalidSequence {
        query: String,
        position: usize,
        symbol: char,
    },

    #[display("sequence of length {length} is too short, at least {required} nucleotides are required")]
    InvalidSequenceLength { length: usize, required: usize },

    #[display("missing or malformed accessibility data: {reason}")]
    MissingAccessibilityData { reason: String },

    #[display("invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    #[display("alignment hit references unknown candidate {candidate:?}")]
    UnknownCandidate { candidate: String },

    #[display("no thermodynamic parameters for the {context} {key:?}")]
    UnknownStack { context: &'static str, key: String },

    #[display("window at position {position} cannot use window {preceding} as its upstream neighbour")]
    DetachedWindow { position: usize, preceding: usize },
}

impl DesignError {
    pub(crate) fn config(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }

    pub(crate) fn accessibility(reason: impl Into<String>) -> Self {
        Self::MissingAccessibilityData {
            reason: reason.into(),
        }
    }
}
