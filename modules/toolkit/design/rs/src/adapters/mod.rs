//! Boundary types for the outputs of the external aligner and structure predictor.
//!
//! Both tools run outside of the engine; it only ever sees their fully parsed results.

pub use accessibility::AccessibilityProfile;
pub use alignment::AlignmentHit;
pub(crate) use alignment::footprint_end;

mod accessibility;
mod alignment;
