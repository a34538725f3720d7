//! Nucleotide-level helpers shared by the design toolkit.
//!
//! All sequences are handled as upper-case DNA bytes: RNA input is back-transcribed (`U` -> `T`)
//! once, on entry, by [`normalize`].

pub use alphabet::{complement, is_strong, is_weak, normalize, reverse_complement, InvalidSymbol};
pub use composition::{gc_content, has_run, longest_run};

mod alphabet;
mod composition;
