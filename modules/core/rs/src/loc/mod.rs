pub use strand::{Strand, UnknownStrand};

mod strand;
