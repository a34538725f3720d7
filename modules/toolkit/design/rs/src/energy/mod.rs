//! Approximate terminal free energies of siRNA duplex ends.

pub use duplex::{duplex_energy, TEMPERATURE};
pub use estimator::{EnergyPair, EnergyPath, FreeEnergyEstimator, MIN_LENGTH, OVERHANG, TERMINUS};
pub use table::{dangling_end, stack_energy, Thermo};

mod duplex;
mod estimator;
mod table;
