use std::iter;

use sirnakit_core_rs::seq::{complement, is_strong, is_weak};

use super::table::{dangling_end, stack_energy, Thermo, INIT_TERMINAL_AT, INIT_TERMINAL_GC};
use crate::error::DesignError;

/// Temperature (K) at which free energies are reported.
pub const TEMPERATURE: f64 = 310.15;

const GAP: u8 = b'.';

/// Free energy (kcal/mol at [`TEMPERATURE`]) of the duplex formed by `top` and `bottom`.
///
/// `bottom` is read 3'->5' under `top` and defaults to the exact complement of `top`. A positive
/// `shift` slides `top` to the right, so the leading `shift` nucleotides of `bottom` have no
/// partner; at most one such unpaired nucleotide per side contributes a dangling-end term, longer
/// overhangs are trimmed. Initiation is computed from the terminal pairs of `top`.
///
/// Lookup is strict: a stack or dangling context without parameters is an error.
pub fn duplex_energy(top: &[u8], bottom: Option<&[u8]>, shift: usize) -> Result<f64, DesignError> {
    if top.len() < 2 {
        return Err(DesignError::InvalidSequenceLength {
            length: top.len(),
            required: 2,
        });
    }
    let bottom = match bottom {
        Some(bottom) => bottom.to_vec(),
        None => top.iter().map(|&x| complement(x)).collect(),
    };

    // Align both strands
    let mut upper = iter::repeat(GAP)
        .take(shift)
        .chain(top.iter().copied())
        .collect::<Vec<_>>();
    let mut lower = bottom;
    let length = upper.len().max(lower.len());
    upper.resize(length, GAP);
    lower.resize(length, GAP);

    let (mut upper, mut lower) = (upper.as_slice(), lower.as_slice());

    // Only a single nucleotide can dangle
    while upper.starts_with(&[GAP, GAP]) || lower.starts_with(&[GAP, GAP]) {
        (upper, lower) = (&upper[1..], &lower[1..]);
    }
    while upper.ends_with(&[GAP, GAP]) || lower.ends_with(&[GAP, GAP]) {
        (upper, lower) = (&upper[..upper.len() - 1], &lower[..lower.len() - 1]);
    }

    let mut thermo = Thermo::default();

    if upper.len() >= 2 && (upper[0] == GAP || lower[0] == GAP) {
        let (t, b) = ([upper[0], upper[1]], [lower[0], lower[1]]);
        thermo += dangling_end(t, b).ok_or_else(|| unknown("dangling end", t, b))?;
        (upper, lower) = (&upper[1..], &lower[1..]);
    }
    let last = upper.len().saturating_sub(1);
    if upper.len() >= 2 && (upper[last] == GAP || lower[last] == GAP) {
        // Read the right end from the other side of the duplex
        let (t, b) = ([lower[last], lower[last - 1]], [upper[last], upper[last - 1]]);
        thermo += dangling_end(t, b).ok_or_else(|| unknown("dangling end", t, b))?;
        (upper, lower) = (&upper[..last], &lower[..last]);
    }

    // Initiation
    for terminal in [top[0], top[top.len() - 1]] {
        if is_weak(terminal) {
            thermo += INIT_TERMINAL_AT;
        } else if is_strong(terminal) {
            thermo += INIT_TERMINAL_GC;
        }
    }

    // Zip over the nearest-neighbour stacks
    for (t, b) in upper.windows(2).zip(lower.windows(2)) {
        let (t, b) = ([t[0], t[1]], [b[0], b[1]]);
        thermo += stack_energy(t, b).ok_or_else(|| unknown("nearest-neighbour stack", t, b))?;
    }

    Ok(thermo.gibbs(TEMPERATURE))
}

fn unknown(context: &'static str, top: [u8; 2], bottom: [u8; 2]) -> DesignError {
    DesignError::UnknownStack {
        context,
        key: format!(
            "{}/{}",
            String::from_utf8_lossy(&top),
            String::from_utf8_lossy(&bottom)
        ),
    }
}
