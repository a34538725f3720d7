use derive_more::{Display, Error};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Display, Error)]
#[display("symbol {:?} at index {index} is not a nucleotide (A, C, G, T, U)", *symbol as char)]
pub struct InvalidSymbol {
    pub index: usize,
    pub symbol: u8,
}

/// Upper-case the sequence and back-transcribe `U` to `T`.
///
/// Anything outside of `{A, C, G, T, U}` (case-insensitive) is rejected, including whitespace
/// and IUPAC ambiguity codes.
pub fn normalize(seq: &[u8]) -> Result<Vec<u8>, InvalidSymbol> {
    seq.iter()
        .enumerate()
        .map(|(index, &symbol)| match symbol.to_ascii_uppercase() {
            b'A' => Ok(b'A'),
            b'C' => Ok(b'C'),
            b'G' => Ok(b'G'),
            b'T' | b'U' => Ok(b'T'),
            _ => Err(InvalidSymbol { index, symbol }),
        })
        .collect()
}

/// Watson-Crick complement of a normalized nucleotide. Unknown symbols are returned unchanged.
#[inline(always)]
pub fn complement(symbol: u8) -> u8 {
    match symbol {
        b'A' => b'T',
        b'T' => b'A',
        b'C' => b'G',
        b'G' => b'C',
        other => other,
    }
}

pub fn reverse_complement(seq: &[u8]) -> Vec<u8> {
    seq.iter().rev().map(|&x| complement(x)).collect()
}

/// A or T, i.e. a base forming two hydrogen bonds.
#[inline(always)]
pub fn is_weak(symbol: u8) -> bool {
    matches!(symbol, b'A' | b'T')
}

/// G or C, i.e. a base forming three hydrogen bonds.
#[inline(always)]
pub fn is_strong(symbol: u8) -> bool {
    matches!(symbol, b'G' | b'C')
}
