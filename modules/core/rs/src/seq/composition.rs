/// GC percentage of the sequence, 0 for an empty one.
///
/// The count is scaled before the division, so integral percentages (e.g. 8 of 20 -> 40.0) are
/// represented exactly and strict range checks behave at the boundaries.
pub fn gc_content(seq: &[u8]) -> f64 {
    if seq.is_empty() {
        return 0.0;
    }
    let gc = seq.iter().filter(|&&x| matches!(x, b'G' | b'C')).count();
    (gc * 100) as f64 / seq.len() as f64
}

/// Length of the longest run of `symbol` in the sequence.
pub fn longest_run(seq: &[u8], symbol: u8) -> usize {
    let (mut best, mut current) = (0, 0);
    for &x in seq {
        if x == symbol {
            current += 1;
            best = best.max(current);
        } else {
            current = 0;
        }
    }
    best
}

/// Whether any of `symbols` forms a run of at least `length` identical symbols.
pub fn has_run(seq: &[u8], symbols: &[u8], length: usize) -> bool {
    symbols.iter().any(|&s| longest_run(seq, s) >= length)
}
