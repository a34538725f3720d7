use std::cmp::Ordering;
use std::thread::available_parallelism;

use eyre::Result;

/// Resolve a requested number of worker threads against the `cores` present on the machine.
///
/// Negative requests count back from the number of cores (`-1` = all of them, `-2` = all but
/// one), zero means a single thread and positive requests are capped at the number of cores.
pub fn resolve(requested: isize, cores: usize) -> usize {
    let cores = cores.max(1) as isize;
    let threads = match requested.cmp(&0) {
        Ordering::Less => cores + requested + 1,
        Ordering::Equal => 1,
        Ordering::Greater => requested.min(cores),
    };
    threads.max(1) as usize
}

pub fn available(requested: isize) -> Result<usize> {
    let cores = available_parallelism()?.get();
    Ok(resolve(requested, cores))
}
