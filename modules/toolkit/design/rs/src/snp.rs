use std::collections::BTreeSet;
use std::io::BufRead;

use ahash::HashMap;
use eyre::{eyre, Result, WrapErr};

/// Known variant positions per reference target.
///
/// Loaded once per reference and shared read-only between all queries (wrap it in an `Arc`).
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct SnpTable {
    positions: HashMap<String, BTreeSet<u64>>,
}

impl SnpTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, target: impl Into<String>, position: u64) -> &mut Self {
        self.positions.entry(target.into()).or_default().insert(position);
        self
    }

    /// Read whitespace-separated `target position` lines. Blank lines and `#` comments are skipped.
    pub fn from_reader(reader: impl BufRead) -> Result<Self> {
        let mut table = Self::new();
        for (ind, line) in reader.lines().enumerate() {
            let line = line.wrap_err_with(|| format!("Failed to read SNP table line {}", ind + 1))?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut fields = line.split_whitespace();
            let (target, position) = match (fields.next(), fields.next(), fields.next()) {
                (Some(target), Some(position), None) => (target, position),
                _ => {
                    return Err(eyre!(
                        "SNP table line {} must hold exactly a target and a position: {line:?}",
                        ind + 1
                    ))
                }
            };
            let position = position.parse::<u64>().wrap_err_with(|| {
                format!("SNP table line {}: invalid position {position:?}", ind + 1)
            })?;
            table.insert(target, position);
        }
        Ok(table)
    }

    pub fn targets(&self) -> usize {
        self.positions.len()
    }

    pub fn contains_target(&self, target: &str) -> bool {
        self.positions.contains_key(target)
    }

    /// Whether the target carries a variant inside the closed interval `[start, end]`.
    pub fn overlaps(&self, target: &str, start: u64, end: u64) -> bool {
        if start > end {
            return false;
        }
        self.positions
            .get(target)
            .is_some_and(|x| x.range(start..=end).next().is_some())
    }
}

impl<T: Into<String>> FromIterator<(T, u64)> for SnpTable {
    fn from_iter<I: IntoIterator<Item = (T, u64)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (target, position) in iter {
            table.insert(target, position);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlaps_closed_interval() {
        let table: SnpTable = [("geneX", 10), ("geneX", 30), ("geneY", 1)]
            .into_iter()
            .collect();
        assert!(table.overlaps("geneX", 5, 25));
        assert!(table.overlaps("geneX", 10, 10));
        assert!(table.overlaps("geneX", 0, 10));
        assert!(!table.overlaps("geneX", 11, 29));
        assert!(!table.overlaps("geneX", 40, 60));
        assert!(!table.overlaps("geneZ", 0, 100));
        assert!(!table.overlaps("geneX", 25, 5));
        assert_eq!(table.targets(), 2);
    }

    #[test]
    fn test_from_reader() {
        let text = "# target\tposition\ngeneX\t10\n\ngeneX 30\ngeneY\t7\n";
        let table = SnpTable::from_reader(text.as_bytes()).unwrap();
        assert_eq!(table.targets(), 2);
        assert!(table.overlaps("geneX", 30, 30));
        assert!(table.contains_target("geneY"));
    }

    #[test]
    fn test_from_reader_reports_line() {
        let err = SnpTable::from_reader("geneX\t10\ngeneX\tten\n".as_bytes()).unwrap_err();
        assert!(format!("{err}").contains("line 2"), "{err}");

        let err = SnpTable::from_reader("geneX\t10\t12\n".as_bytes()).unwrap_err();
        assert!(format!("{err}").contains("line 1"), "{err}");
    }
}
