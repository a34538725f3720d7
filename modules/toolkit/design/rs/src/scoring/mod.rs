pub use scorer::EfficiencyScorer;
pub use verdict::Verdict;

mod scorer;
mod verdict;
