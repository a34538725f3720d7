//! Efficiency scoring and post-filtering of siRNA candidates.
//!
//! A query is cut into overlapping windows ([`Windows`]), bundled with the parsed outputs of the
//! external aligner and structure predictor ([`Workload`]), and handed to a [`Designer`] that
//! estimates terminal free energies, scores every candidate and runs the post-filter chain.

pub use config::{FilterConfig, FilterConfigBuilder, ReportMode, RightEndType};
pub use designer::{thread_pool, Designer};
pub use error::DesignError;
pub use result::{CandidateRecord, Design, DesignSummary, SnpExist};
pub use snp::SnpTable;
pub use window::{Candidate, Windows};
pub use workload::Workload;

pub mod adapters;
mod config;
mod designer;
pub mod energy;
mod error;
pub mod postfilter;
pub mod result;
pub mod scoring;
mod snp;
pub mod window;
mod workload;
