//! Genetic-algorithm search for the flattest upward parabola `y = ax² + bx + c`.
//!
//! [`engines::generation::EvolutionEngine`] runs the search and returns a
//! [`types::RunResult`]; [`report`] turns that into plain data for whatever
//! presents it.

pub mod config;
pub mod engines;
pub mod error;
pub mod report;
pub mod runner;
pub mod types;

pub use crate::config::{AppConfig, ConfigManager, EvolutionConfig, ReportConfig};
pub use crate::engines::evaluation::FitnessEvaluator;
pub use crate::engines::generation::{EvolutionEngine, Genome};
pub use crate::error::{QuadgaError, Result};
pub use crate::report::RunReport;
pub use crate::runner::EvolutionRunner;
pub use crate::types::{BestPerformer, RunResult, SummaryRow};
