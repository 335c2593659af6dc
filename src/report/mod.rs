pub mod projections;
pub mod table;

pub use projections::{
    best_curves, coefficient_trajectories, linspace, population_scatter, table_rows,
    CoefficientTrajectory, PopulationScatter, QuadraticCurve,
};
pub use table::render_table;

use crate::config::ReportConfig;
use crate::types::{RunResult, SummaryRow};
use serde::{Deserialize, Serialize};

/// Every projection a presentation layer needs, in one value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    pub scatter: Vec<PopulationScatter>,
    pub curves: Vec<QuadraticCurve>,
    pub trajectories: Vec<CoefficientTrajectory>,
    pub table: Vec<SummaryRow>,
}

impl RunReport {
    pub fn build(result: &RunResult, config: &ReportConfig) -> Self {
        Self {
            scatter: population_scatter(result),
            curves: best_curves(result, config.curve_resolution),
            trajectories: coefficient_trajectories(result),
            table: table_rows(result, config.table_rows).to_vec(),
        }
    }
}
