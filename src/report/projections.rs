//! Plain-data views of a [`RunResult`] for charts, logs and dashboards.

use crate::engines::generation::{Coefficient, Genome};
use crate::types::{RunResult, SummaryRow};
use serde::{Deserialize, Serialize};

/// One coefficient of the final population, indexed by individual
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopulationScatter {
    pub coefficient: Coefficient,
    pub points: Vec<(usize, f64)>,
    /// Position and value of the highlighted best individual
    pub best: Option<(usize, f64)>,
}

/// A generation's best quadratic sampled across the search bounds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuadraticCurve {
    pub generation: usize,
    /// `(generation - 1) / generations`, for colour ramps
    pub position: f64,
    pub genome: Genome,
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
}

/// Best performer's value of one coefficient, generation by generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoefficientTrajectory {
    pub coefficient: Coefficient,
    pub generations: Vec<usize>,
    pub values: Vec<f64>,
}

/// `count` evenly spaced values from `start` to `end` inclusive
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            (0..count)
                .map(|i| if i == count - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

pub fn population_scatter(result: &RunResult) -> Vec<PopulationScatter> {
    let best_idx = result.best_index();

    Coefficient::ALL
        .iter()
        .map(|&coefficient| PopulationScatter {
            coefficient,
            points: result
                .final_population
                .iter()
                .enumerate()
                .map(|(i, g)| (i, g.get(coefficient)))
                .collect(),
            best: best_idx.map(|i| (i, result.last_best.genome.get(coefficient))),
        })
        .collect()
}

pub fn best_curves(result: &RunResult, resolution: usize) -> Vec<QuadraticCurve> {
    let xs = linspace(result.lower_bound, result.upper_bound, resolution);
    let total = result.history.len().max(1) as f64;

    result
        .history
        .iter()
        .enumerate()
        .map(|(i, best)| QuadraticCurve {
            generation: i + 1,
            position: i as f64 / total,
            genome: best.genome,
            ys: xs.iter().map(|&x| best.genome.value_at(x)).collect(),
            xs: xs.clone(),
        })
        .collect()
}

pub fn coefficient_trajectories(result: &RunResult) -> Vec<CoefficientTrajectory> {
    let generations: Vec<usize> = (1..=result.history.len()).collect();

    Coefficient::ALL
        .iter()
        .map(|&coefficient| CoefficientTrajectory {
            coefficient,
            generations: generations.clone(),
            values: result
                .history
                .iter()
                .map(|b| b.genome.get(coefficient))
                .collect(),
        })
        .collect()
}

/// Leading rows of the summary table
pub fn table_rows(result: &RunResult, limit: usize) -> &[SummaryRow] {
    &result.table[..limit.min(result.table.len())]
}
