use crate::engines::generation::Genome;
use crate::error::{QuadgaError, Result};

/// Sum of the rise from the vertex to the parabola's values at x = -1 and x = 1
///
/// Returns `DegenerateGenome` for `a == 0`, where no vertex exists.
/// Callers must reject `a < 0` themselves; the formula is only meaningful
/// for upward parabolas.
pub fn curviness(genome: &Genome) -> Result<f64> {
    if genome.a == 0.0 {
        return Err(QuadgaError::DegenerateGenome { genome: *genome });
    }

    let vertex_x = -genome.b / (2.0 * genome.a);
    let vertex_y = genome.value_at(vertex_x);
    let y_left = genome.value_at(-1.0);
    let y_right = genome.value_at(1.0);

    Ok((y_left - vertex_y).abs() + (y_right - vertex_y).abs())
}

/// Scores genomes by negative curviness, so flatter parabolas score higher
#[derive(Debug, Clone, Copy, Default)]
pub struct FitnessEvaluator;

impl FitnessEvaluator {
    pub fn new() -> Self {
        Self
    }

    /// Checked evaluation
    ///
    /// Downward parabolas and genomes whose curviness is not finite score
    /// `-inf`; `a == 0` is reported as `DegenerateGenome`.
    pub fn try_evaluate(&self, genome: &Genome) -> Result<f64> {
        if !genome.is_finite() || genome.a < 0.0 {
            return Ok(f64::NEG_INFINITY);
        }

        let value = curviness(genome)?;
        if value.is_finite() {
            Ok(-value)
        } else {
            Ok(f64::NEG_INFINITY)
        }
    }

    /// Evaluation used by the engine: never fails, never returns NaN
    pub fn evaluate(&self, genome: &Genome) -> f64 {
        match self.try_evaluate(genome) {
            Ok(fitness) => fitness,
            Err(e) => {
                log::trace!("{}, scoring as inadmissible", e);
                f64::NEG_INFINITY
            }
        }
    }

    /// Score a whole population in order, optionally on the rayon pool
    pub fn evaluate_population(&self, population: &[Genome], parallel: bool) -> Vec<f64> {
        if parallel {
            use rayon::prelude::*;
            population.par_iter().map(|g| self.evaluate(g)).collect()
        } else {
            population.iter().map(|g| self.evaluate(g)).collect()
        }
    }
}
