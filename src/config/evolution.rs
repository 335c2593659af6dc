use super::traits::{ConfigSection, ConfigManifest, FieldManifest};
use crate::error::QuadgaError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionConfig {
    pub population_size: usize,
    pub lower_bound: f64,
    pub upper_bound: f64,
    pub generations: usize,
    pub mutation_rate: f64,
    pub tournament_size: usize,

    pub seed: Option<u64>,
    pub parallel_evaluation: bool,
    pub retain_population_history: bool,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            lower_bound: -50.0,
            upper_bound: 50.0,
            generations: 20,
            mutation_rate: 1.0,
            tournament_size: 3,
            seed: None,
            parallel_evaluation: false,
            retain_population_history: false,
        }
    }
}

fn invalid(message: impl Into<String>) -> QuadgaError {
    QuadgaError::InvalidConfiguration(message.into())
}

impl ConfigSection for EvolutionConfig {
    fn section_name() -> &'static str {
        "evolution"
    }

    fn validate(&self) -> Result<(), QuadgaError> {
        if self.population_size == 0 {
            return Err(invalid("Population size must be positive"));
        }
        if self.population_size % 2 != 0 {
            return Err(invalid(format!(
                "Population size must be even, got {}",
                self.population_size
            )));
        }
        if self.generations == 0 {
            return Err(invalid("Number of generations must be positive"));
        }
        if !self.lower_bound.is_finite() || !self.upper_bound.is_finite() {
            return Err(invalid("Bounds must be finite"));
        }
        if self.lower_bound >= self.upper_bound {
            return Err(invalid(format!(
                "Lower bound {} must be below upper bound {}",
                self.lower_bound, self.upper_bound
            )));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(invalid("Mutation rate must be between 0 and 1"));
        }
        if self.tournament_size == 0 {
            return Err(invalid("Tournament size must be at least 1"));
        }
        if self.tournament_size > self.population_size {
            return Err(invalid(format!(
                "Tournament size {} exceeds population size {}",
                self.tournament_size, self.population_size
            )));
        }
        Ok(())
    }

    fn to_manifest(&self) -> ConfigManifest {
        let defaults = Self::default();
        ConfigManifest {
            section: "Evolution".to_string(),
            fields: vec![
                FieldManifest::new(
                    "population_size",
                    "integer",
                    serde_json::json!(defaults.population_size),
                    Some(2.0),
                    Some(100000.0),
                    "Number of genomes per generation (even)",
                ),
                FieldManifest::new(
                    "lower_bound",
                    "float",
                    serde_json::json!(defaults.lower_bound),
                    None,
                    None,
                    "Smallest value any coefficient may take",
                ),
                FieldManifest::new(
                    "upper_bound",
                    "float",
                    serde_json::json!(defaults.upper_bound),
                    None,
                    None,
                    "Largest value any coefficient may take",
                ),
                FieldManifest::new(
                    "generations",
                    "integer",
                    serde_json::json!(defaults.generations),
                    Some(1.0),
                    None,
                    "Number of generations to evolve",
                ),
                FieldManifest::new(
                    "mutation_rate",
                    "float",
                    serde_json::json!(defaults.mutation_rate),
                    Some(0.0),
                    Some(1.0),
                    "Per-coefficient probability of a ±1 perturbation",
                ),
                FieldManifest::new(
                    "tournament_size",
                    "integer",
                    serde_json::json!(defaults.tournament_size),
                    Some(1.0),
                    None,
                    "Candidates drawn per selection tournament",
                ),
                FieldManifest::new(
                    "seed",
                    "integer",
                    serde_json::Value::Null,
                    Some(0.0),
                    None,
                    "Random seed; empty draws one from the OS",
                ),
                FieldManifest::new(
                    "parallel_evaluation",
                    "bool",
                    serde_json::json!(defaults.parallel_evaluation),
                    None,
                    None,
                    "Score each generation on the thread pool",
                ),
                FieldManifest::new(
                    "retain_population_history",
                    "bool",
                    serde_json::json!(defaults.retain_population_history),
                    None,
                    None,
                    "Keep every generation's population instead of only the last",
                ),
            ],
        }
    }
}
