use crate::engines::generation::Genome;
use serde::{Deserialize, Serialize};

/// Fitness as JSON-safe data
///
/// Finite scores stay numbers; `-inf` (inadmissible) and any other
/// non-finite value are written as the strings `"-inf"`, `"inf"` or `"nan"`.
pub mod fitness_serde {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Text(String),
    }

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else if value.is_nan() {
            serializer.serialize_str("nan")
        } else if *value < 0.0 {
            serializer.serialize_str("-inf")
        } else {
            serializer.serialize_str("inf")
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Number(value) => Ok(value),
            Repr::Text(text) => match text.as_str() {
                "-inf" => Ok(f64::NEG_INFINITY),
                "inf" => Ok(f64::INFINITY),
                "nan" => Ok(f64::NAN),
                other => Err(D::Error::custom(format!("invalid fitness '{}'", other))),
            },
        }
    }
}

/// Best individual of one generation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BestPerformer {
    pub genome: Genome,
    #[serde(with = "fitness_serde")]
    pub fitness: f64,
}

/// One row of the per-generation summary table (generation is 1-based)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub generation: usize,
    pub a: f64,
    pub b: f64,
    pub c: f64,
    #[serde(with = "fitness_serde")]
    pub fitness: f64,
}

impl SummaryRow {
    pub fn new(generation: usize, best: &BestPerformer) -> Self {
        Self {
            generation,
            a: best.genome.a,
            b: best.genome.b,
            c: best.genome.c,
            fitness: best.fitness,
        }
    }
}

/// Complete outcome of one engine run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunResult {
    /// Best genome of the population the run ends with
    pub best_solution: BestPerformer,
    /// Last evaluated population
    pub final_population: Vec<Genome>,
    /// Best performer of the last generation
    pub last_best: BestPerformer,
    /// Strictly best record across the whole history
    pub best_ever: BestPerformer,
    pub history: Vec<BestPerformer>,
    pub table: Vec<SummaryRow>,
    /// Every evaluated population, only when full retention is enabled
    pub population_snapshots: Vec<Vec<Genome>>,
    pub lower_bound: f64,
    pub upper_bound: f64,
}

impl RunResult {
    /// Index of `last_best` inside `final_population`
    pub fn best_index(&self) -> Option<usize> {
        self.final_population
            .iter()
            .position(|g| *g == self.last_best.genome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn performer(fitness: f64) -> BestPerformer {
        BestPerformer {
            genome: Genome::new(-2.0, 1.0, 0.5),
            fitness,
        }
    }

    #[test]
    fn test_inadmissible_fitness_survives_json() {
        let json = serde_json::to_string(&performer(f64::NEG_INFINITY)).unwrap();
        assert!(json.contains("\"-inf\""), "{}", json);

        let back: BestPerformer = serde_json::from_str(&json).unwrap();
        assert_eq!(back.fitness, f64::NEG_INFINITY);
    }

    #[test]
    fn test_finite_fitness_stays_numeric() {
        let row = SummaryRow::new(3, &performer(-2.5));
        let value = serde_json::to_value(row).unwrap();
        assert_eq!(value["fitness"], serde_json::json!(-2.5));

        let back: SummaryRow = serde_json::from_value(value).unwrap();
        assert_eq!(back, row);
    }

    #[test]
    fn test_unknown_fitness_text_is_rejected() {
        let json = r#"{"genome":{"a":1.0,"b":0.0,"c":0.0},"fitness":"low"}"#;
        assert!(serde_json::from_str::<BestPerformer>(json).is_err());
    }
}
