use crate::engines::generation::genome::Genome;
use crate::types::{BestPerformer, RunResult, SummaryRow};

/// Per-run bookkeeping of best performers and population snapshots
pub struct RunHistory {
    records: Vec<BestPerformer>,
    table: Vec<SummaryRow>,
    best_ever: Option<BestPerformer>,
    snapshots: Vec<Vec<Genome>>,
    last_population: Vec<Genome>,
    retain_all: bool,
}

impl RunHistory {
    pub fn new(retain_all: bool) -> Self {
        Self {
            records: Vec::new(),
            table: Vec::new(),
            best_ever: None,
            snapshots: Vec::new(),
            last_population: Vec::new(),
            retain_all,
        }
    }

    /// Record one generation's best performer and its evaluated population
    pub fn record(&mut self, best: BestPerformer, population: &[Genome]) {
        self.table.push(SummaryRow::new(self.records.len() + 1, &best));
        self.records.push(best);

        let improved = match &self.best_ever {
            Some(current) => best.fitness > current.fitness,
            None => true,
        };
        if improved {
            self.best_ever = Some(best);
        }

        if self.retain_all {
            self.snapshots.push(population.to_vec());
        }
        self.last_population = population.to_vec();
    }

    pub fn records(&self) -> &[BestPerformer] {
        &self.records
    }

    pub fn best_ever(&self) -> Option<&BestPerformer> {
        self.best_ever.as_ref()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Close the run; `None` if no generation was recorded
    pub fn into_result(
        self,
        best_solution: BestPerformer,
        lower_bound: f64,
        upper_bound: f64,
    ) -> Option<RunResult> {
        let last_best = *self.records.last()?;
        let best_ever = self.best_ever?;

        Some(RunResult {
            best_solution,
            final_population: self.last_population,
            last_best,
            best_ever,
            history: self.records,
            table: self.table,
            population_snapshots: self.snapshots,
            lower_bound,
            upper_bound,
        })
    }
}

/// Index and fitness of the best genome; the first of equal maxima wins
pub fn best_of(fitnesses: &[f64]) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (idx, &fitness) in fitnesses.iter().enumerate() {
        match best {
            Some((_, current)) if fitness <= current => {}
            _ => best = Some((idx, fitness)),
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn performer(a: f64, fitness: f64) -> BestPerformer {
        BestPerformer {
            genome: Genome::new(a, 0.0, 0.0),
            fitness,
        }
    }

    #[test]
    fn test_best_of_prefers_first_maximum() {
        assert_eq!(best_of(&[-3.0, -1.0, -1.0, -2.0]), Some((1, -1.0)));
        assert_eq!(
            best_of(&[f64::NEG_INFINITY, f64::NEG_INFINITY]),
            Some((0, f64::NEG_INFINITY))
        );
        assert_eq!(best_of(&[]), None);
    }

    #[test]
    fn test_best_ever_is_tracked_separately() {
        let mut history = RunHistory::new(false);
        let population = vec![Genome::new(1.0, 0.0, 0.0)];

        history.record(performer(1.0, -2.0), &population);
        history.record(performer(2.0, -4.0), &population);
        history.record(performer(3.0, -2.0), &population);

        assert_eq!(history.len(), 3);
        assert!(!history.is_empty());
        assert_eq!(history.best_ever().map(|b| b.genome.a), Some(1.0));
        assert_eq!(history.records()[1].fitness, -4.0);
    }

    #[test]
    fn test_table_rows_are_one_based() {
        let mut history = RunHistory::new(false);
        history.record(performer(1.0, -2.0), &[]);
        history.record(performer(2.0, -4.0), &[]);

        let result = history
            .into_result(performer(2.0, -4.0), -1.0, 1.0)
            .unwrap();
        let generations: Vec<usize> = result.table.iter().map(|r| r.generation).collect();
        assert_eq!(generations, vec![1, 2]);
        assert_eq!(result.table[1].a, 2.0);
        assert_eq!(result.last_best.genome.a, 2.0);
    }

    #[test]
    fn test_snapshot_retention() {
        let first = vec![Genome::new(1.0, 1.0, 1.0)];
        let second = vec![Genome::new(2.0, 2.0, 2.0)];

        let mut bounded = RunHistory::new(false);
        bounded.record(performer(1.0, -1.0), &first);
        bounded.record(performer(2.0, -1.0), &second);
        let result = bounded.into_result(performer(2.0, -1.0), 0.0, 3.0).unwrap();
        assert!(result.population_snapshots.is_empty());
        assert_eq!(result.final_population, second);

        let mut full = RunHistory::new(true);
        full.record(performer(1.0, -1.0), &first);
        full.record(performer(2.0, -1.0), &second);
        let result = full.into_result(performer(2.0, -1.0), 0.0, 3.0).unwrap();
        assert_eq!(result.population_snapshots, vec![first, second]);
    }

    #[test]
    fn test_empty_history_has_no_result() {
        let history = RunHistory::new(false);
        assert!(history.is_empty());
        assert!(history.into_result(performer(1.0, -1.0), 0.0, 1.0).is_none());
    }
}
