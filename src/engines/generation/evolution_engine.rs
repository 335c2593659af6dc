use crate::config::{ConfigSection, EvolutionConfig};
use crate::engines::evaluation::FitnessEvaluator;
use crate::engines::generation::{
    genome::Genome,
    history::{best_of, RunHistory},
    operators::{crossover, mutate, random_population, select},
};
use crate::error::QuadgaError;
use crate::types::{BestPerformer, RunResult};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared flag checked between generations
#[derive(Debug, Clone, Default)]
pub struct CancellationFlag(Arc<AtomicBool>);

impl CancellationFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

pub trait ProgressCallback: Send {
    fn on_generation_start(&mut self, generation: usize);
    fn on_population_evaluated(&mut self, generation: usize, admissible: usize, total: usize);
    fn on_generation_complete(&mut self, generation: usize, best: &BestPerformer);
}

/// Progress callback that ignores every event
pub struct NoopProgress;

impl ProgressCallback for NoopProgress {
    fn on_generation_start(&mut self, _generation: usize) {}
    fn on_population_evaluated(&mut self, _generation: usize, _admissible: usize, _total: usize) {}
    fn on_generation_complete(&mut self, _generation: usize, _best: &BestPerformer) {}
}

pub struct EvolutionEngine {
    config: EvolutionConfig,
    evaluator: FitnessEvaluator,
    cancelled: CancellationFlag,
}

impl EvolutionEngine {
    /// Validates eagerly so a bad configuration never starts a run
    pub fn new(config: EvolutionConfig) -> Result<Self, QuadgaError> {
        config.validate()?;

        Ok(Self {
            config,
            evaluator: FitnessEvaluator::new(),
            cancelled: CancellationFlag::new(),
        })
    }

    pub fn config(&self) -> &EvolutionConfig {
        &self.config
    }

    /// Handle for cancelling a run from another thread
    pub fn cancellation_flag(&self) -> CancellationFlag {
        self.cancelled.clone()
    }

    /// Run the evolution process
    ///
    /// Every call starts from a fresh population and history. With a fixed
    /// seed two calls return identical results.
    pub fn run<C: ProgressCallback>(&self, mut callback: C) -> Result<RunResult, QuadgaError> {
        let config = &self.config;
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        log::info!(
            "Starting run: population {}, generations {}, bounds [{}, {}], mutation rate {}, tournament {}",
            config.population_size,
            config.generations,
            config.lower_bound,
            config.upper_bound,
            config.mutation_rate,
            config.tournament_size
        );

        let mut population = random_population(
            config.population_size,
            config.lower_bound,
            config.upper_bound,
            &mut rng,
        );
        let mut history = RunHistory::new(config.retain_population_history);

        for generation in 0..config.generations {
            if self.cancelled.is_cancelled() {
                log::warn!("Run cancelled before generation {}", generation + 1);
                return Err(QuadgaError::Cancelled {
                    completed_generations: generation,
                });
            }
            callback.on_generation_start(generation);

            let fitnesses = self
                .evaluator
                .evaluate_population(&population, config.parallel_evaluation);
            let admissible = fitnesses.iter().filter(|f| f.is_finite()).count();
            callback.on_population_evaluated(generation, admissible, population.len());

            let best = Self::best_performer(&population, &fitnesses)?;
            history.record(best, &population);

            log::debug!(
                "Generation {}: best {} fitness {:.6} ({}/{} admissible)",
                generation + 1,
                best.genome,
                best.fitness,
                admissible,
                population.len()
            );
            callback.on_generation_complete(generation, &best);

            population = self.next_generation(&population, &fitnesses, best.genome, &mut rng)?;
        }

        let final_fitnesses = self
            .evaluator
            .evaluate_population(&population, config.parallel_evaluation);
        let best_solution = Self::best_performer(&population, &final_fitnesses)?;

        let result = history
            .into_result(best_solution, config.lower_bound, config.upper_bound)
            .ok_or_else(|| {
                QuadgaError::InvalidConfiguration("Run produced no generations".to_string())
            })?;

        log::info!(
            "Run complete: best solution {} fitness {:.6}",
            result.best_solution.genome,
            result.best_solution.fitness
        );

        Ok(result)
    }

    fn best_performer(population: &[Genome], fitnesses: &[f64]) -> Result<BestPerformer, QuadgaError> {
        let (idx, fitness) = best_of(fitnesses).ok_or_else(|| {
            QuadgaError::InvalidConfiguration("Population is empty".to_string())
        })?;

        Ok(BestPerformer {
            genome: population[idx],
            fitness,
        })
    }

    /// Select, breed pairs, mutate, then put the elite back at index 0
    fn next_generation(
        &self,
        population: &[Genome],
        fitnesses: &[f64],
        elite: Genome,
        rng: &mut StdRng,
    ) -> Result<Vec<Genome>, QuadgaError> {
        let config = &self.config;
        let selected = select(population, fitnesses, config.tournament_size, rng)?;

        let mut next_generation = Vec::with_capacity(selected.len());
        for pair in selected.chunks_exact(2) {
            let (child1, child2) = crossover(&pair[0], &pair[1], rng);

            next_generation.push(mutate(
                &child1,
                config.mutation_rate,
                config.lower_bound,
                config.upper_bound,
                rng,
            ));
            next_generation.push(mutate(
                &child2,
                config.mutation_rate,
                config.lower_bound,
                config.upper_bound,
                rng,
            ));
        }

        // Elitism
        if let Some(first) = next_generation.first_mut() {
            *first = elite;
        }

        Ok(next_generation)
    }
}
