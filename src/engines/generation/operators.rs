use crate::engines::generation::genome::Genome;
use crate::error::{QuadgaError, Result};
use rand::seq::index;
use rand::Rng;

/// Tournament selection: pick best of K distinct random candidates
///
/// Ties go to the candidate drawn first.
pub fn tournament_selection<R: Rng>(
    population: &[Genome],
    fitnesses: &[f64],
    tournament_size: usize,
    rng: &mut R,
) -> Result<Genome> {
    validate_tournament(population, fitnesses, tournament_size)?;
    Ok(population[tournament_winner(fitnesses, tournament_size, rng)])
}

/// Run one tournament per slot, producing a population of the same size
pub fn select<R: Rng>(
    population: &[Genome],
    fitnesses: &[f64],
    tournament_size: usize,
    rng: &mut R,
) -> Result<Vec<Genome>> {
    validate_tournament(population, fitnesses, tournament_size)?;

    Ok((0..population.len())
        .map(|_| population[tournament_winner(fitnesses, tournament_size, rng)])
        .collect())
}

fn validate_tournament(
    population: &[Genome],
    fitnesses: &[f64],
    tournament_size: usize,
) -> Result<()> {
    if population.len() != fitnesses.len() {
        return Err(QuadgaError::InvalidConfiguration(format!(
            "{} genomes but {} fitness values",
            population.len(),
            fitnesses.len()
        )));
    }
    if tournament_size == 0 {
        return Err(QuadgaError::InvalidConfiguration(
            "Tournament size must be at least 1".to_string(),
        ));
    }
    if tournament_size > population.len() {
        return Err(QuadgaError::InvalidConfiguration(format!(
            "Tournament size {} exceeds population size {}",
            tournament_size,
            population.len()
        )));
    }
    Ok(())
}

fn tournament_winner<R: Rng>(fitnesses: &[f64], tournament_size: usize, rng: &mut R) -> usize {
    let mut draws = index::sample(rng, fitnesses.len(), tournament_size).into_iter();

    // tournament_size >= 1 is checked by the caller
    let mut best_idx = draws.next().unwrap_or(0);
    for idx in draws {
        if fitnesses[idx] > fitnesses[best_idx] {
            best_idx = idx;
        }
    }

    best_idx
}

/// Whole-genome blend crossover
///
/// A single `alpha` weights every coefficient, so children are convex
/// combinations of the parents.
pub fn crossover<R: Rng>(parent1: &Genome, parent2: &Genome, rng: &mut R) -> (Genome, Genome) {
    let alpha: f64 = rng.gen();
    blend(parent1, parent2, alpha)
}

fn blend(parent1: &Genome, parent2: &Genome, alpha: f64) -> (Genome, Genome) {
    let p1 = parent1.to_array();
    let p2 = parent2.to_array();

    let mut child1 = [0.0; 3];
    let mut child2 = [0.0; 3];
    for i in 0..3 {
        // Rounding can land one ulp outside the parents' span
        let (lo, hi) = (p1[i].min(p2[i]), p1[i].max(p2[i]));
        child1[i] = (alpha * p1[i] + (1.0 - alpha) * p2[i]).clamp(lo, hi);
        child2[i] = (alpha * p2[i] + (1.0 - alpha) * p1[i]).clamp(lo, hi);
    }

    (Genome::from_array(child1), Genome::from_array(child2))
}

/// Mutation: nudge each field by up to ±1 with probability `mutation_rate`,
/// then clamp into the bounds
pub fn mutate<R: Rng>(
    genome: &Genome,
    mutation_rate: f64,
    lower_bound: f64,
    upper_bound: f64,
    rng: &mut R,
) -> Genome {
    let mut values = genome.to_array();

    for value in values.iter_mut() {
        if rng.gen::<f64>() < mutation_rate {
            *value += rng.gen_range(-1.0..=1.0);
            *value = value.clamp(lower_bound, upper_bound);
        }
    }

    Genome::from_array(values)
}

/// Generate random population
pub fn random_population<R: Rng>(
    size: usize,
    lower_bound: f64,
    upper_bound: f64,
    rng: &mut R,
) -> Vec<Genome> {
    (0..size)
        .map(|_| Genome::random(lower_bound, upper_bound, rng))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample_population() -> (Vec<Genome>, Vec<f64>) {
        let population = vec![
            Genome::new(1.0, 0.0, 0.0),
            Genome::new(2.0, 0.0, 0.0),
            Genome::new(3.0, 0.0, 0.0),
            Genome::new(4.0, 0.0, 0.0),
        ];
        let fitnesses = vec![-1.0, -2.0, -3.0, f64::NEG_INFINITY];
        (population, fitnesses)
    }

    #[test]
    fn test_full_tournament_always_picks_best() {
        let (population, fitnesses) = sample_population();
        let mut rng = StdRng::seed_from_u64(1);

        let selected = select(&population, &fitnesses, 4, &mut rng).unwrap();
        assert_eq!(selected.len(), population.len());
        assert!(selected.iter().all(|g| *g == population[0]));
    }

    #[test]
    fn test_single_tournament_is_uniform_sampling() {
        let (population, fitnesses) = sample_population();
        let mut rng = StdRng::seed_from_u64(3);

        let mut seen = [false; 4];
        for _ in 0..200 {
            let winner = tournament_selection(&population, &fitnesses, 1, &mut rng).unwrap();
            let idx = population.iter().position(|g| *g == winner).unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_pair_tournament_never_picks_worst() {
        // Distinct draws: the worst can only win against itself, which cannot happen
        let (population, fitnesses) = sample_population();
        let mut rng = StdRng::seed_from_u64(11);

        let selected = select(&population, &fitnesses, 2, &mut rng).unwrap();
        assert!(!selected.contains(&population[3]));
    }

    #[test]
    fn test_tournament_size_validation() {
        let (population, fitnesses) = sample_population();
        let mut rng = StdRng::seed_from_u64(0);

        assert!(matches!(
            select(&population, &fitnesses, 5, &mut rng),
            Err(QuadgaError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            select(&population, &fitnesses, 0, &mut rng),
            Err(QuadgaError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            select(&population, &fitnesses[..2], 2, &mut rng),
            Err(QuadgaError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_selection_is_deterministic_for_seed() {
        let (population, fitnesses) = sample_population();
        let first = select(&population, &fitnesses, 2, &mut StdRng::seed_from_u64(5)).unwrap();
        let second = select(&population, &fitnesses, 2, &mut StdRng::seed_from_u64(5)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_blend_uses_one_alpha() {
        let p1 = Genome::new(0.0, 10.0, -4.0);
        let p2 = Genome::new(4.0, 0.0, 4.0);

        let (c1, c2) = blend(&p1, &p2, 0.25);
        assert_eq!(c1, Genome::new(3.0, 2.5, 2.0));
        assert_eq!(c2, Genome::new(1.0, 7.5, -2.0));

        let (c1, c2) = blend(&p1, &p2, 1.0);
        assert_eq!((c1, c2), (p1, p2));
    }

    #[test]
    fn test_zero_mutation_rate_is_identity() {
        let mut rng = StdRng::seed_from_u64(9);
        let genome = Genome::new(1.5, -2.5, 3.5);
        for _ in 0..100 {
            assert_eq!(mutate(&genome, 0.0, -10.0, 10.0, &mut rng), genome);
        }
    }

    #[test]
    fn test_full_mutation_step_is_unit_bounded() {
        let mut rng = StdRng::seed_from_u64(13);
        let genome = Genome::new(0.0, 0.0, 0.0);
        for _ in 0..500 {
            let mutated = mutate(&genome, 1.0, -50.0, 50.0, &mut rng);
            assert!(mutated.within_bounds(-1.0, 1.0));
        }
    }

    #[test]
    fn test_mutation_clamps_at_edges() {
        let mut rng = StdRng::seed_from_u64(17);
        let genome = Genome::new(2.0, -2.0, 2.0);
        for _ in 0..500 {
            let mutated = mutate(&genome, 1.0, -2.0, 2.0, &mut rng);
            assert!(mutated.within_bounds(-2.0, 2.0));
        }
    }

    fn in_bounds_genome(lower: f64, upper: f64) -> impl Strategy<Value = Genome> {
        (lower..=upper, lower..=upper, lower..=upper).prop_map(|(a, b, c)| Genome::new(a, b, c))
    }

    proptest! {
        #[test]
        fn crossover_preserves_bounds(
            p1 in in_bounds_genome(-10.0, 10.0),
            p2 in in_bounds_genome(-10.0, 10.0),
            seed in any::<u64>(),
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let (c1, c2) = crossover(&p1, &p2, &mut rng);
            prop_assert!(c1.within_bounds(-10.0, 10.0));
            prop_assert!(c2.within_bounds(-10.0, 10.0));
        }

        #[test]
        fn mutation_preserves_bounds(
            genome in in_bounds_genome(-3.0, 3.0),
            rate in 0.0f64..=1.0,
            seed in any::<u64>(),
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let mutated = mutate(&genome, rate, -3.0, 3.0, &mut rng);
            prop_assert!(mutated.within_bounds(-3.0, 3.0));
        }
    }
}
