pub mod fitness;

pub use fitness::{curviness, FitnessEvaluator};
