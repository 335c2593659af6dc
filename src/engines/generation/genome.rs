use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Genome representation for the quadratic search
///
/// A genome is the coefficient triple `(a, b, c)` of `y = ax² + bx + c`.
/// It carries no state beyond the three values and is treated as immutable:
/// the operators in [`super::operators`] always return new genomes.
///
/// # Bounds
///
/// Every coefficient stays inside `[lower_bound, upper_bound]` of the run:
/// - **Initialization** draws each field uniformly inside the bounds
/// - **Crossover** is a convex blend of two in-bound parents
/// - **Mutation** clamps after perturbing
///
/// # Example
///
/// ```
/// use quadga::engines::generation::Genome;
///
/// let genome = Genome::new(1.0, 0.0, 5.0);
/// assert_eq!(genome.value_at(1.0), 6.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Genome {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

/// Names one field of a [`Genome`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Coefficient {
    A,
    B,
    C,
}

impl Coefficient {
    pub const ALL: [Coefficient; 3] = [Coefficient::A, Coefficient::B, Coefficient::C];

    pub fn label(&self) -> &'static str {
        match self {
            Coefficient::A => "a",
            Coefficient::B => "b",
            Coefficient::C => "c",
        }
    }
}

impl Genome {
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    pub fn from_array(values: [f64; 3]) -> Self {
        Self::new(values[0], values[1], values[2])
    }

    pub fn to_array(&self) -> [f64; 3] {
        [self.a, self.b, self.c]
    }

    pub fn get(&self, coefficient: Coefficient) -> f64 {
        match coefficient {
            Coefficient::A => self.a,
            Coefficient::B => self.b,
            Coefficient::C => self.c,
        }
    }

    /// Draw every coefficient uniformly from `[lower, upper]`
    pub fn random<R: Rng>(lower: f64, upper: f64, rng: &mut R) -> Self {
        Self::new(
            rng.gen_range(lower..=upper),
            rng.gen_range(lower..=upper),
            rng.gen_range(lower..=upper),
        )
    }

    /// Evaluate the quadratic at `x`
    pub fn value_at(&self, x: f64) -> f64 {
        self.a * x * x + self.b * x + self.c
    }

    pub fn is_finite(&self) -> bool {
        self.a.is_finite() && self.b.is_finite() && self.c.is_finite()
    }

    pub fn within_bounds(&self, lower: f64, upper: f64) -> bool {
        self.to_array().iter().all(|v| (lower..=upper).contains(v))
    }
}

impl fmt::Display for Genome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(a = {:.6}, b = {:.6}, c = {:.6})", self.a, self.b, self.c)
    }
}
