//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.
//! Operator choices are closed enums, parsed once from their config names.

use std::fmt;
use std::str::FromStr;

/// Crossover operator used for the whole run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Crossover {
    /// Order crossover (OX), Davis (1985). Keeps relative order.
    #[default]
    Order,
    /// Partially mapped crossover (PMX), Goldberg & Lingle (1985). Keeps
    /// absolute positions.
    PartiallyMapped,
    /// Cycle crossover (CX), Oliver et al. (1987).
    Cycle,
}

impl FromStr for Crossover {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ox" => Ok(Crossover::Order),
            "pmx" => Ok(Crossover::PartiallyMapped),
            "cx" | "cycle" => Ok(Crossover::Cycle),
            other => Err(format!("unknown crossover '{other}' (expected ox, pmx or cx)")),
        }
    }
}

impl fmt::Display for Crossover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Crossover::Order => "ox",
            Crossover::PartiallyMapped => "pmx",
            Crossover::Cycle => "cx",
        })
    }
}

/// Mutation operator used for the whole run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mutation {
    /// Exchange two distinct positions.
    #[default]
    Swap,
    /// Reverse a random segment.
    Inversion,
}

impl FromStr for Mutation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "swap" => Ok(Mutation::Swap),
            "inversion" | "inv" => Ok(Mutation::Inversion),
            other => Err(format!("unknown mutation '{other}' (expected swap or inversion)")),
        }
    }
}

impl fmt::Display for Mutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mutation::Swap => "swap",
            Mutation::Inversion => "inversion",
        })
    }
}

/// Configuration for the evolutionary search.
///
/// # Defaults
///
/// ```
/// use cvrp_bench::ga::{Crossover, GaConfig};
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.generations, 100);
/// assert_eq!(config.crossover, Crossover::Order);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use cvrp_bench::ga::{Crossover, GaConfig, Mutation};
///
/// let config = GaConfig::default()
///     .with_population_size(40)
///     .with_tournament_size(3)
///     .with_crossover(Crossover::Cycle)
///     .with_mutation(Mutation::Inversion)
///     .with_two_opt_rate(0.2);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GaConfig {
    /// Number of individuals in the population.
    pub population_size: usize,

    /// Number of generations.
    pub generations: usize,

    /// Probability of producing a child by crossover (0.0–1.0). Otherwise
    /// the child is a copy of the first parent.
    pub crossover_rate: f64,

    /// Probability of mutating a child (0.0–1.0).
    pub mutation_rate: f64,

    /// Individuals drawn per tournament. Values below 1 act as 1.
    pub tournament_size: usize,

    /// Best individuals copied unchanged into the next generation.
    ///
    /// Clamped to the population size.
    pub elite_count: usize,

    /// Crossover operator.
    pub crossover: Crossover,

    /// Mutation operator.
    pub mutation: Mutation,

    /// Probability of one 2-opt step on a child (0.0–1.0). At 0 no random
    /// number is drawn for it.
    pub two_opt_rate: f64,

    /// Fraction of the initial population built by nearest-neighbor
    /// construction (0.0–1.0). The rest is random.
    pub greedy_init_fraction: f64,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            generations: 100,
            crossover_rate: 0.7,
            mutation_rate: 0.1,
            tournament_size: 5,
            elite_count: 1,
            crossover: Crossover::Order,
            mutation: Mutation::Swap,
            two_opt_rate: 0.0,
            greedy_init_fraction: 0.0,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the elite count.
    pub fn with_elite_count(mut self, n: usize) -> Self {
        self.elite_count = n;
        self
    }

    /// Sets the crossover operator.
    pub fn with_crossover(mut self, crossover: Crossover) -> Self {
        self.crossover = crossover;
        self
    }

    /// Sets the mutation operator.
    pub fn with_mutation(mut self, mutation: Mutation) -> Self {
        self.mutation = mutation;
        self
    }

    /// Sets the 2-opt probability.
    pub fn with_two_opt_rate(mut self, rate: f64) -> Self {
        self.two_opt_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the greedy-seeded fraction of the initial population.
    pub fn with_greedy_init_fraction(mut self, fraction: f64) -> Self {
        self.greedy_init_fraction = fraction.clamp(0.0, 1.0);
        self
    }

    /// Number of initial individuals built greedily:
    /// `round(fraction * population)`, at most the population size.
    pub fn greedy_seed_count(&self) -> usize {
        let count = (self.greedy_init_fraction * self.population_size as f64).round();
        if count <= 0.0 {
            0
        } else {
            (count as usize).min(self.population_size)
        }
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        let rates = [
            ("crossover_rate", self.crossover_rate),
            ("mutation_rate", self.mutation_rate),
            ("two_opt_rate", self.two_opt_rate),
            ("greedy_init_fraction", self.greedy_init_fraction),
        ];
        for (name, value) in rates {
            if !(0.0..=1.0).contains(&value) {
                return Err(format!("{name} must be in [0, 1], got {value}"));
            }
        }
        if self.population_size == 0 {
            return Err("population_size must be at least 1".into());
        }
        Ok(())
    }
}
