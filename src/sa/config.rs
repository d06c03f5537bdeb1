//! SA configuration.

use std::fmt;
use std::str::FromStr;

/// How the annealing trajectory is started.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InitialState {
    /// A uniformly random permutation.
    #[default]
    Random,
    /// A nearest-neighbor permutation from a uniformly random start customer.
    Greedy,
}

impl FromStr for InitialState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(InitialState::Random),
            "greedy" => Ok(InitialState::Greedy),
            other => Err(format!("unknown initial state '{other}' (expected random or greedy)")),
        }
    }
}

impl fmt::Display for InitialState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            InitialState::Random => "random",
            InitialState::Greedy => "greedy",
        })
    }
}

/// Configuration for simulated annealing with geometric cooling.
///
/// # Examples
///
/// ```
/// use cvrp_bench::sa::{InitialState, SaConfig};
///
/// let config = SaConfig::default()
///     .with_initial_temperature(50.0)
///     .with_min_temperature(0.1)
///     .with_cooling_rate(0.9)
///     .with_iterations_per_temperature(20)
///     .with_initial_state(InitialState::Greedy);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SaConfig {
    /// Starting temperature.
    pub initial_temperature: f64,

    /// The run stops once the temperature is at or below this.
    pub min_temperature: f64,

    /// Geometric cooling factor `T_{k+1} = rate * T_k`, in (0, 1).
    pub cooling_rate: f64,

    /// Neighbor evaluations at each temperature level.
    pub iterations_per_temperature: usize,

    /// Starting permutation policy.
    pub initial_state: InitialState,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 100.0,
            min_temperature: 0.01,
            cooling_rate: 0.995,
            iterations_per_temperature: 200,
            initial_state: InitialState::Random,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_iterations_per_temperature(mut self, n: usize) -> Self {
        self.iterations_per_temperature = n;
        self
    }

    pub fn with_initial_state(mut self, state: InitialState) -> Self {
        self.initial_state = state;
        self
    }

    /// `true` if the schedule runs no transitions at all: the cooling rate
    /// is outside (0, 1), the initial temperature is not finite, the minimum
    /// is not positive, or the initial temperature does not exceed the
    /// minimum.
    ///
    /// A schedule that is not degenerate always terminates: a finite
    /// temperature cooled geometrically drops below any positive minimum.
    pub fn is_degenerate(&self) -> bool {
        self.check().is_err()
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        self.check()
    }

    fn check(&self) -> Result<(), String> {
        if !(0.0 < self.cooling_rate && self.cooling_rate < 1.0) {
            return Err(format!(
                "cooling_rate must be in (0, 1), got {}",
                self.cooling_rate
            ));
        }
        if !self.initial_temperature.is_finite() {
            return Err(format!(
                "initial_temperature must be finite, got {}",
                self.initial_temperature
            ));
        }
        if self.min_temperature.is_nan() || self.min_temperature <= 0.0 {
            return Err(format!(
                "min_temperature must be positive, got {}",
                self.min_temperature
            ));
        }
        if self.initial_temperature <= self.min_temperature {
            return Err("min_temperature must be less than initial_temperature".into());
        }
        Ok(())
    }
}
