//! Benchmark configuration.
//!
//! [`BenchConfig`] is read from a plain `key=value` file:
//!
//! ```text
//! # directories
//! input_directory = inputs
//! log_dir = logs
//!
//! sa_cooling_rate = 0.99
//! ea_crossover_type = pmx
//! ```
//!
//! Blank lines and lines starting with `#` are skipped, keys and values are
//! trimmed, and unknown keys are ignored. Every key has a default.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::CvrpError;
use crate::ga::GaConfig;
use crate::sa::SaConfig;

/// Everything the benchmark harness needs for one invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchConfig {
    /// Directory scanned for `*.vrp` instances.
    pub input_directory: PathBuf,
    /// Directory holding `<instance>.sol` reference solutions.
    pub optimal_directory: PathBuf,
    /// Root directory for per-run logs and the summary table.
    pub log_dir: PathBuf,

    /// Random-search runs per instance.
    pub random_runs: usize,
    /// Greedy runs per instance; 0 means one run per node (the dimension).
    pub greedy_runs: usize,
    /// Annealing runs per instance.
    pub sa_runs: usize,
    /// Evolutionary runs per instance.
    pub ea_runs: usize,

    /// Samples per random-search run.
    pub random_iterations: usize,
    /// Restarts per greedy run.
    pub greedy_restarts: usize,

    /// Annealing parameters.
    pub sa: SaConfig,
    /// Evolutionary parameters.
    pub ga: GaConfig,

    /// Seed for the shared random stream; `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Log per-instance statistics.
    pub verbose: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            input_directory: PathBuf::from("inputs"),
            optimal_directory: PathBuf::from("optimal-solutions"),
            log_dir: PathBuf::from("logs"),
            random_runs: 10_000,
            greedy_runs: 0,
            sa_runs: 10,
            ea_runs: 10,
            random_iterations: 1000,
            greedy_restarts: 32,
            sa: SaConfig::default(),
            ga: GaConfig::default(),
            seed: None,
            verbose: true,
        }
    }
}

impl BenchConfig {
    /// Loads a configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CvrpError> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Parses `key=value` text, starting from the defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// use cvrp_bench::config::BenchConfig;
    /// use cvrp_bench::ga::Crossover;
    ///
    /// let config = BenchConfig::parse("ea_crossover_type = cx\nsa_runs=3\n").unwrap();
    /// assert_eq!(config.ga.crossover, Crossover::Cycle);
    /// assert_eq!(config.sa_runs, 3);
    /// assert_eq!(config.random_runs, 10_000);
    /// ```
    pub fn parse(text: &str) -> Result<Self, CvrpError> {
        let kv = KeyValues::parse(text);
        let d = Self::default();

        let sa = SaConfig::default()
            .with_initial_temperature(kv.finite_or("sa_initial_temp", d.sa.initial_temperature)?)
            .with_min_temperature(kv.positive_or("sa_min_temp", d.sa.min_temperature)?)
            .with_cooling_rate(kv.get_or("sa_cooling_rate", d.sa.cooling_rate)?)
            .with_iterations_per_temperature(
                kv.get_or("sa_iterations_per_temp", d.sa.iterations_per_temperature)?,
            )
            .with_initial_state(kv.get_or("sa_initial_state", d.sa.initial_state)?);

        let ga = GaConfig::default()
            .with_population_size(kv.get_or("ea_population", d.ga.population_size)?)
            .with_generations(kv.get_or("ea_generations", d.ga.generations)?)
            .with_crossover_rate(kv.rate_or("ea_crossover_rate", d.ga.crossover_rate)?)
            .with_mutation_rate(kv.rate_or("ea_mutation_rate", d.ga.mutation_rate)?)
            .with_tournament_size(kv.get_or("ea_tournament", d.ga.tournament_size)?)
            .with_elite_count(kv.get_or("ea_elites", d.ga.elite_count)?)
            .with_crossover(kv.get_or("ea_crossover_type", d.ga.crossover)?)
            .with_mutation(kv.get_or("ea_mutation_type", d.ga.mutation)?)
            .with_two_opt_rate(kv.rate_or("ea_two_opt_rate", d.ga.two_opt_rate)?)
            .with_greedy_init_fraction(
                kv.rate_or("ea_greedy_init_fraction", d.ga.greedy_init_fraction)?,
            );

        Ok(Self {
            input_directory: kv.get_or("input_directory", d.input_directory)?,
            optimal_directory: kv.get_or("optimal_directory", d.optimal_directory)?,
            log_dir: kv.get_or("log_dir", d.log_dir)?,
            random_runs: kv.get_or("random_runs", d.random_runs)?,
            greedy_runs: kv.get_or("greedy_runs", d.greedy_runs)?,
            sa_runs: kv.get_or("sa_runs", d.sa_runs)?,
            ea_runs: kv.get_or("ea_runs", d.ea_runs)?,
            random_iterations: kv.get_or("random_iterations", d.random_iterations)?,
            greedy_restarts: kv.get_or("greedy_restarts", d.greedy_restarts)?,
            sa,
            ga,
            seed: kv.get("seed")?,
            verbose: kv.bool_or("verbose", d.verbose)?,
        })
    }

    /// Greedy runs for an instance of `dimension` nodes.
    pub fn greedy_runs_for(&self, dimension: usize) -> usize {
        if self.greedy_runs > 0 {
            self.greedy_runs
        } else {
            dimension
        }
    }
}

/// Raw `key=value` pairs; later duplicates override earlier ones.
struct KeyValues {
    values: HashMap<String, String>,
}

impl KeyValues {
    fn parse(text: &str) -> Self {
        let values = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter_map(|line| line.split_once('='))
            .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
            .collect();
        Self { values }
    }

    fn get<T>(&self, key: &str) -> Result<Option<T>, CvrpError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        match self.values.get(key) {
            None => Ok(None),
            Some(raw) => raw
                .parse()
                .map(Some)
                .map_err(|e| CvrpError::config(key, format!("invalid value '{raw}': {e}"))),
        }
    }

    fn get_or<T>(&self, key: &str, default: T) -> Result<T, CvrpError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        Ok(self.get(key)?.unwrap_or(default))
    }

    /// A probability; rejected outside [0, 1].
    fn rate_or(&self, key: &str, default: f64) -> Result<f64, CvrpError> {
        let value: f64 = self.get_or(key, default)?;
        if (0.0..=1.0).contains(&value) {
            Ok(value)
        } else {
            Err(CvrpError::config(key, format!("{value} is not in [0, 1]")))
        }
    }

    fn finite_or(&self, key: &str, default: f64) -> Result<f64, CvrpError> {
        let value: f64 = self.get_or(key, default)?;
        if value.is_finite() {
            Ok(value)
        } else {
            Err(CvrpError::config(key, format!("{value} is not finite")))
        }
    }

    /// A finite value above zero.
    fn positive_or(&self, key: &str, default: f64) -> Result<f64, CvrpError> {
        let value = self.finite_or(key, default)?;
        if value > 0.0 {
            Ok(value)
        } else {
            Err(CvrpError::config(key, format!("{value} must be positive")))
        }
    }

    fn bool_or(&self, key: &str, default: bool) -> Result<bool, CvrpError> {
        match self.values.get(key) {
            None => Ok(default),
            Some(raw) => match raw.to_ascii_lowercase().as_str() {
                "1" | "true" => Ok(true),
                "0" | "false" => Ok(false),
                _ => Err(CvrpError::config(
                    key,
                    format!("invalid value '{raw}': expected 1, 0, true or false"),
                )),
            },
        }
    }
}
