//! Summary statistics over costs.

use serde::{Deserialize, Serialize};

use crate::models::Solution;
use crate::progress::ProgressRecord;

/// Best, worst, mean and population standard deviation of final costs from
/// repeated runs of one algorithm.
///
/// # Examples
///
/// ```
/// use cvrp_bench::stats::RunStats;
///
/// let s = RunStats::from_costs(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
/// assert_eq!(s.best, 2.0);
/// assert_eq!(s.worst, 9.0);
/// assert_eq!(s.mean, 5.0);
/// assert_eq!(s.std_dev, 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunStats {
    /// Lowest cost.
    pub best: f64,
    /// Highest cost.
    pub worst: f64,
    /// Arithmetic mean.
    pub mean: f64,
    /// Population standard deviation.
    pub std_dev: f64,
}

impl RunStats {
    /// Computes statistics from scratch. All fields are zero for no costs.
    pub fn from_costs(costs: &[f64]) -> Self {
        if costs.is_empty() {
            return Self {
                best: 0.0,
                worst: 0.0,
                mean: 0.0,
                std_dev: 0.0,
            };
        }
        let n = costs.len() as f64;
        let best = costs.iter().copied().fold(f64::INFINITY, f64::min);
        let worst = costs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mean = costs.iter().sum::<f64>() / n;
        let variance = costs.iter().map(|c| (c - mean) * (c - mean)).sum::<f64>() / n;
        Self {
            best,
            worst,
            mean,
            std_dev: variance.sqrt(),
        }
    }
}

/// Running incumbent, worst and mean over a stream of sampled solutions.
///
/// Shared by the sampling searches (random and greedy), which report the
/// same columns per step.
pub(crate) struct SampleTracker {
    best: Solution,
    worst: f64,
    sum: f64,
    count: usize,
}

impl SampleTracker {
    pub(crate) fn new() -> Self {
        Self {
            best: Solution::unset(),
            worst: f64::NEG_INFINITY,
            sum: 0.0,
            count: 0,
        }
    }

    /// Folds in one sample and returns the progress record for it.
    pub(crate) fn observe(&mut self, index: usize, solution: Solution) -> ProgressRecord {
        let cost = solution.cost();
        self.sum += cost;
        self.count += 1;
        if cost > self.worst {
            self.worst = cost;
        }
        if cost < self.best.cost() {
            self.best = solution;
        }
        ProgressRecord {
            index,
            best: self.best.cost(),
            current: Some(cost),
            mean: self.sum / self.count as f64,
            worst: self.worst,
        }
    }

    pub(crate) fn into_best(self) -> Solution {
        self.best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_empty() {
        let s = RunStats::from_costs(&[]);
        assert_eq!(s.best, 0.0);
        assert_eq!(s.worst, 0.0);
        assert_eq!(s.mean, 0.0);
        assert_eq!(s.std_dev, 0.0);
    }

    #[test]
    fn test_stats_single() {
        let s = RunStats::from_costs(&[42.0]);
        assert_eq!(s.best, 42.0);
        assert_eq!(s.worst, 42.0);
        assert_eq!(s.mean, 42.0);
        assert_eq!(s.std_dev, 0.0);
    }

    #[test]
    fn test_stats_population_std() {
        let s = RunStats::from_costs(&[1.0, 3.0]);
        assert_eq!(s.mean, 2.0);
        // population, not sample: sqrt(((1-2)^2 + (3-2)^2) / 2) = 1
        assert!((s.std_dev - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_tracker_running_columns() {
        let mut t = SampleTracker::new();
        let r0 = t.observe(0, Solution::new(vec![], 10.0));
        assert_eq!((r0.best, r0.current, r0.mean, r0.worst), (10.0, Some(10.0), 10.0, 10.0));
        let r1 = t.observe(1, Solution::new(vec![], 6.0));
        assert_eq!((r1.best, r1.current, r1.mean, r1.worst), (6.0, Some(6.0), 8.0, 10.0));
        let r2 = t.observe(2, Solution::new(vec![], 14.0));
        assert_eq!((r2.best, r2.current, r2.mean, r2.worst), (6.0, Some(14.0), 10.0, 14.0));
        assert_eq!(t.into_best().cost(), 6.0);
    }

    #[test]
    fn test_tracker_keeps_first_on_tie() {
        let mut route = crate::models::Route::new();
        route.push(2, 1);
        let mut t = SampleTracker::new();
        t.observe(0, Solution::new(vec![route], 5.0));
        t.observe(1, Solution::new(vec![], 5.0));
        assert_eq!(t.into_best().num_routes(), 1);
    }

    #[test]
    fn test_tracker_unused_is_unset() {
        assert!(SampleTracker::new().into_best().is_unset());
    }
}
