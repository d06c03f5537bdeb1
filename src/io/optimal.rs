//! Reference-optimal cost reader.
//!
//! Solution files list routes followed by a `Cost <value>` line:
//!
//! ```text
//! Route #1: 21 31 19 17 13 7 26
//! Route #2: 12 1 16 30
//! Cost 784
//! ```

use std::path::Path;

/// Reads the optimal cost from a solution file.
///
/// Returns `None` if the file cannot be read or has no usable `Cost` line.
pub fn read_optimal_cost(path: impl AsRef<Path>) -> Option<f64> {
    let text = std::fs::read_to_string(path).ok()?;
    parse_optimal_cost(&text)
}

/// Takes the number after the label on the last line containing `Cost`.
///
/// # Examples
///
/// ```
/// use cvrp_bench::io::parse_optimal_cost;
///
/// assert_eq!(parse_optimal_cost("Route #1: 2 3\nCost 784\n"), Some(784.0));
/// assert_eq!(parse_optimal_cost("Route #1: 2 3\n"), None);
/// ```
pub fn parse_optimal_cost(text: &str) -> Option<f64> {
    text.lines()
        .filter(|line| line.contains("Cost"))
        .filter_map(|line| line.split_whitespace().nth(1)?.parse::<f64>().ok())
        .last()
}
