//! Permutation decoding and route cost evaluation.
//!
//! # Algorithm
//!
//! A permutation is split into routes by one greedy first-fit pass: walk the
//! customers in order, keep a running load, and close the current route just
//! before the customer whose demand would push the load over capacity. The
//! order alone fixes the route boundaries; no alternative split is searched.

use rand::Rng;

use crate::error::CvrpError;
use crate::models::{Problem, Route, Solution};

/// Decodes a customer permutation into capacity-respecting routes.
///
/// Fails with [`CvrpError::DimensionMismatch`] if the permutation length is
/// not `dimension - 1`, with [`CvrpError::UnknownCustomer`] if it names the
/// depot or an id outside the problem, and with
/// [`CvrpError::DuplicateCustomer`] if an id repeats. Otherwise the result is
/// deterministic and its cost always equals [`evaluate`] on its routes.
///
/// # Examples
///
/// ```
/// use cvrp_bench::models::{Node, Problem};
/// use cvrp_bench::evaluation::decode;
///
/// let problem = Problem::new(
///     vec![
///         Node::depot(1, 0.0, 0.0),
///         Node::new(2, 1.0, 0.0, 6),
///         Node::new(3, 2.0, 0.0, 6),
///     ],
///     10,
///     1,
/// )
/// .unwrap();
///
/// let sol = decode(&problem, &[2, 3]).unwrap();
/// assert_eq!(sol.num_routes(), 2); // 6 + 6 > 10
/// assert_eq!(sol.cost(), 2.0 + 4.0);
/// ```
pub fn decode(problem: &Problem, permutation: &[usize]) -> Result<Solution, CvrpError> {
    if permutation.len() != problem.num_customers() {
        return Err(CvrpError::DimensionMismatch {
            expected: problem.num_customers(),
            actual: permutation.len(),
        });
    }
    let mut seen = vec![false; problem.dimension() + 1];
    for &id in permutation {
        if !problem.is_customer(id) {
            return Err(CvrpError::UnknownCustomer(id));
        }
        if std::mem::replace(&mut seen[id], true) {
            return Err(CvrpError::DuplicateCustomer(id));
        }
    }
    Ok(decode_unchecked(problem, permutation))
}

/// Decodes a permutation already known to have the right length.
pub(crate) fn decode_unchecked(problem: &Problem, permutation: &[usize]) -> Solution {
    let capacity = problem.capacity();
    let mut routes = Vec::new();
    let mut current = Route::new();

    for &customer in permutation {
        let demand = problem.demand(customer);
        if current.load() + demand > capacity && !current.is_empty() {
            routes.push(std::mem::take(&mut current));
        }
        current.push(customer, demand);
    }
    if !current.is_empty() {
        routes.push(current);
    }

    let solution = Solution::new(routes, 0.0);
    let cost = evaluate(problem, &solution);
    solution.with_cost(cost)
}

/// Total travel cost of a solution: for every route, depot to first
/// customer, each consecutive pair, and last customer back to the depot.
pub fn evaluate(problem: &Problem, solution: &Solution) -> f64 {
    solution
        .routes()
        .iter()
        .map(|r| route_distance(problem, r.customer_ids()))
        .sum()
}

/// Computes `depot → route[0] → ... → route[n-1] → depot`.
pub fn route_distance(problem: &Problem, route: &[usize]) -> f64 {
    let depot = problem.depot_id();
    let mut prev = depot;
    let mut dist = 0.0;
    for &id in route {
        dist += problem.distance(prev, id);
        prev = id;
    }
    if !route.is_empty() {
        dist += problem.distance(prev, depot);
    }
    dist
}

/// Draws a uniformly random customer permutation (Fisher-Yates).
pub fn random_permutation<R: Rng>(problem: &Problem, rng: &mut R) -> Vec<usize> {
    let mut perm = problem.customer_ids();
    for i in (1..perm.len()).rev() {
        let j = rng.random_range(0..=i);
        perm.swap(i, j);
    }
    perm
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Node;
    use crate::random::create_rng;
    use proptest::prelude::*;

    /// Depot 1 plus five customers with demands 3, 4, 5, 2, 6.
    fn five_customers() -> Problem {
        let demands = [0, 3, 4, 5, 2, 6];
        let nodes = demands
            .iter()
            .enumerate()
            .map(|(i, &d)| Node::new(i + 1, i as f64, 0.0, d))
            .collect();
        Problem::new(nodes, 10, 1).expect("valid")
    }

    fn line_problem(capacity: i32) -> Problem {
        let nodes = vec![
            Node::depot(1, 0.0, 0.0),
            Node::new(2, 1.0, 0.0, 10),
            Node::new(3, 2.0, 0.0, 10),
            Node::new(4, 3.0, 0.0, 10),
        ];
        Problem::new(nodes, capacity, 1).expect("valid")
    }

    #[test]
    fn test_decode_first_fit_split() {
        let p = five_customers();
        // loads: 3, 3+4=7, 7+5=12 > 10 -> split; 5, 5+2=7, 7+6=13 > 10 -> split; 6
        let sol = decode(&p, &[2, 3, 4, 5, 6]).expect("valid length");
        let routes: Vec<Vec<usize>> = sol
            .routes()
            .iter()
            .map(|r| r.customer_ids().to_vec())
            .collect();
        assert_eq!(routes, vec![vec![2, 3], vec![4, 5], vec![6]]);
        assert_eq!(sol.routes()[0].load(), 7);
        assert_eq!(sol.routes()[1].load(), 7);
        assert_eq!(sol.routes()[2].load(), 6);
    }

    #[test]
    fn test_decode_order_changes_split() {
        let p = five_customers();
        // 6+4=10 fits exactly, 10+3 > 10
        let sol = decode(&p, &[6, 3, 2, 5, 4]).expect("valid length");
        let routes: Vec<Vec<usize>> = sol
            .routes()
            .iter()
            .map(|r| r.customer_ids().to_vec())
            .collect();
        assert_eq!(routes, vec![vec![6, 3], vec![2, 5, 4]]);
    }

    #[test]
    fn test_decode_cost() {
        let p = five_customers();
        let sol = decode(&p, &[2, 3, 4, 5, 6]).expect("valid length");
        // Node i sits at x = i - 1.
        // [2,3]: 1 + 1 + 2 = 4; [4,5]: 3 + 1 + 4 = 8; [6]: 5 + 5 = 10
        assert_eq!(sol.cost(), 22.0);
        assert_eq!(sol.cost(), evaluate(&p, &sol));
    }

    #[test]
    fn test_decode_single_route() {
        let p = line_problem(30);
        let sol = decode(&p, &[2, 3, 4]).expect("valid length");
        assert_eq!(sol.num_routes(), 1);
        // 1→2→3→4→1 = 1 + 1 + 1 + 3
        assert_eq!(sol.cost(), 6.0);
    }

    #[test]
    fn test_decode_each_alone() {
        let p = line_problem(10);
        let sol = decode(&p, &[2, 3, 4]).expect("valid length");
        assert_eq!(sol.num_routes(), 3);
        assert_eq!(sol.cost(), 2.0 + 4.0 + 6.0);
    }

    #[test]
    fn test_decode_oversized_demand_gets_own_route() {
        let nodes = vec![
            Node::depot(1, 0.0, 0.0),
            Node::new(2, 1.0, 0.0, 15),
            Node::new(3, 2.0, 0.0, 3),
        ];
        let p = Problem::new(nodes, 10, 1).expect("valid");
        let sol = decode(&p, &[2, 3]).expect("valid length");
        assert_eq!(sol.num_routes(), 2);
        assert_eq!(sol.routes()[0].customer_ids(), &[2]);
    }

    #[test]
    fn test_decode_rejects_wrong_length() {
        let p = line_problem(30);
        let err = decode(&p, &[2, 3]).unwrap_err();
        assert!(matches!(
            err,
            CvrpError::DimensionMismatch {
                expected: 3,
                actual: 2
            }
        ));
        assert!(decode(&p, &[2, 3, 4, 2]).is_err());
    }

    #[test]
    fn test_decode_rejects_depot_and_unknown_ids() {
        let p = line_problem(30);
        assert!(matches!(
            decode(&p, &[1, 2, 3]),
            Err(CvrpError::UnknownCustomer(1))
        ));
        assert!(matches!(
            decode(&p, &[2, 3, 9]),
            Err(CvrpError::UnknownCustomer(9))
        ));
    }

    #[test]
    fn test_decode_rejects_repeated_customer() {
        let p = line_problem(30);
        assert!(matches!(
            decode(&p, &[2, 2, 3]),
            Err(CvrpError::DuplicateCustomer(2))
        ));
        assert!(matches!(
            decode(&p, &[4, 3, 4]),
            Err(CvrpError::DuplicateCustomer(4))
        ));
        assert!(decode(&p, &[4, 3, 2]).is_ok());
    }

    #[test]
    fn test_decode_depot_only() {
        let p = Problem::new(vec![Node::depot(1, 0.0, 0.0)], 10, 1).expect("valid");
        let sol = decode(&p, &[]).expect("valid length");
        assert_eq!(sol.num_routes(), 0);
        assert_eq!(sol.cost(), 0.0);
    }

    #[test]
    fn test_route_distance_empty() {
        let p = line_problem(30);
        assert_eq!(route_distance(&p, &[]), 0.0);
        assert_eq!(route_distance(&p, &[3]), 4.0);
    }

    #[test]
    fn test_evaluate_non_default_depot() {
        let nodes = vec![
            Node::new(1, 1.0, 0.0, 1),
            Node::depot(2, 0.0, 0.0),
            Node::new(3, 3.0, 0.0, 1),
        ];
        let p = Problem::new(nodes, 10, 2).expect("valid");
        let sol = decode(&p, &[3, 1]).expect("valid length");
        // 2→3→1→2 = 3 + 2 + 1
        assert_eq!(sol.cost(), 6.0);
    }

    #[test]
    fn test_random_permutation_is_permutation() {
        let p = five_customers();
        let mut rng = create_rng(42);
        for _ in 0..50 {
            let mut perm = random_permutation(&p, &mut rng);
            perm.sort();
            assert_eq!(perm, vec![2, 3, 4, 5, 6]);
        }
    }

    #[test]
    fn test_random_permutation_deterministic() {
        let p = five_customers();
        let a = random_permutation(&p, &mut create_rng(3));
        let b = random_permutation(&p, &mut create_rng(3));
        assert_eq!(a, b);
    }

    proptest! {
        #[test]
        fn prop_decode_conserves_customers_and_capacity(
            demands in proptest::collection::vec(0i32..=10, 1..25),
            seed in any::<u64>(),
        ) {
            let mut nodes = vec![Node::depot(1, 0.0, 0.0)];
            for (i, &d) in demands.iter().enumerate() {
                nodes.push(Node::new(i + 2, (i * 7 % 13) as f64, (i * 3 % 11) as f64, d));
            }
            let p = Problem::new(nodes, 10, 1).expect("valid");
            let perm = random_permutation(&p, &mut create_rng(seed));
            let sol = decode(&p, &perm).expect("valid length");

            prop_assert_eq!(sol.customer_sequence(), perm);
            for route in sol.routes() {
                prop_assert!(!route.is_empty());
                prop_assert!(route.load() <= p.capacity());
            }
            prop_assert_eq!(sol.cost(), evaluate(&p, &sol));
        }
    }
}
