//! TSPLIB CVRP instance reader.
//!
//! A lenient reader for the EUC_2D CVRP files used by the usual benchmark
//! sets (Augerat, Christofides, Uchoa):
//!
//! ```text
//! NAME : A-n32-k5
//! DIMENSION : 32
//! CAPACITY : 100
//! NODE_COORD_SECTION
//!  1 82 76
//!  ...
//! DEMAND_SECTION
//! 1 0
//!  ...
//! DEPOT_SECTION
//!  1
//!  -1
//! EOF
//! ```
//!
//! Header lines may be written `KEY : value` or `KEY: value`; unknown header
//! keys are ignored. Nodes without a coordinate or demand line get 0, and a
//! missing depot (or `-1`) means node 1. Distances are rounded Euclidean.

use std::collections::HashMap;
use std::path::Path;

use crate::error::CvrpError;
use crate::models::{Node, Problem};

const DEFAULT_DEPOT: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Header,
    Coords,
    Demands,
    Depot,
    Done,
}

/// Reads a CVRP instance from a file.
///
/// The problem name is taken from the `NAME` header, or from the file stem
/// if the header is absent.
pub fn read_problem(path: impl AsRef<Path>) -> Result<Problem, CvrpError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let problem = parse_problem(&text)?;
    if problem.name().is_empty() {
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        return Ok(problem.with_name(stem));
    }
    Ok(problem)
}

/// Parses a CVRP instance from TSPLIB text.
///
/// # Examples
///
/// ```
/// use cvrp_bench::io::parse_problem;
///
/// let text = "\
/// NAME : tiny
/// DIMENSION: 3
/// CAPACITY : 10
/// NODE_COORD_SECTION
/// 1 0 0
/// 2 3 4
/// 3 6 8
/// DEMAND_SECTION
/// 1 0
/// 2 4
/// 3 5
/// DEPOT_SECTION
/// 1
/// -1
/// EOF
/// ";
/// let problem = parse_problem(text).unwrap();
/// assert_eq!(problem.name(), "tiny");
/// assert_eq!(problem.dimension(), 3);
/// assert_eq!(problem.capacity(), 10);
/// assert_eq!(problem.distance(1, 3), 10.0);
/// ```
pub fn parse_problem(text: &str) -> Result<Problem, CvrpError> {
    let mut name = String::new();
    let mut dimension: Option<usize> = None;
    let mut capacity: Option<i32> = None;
    let mut coords: HashMap<usize, (f64, f64)> = HashMap::new();
    let mut demands: HashMap<usize, i32> = HashMap::new();
    let mut depot: Option<usize> = None;
    let mut section = Section::Header;

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if line.starts_with("NODE_COORD_SECTION") {
            section = Section::Coords;
            continue;
        }
        if line.starts_with("DEMAND_SECTION") {
            section = Section::Demands;
            continue;
        }
        if line.starts_with("DEPOT_SECTION") {
            section = Section::Depot;
            continue;
        }
        if line == "EOF" {
            break;
        }

        match section {
            Section::Header => {
                let (key, value) = split_header(line);
                match key {
                    "NAME" => name = value.to_string(),
                    "DIMENSION" => dimension = Some(parse_field(value, line_no, "DIMENSION")?),
                    "CAPACITY" => capacity = Some(parse_field(value, line_no, "CAPACITY")?),
                    _ => {}
                }
            }
            Section::Coords => {
                let mut fields = line.split_whitespace();
                let id: usize = parse_field(next_field(&mut fields, line_no, "id")?, line_no, "id")?;
                let x: f64 = parse_field(next_field(&mut fields, line_no, "x")?, line_no, "x")?;
                let y: f64 = parse_field(next_field(&mut fields, line_no, "y")?, line_no, "y")?;
                coords.insert(id, (x, y));
            }
            Section::Demands => {
                let mut fields = line.split_whitespace();
                let id: usize = parse_field(next_field(&mut fields, line_no, "id")?, line_no, "id")?;
                let demand: i32 =
                    parse_field(next_field(&mut fields, line_no, "demand")?, line_no, "demand")?;
                demands.insert(id, demand);
            }
            Section::Depot => {
                let id: i64 = parse_field(line, line_no, "depot id")?;
                depot = usize::try_from(id).ok().filter(|&id| id > 0);
                section = Section::Done;
            }
            Section::Done => {}
        }
    }

    let dimension = match dimension {
        Some(d) if d > 0 => d,
        _ => {
            return Err(CvrpError::InvalidProblem(
                "missing or zero DIMENSION".into(),
            ))
        }
    };
    let capacity = capacity
        .filter(|&c| c > 0)
        .ok_or_else(|| CvrpError::InvalidProblem("missing or non-positive CAPACITY".into()))?;

    let nodes: Vec<Node> = (1..=dimension)
        .map(|id| {
            let (x, y) = coords.get(&id).copied().unwrap_or((0.0, 0.0));
            let demand = demands.get(&id).copied().unwrap_or(0);
            Node::new(id, x, y, demand)
        })
        .collect();

    Ok(Problem::new(nodes, capacity, depot.unwrap_or(DEFAULT_DEPOT))?.with_name(name))
}

/// Splits `KEY : value` / `KEY: value` / `KEY value` into key and value.
fn split_header(line: &str) -> (&str, &str) {
    match line.split_once(':') {
        Some((key, value)) => (key.trim(), value.trim()),
        None => match line.split_once(char::is_whitespace) {
            Some((key, value)) => (key.trim(), value.trim()),
            None => (line, ""),
        },
    }
}

fn next_field<'a>(
    fields: &mut impl Iterator<Item = &'a str>,
    line: usize,
    what: &str,
) -> Result<&'a str, CvrpError> {
    fields.next().ok_or_else(|| CvrpError::Parse {
        line,
        message: format!("missing {what}"),
    })
}

fn parse_field<T: std::str::FromStr>(value: &str, line: usize, what: &str) -> Result<T, CvrpError> {
    value.trim().parse().map_err(|_| CvrpError::Parse {
        line,
        message: format!("cannot parse {what} from '{value}'"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SMALL: &str = "\
NAME : small-n4
COMMENT : (hand made)
TYPE : CVRP
DIMENSION : 4
EDGE_WEIGHT_TYPE : EUC_2D
CAPACITY : 10
NODE_COORD_SECTION
 1 0 0
 2 3 4
 3 -3 4
 4 0 2.4
DEMAND_SECTION
1 0
2 4
3 5
4 6
DEPOT_SECTION
 1
 -1
EOF
";

    #[test]
    fn test_parse_small() {
        let p = parse_problem(SMALL).expect("valid");
        assert_eq!(p.name(), "small-n4");
        assert_eq!(p.dimension(), 4);
        assert_eq!(p.capacity(), 10);
        assert_eq!(p.depot_id(), 1);
        assert_eq!(p.demand(3), 5);
        assert_eq!(p.distance(1, 2), 5.0);
        assert_eq!(p.distance(2, 3), 6.0);
        assert_eq!(p.distance(1, 4), 2.0); // 2.4 rounds down
    }

    #[test]
    fn test_header_without_space_before_colon() {
        let text = SMALL.replace("DIMENSION : 4", "DIMENSION: 4").replace("CAPACITY : 10", "CAPACITY:10");
        let p = parse_problem(&text).expect("valid");
        assert_eq!(p.dimension(), 4);
        assert_eq!(p.capacity(), 10);
    }

    #[test]
    fn test_depot_defaults() {
        let minus_one = SMALL.replace(" 1\n -1\nEOF", " -1\nEOF");
        assert_eq!(parse_problem(&minus_one).expect("valid").depot_id(), 1);

        let missing = SMALL.replace("DEPOT_SECTION\n 1\n -1\n", "");
        assert_eq!(parse_problem(&missing).expect("valid").depot_id(), 1);

        let other = SMALL.replace("DEPOT_SECTION\n 1\n", "DEPOT_SECTION\n 3\n");
        assert_eq!(parse_problem(&other).expect("valid").depot_id(), 3);
    }

    #[test]
    fn test_missing_rows_default_to_zero() {
        let text = SMALL.replace(" 4 0 2.4\n", "").replace("4 6\n", "");
        let p = parse_problem(&text).expect("valid");
        assert_eq!(p.demand(4), 0);
        assert_eq!(p.node(4).x(), 0.0);
        assert_eq!(p.distance(1, 4), 0.0);
    }

    #[test]
    fn test_missing_dimension_is_error() {
        let text = SMALL.replace("DIMENSION : 4\n", "");
        assert!(matches!(parse_problem(&text), Err(CvrpError::InvalidProblem(_))));
        let text = SMALL.replace("DIMENSION : 4", "DIMENSION : 0");
        assert!(matches!(parse_problem(&text), Err(CvrpError::InvalidProblem(_))));
    }

    #[test]
    fn test_bad_capacity_is_error() {
        let text = SMALL.replace("CAPACITY : 10", "CAPACITY : 0");
        assert!(matches!(parse_problem(&text), Err(CvrpError::InvalidProblem(_))));
        let text = SMALL.replace("CAPACITY : 10", "CAPACITY : ten");
        assert!(matches!(parse_problem(&text), Err(CvrpError::Parse { line: 6, .. })));
    }

    #[test]
    fn test_malformed_coordinate_reports_line() {
        let text = SMALL.replace(" 3 -3 4\n", " 3 -3\n");
        match parse_problem(&text) {
            Err(CvrpError::Parse { line, message }) => {
                assert_eq!(line, 10);
                assert!(message.contains('y'));
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_read_problem_uses_file_stem_without_name() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("P-n4-k2.vrp");
        let mut file = std::fs::File::create(&path).expect("create");
        file.write_all(SMALL.replace("NAME : small-n4\n", "").as_bytes())
            .expect("write");
        drop(file);

        let p = read_problem(&path).expect("valid");
        assert_eq!(p.name(), "P-n4-k2");
        assert_eq!(p.num_customers(), 3);
    }

    #[test]
    fn test_read_problem_missing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(matches!(
            read_problem(dir.path().join("nope.vrp")),
            Err(CvrpError::Io(_))
        ));
    }
}
