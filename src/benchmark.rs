//! Benchmark harness.
//!
//! For every `*.vrp` instance in the input directory (in file-name order):
//! read the problem and its reference cost, run each algorithm the configured
//! number of times with one progress log per run, and aggregate the final
//! costs. After the last instance, `summary.csv` and `best_solutions.json`
//! are written to the log directory.
//!
//! ```text
//! log_dir/
//!   summary.csv
//!   best_solutions.json
//!   A-n32-k5/
//!     random_run_0.csv ... greedy_run_0.csv ... sa_run_0.csv ... ea_run_0.csv ...
//! ```

use std::fs::File;
use std::path::{Path, PathBuf};

use rand::Rng;
use serde::Serialize;
use tracing::{info, warn};

use crate::config::BenchConfig;
use crate::error::CvrpError;
use crate::io::{read_optimal_cost, read_problem};
use crate::models::{Problem, Solution};
use crate::progress::{CsvSink, LogLayout};
use crate::stats::RunStats;
use crate::{constructive, ga, random_search, sa};

const SUMMARY_HEADER: [&str; 22] = [
    "instance",
    "optimal",
    "random_runs",
    "random_best",
    "random_worst",
    "random_avg",
    "random_std",
    "greedy_runs",
    "greedy_best",
    "greedy_worst",
    "greedy_avg",
    "greedy_std",
    "ea_runs",
    "ea_best",
    "ea_worst",
    "ea_avg",
    "ea_std",
    "sa_runs",
    "sa_best",
    "sa_worst",
    "sa_avg",
    "sa_std",
];

/// Aggregated outcome of one algorithm on one instance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlgorithmReport {
    /// Number of runs performed.
    pub runs: usize,
    /// Statistics over the final cost of each run.
    pub stats: RunStats,
    /// Cheapest solution over all runs; `None` when no run was performed.
    pub best: Option<Solution>,
}

/// Outcome of all algorithms on one instance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InstanceReport {
    /// Instance file stem.
    pub instance: String,
    /// Reference cost from the `.sol` file, if one was found.
    pub optimal: Option<f64>,
    pub random: AlgorithmReport,
    pub greedy: AlgorithmReport,
    pub sa: AlgorithmReport,
    pub ea: AlgorithmReport,
}

/// Runs the whole benchmark and returns one report per instance read.
///
/// Instances that fail to parse are skipped with a warning. I/O errors on
/// the log directory abort the benchmark.
pub fn run<R: Rng>(config: &BenchConfig, rng: &mut R) -> Result<Vec<InstanceReport>, CvrpError> {
    if config.sa_runs > 0 {
        if let Err(reason) = config.sa.validate() {
            warn!(%reason, "annealing schedule is degenerate, runs return their initial state");
        }
    }
    if config.ea_runs > 0 {
        if let Err(reason) = config.ga.validate() {
            warn!(%reason, "evolutionary configuration has no work");
        }
    }

    std::fs::create_dir_all(&config.log_dir)?;

    let mut reports = Vec::new();
    for path in instance_files(&config.input_directory)? {
        let problem = match read_problem(&path) {
            Ok(problem) => problem,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "skipping unreadable instance");
                continue;
            }
        };
        let instance = file_stem(&path);
        let optimal = read_optimal_cost(config.optimal_directory.join(format!("{instance}.sol")));
        let instance_dir = config.log_dir.join(&instance);
        std::fs::create_dir_all(&instance_dir)?;

        let report = run_instance(&problem, instance, optimal, config, &instance_dir, rng)?;
        log_report(&report);
        reports.push(report);
    }

    write_summary(&config.log_dir.join("summary.csv"), &reports)?;
    let json = File::create(config.log_dir.join("best_solutions.json"))?;
    serde_json::to_writer_pretty(json, &reports)?;

    info!(instances = reports.len(), log_dir = %config.log_dir.display(), "benchmark finished");
    Ok(reports)
}

/// Runs every algorithm on one problem, writing per-run logs into `log_dir`.
///
/// Runs are performed in the order random search, greedy, annealing,
/// evolutionary, all drawing from the same `rng`.
pub fn run_instance<R: Rng>(
    problem: &Problem,
    instance: String,
    optimal: Option<f64>,
    config: &BenchConfig,
    log_dir: &Path,
    rng: &mut R,
) -> Result<InstanceReport, CvrpError> {
    let random = logged_runs(
        log_dir,
        "random",
        LogLayout::RandomSearch,
        config.random_runs,
        |sink| random_search::run(problem, config.random_iterations, rng, sink),
    )?;
    let greedy = logged_runs(
        log_dir,
        "greedy",
        LogLayout::Greedy,
        config.greedy_runs_for(problem.dimension()),
        |sink| constructive::run(problem, config.greedy_restarts, sink),
    )?;
    let sa = logged_runs(log_dir, "sa", LogLayout::Annealing, config.sa_runs, |sink| {
        sa::run(problem, &config.sa, rng, sink)
    })?;
    let ea = logged_runs(log_dir, "ea", LogLayout::Evolutionary, config.ea_runs, |sink| {
        ga::run(problem, &config.ga, rng, sink)
    })?;

    Ok(InstanceReport {
        instance,
        optimal,
        random,
        greedy,
        sa,
        ea,
    })
}

/// Performs `runs` runs, each logging to `<prefix>_run_<k>.csv`.
fn logged_runs<F>(
    dir: &Path,
    prefix: &str,
    layout: LogLayout,
    runs: usize,
    mut search: F,
) -> Result<AlgorithmReport, CvrpError>
where
    F: FnMut(&mut CsvSink<File>) -> Solution,
{
    let mut costs = Vec::with_capacity(runs);
    let mut best: Option<Solution> = None;

    for k in 0..runs {
        let file = File::create(dir.join(format!("{prefix}_run_{k}.csv")))?;
        let mut sink = CsvSink::new(file, layout)?;
        let solution = search(&mut sink);
        sink.finish()?;

        costs.push(solution.cost());
        let improves = best.as_ref().map_or(true, |b| solution.cost() < b.cost());
        if improves {
            best = Some(solution);
        }
    }

    Ok(AlgorithmReport {
        runs,
        stats: RunStats::from_costs(&costs),
        best,
    })
}

/// Regular `*.vrp` files in `dir`, sorted by file name.
fn instance_files(dir: &Path) -> Result<Vec<PathBuf>, CvrpError> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "vrp") {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn log_report(report: &InstanceReport) {
    match report.optimal {
        Some(optimal) => info!(instance = %report.instance, optimal, "instance done"),
        None => info!(instance = %report.instance, "instance done, no reference cost"),
    }
    for (algorithm, r) in [
        ("random", &report.random),
        ("greedy", &report.greedy),
        ("sa", &report.sa),
        ("ea", &report.ea),
    ] {
        info!(
            algorithm,
            runs = r.runs,
            best = r.stats.best,
            worst = r.stats.worst,
            avg = r.stats.mean,
            std = r.stats.std_dev,
            "algorithm summary"
        );
    }
}

fn write_summary(path: &Path, reports: &[InstanceReport]) -> Result<(), CvrpError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(SUMMARY_HEADER)?;
    for report in reports {
        let mut row = vec![
            report.instance.clone(),
            report.optimal.unwrap_or(-1.0).to_string(),
        ];
        for r in [&report.random, &report.greedy, &report.ea, &report.sa] {
            row.push(r.runs.to_string());
            row.push(r.stats.best.to_string());
            row.push(r.stats.worst.to_string());
            row.push(r.stats.mean.to_string());
            row.push(r.stats.std_dev.to_string());
        }
        writer.write_record(&row)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use crate::sa::SaConfig;

    const SMALL: &str = "\
NAME : small-n5
DIMENSION : 5
CAPACITY : 10
NODE_COORD_SECTION
1 0 0
2 3 4
3 -3 4
4 0 -5
5 6 0
DEMAND_SECTION
1 0
2 4
3 5
4 6
5 3
DEPOT_SECTION
1
-1
EOF
";

    struct Workspace {
        _dir: tempfile::TempDir,
        config: BenchConfig,
    }

    fn workspace() -> Workspace {
        let dir = tempfile::tempdir().expect("tempdir");
        let inputs = dir.path().join("inputs");
        let optimal = dir.path().join("opt");
        std::fs::create_dir_all(&inputs).expect("mkdir");
        std::fs::create_dir_all(&optimal).expect("mkdir");

        std::fs::write(inputs.join("b-n5.vrp"), SMALL).expect("write");
        std::fs::write(inputs.join("a-n5.vrp"), SMALL).expect("write");
        std::fs::write(inputs.join("broken.vrp"), "NAME : broken\nEOF\n").expect("write");
        std::fs::write(inputs.join("notes.txt"), SMALL).expect("write");
        std::fs::write(optimal.join("a-n5.sol"), "Route #1: 2 3\nCost 42\n").expect("write");

        let config = BenchConfig {
            input_directory: inputs,
            optimal_directory: optimal,
            log_dir: dir.path().join("logs"),
            random_runs: 3,
            greedy_runs: 0,
            sa_runs: 2,
            ea_runs: 2,
            random_iterations: 10,
            greedy_restarts: 4,
            sa: SaConfig::default()
                .with_initial_temperature(10.0)
                .with_min_temperature(1.0)
                .with_cooling_rate(0.5)
                .with_iterations_per_temperature(5),
            ga: ga::GaConfig::default()
                .with_population_size(6)
                .with_generations(4),
            seed: None,
            verbose: true,
        };
        Workspace { _dir: dir, config }
    }

    fn count_lines(path: &Path) -> usize {
        std::fs::read_to_string(path).expect("read").lines().count()
    }

    #[test]
    fn test_reports_in_file_name_order_skipping_unreadable() {
        let ws = workspace();
        let reports = run(&ws.config, &mut create_rng(1)).expect("benchmark");
        let names: Vec<&str> = reports.iter().map(|r| r.instance.as_str()).collect();
        assert_eq!(names, vec!["a-n5", "b-n5"]);
        assert_eq!(reports[0].optimal, Some(42.0));
        assert_eq!(reports[1].optimal, None);
    }

    #[test]
    fn test_run_counts_and_logs() {
        let ws = workspace();
        let reports = run(&ws.config, &mut create_rng(2)).expect("benchmark");
        let r = &reports[0];
        assert_eq!(r.random.runs, 3);
        assert_eq!(r.greedy.runs, 5); // dimension
        assert_eq!(r.sa.runs, 2);
        assert_eq!(r.ea.runs, 2);

        let dir = ws.config.log_dir.join("a-n5");
        for k in 0..3 {
            assert_eq!(count_lines(&dir.join(format!("random_run_{k}.csv"))), 1 + 10);
        }
        for k in 0..5 {
            assert_eq!(count_lines(&dir.join(format!("greedy_run_{k}.csv"))), 1 + 4);
        }
        // temperatures 10, 5, 2.5, 1.25: 4 levels of 5 steps plus the initial row
        assert_eq!(count_lines(&dir.join("sa_run_0.csv")), 1 + 1 + 20);
        assert_eq!(count_lines(&dir.join("ea_run_1.csv")), 1 + 4);
        assert!(!dir.join("ea_run_2.csv").exists());

        let header = std::fs::read_to_string(dir.join("ea_run_0.csv")).expect("read");
        assert!(header.starts_with("generation,best,avg,worst\n"));
    }

    #[test]
    fn test_stats_match_best_solutions() {
        let ws = workspace();
        let reports = run(&ws.config, &mut create_rng(3)).expect("benchmark");
        for r in &reports {
            for alg in [&r.random, &r.greedy, &r.sa, &r.ea] {
                let best = alg.best.as_ref().expect("runs performed");
                assert_eq!(best.cost(), alg.stats.best);
                assert_eq!(best.num_served(), 4);
                assert!(alg.stats.best <= alg.stats.mean && alg.stats.mean <= alg.stats.worst);
            }
        }
    }

    #[test]
    fn test_summary_csv() {
        let ws = workspace();
        let reports = run(&ws.config, &mut create_rng(4)).expect("benchmark");
        let text = std::fs::read_to_string(ws.config.log_dir.join("summary.csv")).expect("read");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], SUMMARY_HEADER.join(","));

        let first: Vec<&str> = lines[1].split(',').collect();
        assert_eq!(first.len(), SUMMARY_HEADER.len());
        assert_eq!(first[0], "a-n5");
        assert_eq!(first[1], "42");
        assert_eq!(first[2], "3");
        assert_eq!(first[7], "5");
        // ea columns come before sa columns
        assert_eq!(first[13], reports[0].ea.stats.best.to_string());
        assert_eq!(first[18], reports[0].sa.stats.best.to_string());

        let second: Vec<&str> = lines[2].split(',').collect();
        assert_eq!(second[1], "-1");
    }

    #[test]
    fn test_best_solutions_json() {
        let ws = workspace();
        run(&ws.config, &mut create_rng(5)).expect("benchmark");
        let text =
            std::fs::read_to_string(ws.config.log_dir.join("best_solutions.json")).expect("read");
        let value: serde_json::Value = serde_json::from_str(&text).expect("json");
        let instances = value.as_array().expect("array");
        assert_eq!(instances.len(), 2);
        assert_eq!(instances[0]["instance"], "a-n5");
        assert!(instances[0]["greedy"]["best"]["routes"].is_array());
        assert!(instances[1]["optimal"].is_null());
    }

    #[test]
    fn test_zero_runs_have_no_best() {
        let mut ws = workspace();
        ws.config.ea_runs = 0;
        ws.config.greedy_runs = 2;
        let reports = run(&ws.config, &mut create_rng(6)).expect("benchmark");
        assert_eq!(reports[0].ea.runs, 0);
        assert!(reports[0].ea.best.is_none());
        assert_eq!(reports[0].ea.stats, RunStats::from_costs(&[]));
        assert_eq!(reports[0].greedy.runs, 2);
    }

    #[test]
    fn test_same_seed_same_reports() {
        let a = workspace();
        let b = workspace();
        let ra = run(&a.config, &mut create_rng(77)).expect("benchmark");
        let rb = run(&b.config, &mut create_rng(77)).expect("benchmark");
        assert_eq!(ra, rb);
    }

    #[test]
    fn test_missing_input_directory_is_error() {
        let mut ws = workspace();
        ws.config.input_directory = ws.config.log_dir.join("nowhere");
        assert!(matches!(
            run(&ws.config, &mut create_rng(1)),
            Err(CvrpError::Io(_))
        ));
    }
}
