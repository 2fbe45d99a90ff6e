//! Runs several algorithms on one instance and reports the outcome.

use std::fmt;
use std::time::{Duration, Instant};

use tracing::{info, warn};

use super::config::CompareConfig;
use crate::algorithm::Algorithm;
use crate::error::Result;
use crate::model::{total_value, total_weight, validate_instance, Item, KnapsackSolver, Solution};

/// Selected items printed per run before the list is cut short.
const MAX_PRINTED: usize = 100;

/// What happened to one algorithm.
#[derive(Debug, Clone)]
pub enum RunOutcome {
    /// The instance had more items than the algorithm's limit.
    Skipped {
        /// The limit that was exceeded.
        limit: usize,
    },
    /// The algorithm ran to completion.
    Completed {
        /// Its solution.
        solution: Solution,
        /// Wall-clock time of the solve call.
        elapsed: Duration,
    },
}

/// One row of a comparison.
#[derive(Debug, Clone)]
pub struct AlgorithmRun {
    /// The algorithm.
    pub algorithm: Algorithm,
    /// Its outcome.
    pub outcome: RunOutcome,
}

impl AlgorithmRun {
    /// The solution, if the algorithm ran.
    pub fn solution(&self) -> Option<&Solution> {
        match &self.outcome {
            RunOutcome::Completed { solution, .. } => Some(solution),
            RunOutcome::Skipped { .. } => None,
        }
    }
}

/// Result of a comparison run.
#[derive(Debug, Clone)]
pub struct ComparisonReport {
    /// Number of items in the instance.
    pub item_count: usize,
    /// Sum of all item values.
    pub total_value: i64,
    /// Sum of all item weights.
    pub total_weight: i64,
    /// The capacity every algorithm solved against.
    pub capacity: i64,
    /// One entry per configured algorithm, in order.
    pub runs: Vec<AlgorithmRun>,
}

impl ComparisonReport {
    /// Solutions of the algorithms that ran.
    pub fn completed(&self) -> impl Iterator<Item = (Algorithm, &Solution)> {
        self.runs
            .iter()
            .filter_map(|run| run.solution().map(|s| (run.algorithm, s)))
    }

    /// Highest value among the completed runs.
    pub fn best_value(&self) -> Option<i64> {
        self.completed().map(|(_, s)| s.value).max()
    }

    /// Returns true if every completed run found the same value.
    pub fn values_agree(&self) -> bool {
        let mut values = self.completed().map(|(_, s)| s.value);
        match values.next() {
            Some(first) => values.all(|v| v == first),
            None => true,
        }
    }

    /// The entry for `algorithm`, if it was configured.
    pub fn run_for(&self, algorithm: Algorithm) -> Option<&AlgorithmRun> {
        self.runs.iter().find(|run| run.algorithm == algorithm)
    }
}

impl fmt::Display for ComparisonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "*** Parameters ***")?;
        writeln!(f, "# items: {}", self.item_count)?;
        writeln!(f, "Total value: {}", self.total_value)?;
        writeln!(f, "Total weight: {}", self.total_weight)?;
        writeln!(f, "Allowed weight: {}", self.capacity)?;

        for run in &self.runs {
            writeln!(f)?;
            match &run.outcome {
                RunOutcome::Skipped { limit } => {
                    writeln!(
                        f,
                        "Too many items for {} (limit {})",
                        run.algorithm, limit
                    )?;
                }
                RunOutcome::Completed { solution, elapsed } => {
                    writeln!(f, "*** {} ***", run.algorithm)?;
                    writeln!(f, "Elapsed: {:.6}", elapsed.as_secs_f64())?;
                    write_selected(f, solution)?;
                    writeln!(
                        f,
                        "Value: {}, Weight: {}, Steps: {}",
                        solution.value,
                        solution.total_weight(),
                        solution.steps
                    )?;
                }
            }
        }
        Ok(())
    }
}

fn write_selected(f: &mut fmt::Formatter<'_>, solution: &Solution) -> fmt::Result {
    let selected: Vec<(usize, &Item)> = solution
        .items
        .iter()
        .enumerate()
        .filter(|(_, item)| item.is_selected)
        .collect();
    for (i, item) in selected.iter().take(MAX_PRINTED) {
        write!(f, "{}({}, {}) ", i, item.value, item.weight)?;
    }
    if selected.len() > MAX_PRINTED {
        write!(f, "...")?;
    }
    writeln!(f)
}

/// Runs the configured algorithms one after another.
pub struct CompareRunner;

impl CompareRunner {
    /// Solves `items` with every configured algorithm.
    ///
    /// Each algorithm works on its own copy of the items. Algorithms whose
    /// item limit is exceeded are recorded as skipped rather than run.
    ///
    /// # Errors
    ///
    /// Fails before running anything if the configuration or the instance
    /// is invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_knapsack::compare::{CompareConfig, CompareRunner};
    /// use u_knapsack::model::items_from_pairs;
    ///
    /// let items = items_from_pairs(&[(9, 5), (10, 4), (7, 5), (5, 6), (4, 5)]);
    /// let report = CompareRunner::run(&items, 14, &CompareConfig::default()).unwrap();
    /// assert!(report.values_agree());
    /// assert_eq!(report.best_value(), Some(26));
    /// ```
    pub fn run(items: &[Item], capacity: i64, config: &CompareConfig) -> Result<ComparisonReport> {
        config.validate()?;
        validate_instance(items, capacity)?;

        let mut runs = Vec::with_capacity(config.algorithms.len());
        for &algorithm in &config.algorithms {
            if let Some(limit) = config.item_limit(algorithm) {
                if items.len() > limit {
                    info!(
                        event = "run_skipped",
                        algorithm = %algorithm,
                        item_count = items.len(),
                        limit,
                    );
                    runs.push(AlgorithmRun {
                        algorithm,
                        outcome: RunOutcome::Skipped { limit },
                    });
                    continue;
                }
            }

            let start = Instant::now();
            let solution = algorithm.solve(items, capacity)?;
            let elapsed = start.elapsed();
            info!(
                event = "run_completed",
                algorithm = %algorithm,
                value = solution.value,
                steps = solution.steps,
                elapsed_ms = elapsed.as_millis() as u64,
            );
            runs.push(AlgorithmRun {
                algorithm,
                outcome: RunOutcome::Completed { solution, elapsed },
            });
        }

        let report = ComparisonReport {
            item_count: items.len(),
            total_value: total_value(items, false),
            total_weight: total_weight(items, false),
            capacity,
            runs,
        };
        if !report.values_agree() {
            warn!(event = "values_disagree", "algorithms returned different values");
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocking::{BlockingConfig, BlockingRunner};
    use crate::bnb::BnbRunner;
    use crate::dp::{DpConfig, DpRunner};
    use crate::exhaustive::ExhaustiveRunner;
    use crate::generator::{GeneratorConfig, ItemGenerator};
    use crate::model::items_from_pairs;
    use proptest::prelude::*;

    fn scenario() -> Vec<Item> {
        items_from_pairs(&[(9, 5), (10, 4), (7, 5), (5, 6), (4, 5)])
    }

    #[test]
    fn test_reference_scenario_report() {
        let report = CompareRunner::run(&scenario(), 14, &CompareConfig::default()).unwrap();

        assert_eq!(report.item_count, 5);
        assert_eq!(report.total_value, 35);
        assert_eq!(report.total_weight, 25);
        assert_eq!(report.runs.len(), 5);
        assert!(report.values_agree());
        assert_eq!(report.best_value(), Some(26));
        for (algorithm, solution) in report.completed() {
            assert!(solution.is_feasible(14), "{algorithm}");
        }
    }

    #[test]
    fn test_limits_skip_algorithms() {
        let config = CompareConfig::default().with_item_limit(Algorithm::Exhaustive, Some(4));
        let report = CompareRunner::run(&scenario(), 14, &config).unwrap();

        let exhaustive = report.run_for(Algorithm::Exhaustive).unwrap();
        assert!(matches!(exhaustive.outcome, RunOutcome::Skipped { limit: 4 }));
        assert!(exhaustive.solution().is_none());
        assert_eq!(report.completed().count(), 4);
    }

    #[test]
    fn test_display_format() {
        let config = CompareConfig::default()
            .with_algorithms(vec![Algorithm::Exhaustive, Algorithm::DynamicProgramming])
            .with_item_limit(Algorithm::Exhaustive, Some(2));
        let text = CompareRunner::run(&scenario(), 14, &config)
            .unwrap()
            .to_string();

        assert!(text.starts_with("*** Parameters ***\n# items: 5\n"));
        assert!(text.contains("Allowed weight: 14"));
        assert!(text.contains("Too many items for Exhaustive Search (limit 2)"));
        assert!(text.contains("*** Dynamic Programming ***"));
        assert!(text.contains("0(9, 5) 1(10, 4) 2(7, 5) \n"));
        assert!(text.contains("Value: 26, Weight: 14, Steps: 1"));
    }

    #[test]
    fn test_invalid_input_runs_nothing() {
        assert!(CompareRunner::run(&[], 14, &CompareConfig::default()).is_err());
        assert!(CompareRunner::run(&scenario(), -1, &CompareConfig::default()).is_err());
    }

    #[test]
    fn test_generated_instances_agree() {
        for seed in 0..5 {
            let config = GeneratorConfig::default().with_num_items(16).with_seed(seed);
            let instance = ItemGenerator::generate(&config).unwrap();
            let report =
                CompareRunner::run(&instance.items, instance.capacity, &CompareConfig::default())
                    .unwrap();

            assert_eq!(report.completed().count(), 5);
            assert!(report.values_agree(), "seed {seed}:\n{report}");
        }
    }

    fn instance() -> impl Strategy<Value = (Vec<Item>, i64)> {
        (
            prop::collection::vec((1i64..=10, 1i64..=10), 1..=10),
            0i64..=100,
        )
            .prop_map(|(pairs, percent)| {
                let items = items_from_pairs(&pairs);
                let capacity = total_weight(&items, false) * percent / 100;
                (items, capacity)
            })
    }

    proptest! {
        #[test]
        fn prop_all_algorithms_agree((items, capacity) in instance()) {
            let exhaustive = ExhaustiveRunner::run(&items, capacity).unwrap();
            for algorithm in Algorithm::ALL {
                let solution = algorithm.solve(&items, capacity).unwrap();
                prop_assert!(solution.is_feasible(capacity));
                prop_assert_eq!(solution.value, exhaustive.value);
                prop_assert_eq!(total_value(&solution.items, true), solution.value);
            }
        }

        #[test]
        fn prop_pruning_never_adds_steps((items, capacity) in instance()) {
            let exhaustive = ExhaustiveRunner::run(&items, capacity).unwrap();
            let bnb = BnbRunner::run(&items, capacity).unwrap();
            let blocking = BlockingRunner::run(&items, capacity, &BlockingConfig::default()).unwrap();
            let sorted = BlockingRunner::run(&items, capacity, &BlockingConfig::sorted()).unwrap();

            prop_assert!(exhaustive.steps >= bnb.steps);
            prop_assert!(exhaustive.steps >= blocking.steps);
            prop_assert!(exhaustive.steps >= sorted.steps);
            prop_assert!(bnb.steps >= blocking.steps);
            prop_assert_eq!(blocking.value, bnb.value);
            prop_assert_eq!(sorted.value, bnb.value);
        }

        #[test]
        fn prop_capacity_monotonic((items, capacity) in instance()) {
            let config = DpConfig::default();
            let lower = DpRunner::run(&items, capacity, &config).unwrap();
            let higher = DpRunner::run(&items, capacity + 1, &config).unwrap();
            prop_assert!(higher.value >= lower.value);

            let lower = BnbRunner::run(&items, capacity).unwrap();
            let higher = BnbRunner::run(&items, capacity + 1).unwrap();
            prop_assert!(higher.value >= lower.value);
        }

        #[test]
        fn prop_repeated_solves_identical((items, capacity) in instance()) {
            for algorithm in Algorithm::ALL {
                let first = algorithm.solve(&items, capacity).unwrap();
                let second = algorithm.solve(&items, capacity).unwrap();
                prop_assert_eq!(first, second);
            }
        }

        #[test]
        fn prop_everything_fits_selects_all(pairs in prop::collection::vec((1i64..=10, 1i64..=10), 1..=10)) {
            let items = items_from_pairs(&pairs);
            let capacity = total_weight(&items, false);
            for algorithm in Algorithm::ALL {
                let solution = algorithm.solve(&items, capacity).unwrap();
                prop_assert_eq!(solution.selected_count(), items.len());
            }
        }
    }
}
