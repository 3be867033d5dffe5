// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Benchmark Harness
//!
//! Runs every registered solver strategy against one shared problem
//! instance and produces one [`BenchmarkRecord`] per strategy, in
//! registration order.
//!
//! ## Measurement discipline
//!
//! Strategies execute strictly sequentially, never overlapping, so that
//! time and memory readings attribute to exactly one strategy. For each
//! strategy the harness:
//!
//! 1. acquires a fresh [`MemorySampler`] and starts it,
//! 2. times a fixed number of consecutive `solve` calls (the repetition
//!    count stabilizes noisy short-duration measurements; default
//!    [`DEFAULT_REPETITIONS`]),
//! 3. captures the objective from the timed invocations themselves — there
//!    is no separate untimed call whose result could diverge from what was
//!    measured,
//! 4. stops the sampler and freezes everything into a record.
//!
//! Solver calls pass through [`std::hint::black_box`] so the repetition
//! loop cannot be collapsed by the optimizer.
//!
//! The harness never mutates the instance; it is shared by reference with
//! every strategy. Bounding the item count so the exponential strategies
//! stay tractable is the caller's responsibility, not the harness's.

use crate::{
    measure::MemorySampler,
    record::{BenchmarkRecord, BenchmarkRecordBuilder},
};
use haversack_model::{instance::Instance, num::KnapsackNumeric};
use haversack_solver::strategy::SolverStrategy;
use std::hint::black_box;
use std::time::Instant;

/// The default number of timed repetitions per strategy.
pub const DEFAULT_REPETITIONS: u32 = 10;

/// A harness that benchmarks a fixed roster of solver strategies on one
/// problem instance.
pub struct BenchmarkHarness<'a, T> {
    strategies: Vec<Box<dyn SolverStrategy<T> + 'a>>,
    repetitions: u32,
}

impl<'a, T> BenchmarkHarness<'a, T>
where
    T: KnapsackNumeric,
{
    /// Creates an empty harness with [`DEFAULT_REPETITIONS`].
    #[inline]
    pub fn new() -> Self {
        Self {
            strategies: Vec::new(),
            repetitions: DEFAULT_REPETITIONS,
        }
    }

    /// Sets the number of timed repetitions per strategy.
    ///
    /// # Panics
    ///
    /// Panics if `repetitions` is zero; a record without a single timed
    /// invocation has no objective to report.
    #[inline]
    pub fn with_repetitions(mut self, repetitions: u32) -> Self {
        assert!(
            repetitions > 0,
            "called `BenchmarkHarness::with_repetitions` with zero repetitions"
        );
        self.repetitions = repetitions;
        self
    }

    /// Returns the configured repetition count.
    #[inline]
    pub fn repetitions(&self) -> u32 {
        self.repetitions
    }

    /// Returns the number of registered strategies.
    #[inline]
    pub fn num_strategies(&self) -> usize {
        self.strategies.len()
    }

    /// Registers a strategy. Strategies run, and records appear, in
    /// registration order.
    #[inline]
    pub fn add_strategy<S>(&mut self, strategy: S)
    where
        S: SolverStrategy<T> + 'a,
    {
        self.strategies.push(Box::new(strategy));
    }

    /// Registers an already boxed strategy.
    #[inline]
    pub fn add_strategy_boxed(&mut self, strategy: Box<dyn SolverStrategy<T> + 'a>) {
        self.strategies.push(strategy);
    }

    /// Benchmarks every registered strategy against the instance.
    ///
    /// Returns exactly one record per registered strategy, in registration
    /// order, regardless of how long individual strategies ran.
    ///
    /// # Panics
    ///
    /// Panics if no strategies have been registered.
    pub fn run(&self, instance: &Instance<T>) -> Vec<BenchmarkRecord<T>> {
        assert!(
            !self.strategies.is_empty(),
            "called `BenchmarkHarness::run` with no strategies registered"
        );

        log::info!(
            "benchmarking {} strategies on {} ({} repetitions each)",
            self.strategies.len(),
            instance,
            self.repetitions
        );

        let mut records = Vec::with_capacity(self.strategies.len());

        for strategy in &self.strategies {
            records.push(self.run_one(strategy.as_ref(), instance));
        }

        records
    }

    fn run_one(
        &self,
        strategy: &dyn SolverStrategy<T>,
        instance: &Instance<T>,
    ) -> BenchmarkRecord<T> {
        log::debug!("benchmarking strategy '{}'", strategy.name());

        let mut sampler = MemorySampler::new();
        sampler.start();

        let start_time = Instant::now();
        let mut objective = None;
        for _ in 0..self.repetitions {
            objective = Some(black_box(strategy.solve(black_box(instance))));
        }
        let total_duration = start_time.elapsed();

        let memory = sampler.stop();

        // The loop ran at least once; `with_repetitions` forbids zero.
        let objective = objective.unwrap_or_else(|| {
            unreachable!("repetition loop produced no objective")
        });

        log::debug!(
            "strategy '{}' finished in {:.4}s, objective {}",
            strategy.name(),
            total_duration.as_secs_f64(),
            objective
        );

        BenchmarkRecordBuilder::new(strategy.name())
            .repetitions(self.repetitions)
            .total_duration(total_duration)
            .memory(memory)
            .objective(objective)
            .build()
    }
}

impl<T> Default for BenchmarkHarness<'_, T>
where
    T: KnapsackNumeric,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{BenchmarkHarness, DEFAULT_REPETITIONS};
    use haversack_model::instance::Instance;
    use haversack_solver::{
        backtracking::Backtracking, brute_force::BruteForce,
        divide_and_conquer::DivideAndConquer, dp::DynamicProgramming, greedy::Greedy,
    };

    fn small_instance() -> Instance<u64> {
        Instance::new(vec![2u64, 3, 4, 5], vec![3u64, 4, 5, 6], 5).unwrap()
    }

    fn full_roster<'a>() -> BenchmarkHarness<'a, u64> {
        let mut harness = BenchmarkHarness::new();
        harness.add_strategy(DynamicProgramming);
        harness.add_strategy(BruteForce);
        harness.add_strategy(Greedy);
        harness.add_strategy(Backtracking);
        harness.add_strategy(DivideAndConquer);
        harness
    }

    #[test]
    fn produces_one_record_per_strategy_in_registration_order() {
        let harness = full_roster();
        let records = harness.run(&small_instance());

        let names: Vec<&str> = records.iter().map(|r| r.strategy()).collect();
        assert_eq!(
            names,
            vec![
                "Dynamic Programming",
                "Brute Force",
                "Greedy",
                "Backtracking",
                "Divide and Conquer"
            ]
        );
    }

    #[test]
    fn records_carry_the_configured_repetition_count() {
        let harness = full_roster();
        for record in harness.run(&small_instance()) {
            assert_eq!(record.repetitions(), DEFAULT_REPETITIONS);
        }

        let mut harness = BenchmarkHarness::new().with_repetitions(3);
        harness.add_strategy(Greedy);
        let records = harness.run(&small_instance());
        assert_eq!(records[0].repetitions(), 3);
    }

    #[test]
    fn captured_objectives_match_a_direct_invocation() {
        use haversack_solver::strategy::SolverStrategy;

        let instance = small_instance();
        let harness = full_roster();
        let records = harness.run(&instance);

        assert_eq!(records[0].objective().exact(), Some(7));
        assert_eq!(records[1].objective().exact(), Some(7));
        assert_eq!(
            records[2].objective().as_f64(),
            Greedy.solve(&instance).as_f64()
        );
    }

    #[test]
    fn the_instance_is_not_mutated_by_a_run() {
        let instance = small_instance();
        let pristine = instance.clone();
        let harness = full_roster();
        let _ = harness.run(&instance);
        assert_eq!(instance, pristine);
    }

    #[test]
    #[should_panic(expected = "no strategies registered")]
    fn running_an_empty_harness_is_a_programmer_error() {
        let harness = BenchmarkHarness::<u64>::new();
        let _ = harness.run(&small_instance());
    }

    #[test]
    #[should_panic(expected = "zero repetitions")]
    fn zero_repetitions_are_rejected() {
        let _ = BenchmarkHarness::<u64>::new().with_repetitions(0);
    }
}
