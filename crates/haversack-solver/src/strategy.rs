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

//! # Solver Strategy Trait
//!
//! The common seam between the benchmark harness and the individual
//! knapsack strategies. Every strategy is a stateless, deterministic pure
//! function of its inputs: given the same instance it returns the same
//! objective, never mutates the instance, and keeps no memory across calls.
//!
//! The harness only ever sees `dyn SolverStrategy<T>`, so strategies can be
//! registered, ordered, and swapped without touching measurement code.

use haversack_model::{instance::Instance, num::KnapsackNumeric, objective::Objective};

/// A solving strategy for the 0/1 knapsack problem.
///
/// Implementors must be deterministic and side-effect free: `solve` is
/// called repeatedly on the same instance by the benchmark harness, and
/// every repetition must produce the same objective.
pub trait SolverStrategy<T>
where
    T: KnapsackNumeric,
{
    /// A short human-readable name identifying the strategy, used in
    /// benchmark records and reports.
    fn name(&self) -> &str;

    /// Computes the objective for the given instance.
    ///
    /// Exact strategies return [`Objective::Exact`] with the proven optimal
    /// total value; approximate strategies return
    /// [`Objective::Approximate`].
    fn solve(&self, instance: &Instance<T>) -> Objective<T>;
}

#[cfg(test)]
mod tests {
    use super::SolverStrategy;
    use crate::{
        backtracking::Backtracking, brute_force::BruteForce, divide_and_conquer::DivideAndConquer,
        dp::DynamicProgramming, greedy::Greedy,
    };
    use haversack_model::{generate::InstanceGenerator, instance::Instance};
    use rand::{SeedableRng, rngs::StdRng};

    fn exact_strategies() -> Vec<Box<dyn SolverStrategy<u64>>> {
        vec![
            Box::new(DynamicProgramming),
            Box::new(BruteForce),
            Box::new(Backtracking),
            Box::new(DivideAndConquer),
        ]
    }

    #[test]
    fn all_strategies_return_zero_for_zero_capacity() {
        let instance = Instance::new(vec![1u64, 1, 1], vec![10u64, 10, 10], 0).unwrap();
        for strategy in exact_strategies() {
            assert_eq!(
                strategy.solve(&instance).exact(),
                Some(0),
                "strategy '{}' must return 0 on zero capacity",
                strategy.name()
            );
        }
        assert_eq!(Greedy.solve(&instance).as_f64(), 0.0);
    }

    #[test]
    fn all_strategies_return_the_value_sum_when_everything_fits() {
        let instance = Instance::new(vec![2u64, 3, 4], vec![5u64, 6, 7], 100).unwrap();
        for strategy in exact_strategies() {
            assert_eq!(
                strategy.solve(&instance).exact(),
                Some(18),
                "strategy '{}' must take every item when everything fits",
                strategy.name()
            );
        }
        assert_eq!(Greedy.solve(&instance).as_f64(), 18.0);
    }

    #[test]
    fn all_strategies_return_zero_when_no_item_fits() {
        let instance = Instance::new(vec![10u64], vec![5u64], 3).unwrap();
        for strategy in exact_strategies() {
            assert_eq!(strategy.solve(&instance).exact(), Some(0));
        }
        assert_eq!(Greedy.solve(&instance).as_f64(), 5.0 / 10.0 * 3.0);
    }

    #[test]
    fn exact_strategies_agree_on_the_reference_scenario() {
        // Optimal subset is the items of weight 2 and 3 (values 3 + 4).
        let instance = Instance::new(vec![2u64, 3, 4, 5], vec![3u64, 4, 5, 6], 5).unwrap();
        for strategy in exact_strategies() {
            assert_eq!(
                strategy.solve(&instance).exact(),
                Some(7),
                "strategy '{}' disagrees with the known optimum",
                strategy.name()
            );
        }
    }

    #[test]
    fn exact_strategies_agree_on_random_instances() {
        let generator = InstanceGenerator::new(50, 100);
        let mut rng = StdRng::seed_from_u64(0xBAA5);

        for num_items in [0usize, 1, 2, 5, 10, 15, 20] {
            let instance = generator.generate(&mut rng, num_items);
            let baseline = DynamicProgramming.solve(&instance).exact().unwrap();

            for strategy in exact_strategies() {
                assert_eq!(
                    strategy.solve(&instance).exact(),
                    Some(baseline),
                    "strategy '{}' disagrees with the DP baseline on {}",
                    strategy.name(),
                    instance
                );
            }
        }
    }

    #[test]
    fn greedy_brackets_the_optimum_on_random_instances() {
        let generator = InstanceGenerator::new(50, 100);
        let mut rng = StdRng::seed_from_u64(0x5EED);

        for num_items in [1usize, 4, 8, 12, 16, 20] {
            let instance = generator.generate(&mut rng, num_items);
            let optimal = DynamicProgramming.solve(&instance).exact().unwrap() as f64;
            let reported = Greedy.solve(&instance).as_f64();
            let integral = Greedy.integral_value(&instance) as f64;

            assert!(
                integral <= optimal && optimal <= reported,
                "expected integral ({}) <= optimal ({}) <= reported ({}) on {}",
                integral,
                optimal,
                reported,
                instance
            );
        }
    }
}
