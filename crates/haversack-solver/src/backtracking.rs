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

//! Depth-first backtracking solver.
//!
//! Shares the brute-force recurrence but is organized as a forward
//! depth-first traversal over an explicit index cursor and an accumulated
//! value, the shape a hand-written search would take. Two rules distinguish
//! it operationally from the brute-force strategy:
//!
//! * the include branch is pruned at the decision point whenever the
//!   current item's weight exceeds the remaining capacity, rather than only
//!   being omitted from the max at the leaf, and
//! * the traversal terminates as soon as the capacity is exhausted,
//!   returning the value accumulated so far instead of descending through
//!   the remaining (necessarily excluded) items.
//!
//! Neither rule changes the result: this strategy must return exactly the
//! brute-force optimum for every input, a property the cross-strategy tests
//! assert. Worst-case time remains O(2^n).

use crate::strategy::SolverStrategy;
use haversack_model::{instance::Instance, num::KnapsackNumeric, objective::Objective};

/// The depth-first backtracking strategy with capacity-exhaustion pruning.
///
/// Exact and deterministic; exponential in the item count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Backtracking;

fn search<T>(instance: &Instance<T>, remaining_capacity: T, cursor: usize, accumulated: T) -> T
where
    T: KnapsackNumeric,
{
    if cursor == instance.num_items() || remaining_capacity.is_zero() {
        return accumulated;
    }

    let item_weight = instance.weight(cursor);

    // Prune the include branch at the decision point.
    if item_weight > remaining_capacity {
        return search(instance, remaining_capacity, cursor + 1, accumulated);
    }

    let include = search(
        instance,
        remaining_capacity - item_weight,
        cursor + 1,
        accumulated.saturating_add(instance.value(cursor)),
    );
    let exclude = search(instance, remaining_capacity, cursor + 1, accumulated);

    include.max(exclude)
}

impl<T> SolverStrategy<T> for Backtracking
where
    T: KnapsackNumeric,
{
    fn name(&self) -> &str {
        "Backtracking"
    }

    fn solve(&self, instance: &Instance<T>) -> Objective<T> {
        Objective::Exact(search(instance, instance.capacity(), 0, T::zero()))
    }
}

#[cfg(test)]
mod tests {
    use super::Backtracking;
    use crate::{brute_force::BruteForce, strategy::SolverStrategy};
    use haversack_model::instance::Instance;

    #[test]
    fn solves_the_reference_scenario() {
        let instance = Instance::new(vec![2u64, 3, 4, 5], vec![3u64, 4, 5, 6], 5).unwrap();
        assert_eq!(Backtracking.solve(&instance).exact(), Some(7));
    }

    #[test]
    fn returns_zero_for_zero_capacity() {
        let instance = Instance::new(vec![1u64, 1, 1], vec![10u64, 10, 10], 0).unwrap();
        assert_eq!(Backtracking.solve(&instance).exact(), Some(0));
    }

    #[test]
    fn returns_zero_when_the_single_item_cannot_fit() {
        let instance = Instance::new(vec![10u64], vec![5u64], 3).unwrap();
        assert_eq!(Backtracking.solve(&instance).exact(), Some(0));
    }

    #[test]
    fn early_termination_on_exact_fill_keeps_the_accumulated_value() {
        // Taking the first two items exhausts the capacity exactly; the
        // traversal must stop there with their combined value.
        let instance = Instance::new(vec![2u32, 3, 4], vec![10u32, 10, 1], 5).unwrap();
        assert_eq!(Backtracking.solve(&instance).exact(), Some(20));
    }

    #[test]
    fn agrees_with_brute_force_on_an_adversarial_mix() {
        let instance =
            Instance::new(vec![7u64, 2, 2, 2, 2], vec![9u64, 3, 3, 3, 3], 8).unwrap();
        assert_eq!(
            Backtracking.solve(&instance).exact(),
            BruteForce.solve(&instance).exact()
        );
    }
}
