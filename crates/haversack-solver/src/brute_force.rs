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

//! Unpruned recursive brute-force solver.
//!
//! Recurses on the last of the remaining items, taking the maximum of the
//! include and exclude branches. The only shortcut is the capacity-exceeded
//! skip: when the item's weight exceeds the remaining capacity the include
//! branch is omitted entirely, not explored and discarded.
//!
//! Time is O(2^n) with no subproblem reuse, which makes this strategy the
//! exponential reference point of the comparison. Recursion depth equals
//! the item count, so stack usage stays shallow for the item counts on
//! which an O(2^n) strategy is tractable at all. Callers are responsible
//! for bounding `n`; the solver itself runs whatever it is given to
//! completion.

use crate::strategy::SolverStrategy;
use haversack_model::{instance::Instance, num::KnapsackNumeric, objective::Objective};

/// The unpruned recursive brute-force strategy.
///
/// Exact and deterministic; exponential in the item count. Used as a
/// reference on small instances.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BruteForce;

fn solve_recursive<T>(instance: &Instance<T>, remaining_capacity: T, num_items: usize) -> T
where
    T: KnapsackNumeric,
{
    if num_items == 0 || remaining_capacity.is_zero() {
        return T::zero();
    }

    let item_weight = instance.weight(num_items - 1);
    let exclude = solve_recursive(instance, remaining_capacity, num_items - 1);

    if item_weight > remaining_capacity {
        return exclude;
    }

    let include = instance.value(num_items - 1).saturating_add(solve_recursive(
        instance,
        remaining_capacity - item_weight,
        num_items - 1,
    ));

    include.max(exclude)
}

impl<T> SolverStrategy<T> for BruteForce
where
    T: KnapsackNumeric,
{
    fn name(&self) -> &str {
        "Brute Force"
    }

    fn solve(&self, instance: &Instance<T>) -> Objective<T> {
        Objective::Exact(solve_recursive(
            instance,
            instance.capacity(),
            instance.num_items(),
        ))
    }
}
