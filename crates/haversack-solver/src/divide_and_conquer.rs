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

//! Divide-and-conquer solver without memoization.
//!
//! Splits each problem on the decision for the last item into two
//! independent subproblems — one where the item is included (with reduced
//! capacity) and one where it is excluded — solves both, and composes the
//! maximum. Mathematically this is the brute-force recurrence; the strategy
//! exists as a separately named entry in the comparison to illustrate that
//! divide-and-conquer without subproblem reuse buys nothing here: the
//! subproblems overlap massively, and only the dynamic programming table
//! exploits that overlap.
//!
//! Exponential time, structurally identical cost to brute force. Must
//! produce results identical to the DP and brute-force strategies for all
//! inputs.

use crate::strategy::SolverStrategy;
use haversack_model::{instance::Instance, num::KnapsackNumeric, objective::Objective};

/// The divide-and-conquer strategy, deliberately without memoization.
///
/// Exact and deterministic; exponential in the item count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DivideAndConquer;

fn conquer<T>(instance: &Instance<T>, remaining_capacity: T, num_items: usize) -> T
where
    T: KnapsackNumeric,
{
    if num_items == 0 || remaining_capacity.is_zero() {
        return T::zero();
    }

    let item_weight = instance.weight(num_items - 1);

    // Subproblem with the last item excluded.
    let excluded_branch = conquer(instance, remaining_capacity, num_items - 1);

    if item_weight > remaining_capacity {
        return excluded_branch;
    }

    // Independent subproblem with the last item committed to the sack.
    let included_branch = instance
        .value(num_items - 1)
        .saturating_add(conquer(instance, remaining_capacity - item_weight, num_items - 1));

    excluded_branch.max(included_branch)
}

impl<T> SolverStrategy<T> for DivideAndConquer
where
    T: KnapsackNumeric,
{
    fn name(&self) -> &str {
        "Divide and Conquer"
    }

    fn solve(&self, instance: &Instance<T>) -> Objective<T> {
        Objective::Exact(conquer(
            instance,
            instance.capacity(),
            instance.num_items(),
        ))
    }
}
