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

//! Bottom-up dynamic programming solver.
//!
//! This is the correctness baseline of the workspace: every other strategy
//! must agree with it on the optimal value. The solver fills a table indexed
//! by (items considered, capacity used), where entry `(i, w)` is the best
//! total value achievable using only the first `i` items within weight
//! budget `w`:
//!
//! ```text
//! entry(i, w) = entry(i-1, w)                                  if weight_i > w
//!             = max(entry(i-1, w),
//!                   value_i + entry(i-1, w - weight_i))        otherwise
//! ```
//!
//! with a zero base row and column. The answer is `entry(n, capacity)`.
//!
//! The table is stored as a single flat row-major vector of
//! `(n + 1) × (capacity + 1)` entries rather than nested vectors, keeping
//! the inner loop on contiguous memory. Both time and memory are
//! O(n · capacity); unlike the recursive strategies this is pseudo-
//! polynomial rather than exponential in the item count, but it is the only
//! strategy whose footprint grows with the capacity.

use crate::strategy::SolverStrategy;
use haversack_model::{instance::Instance, num::KnapsackNumeric, objective::Objective};

#[inline(always)]
fn flatten_index(num_columns: usize, row: usize, column: usize) -> usize {
    row * num_columns + column
}

/// The bottom-up dynamic programming strategy.
///
/// Deterministic and exact. Allocates the full `(n + 1) × (capacity + 1)`
/// table per call; callers benchmarking against large capacities should be
/// aware that the allocation, not the arithmetic, may dominate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DynamicProgramming;

impl<T> SolverStrategy<T> for DynamicProgramming
where
    T: KnapsackNumeric,
{
    fn name(&self) -> &str {
        "Dynamic Programming"
    }

    fn solve(&self, instance: &Instance<T>) -> Objective<T> {
        let num_items = instance.num_items();
        let capacity = Into::<u64>::into(instance.capacity()) as usize;
        let num_columns = capacity + 1;

        let mut table = vec![T::zero(); (num_items + 1) * num_columns];

        for i in 1..=num_items {
            let item_weight = Into::<u64>::into(instance.weight(i - 1)) as usize;
            let item_value = instance.value(i - 1);

            for w in 1..=capacity {
                let without = table[flatten_index(num_columns, i - 1, w)];
                let entry = if item_weight > w {
                    without
                } else {
                    let with =
                        item_value.saturating_add(table[flatten_index(num_columns, i - 1, w - item_weight)]);
                    without.max(with)
                };
                table[flatten_index(num_columns, i, w)] = entry;
            }
        }

        Objective::Exact(table[flatten_index(num_columns, num_items, capacity)])
    }
}
