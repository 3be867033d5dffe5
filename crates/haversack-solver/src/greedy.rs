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

//! Greedy ratio-ordered approximation with a fractional tail.
//!
//! Items are ordered by descending value-to-weight ratio using a stable
//! sort, so items with equal ratios keep their original input order; this
//! fixed tie-break makes the strategy fully deterministic. The sack is then
//! filled with whole items while they fit. The first item that no longer
//! fits contributes `ratio × remaining capacity` as fractional credit, and
//! the scan stops there.
//!
//! The reported value is therefore the optimum of the *fractional*
//! relaxation, which is an upper bound on the 0/1 optimum — not a solution
//! to it. Do not compare it for equality against the exact strategies
//! except in degenerate cases (zero capacity, or everything fits, where the
//! fractional tail never triggers). The whole-items-only total, exposed via
//! [`Greedy::integral_value`], is conversely a feasible lower bound, so for
//! every instance:
//!
//! ```text
//! integral_value  <=  0/1 optimum  <=  reported value
//! ```
//!
//! Time is O(n log n) for the sort plus a linear scan.

use crate::strategy::SolverStrategy;
use haversack_model::{
    instance::Instance,
    num::{self, KnapsackNumeric},
    objective::Objective,
};

/// One item viewed through the greedy lens.
#[derive(Debug, Clone, Copy, PartialEq)]
struct RatedItem<T> {
    ratio: f64,
    weight: T,
    value: T,
}

/// Collects the items with their value-to-weight ratios, ordered by
/// descending ratio with input order as the tie-break.
fn rate_items<T>(instance: &Instance<T>) -> Vec<RatedItem<T>>
where
    T: KnapsackNumeric,
{
    let mut rated: Vec<RatedItem<T>> = instance
        .items()
        .map(|(weight, value)| RatedItem {
            ratio: num::to_f64(value) / num::to_f64(weight),
            weight,
            value,
        })
        .collect();

    // Stable sort keeps the original input order for equal ratios.
    rated.sort_by(|a, b| b.ratio.total_cmp(&a.ratio));
    rated
}

/// The greedy ratio-ordered approximation strategy.
///
/// Deterministic given the fixed tie-break, but not guaranteed optimal for
/// the 0/1 problem: the reported value may exceed the true optimum through
/// fractional credit, and the whole items it picks may be a suboptimal
/// subset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Greedy;

impl Greedy {
    /// Returns the total value of the whole items the greedy scan takes,
    /// ignoring the fractional tail credit.
    ///
    /// This is the value of a feasible 0/1 solution and therefore a lower
    /// bound on the optimum, complementing the upper-bound estimate
    /// reported by `solve`.
    pub fn integral_value<T>(&self, instance: &Instance<T>) -> T
    where
        T: KnapsackNumeric,
    {
        let mut remaining = instance.capacity();
        let mut total = T::zero();

        for item in rate_items(instance) {
            if item.weight <= remaining {
                remaining = remaining - item.weight;
                total = total.saturating_add(item.value);
            } else {
                break;
            }
        }

        total
    }
}

impl<T> SolverStrategy<T> for Greedy
where
    T: KnapsackNumeric,
{
    fn name(&self) -> &str {
        "Greedy"
    }

    fn solve(&self, instance: &Instance<T>) -> Objective<T> {
        let mut remaining = instance.capacity();
        let mut total = 0.0_f64;

        for item in rate_items(instance) {
            if item.weight <= remaining {
                remaining = remaining - item.weight;
                total += num::to_f64(item.value);
            } else {
                total += item.ratio * num::to_f64(remaining);
                break;
            }
        }

        Objective::Approximate(total)
    }
}

#[cfg(test)]
mod tests {
    use super::Greedy;
    use crate::strategy::SolverStrategy;
    use haversack_model::instance::Instance;

    #[test]
    fn matches_the_optimum_on_the_reference_scenario() {
        // Ratios 1.5, 1.33, 1.25, 1.2: greedy takes weights 2 and 3, which
        // exhausts the capacity exactly and happens to be optimal.
        let instance = Instance::new(vec![2u64, 3, 4, 5], vec![3u64, 4, 5, 6], 5).unwrap();
        assert_eq!(Greedy.solve(&instance).as_f64(), 7.0);
        assert_eq!(Greedy.integral_value(&instance), 7);
    }

    #[test]
    fn returns_zero_for_zero_capacity() {
        let instance = Instance::new(vec![1u64, 1, 1], vec![10u64, 10, 10], 0).unwrap();
        assert_eq!(Greedy.solve(&instance).as_f64(), 0.0);
        assert_eq!(Greedy.integral_value(&instance), 0);
    }

    #[test]
    fn returns_the_value_sum_when_everything_fits() {
        let instance = Instance::new(vec![2u64, 3, 4], vec![5u64, 6, 7], 100).unwrap();
        assert_eq!(Greedy.solve(&instance).as_f64(), 18.0);
        assert_eq!(Greedy.integral_value(&instance), 18);
    }

    #[test]
    fn credits_a_fraction_of_the_first_item_that_does_not_fit() {
        // The single item does not fit; 3 of its 10 weight units are
        // credited at ratio 0.5.
        let instance = Instance::new(vec![10u64], vec![5u64], 3).unwrap();
        assert_eq!(Greedy.solve(&instance).as_f64(), 1.5);
        assert_eq!(Greedy.integral_value(&instance), 0);
    }

    #[test]
    fn reported_value_can_exceed_the_zero_one_optimum() {
        // Optimal 0/1 choice is the single heavy item (value 10); greedy
        // takes the light high-ratio item first and then credits a fraction
        // of the heavy one, overshooting the true optimum.
        let instance = Instance::new(vec![1u64, 10], vec![2u64, 10], 10).unwrap();
        let reported = Greedy.solve(&instance).as_f64();
        assert!(reported > 10.0);
        assert_eq!(Greedy.integral_value(&instance), 2);
    }

    #[test]
    fn equal_ratios_keep_input_order() {
        // Both ratios are 1.0. With the stable tie-break the heavy first
        // item is taken whole (integral 4); had the sort swapped them, the
        // light item would be taken instead (integral 2).
        let instance = Instance::new(vec![4u64, 2], vec![4u64, 2], 5).unwrap();
        assert_eq!(Greedy.integral_value(&instance), 4);
        assert_eq!(Greedy.solve(&instance).as_f64(), 5.0);
    }

    #[test]
    fn handles_the_empty_instance() {
        let instance = Instance::new(Vec::<u64>::new(), Vec::new(), 9).unwrap();
        assert_eq!(Greedy.solve(&instance).as_f64(), 0.0);
        assert_eq!(Greedy.integral_value(&instance), 0);
    }
}
