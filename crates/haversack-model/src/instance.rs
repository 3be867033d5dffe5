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

//! Validated problem instances for the 0/1 knapsack problem.
//!
//! An [`Instance`] holds the item weights, item values, and the capacity of
//! one knapsack problem. Items carry no identity beyond their position in
//! the input sequence, so the instance uses a Structure of Arrays (SoA)
//! layout: `weights[i]` and `values[i]` together describe item `i`.
//!
//! Construction is the validation boundary. [`Instance::new`] rejects
//! mismatched sequence lengths and non-positive item data with a descriptive
//! [`InstanceError`], so every solver can assume a well-formed instance and
//! stay a pure function of its inputs. Zero capacity and capacity exceeding
//! the total weight are both legal; solvers must handle them.

use crate::num::KnapsackNumeric;

/// The error type for problem instance validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstanceError {
    /// The weight and value sequences have different lengths.
    LengthMismatch {
        /// Number of weights provided.
        weights: usize,
        /// Number of values provided.
        values: usize,
    },
    /// An item has weight zero. Weights must be strictly positive, both by
    /// problem statement and because the greedy ratio divides by them.
    ZeroWeightItem {
        /// The index of the offending item.
        index: usize,
    },
    /// An item has value zero. Values must be strictly positive.
    ZeroValueItem {
        /// The index of the offending item.
        index: usize,
    },
}

impl std::fmt::Display for InstanceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LengthMismatch { weights, values } => write!(
                f,
                "weight and value sequences differ in length: {} weights, {} values",
                weights, values
            ),
            Self::ZeroWeightItem { index } => {
                write!(f, "item {} has zero weight; weights must be positive", index)
            }
            Self::ZeroValueItem { index } => {
                write!(f, "item {} has zero value; values must be positive", index)
            }
        }
    }
}

impl std::error::Error for InstanceError {}

/// An immutable 0/1 knapsack problem instance.
///
/// This struct uses a Structure of Arrays (SoA) layout. Data is indexed
/// directly by item position (i.e., index `i` corresponds to item `i`).
/// Instances are read-only after construction and shared by reference
/// across all solver invocations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance<T> {
    /// The weight of each item. `weights[i]` is the weight of item `i`.
    weights: Vec<T>,
    /// The value of each item. `values[i]` is the value of item `i`.
    values: Vec<T>,
    /// The knapsack capacity. May be zero or exceed the total weight.
    capacity: T,
}

impl<T> Instance<T>
where
    T: KnapsackNumeric,
{
    /// Constructs a new validated `Instance`.
    ///
    /// # Errors
    ///
    /// Returns [`InstanceError::LengthMismatch`] if the sequences differ in
    /// length, and [`InstanceError::ZeroWeightItem`] or
    /// [`InstanceError::ZeroValueItem`] for the first non-positive entry.
    pub fn new(weights: Vec<T>, values: Vec<T>, capacity: T) -> Result<Self, InstanceError> {
        if weights.len() != values.len() {
            return Err(InstanceError::LengthMismatch {
                weights: weights.len(),
                values: values.len(),
            });
        }

        if let Some(index) = weights.iter().position(|w| w.is_zero()) {
            return Err(InstanceError::ZeroWeightItem { index });
        }

        if let Some(index) = values.iter().position(|v| v.is_zero()) {
            return Err(InstanceError::ZeroValueItem { index });
        }

        Ok(Self {
            weights,
            values,
            capacity,
        })
    }

    /// Internal constructor for callers that guarantee validity themselves,
    /// such as the instance generator.
    #[inline]
    pub(crate) fn from_validated_parts(weights: Vec<T>, values: Vec<T>, capacity: T) -> Self {
        debug_assert_eq!(
            weights.len(),
            values.len(),
            "called `Instance::from_validated_parts` with inconsistent vector lengths: \
             weights.len() = {}, values.len() = {}",
            weights.len(),
            values.len()
        );
        debug_assert!(
            weights.iter().all(|w| !w.is_zero()) && values.iter().all(|v| !v.is_zero()),
            "called `Instance::from_validated_parts` with a zero weight or value"
        );

        Self {
            weights,
            values,
            capacity,
        }
    }

    /// Returns the number of items in this instance.
    #[inline]
    pub fn num_items(&self) -> usize {
        self.weights.len()
    }

    /// Returns `true` if this instance has no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Returns the knapsack capacity.
    #[inline]
    pub fn capacity(&self) -> T {
        self.capacity
    }

    /// Returns the weight of a specific item.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn weight(&self, index: usize) -> T {
        debug_assert!(
            index < self.num_items(),
            "called `Instance::weight` with item index out of bounds: the len is {} but the index is {}",
            self.num_items(),
            index
        );

        self.weights[index]
    }

    /// Returns the value of a specific item.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn value(&self, index: usize) -> T {
        debug_assert!(
            index < self.num_items(),
            "called `Instance::value` with item index out of bounds: the len is {} but the index is {}",
            self.num_items(),
            index
        );

        self.values[index]
    }

    /// Returns a slice of all item weights.
    #[inline]
    pub fn weights(&self) -> &[T] {
        &self.weights
    }

    /// Returns a slice of all item values.
    #[inline]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Returns an iterator over `(weight, value)` pairs in item order.
    #[inline]
    pub fn items(&self) -> impl Iterator<Item = (T, T)> + '_ {
        self.weights
            .iter()
            .copied()
            .zip(self.values.iter().copied())
    }

    /// Returns the sum of all item weights, widened to `u64`.
    #[inline]
    pub fn total_weight(&self) -> u64 {
        self.weights.iter().map(|w| Into::<u64>::into(*w)).sum()
    }

    /// Returns the sum of all item values, widened to `u64`.
    #[inline]
    pub fn total_value(&self) -> u64 {
        self.values.iter().map(|v| Into::<u64>::into(*v)).sum()
    }

    /// Returns `true` if every item individually fits and the total weight
    /// does not exceed the capacity, i.e. taking everything is feasible.
    #[inline]
    pub fn all_items_fit(&self) -> bool {
        self.total_weight() <= self.capacity.into()
    }
}

impl<T> std::fmt::Display for Instance<T>
where
    T: KnapsackNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Instance(items: {}, capacity: {}, total weight: {})",
            self.num_items(),
            self.capacity,
            self.total_weight()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{Instance, InstanceError};

    #[test]
    fn new_accepts_well_formed_input() {
        let instance = Instance::new(vec![2u64, 3, 4, 5], vec![3u64, 4, 5, 6], 5).unwrap();
        assert_eq!(instance.num_items(), 4);
        assert_eq!(instance.capacity(), 5);
        assert_eq!(instance.weight(0), 2);
        assert_eq!(instance.value(3), 6);
        assert_eq!(instance.total_weight(), 14);
        assert_eq!(instance.total_value(), 18);
    }

    #[test]
    fn new_rejects_mismatched_lengths() {
        let err = Instance::new(vec![1u32, 2], vec![1u32], 10).unwrap_err();
        assert_eq!(
            err,
            InstanceError::LengthMismatch {
                weights: 2,
                values: 1
            }
        );
    }

    #[test]
    fn new_rejects_zero_weight() {
        let err = Instance::new(vec![1u32, 0, 2], vec![1u32, 1, 1], 10).unwrap_err();
        assert_eq!(err, InstanceError::ZeroWeightItem { index: 1 });
    }

    #[test]
    fn new_rejects_zero_value() {
        let err = Instance::new(vec![1u32, 1], vec![1u32, 0], 10).unwrap_err();
        assert_eq!(err, InstanceError::ZeroValueItem { index: 1 });
    }

    #[test]
    fn zero_capacity_is_legal() {
        let instance = Instance::new(vec![1u8, 1, 1], vec![10u8, 10, 10], 0).unwrap();
        assert_eq!(instance.capacity(), 0);
        assert!(!instance.all_items_fit());
    }

    #[test]
    fn capacity_exceeding_total_weight_is_legal() {
        let instance = Instance::new(vec![2u16, 3], vec![5u16, 5], 100).unwrap();
        assert!(instance.all_items_fit());
    }

    #[test]
    fn empty_instance_is_legal() {
        let instance = Instance::new(Vec::<u64>::new(), Vec::new(), 7).unwrap();
        assert!(instance.is_empty());
        assert_eq!(instance.total_weight(), 0);
        assert!(instance.all_items_fit());
    }

    #[test]
    fn items_iterates_in_input_order() {
        let instance = Instance::new(vec![2u64, 3], vec![30u64, 40], 5).unwrap();
        let items: Vec<(u64, u64)> = instance.items().collect();
        assert_eq!(items, vec![(2, 30), (3, 40)]);
    }

    #[test]
    fn error_messages_name_the_offending_index() {
        let err = Instance::new(vec![1u32, 0], vec![1u32, 1], 1).unwrap_err();
        assert_eq!(
            err.to_string(),
            "item 1 has zero weight; weights must be positive"
        );
    }
}
