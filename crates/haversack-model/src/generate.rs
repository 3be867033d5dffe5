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

//! Random instance generation for benchmark runs.
//!
//! The generator draws item weights and values independently and uniformly
//! from `[1, max]` and derives the capacity as half the total weight
//! (rounded down), which keeps generated instances non-trivial: neither
//! everything nor nothing fits, except by coincidence on tiny inputs.
//!
//! The caller supplies the RNG, so benchmark runs and tests can pass a
//! seeded [`rand::rngs::StdRng`] for reproducible instances.

use crate::instance::Instance;
use rand::Rng;

/// A configurable random generator for knapsack problem instances.
///
/// Weights and values are drawn independently and uniformly from
/// `[1, max_weight]` and `[1, max_value]`; the capacity is
/// `floor(sum(weights) / 2)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstanceGenerator {
    max_weight: u64,
    max_value: u64,
}

impl InstanceGenerator {
    /// Creates a new generator with the given inclusive upper bounds.
    ///
    /// # Panics
    ///
    /// Panics if either bound is zero, since items must have strictly
    /// positive weight and value.
    pub fn new(max_weight: u64, max_value: u64) -> Self {
        assert!(
            max_weight > 0 && max_value > 0,
            "called `InstanceGenerator::new` with a zero bound: max_weight = {}, max_value = {}",
            max_weight,
            max_value
        );

        Self {
            max_weight,
            max_value,
        }
    }

    /// Returns the inclusive upper bound for item weights.
    #[inline]
    pub fn max_weight(&self) -> u64 {
        self.max_weight
    }

    /// Returns the inclusive upper bound for item values.
    #[inline]
    pub fn max_value(&self) -> u64 {
        self.max_value
    }

    /// Generates an instance with `num_items` random items.
    ///
    /// The produced instance is valid by construction: every weight and
    /// value is at least 1, and the capacity is half the total weight.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R, num_items: usize) -> Instance<u64> {
        let weights: Vec<u64> = (0..num_items)
            .map(|_| rng.random_range(1..=self.max_weight))
            .collect();
        let values: Vec<u64> = (0..num_items)
            .map(|_| rng.random_range(1..=self.max_value))
            .collect();
        let capacity = weights.iter().sum::<u64>() / 2;

        Instance::from_validated_parts(weights, values, capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::InstanceGenerator;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn generated_items_respect_the_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let generator = InstanceGenerator::new(50, 100);
        let instance = generator.generate(&mut rng, 200);

        assert_eq!(instance.num_items(), 200);
        assert!(instance.weights().iter().all(|&w| (1..=50).contains(&w)));
        assert!(instance.values().iter().all(|&v| (1..=100).contains(&v)));
    }

    #[test]
    fn capacity_is_half_the_total_weight() {
        let mut rng = StdRng::seed_from_u64(7);
        let generator = InstanceGenerator::new(50, 100);
        let instance = generator.generate(&mut rng, 64);

        assert_eq!(instance.capacity(), instance.total_weight() / 2);
    }

    #[test]
    fn identical_seeds_reproduce_the_instance() {
        let generator = InstanceGenerator::new(30, 60);
        let a = generator.generate(&mut StdRng::seed_from_u64(123), 32);
        let b = generator.generate(&mut StdRng::seed_from_u64(123), 32);
        assert_eq!(a, b);
    }

    #[test]
    fn empty_instances_are_allowed() {
        let mut rng = StdRng::seed_from_u64(0);
        let generator = InstanceGenerator::new(10, 10);
        let instance = generator.generate(&mut rng, 0);
        assert!(instance.is_empty());
        assert_eq!(instance.capacity(), 0);
    }

    #[test]
    #[should_panic(expected = "called `InstanceGenerator::new` with a zero bound")]
    fn zero_bounds_are_rejected() {
        let _ = InstanceGenerator::new(0, 10);
    }
}
