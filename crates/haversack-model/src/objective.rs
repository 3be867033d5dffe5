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

use crate::num::{self, KnapsackNumeric};

/// The value produced by one solver strategy for one instance.
///
/// Exact strategies prove the optimum and report an integer. The greedy
/// strategy may include fractional credit for a partially counted item and
/// therefore reports a float; its result is an estimate, not a certificate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Objective<T> {
    /// The proven optimal total value.
    Exact(T),
    /// An approximate total value, possibly carrying fractional credit.
    Approximate(f64),
}

impl<T> Objective<T>
where
    T: KnapsackNumeric,
{
    /// Returns `true` if this objective is a proven optimum.
    #[inline]
    pub fn is_exact(&self) -> bool {
        matches!(self, Objective::Exact(_))
    }

    /// Returns the exact value, or `None` for approximate objectives.
    #[inline]
    pub fn exact(&self) -> Option<T> {
        match self {
            Objective::Exact(value) => Some(*value),
            Objective::Approximate(_) => None,
        }
    }

    /// Returns the objective widened to `f64`, regardless of variant.
    ///
    /// Useful for reporting, where exact and approximate results share one
    /// numeric column.
    #[inline]
    pub fn as_f64(&self) -> f64 {
        match self {
            Objective::Exact(value) => num::to_f64(*value),
            Objective::Approximate(value) => *value,
        }
    }
}

impl<T> std::fmt::Display for Objective<T>
where
    T: KnapsackNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Objective::Exact(value) => write!(f, "Exact({})", value),
            Objective::Approximate(value) => write!(f, "Approximate({:.2})", value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Objective;

    #[test]
    fn exact_accessors() {
        let objective = Objective::Exact(7u64);
        assert!(objective.is_exact());
        assert_eq!(objective.exact(), Some(7));
        assert_eq!(objective.as_f64(), 7.0);
    }

    #[test]
    fn approximate_accessors() {
        let objective = Objective::<u64>::Approximate(7.5);
        assert!(!objective.is_exact());
        assert_eq!(objective.exact(), None);
        assert_eq!(objective.as_f64(), 7.5);
    }

    #[test]
    fn display_distinguishes_variants() {
        assert_eq!(Objective::Exact(7u32).to_string(), "Exact(7)");
        assert_eq!(
            Objective::<u32>::Approximate(7.5).to_string(),
            "Approximate(7.50)"
        );
    }
}
