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

//! # Knapsack Numeric Trait
//!
//! Unified numeric bounds for the knapsack model and solvers.
//! `KnapsackNumeric` specifies the integer capabilities required for item
//! weights and values, including intrinsic traits (`PrimInt`, `Unsigned`)
//! and a lossless conversion to `u64` for aggregate arithmetic.
//!
//! ## Motivation
//!
//! Solvers should remain generic over integer widths while retaining
//! predictable arithmetic semantics. Weights and values are unsigned by
//! construction, which makes the negative-input error class of the problem
//! statement unrepresentable rather than merely rejected at run time. The
//! `Into<u64>` bound lets totals (sum of weights, sum of values) be computed
//! without overflow for any supported element type.

use num_traits::{PrimInt, Unsigned};
use std::hash::Hash;

/// A trait alias for numeric types that can serve as knapsack weights and
/// values. These are the fixed-width unsigned integer types `u8`, `u16`,
/// `u32` and `u64`.
///
/// # Note
///
/// `usize` is intentionally excluded: it has no portable `Into<u64>`
/// conversion, and instances should not change meaning across platforms.
pub trait KnapsackNumeric:
    PrimInt
    + Unsigned
    + Into<u64>
    + std::fmt::Debug
    + std::fmt::Display
    + Hash
    + Send
    + Sync
{
}

impl<T> KnapsackNumeric for T where
    T: PrimInt
        + Unsigned
        + Into<u64>
        + std::fmt::Debug
        + std::fmt::Display
        + Hash
        + Send
        + Sync
{
}

/// Widens a knapsack numeric to `f64`.
///
/// Used by the greedy strategy for ratio arithmetic and fractional credit.
/// The conversion goes through `u64` and is exact for all values below
/// 2^53, which comfortably covers realistic item data.
#[inline]
pub fn to_f64<T: KnapsackNumeric>(value: T) -> f64 {
    let wide: u64 = value.into();
    wide as f64
}
