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

//! # Haversack Model
//!
//! **The core domain model for the Haversack knapsack solver comparison.**
//!
//! This crate defines the data structures shared by every solver strategy
//! and by the benchmark harness. It is the data interchange layer between
//! instance generation (random input) and the solving strategies
//! (`haversack_solver`).
//!
//! ## Architecture
//!
//! The crate is designed around a strict separation between **construction**
//! and **solving**:
//!
//! * **`num`**: The `KnapsackNumeric` trait alias bounding the unsigned
//!   integer types usable as item weights and values.
//! * **`instance`**: The immutable, validated `Instance` (SoA layout) and
//!   its `InstanceError` validation taxonomy.
//! * **`objective`**: The `Objective` produced by a strategy — exact for
//!   optimal solvers, approximate (possibly fractional) for greedy.
//! * **`generate`**: Uniform random instance generation with a derived
//!   capacity of half the total weight.
//!
//! ## Design Philosophy
//!
//! 1. **Fail-fast**: `Instance::new` validates eagerly, so solvers never see
//!    mismatched sequences or non-positive item data.
//! 2. **Unrepresentable errors**: weights and values are unsigned; the
//!    negative-input error class cannot occur at run time.
//! 3. **Memory layout**: item data is stored as flat parallel vectors for
//!    cache locality in the hot recursive loops.

pub mod generate;
pub mod instance;
pub mod num;
pub mod objective;
