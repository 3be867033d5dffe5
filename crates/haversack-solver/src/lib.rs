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

//! # Haversack Solver
//!
//! Five solver strategies for the 0/1 knapsack problem behind a common
//! [`strategy::SolverStrategy`] trait. The strategies deliberately span the
//! classic algorithmic spectrum so their time and memory behavior can be
//! compared on identical instances:
//!
//! Module map
//! - `strategy`: the `SolverStrategy` trait — the seam between solvers and
//!   the benchmark harness.
//! - `dp`: bottom-up dynamic programming, O(n · capacity). The correctness
//!   baseline every other strategy must agree with.
//! - `brute_force`: unpruned recursion on the last item, O(2^n).
//! - `backtracking`: depth-first traversal with capacity-exhaustion
//!   pruning; identical results to brute force by construction.
//! - `divide_and_conquer`: the brute-force recurrence phrased as
//!   independent subproblem composition, deliberately without memoization.
//! - `greedy`: ratio-ordered approximation with a fractional tail,
//!   O(n log n). Upper-bound estimate, not an exact solver.
//!
//! All strategies are stateless unit structs, deterministic, and pure
//! functions of the validated `haversack_model::instance::Instance` they
//! receive. None of them bounds its own input size; keeping the exponential
//! strategies on tractable item counts is the caller's responsibility.

pub mod backtracking;
pub mod brute_force;
pub mod divide_and_conquer;
pub mod dp;
pub mod greedy;
pub mod strategy;
