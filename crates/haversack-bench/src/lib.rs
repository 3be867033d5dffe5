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

//! # Haversack Bench
//!
//! The measurement and reporting layer of the knapsack solver comparison.
//! Where `haversack_solver` answers *what is the optimum*, this crate
//! answers *what did it cost to find out*: it runs every strategy on one
//! shared instance, attributes wall-clock time and resident-set growth to
//! each, and renders the results.
//!
//! Module map
//! - `harness`: sequential benchmark execution, one record per strategy.
//! - `measure`: the scoped resident-set sampler the harness wraps around
//!   each strategy invocation.
//! - `record`: the immutable per-strategy measurement record and its
//!   builder.
//! - `report`: console table and CSV rendering of record sequences.
//!
//! The `haversack` binary in this crate wires the pieces together: generate
//! a random instance, register the five strategies, run the harness, and
//! report.

pub mod harness;
pub mod measure;
pub mod record;
pub mod report;
