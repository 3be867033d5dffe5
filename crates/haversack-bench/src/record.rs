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

use crate::measure::MemoryUsage;
use haversack_model::{num::KnapsackNumeric, objective::Objective};
use std::time::Duration;

/// The measured outcome of benchmarking one strategy on one instance.
///
/// Created once per strategy per run and immutable afterwards. The
/// objective is the value captured from the timed invocations themselves,
/// not from a separate untimed call.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkRecord<T> {
    strategy: String,
    repetitions: u32,
    total_duration: Duration,
    memory: MemoryUsage,
    objective: Objective<T>,
}

impl<T> BenchmarkRecord<T>
where
    T: KnapsackNumeric,
{
    /// Returns the name of the measured strategy.
    #[inline]
    pub fn strategy(&self) -> &str {
        &self.strategy
    }

    /// Returns how many timed repetitions the total duration covers.
    #[inline]
    pub fn repetitions(&self) -> u32 {
        self.repetitions
    }

    /// Returns the wall-clock time of all repetitions combined.
    #[inline]
    pub fn total_duration(&self) -> Duration {
        self.total_duration
    }

    /// Returns the mean wall-clock time of a single repetition.
    #[inline]
    pub fn mean_duration(&self) -> Duration {
        if self.repetitions == 0 {
            return Duration::ZERO;
        }
        self.total_duration / self.repetitions
    }

    /// Returns the memory usage observed during the measurement scope.
    #[inline]
    pub fn memory(&self) -> MemoryUsage {
        self.memory
    }

    /// Returns the objective the strategy produced.
    #[inline]
    pub fn objective(&self) -> &Objective<T> {
        &self.objective
    }
}

impl<T> std::fmt::Display for BenchmarkRecord<T>
where
    T: KnapsackNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}:", self.strategy)?;
        writeln!(
            f,
            "  Time Taken: {:.4} seconds ({} repetitions)",
            self.total_duration.as_secs_f64(),
            self.repetitions
        )?;
        writeln!(
            f,
            "  Memory Used: {:.2} KB (Peak: {:.2} KB)",
            self.memory.current_bytes as f64 / 1024.0,
            self.memory.peak_bytes as f64 / 1024.0
        )?;
        write!(f, "  Value: {}", self.objective)
    }
}

/// Builder for [`BenchmarkRecord`].
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkRecordBuilder<T> {
    strategy: String,
    repetitions: u32,
    total_duration: Duration,
    memory: MemoryUsage,
    objective: Objective<T>,
}

impl<T> BenchmarkRecordBuilder<T>
where
    T: KnapsackNumeric,
{
    /// Creates a builder for the named strategy with zeroed measurements.
    pub fn new(strategy: impl Into<String>) -> Self {
        Self {
            strategy: strategy.into(),
            repetitions: 0,
            total_duration: Duration::ZERO,
            memory: MemoryUsage::default(),
            objective: Objective::Exact(T::zero()),
        }
    }

    /// Sets the repetition count the total duration covers.
    #[inline]
    pub fn repetitions(mut self, repetitions: u32) -> Self {
        self.repetitions = repetitions;
        self
    }

    /// Sets the combined wall-clock time of all repetitions.
    #[inline]
    pub fn total_duration(mut self, total_duration: Duration) -> Self {
        self.total_duration = total_duration;
        self
    }

    /// Sets the observed memory usage.
    #[inline]
    pub fn memory(mut self, memory: MemoryUsage) -> Self {
        self.memory = memory;
        self
    }

    /// Sets the objective the strategy produced.
    #[inline]
    pub fn objective(mut self, objective: Objective<T>) -> Self {
        self.objective = objective;
        self
    }

    /// Builds the immutable record.
    #[inline]
    pub fn build(self) -> BenchmarkRecord<T> {
        BenchmarkRecord {
            strategy: self.strategy,
            repetitions: self.repetitions,
            total_duration: self.total_duration,
            memory: self.memory,
            objective: self.objective,
        }
    }
}
