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

//! Rendering and persistence of benchmark records.
//!
//! The harness produces plain [`BenchmarkRecord`] values and does not care
//! how they are presented; a [`Reporter`] consumes the ordered record
//! sequence and renders it somewhere. Two implementations are provided:
//! [`ConsoleReporter`] writes an aligned text table for humans, and
//! [`CsvReporter`] writes one CSV row per record for spreadsheets and later
//! analysis. Both write to any [`std::io::Write`], which keeps them
//! testable against in-memory buffers.

use crate::record::BenchmarkRecord;
use haversack_model::num::KnapsackNumeric;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// A sink for an ordered sequence of benchmark records.
pub trait Reporter<T>
where
    T: KnapsackNumeric,
{
    /// Renders all records, in the order given.
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised by the underlying sink.
    fn report(&mut self, records: &[BenchmarkRecord<T>]) -> io::Result<()>;
}

/// Renders records as an aligned, human-readable table.
#[derive(Debug)]
pub struct ConsoleReporter<W> {
    out: W,
}

impl<W> ConsoleReporter<W>
where
    W: Write,
{
    /// Creates a reporter writing to the given sink.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consumes the reporter and returns the underlying sink.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W, T> Reporter<T> for ConsoleReporter<W>
where
    W: Write,
    T: KnapsackNumeric,
{
    fn report(&mut self, records: &[BenchmarkRecord<T>]) -> io::Result<()> {
        writeln!(
            self.out,
            "{:<20} {:>6} {:>12} {:>12} {:>12} {:>12} {:>18}",
            "Strategy", "Reps", "Total [s]", "Mean [s]", "Cur [KB]", "Peak [KB]", "Value"
        )?;

        for record in records {
            let memory = record.memory();
            writeln!(
                self.out,
                "{:<20} {:>6} {:>12.4} {:>12.6} {:>12.2} {:>12.2} {:>18}",
                record.strategy(),
                record.repetitions(),
                record.total_duration().as_secs_f64(),
                record.mean_duration().as_secs_f64(),
                memory.current_bytes as f64 / 1024.0,
                memory.peak_bytes as f64 / 1024.0,
                record.objective().to_string()
            )?;
        }

        self.out.flush()
    }
}

/// Persists records as CSV, one row per record plus a header.
#[derive(Debug)]
pub struct CsvReporter<W> {
    out: W,
}

impl<W> CsvReporter<W>
where
    W: Write,
{
    /// Creates a reporter writing CSV to the given sink.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consumes the reporter and returns the underlying sink.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl CsvReporter<BufWriter<File>> {
    /// Creates a reporter writing CSV to a freshly created file.
    ///
    /// # Errors
    ///
    /// Returns any error from creating the file.
    pub fn create<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W, T> Reporter<T> for CsvReporter<W>
where
    W: Write,
    T: KnapsackNumeric,
{
    fn report(&mut self, records: &[BenchmarkRecord<T>]) -> io::Result<()> {
        writeln!(
            self.out,
            "strategy,repetitions,total_seconds,mean_seconds,current_bytes,peak_bytes,value"
        )?;

        for record in records {
            let memory = record.memory();
            writeln!(
                self.out,
                "{},{},{:.6},{:.6},{},{},{}",
                record.strategy(),
                record.repetitions(),
                record.total_duration().as_secs_f64(),
                record.mean_duration().as_secs_f64(),
                memory.current_bytes,
                memory.peak_bytes,
                record.objective().as_f64()
            )?;
        }

        self.out.flush()
    }
}
