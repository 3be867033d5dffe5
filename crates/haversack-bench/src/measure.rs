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

//! Scoped resident-set memory measurement.
//!
//! The harness needs to attribute a memory high-water mark to exactly one
//! solver invocation at a time. [`MemorySampler`] is that capability: it is
//! acquired before a solver runs, started, and stopped afterwards, yielding
//! the current and peak resident-set growth observed while it was active.
//! There is no global state; every measurement scope owns its own sampler.
//!
//! Readings come from `/proc/self/statm`, whose second field is the
//! resident set in pages. While the sampler is running, a background thread
//! polls that file every millisecond and folds the readings into an atomic
//! maximum. The baseline taken at creation is subtracted from both reported
//! numbers, so they describe growth attributable to the measured scope, not
//! the absolute process footprint.
//!
//! On platforms without procfs the sampler degrades gracefully: readings
//! become zero and a warning is logged once per sampler. The one-millisecond
//! cadence also bounds resolution — allocations shorter than a poll
//! interval can be missed — which is acceptable for the second-long solver
//! runs this workspace measures.

use std::fs;
use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::thread::JoinHandle;
use std::time::Duration;

/// Bytes per page assumed when converting `statm` readings.
///
/// Linux reports `statm` in pages; 4 KiB pages are assumed here, matching
/// the common configuration on the platforms this tool targets.
const PAGE_SIZE_BYTES: usize = 4096;

/// How often the background thread samples the resident set.
const SAMPLE_INTERVAL: Duration = Duration::from_millis(1);

/// Memory usage observed over one measurement scope, in bytes of
/// resident-set growth relative to the sampler's creation baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MemoryUsage {
    /// Resident-set growth at the end of the scope.
    pub current_bytes: usize,
    /// The high-water mark of resident-set growth during the scope.
    pub peak_bytes: usize,
}

/// Reads the resident set size of the current process, in bytes.
fn resident_bytes() -> io::Result<usize> {
    let statm = fs::read_to_string("/proc/self/statm")?;
    let resident_pages: usize = statm
        .split_whitespace()
        .nth(1)
        .ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidData, "statm is missing the resident field")
        })?
        .parse()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    Ok(resident_pages * PAGE_SIZE_BYTES)
}

/// A scoped sampler for the process resident-set high-water mark.
///
/// Create one per measurement scope, call [`start`](Self::start) before the
/// measured work and [`stop`](Self::stop) after it. Dropping a started
/// sampler without stopping it shuts the background thread down without
/// producing a reading.
#[derive(Debug)]
pub struct MemorySampler {
    baseline_bytes: usize,
    peak_bytes: Arc<AtomicUsize>,
    stop_flag: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl MemorySampler {
    /// Creates a sampler and records the current resident set as the
    /// baseline all readings are reported against.
    pub fn new() -> Self {
        let baseline_bytes = match resident_bytes() {
            Ok(bytes) => bytes,
            Err(e) => {
                log::warn!("resident-set sampling unavailable, reporting zeros: {}", e);
                0
            }
        };

        Self {
            baseline_bytes,
            peak_bytes: Arc::new(AtomicUsize::new(0)),
            stop_flag: Arc::new(AtomicBool::new(false)),
            handle: None,
        }
    }

    /// Starts the background sampling thread.
    ///
    /// # Panics
    ///
    /// Panics if the sampler was already started.
    pub fn start(&mut self) {
        assert!(
            self.handle.is_none(),
            "called `MemorySampler::start` on a sampler that is already running"
        );

        let peak_bytes = Arc::clone(&self.peak_bytes);
        let stop_flag = Arc::clone(&self.stop_flag);

        self.handle = Some(std::thread::spawn(move || {
            while !stop_flag.load(Ordering::Relaxed) {
                if let Ok(bytes) = resident_bytes() {
                    peak_bytes.fetch_max(bytes, Ordering::Relaxed);
                }
                std::thread::sleep(SAMPLE_INTERVAL);
            }
        }));
    }

    /// Stops sampling and returns the usage observed during the scope.
    ///
    /// Takes one final reading so short scopes that ended between polls
    /// still report their end state.
    pub fn stop(mut self) -> MemoryUsage {
        self.stop_flag.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            // The sampling thread only sleeps briefly; a join is cheap.
            let _ = handle.join();
        }

        let current = resident_bytes().unwrap_or(0);
        let peak = self.peak_bytes.load(Ordering::Relaxed).max(current);

        MemoryUsage {
            current_bytes: current.saturating_sub(self.baseline_bytes),
            peak_bytes: peak.saturating_sub(self.baseline_bytes),
        }
    }
}

impl Default for MemorySampler {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for MemorySampler {
    fn drop(&mut self) {
        self.stop_flag.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{MemorySampler, MemoryUsage};

    #[test]
    fn stop_without_start_reports_without_panicking() {
        let sampler = MemorySampler::new();
        let usage = sampler.stop();
        // With no samples taken, the final reading is both current and peak.
        assert_eq!(usage.peak_bytes, usage.current_bytes);
    }

    #[test]
    fn peak_is_never_below_current() {
        let mut sampler = MemorySampler::new();
        sampler.start();
        // Allocate something visible while the sampler runs.
        let block = vec![0u8; 8 * 1024 * 1024];
        std::thread::sleep(std::time::Duration::from_millis(10));
        let usage = sampler.stop();
        drop(block);

        assert!(usage.peak_bytes >= usage.current_bytes);
    }

    #[test]
    fn default_usage_is_zeroed() {
        assert_eq!(
            MemoryUsage::default(),
            MemoryUsage {
                current_bytes: 0,
                peak_bytes: 0
            }
        );
    }

    #[test]
    #[should_panic(expected = "already running")]
    fn double_start_is_a_programmer_error() {
        let mut sampler = MemorySampler::new();
        sampler.start();
        sampler.start();
    }
}
