//! Wall-clock timestamps for hosts without event times.

use web_time::Instant;

/// Produces millisecond timestamps for pointer samples.
///
/// Hosts whose input events already carry timestamps should pass those
/// through instead; this exists for adapters that only learn about events
/// as they arrive. Works on both native and wasm targets.
#[derive(Clone, Debug)]
pub struct SampleClock {
    origin: Instant,
}

impl SampleClock {
    pub fn start() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    /// Milliseconds elapsed since the clock started.
    pub fn now_ms(&self) -> i64 {
        self.origin.elapsed().as_millis() as i64
    }
}
