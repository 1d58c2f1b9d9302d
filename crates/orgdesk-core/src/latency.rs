//! Artificial response latency for the in-process backend.

use std::time::Duration;

use rand::Rng;

/// Inclusive range of milliseconds an operation sleeps before resolving.
///
/// Stands in for network round-trips so that the console's busy flags
/// are observable. [`SimulatedLatency::none`] disables the delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedLatency {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl SimulatedLatency {
    pub const fn none() -> Self {
        Self {
            min_ms: 0,
            max_ms: 0,
        }
    }

    pub const fn fixed(ms: u64) -> Self {
        Self {
            min_ms: ms,
            max_ms: ms,
        }
    }

    pub const fn between(min_ms: u64, max_ms: u64) -> Self {
        Self { min_ms, max_ms }
    }

    /// Pick a delay inside the configured range.
    pub fn sample(&self) -> Duration {
        let (lo, hi) = if self.min_ms <= self.max_ms {
            (self.min_ms, self.max_ms)
        } else {
            (self.max_ms, self.min_ms)
        };
        if lo == hi {
            return Duration::from_millis(lo);
        }
        Duration::from_millis(rand::rng().random_range(lo..=hi))
    }

    /// Sleep for a sampled delay. Returns immediately when disabled.
    pub async fn pause(&self) {
        let delay = self.sample();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

impl Default for SimulatedLatency {
    fn default() -> Self {
        Self::between(600, 800)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_stays_in_range() {
        let latency = SimulatedLatency::between(600, 800);
        for _ in 0..100 {
            let ms = latency.sample().as_millis() as u64;
            assert!((600..=800).contains(&ms), "sampled {ms}");
        }
    }

    #[test]
    fn reversed_bounds_are_normalized() {
        let ms = SimulatedLatency::between(20, 10).sample().as_millis() as u64;
        assert!((10..=20).contains(&ms));
    }

    #[tokio::test]
    async fn none_does_not_sleep() {
        let start = std::time::Instant::now();
        SimulatedLatency::none().pause().await;
        assert!(start.elapsed() < Duration::from_millis(50));
    }
}
