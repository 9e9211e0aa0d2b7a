//! Pacing between consecutive search calls.
//!
//! Queries are issued one at a time with a pause between them. The
//! aggregator only sees [`Pacer`]; [`FixedDelay`] is the default.

use std::future::Future;
use std::time::Duration;

/// Waits between two consecutive upstream calls.
pub trait Pacer {
    /// Called once before every query except the first.
    fn pause(&mut self) -> impl Future<Output = ()> + Send;
}

/// Sleeps for a fixed interval before each query after the first.
#[derive(Debug, Clone, Copy)]
pub struct FixedDelay {
    interval: Duration,
}

impl FixedDelay {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Pacer for FixedDelay {
    fn pause(&mut self) -> impl Future<Output = ()> + Send {
        let interval = self.interval;
        async move {
            if !interval.is_zero() {
                tokio::time::sleep(interval).await;
            }
        }
    }
}
