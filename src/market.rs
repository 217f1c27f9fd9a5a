use std::time::Duration;

use rand::Rng;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::num::round_to;

/// Peak-to-peak size of one simulated price move, USD.
pub const TICK_SPREAD: f64 = 0.3;

/// Shortest accepted tick period; `tokio::time::interval` rejects zero.
pub const MIN_TICK_PERIOD: Duration = Duration::from_millis(1);

/// One simulated market move: a uniform step in ±0.15, rounded to cents.
pub fn tick<R: Rng + ?Sized>(price: f64, rng: &mut R) -> f64 {
    let variation = (rng.gen::<f64>() - 0.5) * TICK_SPREAD;
    round_to(price + variation, 2)
}

/// Background timer that walks the spot price and publishes every move.
///
/// Dropping the ticker (or calling [`PriceTicker::stop`]) cancels the timer.
pub struct PriceTicker {
    rx: watch::Receiver<f64>,
    handle: JoinHandle<()>,
}

impl PriceTicker {
    /// Start ticking from `initial` every `period`, raised to at least
    /// [`MIN_TICK_PERIOD`]. Must be called inside a tokio runtime.
    pub fn spawn(initial: f64, period: Duration) -> Self {
        let period = period.max(MIN_TICK_PERIOD);
        let (tx, rx) = watch::channel(initial);
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            // first tick of a tokio interval completes immediately
            interval.tick().await;
            loop {
                interval.tick().await;
                let next = tick(*tx.borrow(), &mut rand::thread_rng());
                debug!(price = next, "spot price tick");
                if tx.send(next).is_err() {
                    break;
                }
            }
        });
        info!(initial, period_ms = period.as_millis() as u64, "price ticker started");
        Self { rx, handle }
    }

    pub fn current(&self) -> f64 {
        *self.rx.borrow()
    }

    /// A receiver that sees every subsequent price.
    pub fn subscribe(&self) -> watch::Receiver<f64> {
        self.rx.clone()
    }

    pub fn stop(self) {
        drop(self);
    }
}

impl Drop for PriceTicker {
    fn drop(&mut self) {
        self.handle.abort();
        debug!("price ticker stopped");
    }
}
