//! Price refresh task
//!
//! Recomputes the active wave once per second and publishes the quote, so
//! a window boundary crossing updates the displayed price while the kiosk
//! stays open. The task is explicitly owned and cancellable; dropping the
//! ticker stops it rather than leaking a recurring task.

use std::time::Duration;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use shared::TicketWave;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::pricing::resolver::{estimate_unit_price, resolve_wave};

/// Interval between recomputations
const REFRESH_INTERVAL: Duration = Duration::from_secs(1);

/// The currently displayed price.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceQuote {
    /// Active wave, `None` when sales are closed
    pub wave_id: Option<String>,
    pub wave_name: Option<String>,
    pub wave_label: Option<String>,
    pub unit_price: Decimal,
}

impl PriceQuote {
    pub fn sales_open(&self) -> bool {
        self.wave_id.is_some()
    }
}

/// Quote for an instant.
pub fn quote_at(waves: &[TicketWave], default_price: Decimal, at: DateTime<Utc>) -> PriceQuote {
    let wave = resolve_wave(waves, at);
    PriceQuote {
        wave_id: wave.map(|w| w.id.clone()),
        wave_name: wave.map(|w| w.name.clone()),
        wave_label: wave.map(|w| w.label.clone()),
        unit_price: estimate_unit_price(waves, default_price, at),
    }
}

/// Owned background task publishing `PriceQuote` updates.
pub struct PriceTicker {
    rx: watch::Receiver<PriceQuote>,
    cancel: CancellationToken,
    handle: Option<JoinHandle<()>>,
}

impl PriceTicker {
    /// Spawn the refresh task on the current runtime.
    pub fn spawn(waves: Vec<TicketWave>, default_price: Decimal) -> Self {
        let cancel = CancellationToken::new();
        let (tx, rx) = watch::channel(quote_at(&waves, default_price, Utc::now()));

        let token = cancel.clone();
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(REFRESH_INTERVAL);
            loop {
                tokio::select! {
                    _ = token.cancelled() => {
                        tracing::debug!("Price ticker stopped");
                        break;
                    }
                    _ = ticker.tick() => {
                        let quote = quote_at(&waves, default_price, Utc::now());
                        // publish on change only
                        tx.send_if_modified(|current| {
                            if *current == quote {
                                false
                            } else {
                                *current = quote;
                                true
                            }
                        });
                    }
                }
            }
        });

        Self {
            rx,
            cancel,
            handle: Some(handle),
        }
    }

    /// Receiver for price updates.
    pub fn subscribe(&self) -> watch::Receiver<PriceQuote> {
        self.rx.clone()
    }

    /// Latest quote.
    pub fn current(&self) -> PriceQuote {
        self.rx.borrow().clone()
    }

    /// Stop the task and wait for it to finish.
    pub async fn stop(mut self) {
        self.cancel.cancel();
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for PriceTicker {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
