//! Ticket wave model
//!
//! A wave is a time-boxed pricing tier. Waves are configured in ascending
//! chronological order and never change for the process lifetime.

use chrono::{DateTime, FixedOffset, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A named sale window with its unit price.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TicketWave {
    pub id: String,
    pub name: String,
    /// Human-readable sale window, e.g. "Feb 21, 2026 - Mar 7, 2026"
    pub label: String,
    pub price: Decimal,
    /// Window start, inclusive
    pub starts_at: DateTime<FixedOffset>,
    /// Window end, inclusive
    pub ends_at: DateTime<FixedOffset>,
}

impl TicketWave {
    /// Whether `at` falls inside the sale window, both ends inclusive.
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        at >= self.starts_at && at <= self.ends_at
    }
}
