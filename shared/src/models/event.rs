//! Event metadata

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Denormalized event details shown on the ticket.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventDetails {
    pub title: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub artist: String,
    #[serde(default)]
    pub description: String,
    /// Unit price shown when no wave is active
    pub base_price: Decimal,
    /// ISO 4217 currency code, e.g. "ETB"
    pub currency: String,
}
