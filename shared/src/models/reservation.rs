//! Normalized reservation result

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Result of the remote reservation call, after boundary normalization.
///
/// Price fields are authoritative whenever present; the locally computed
/// estimate is a display hint only and must be overridden by them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationResult {
    /// Service-assigned ticket identifier. Authoritative when present.
    pub ticket_id: Option<String>,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    /// Wave the service charged for, when it resolves waves itself
    pub wave_id: Option<String>,
    /// Unit price actually charged
    pub unit_price: Option<Decimal>,
    /// Total price actually charged
    pub total_price: Option<Decimal>,
}
