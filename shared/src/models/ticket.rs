//! Canonical ticket artifact

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::event::EventDetails;

/// The assembled ticket.
///
/// Created once per confirmed reservation, immutable afterwards, and held
/// in memory only until the visitor saves the artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    pub ticket_id: String,
    pub attendee_name: String,
    pub email: String,
    pub phone: String,
    /// Always the visitor-submitted quantity
    pub ticket_count: u32,
    pub unit_price: Decimal,
    pub total_price: Decimal,
    pub wave_name: String,
    /// Formatted at assembly time on the client, not on the server
    pub booked_on: String,
    pub event: EventDetails,
    /// PNG bytes of the scannable code; `None` when encoding failed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qr_png: Option<Vec<u8>>,
}
