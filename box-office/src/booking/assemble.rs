//! Ticket assembly
//!
//! Builds the canonical ticket from a confirmed reservation. Assembly is
//! never reached when the reservation failed; the caller surfaces the
//! failure and keeps the form input.

use chrono::{DateTime, Local};
use shared::{BookingInput, EventDetails, ReservationResult, Ticket, TicketWave};

use crate::pricing::PriceBreakdown;

/// Display name for a reservation's wave: the configured name, the raw
/// identifier when it is not in the table, a generic label when absent.
pub fn wave_display_name(waves: &[TicketWave], wave_id: Option<&str>) -> String {
    match wave_id {
        Some(id) => waves
            .iter()
            .find(|w| w.id == id)
            .map(|w| w.name.clone())
            .unwrap_or_else(|| id.to_string()),
        None => "Wave".to_string(),
    }
}

/// Build the ticket record.
///
/// The ticket count shown is always the visitor-submitted quantity; the
/// service is not assumed to echo it back. The booking date is captured
/// here, at assembly time, not on the server.
pub fn assemble(
    ticket_id: String,
    reservation: &ReservationResult,
    input: &BookingInput,
    event: &EventDetails,
    waves: &[TicketWave],
    price: PriceBreakdown,
    booked_at: DateTime<Local>,
) -> Ticket {
    Ticket {
        ticket_id,
        attendee_name: reservation.full_name.clone(),
        email: reservation.email.clone(),
        phone: reservation.phone.clone(),
        ticket_count: input.ticket_count,
        unit_price: price.unit,
        total_price: price.total,
        wave_name: wave_display_name(waves, reservation.wave_id.as_deref()),
        booked_on: booked_at.format("%d %b %Y").to_string(),
        event: event.clone(),
        qr_png: None,
    }
}
