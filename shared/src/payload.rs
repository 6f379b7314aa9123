//! Scannable payload
//!
//! The structured data embedded in the ticket's QR code. Serialized as
//! JSON so any third-party reader recovers discrete fields rather than
//! free text.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Ticket;

/// Field set carried inside the scannable code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScanPayload {
    pub ticket_id: String,
    pub event_name: String,
    pub attendee_name: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub artist: String,
    pub wave: String,
    pub price_per_ticket: Decimal,
    pub total_price: Decimal,
}

impl ScanPayload {
    pub fn from_ticket(ticket: &Ticket) -> Self {
        Self {
            ticket_id: ticket.ticket_id.clone(),
            event_name: ticket.event.title.clone(),
            attendee_name: ticket.attendee_name.clone(),
            date: ticket.event.date.clone(),
            time: ticket.event.time.clone(),
            location: ticket.event.location.clone(),
            artist: ticket.event.artist.clone(),
            wave: ticket.wave_name.clone(),
            price_per_ticket: ticket.unit_price,
            total_price: ticket.total_price,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EventDetails;

    fn ticket() -> Ticket {
        Ticket {
            ticket_id: "TK-1042".to_string(),
            attendee_name: "Abebe Bikila".to_string(),
            email: "abebe@example.com".to_string(),
            phone: "+251 911 000000".to_string(),
            ticket_count: 2,
            unit_price: Decimal::from(700),
            total_price: Decimal::from(1400),
            wave_name: "Second Wave".to_string(),
            booked_on: "08 Mar 2026".to_string(),
            event: EventDetails {
                title: "Marquee Live 2026".to_string(),
                date: "March 14, 2026".to_string(),
                time: "7:00 PM - 11:00 PM".to_string(),
                location: "Friendship Park, Addis Ababa".to_string(),
                artist: "ISAAC-ADDISU".to_string(),
                description: String::new(),
                base_price: Decimal::from(500),
                currency: "ETB".to_string(),
            },
            qr_png: None,
        }
    }

    #[test]
    fn json_round_trip_recovers_every_field() {
        let payload = ScanPayload::from_ticket(&ticket());
        let json = payload.to_json().unwrap();
        let back = ScanPayload::from_json(&json).unwrap();

        assert_eq!(back, payload);
        assert_eq!(back.ticket_id, "TK-1042");
        assert_eq!(back.attendee_name, "Abebe Bikila");
        assert_eq!(back.wave, "Second Wave");
        assert_eq!(back.price_per_ticket, Decimal::from(700));
        assert_eq!(back.total_price, Decimal::from(1400));
    }

    #[test]
    fn payload_is_structured_not_free_text() {
        let payload = ScanPayload::from_ticket(&ticket());
        let json = payload.to_json().unwrap();

        // any JSON-capable reader must see discrete keys
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value.get("ticketId").is_some());
        assert!(value.get("eventName").is_some());
        assert!(value.get("pricePerTicket").is_some());
        assert!(value.get("totalPrice").is_some());
    }
}
