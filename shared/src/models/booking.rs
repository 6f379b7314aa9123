//! Booking form input

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ticket quantity bounds per booking
pub const MIN_TICKETS: u32 = 1;
pub const MAX_TICKETS: u32 = 10;

/// Rejected booking input
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    #[error("Ticket count must be between {MIN_TICKETS} and {MAX_TICKETS}, got {0}")]
    TicketCountOutOfRange(u32),
}

/// Attendee-provided booking form data.
///
/// Ephemeral: kept for a retry when the reservation fails, discarded after
/// a successful booking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingInput {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub ticket_count: u32,
}

impl BookingInput {
    /// Check the form before any network call is made.
    ///
    /// Not a full RFC 5322 parse; rejects empty fields and obvious email
    /// typos only. The service performs its own validation.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.full_name.trim().is_empty() {
            return Err(ValidationError::MissingField("full_name"));
        }
        if self.email.trim().is_empty() {
            return Err(ValidationError::MissingField("email"));
        }
        let email = self.email.trim();
        if !email.contains('@') || email.starts_with('@') || email.ends_with('@') {
            return Err(ValidationError::InvalidEmail(self.email.clone()));
        }
        if self.phone.trim().is_empty() {
            return Err(ValidationError::MissingField("phone"));
        }
        if !(MIN_TICKETS..=MAX_TICKETS).contains(&self.ticket_count) {
            return Err(ValidationError::TicketCountOutOfRange(self.ticket_count));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> BookingInput {
        BookingInput {
            full_name: "Abebe Bikila".to_string(),
            email: "abebe@example.com".to_string(),
            phone: "+251 911 000000".to_string(),
            ticket_count: 2,
        }
    }

    #[test]
    fn accepts_complete_input() {
        assert!(input().validate().is_ok());
    }

    #[test]
    fn rejects_blank_required_fields() {
        let mut i = input();
        i.full_name = "   ".to_string();
        assert_eq!(i.validate(), Err(ValidationError::MissingField("full_name")));

        let mut i = input();
        i.phone = String::new();
        assert_eq!(i.validate(), Err(ValidationError::MissingField("phone")));
    }

    #[test]
    fn rejects_malformed_email() {
        let mut i = input();
        i.email = "abebe.example.com".to_string();
        assert!(matches!(i.validate(), Err(ValidationError::InvalidEmail(_))));
    }

    #[test]
    fn ticket_count_is_bounded() {
        let mut i = input();
        i.ticket_count = 0;
        assert_eq!(i.validate(), Err(ValidationError::TicketCountOutOfRange(0)));

        i.ticket_count = 11;
        assert_eq!(i.validate(), Err(ValidationError::TicketCountOutOfRange(11)));

        i.ticket_count = 10;
        assert!(i.validate().is_ok());
    }
}
