//! User-facing notices
//!
//! Every collaborator failure is converted to a notice at the boundary
//! where it occurred; nothing propagates uncaught into the kiosk loop.

/// A user-visible notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    BookingConfirmed { ticket_id: String },
    MissingInformation { detail: String },
    SalesClosed,
    BookingFailed,
    TicketSaved { path: String },
    SnapshotFailed,
}

impl Notice {
    pub fn title(&self) -> &'static str {
        match self {
            Notice::BookingConfirmed { .. } => "Booking Successful!",
            Notice::MissingInformation { .. } => "Missing Information",
            Notice::SalesClosed | Notice::BookingFailed => "Booking Failed",
            Notice::TicketSaved { .. } => "Ticket Downloaded!",
            Notice::SnapshotFailed => "Error",
        }
    }

    pub fn body(&self) -> String {
        match self {
            Notice::BookingConfirmed { ticket_id } => {
                format!("Your ticket has been saved. Ticket ID: {ticket_id}")
            }
            Notice::MissingInformation { detail } => {
                format!("Please fill in all required fields. {detail}")
            }
            Notice::SalesClosed => {
                "Ticket sales are currently closed. Please check back later.".to_string()
            }
            Notice::BookingFailed => {
                "There was an error saving your ticket. Please try again.".to_string()
            }
            Notice::TicketSaved { path } => {
                format!("Your ticket image has been saved to {path}")
            }
            Notice::SnapshotFailed => "Failed to generate the ticket image.".to_string(),
        }
    }
}

/// Sink for user-visible notices.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: &Notice);
}

/// Notifier that writes through the log pipeline.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notice: &Notice) {
        match notice {
            Notice::MissingInformation { .. }
            | Notice::SalesClosed
            | Notice::BookingFailed
            | Notice::SnapshotFailed => {
                tracing::warn!(title = notice.title(), "{}", notice.body());
            }
            Notice::BookingConfirmed { .. } | Notice::TicketSaved { .. } => {
                tracing::info!(title = notice.title(), "{}", notice.body());
            }
        }
    }
}
