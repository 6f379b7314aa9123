//! Domain models

pub mod booking;
pub mod event;
pub mod reservation;
pub mod ticket;
pub mod wave;

pub use booking::{BookingInput, ValidationError};
pub use event::EventDetails;
pub use reservation::ReservationResult;
pub use ticket::Ticket;
pub use wave::TicketWave;
