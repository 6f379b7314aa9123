//! Shared types for the Marquee box office
//!
//! Domain models and the scannable payload used across the client,
//! rendering and application crates.

pub mod models;
pub mod payload;

// Re-exports
pub use models::{BookingInput, EventDetails, ReservationResult, Ticket, TicketWave};
pub use payload::ScanPayload;

pub use serde::{Deserialize, Serialize};
