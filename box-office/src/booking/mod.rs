//! Booking flow

pub mod assemble;
pub mod service;

pub use assemble::{assemble, wave_display_name};
pub use service::{BookingError, BookingService, QrScanEncoder, ReservationApi, ScanEncoder};
