//! Marquee Box Office
//!
//! Kiosk application for reserving event tickets: wave pricing, the
//! booking flow against the reservation service, and ticket artifact
//! output.

pub mod booking;
pub mod config;
pub mod counter;
pub mod notify;
pub mod pricing;
pub mod tasks;

pub use booking::{BookingError, BookingService};
pub use config::{AppConfig, ConfigError, PriceMode};
pub use notify::{LogNotifier, Notice, Notifier};
pub use tasks::{PriceQuote, PriceTicker};
