//! Wave pricing
//!
//! Selection of the active sale window and resolution of the price a
//! booking is charged.

pub mod resolver;
pub mod strategy;

pub use resolver::{estimate_unit_price, resolve_wave};
pub use strategy::{LocalEstimate, PriceBreakdown, PriceResolution, RemoteAuthoritative, strategy_for};
