//! Price resolution strategies
//!
//! The reservation service comes in two variants: one assigns wave and
//! price itself, the other performs a plain insert and leaves pricing to
//! the client. One trait covers both so the booking flow never branches
//! on deployment.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use shared::{BookingInput, ReservationResult, TicketWave};

use super::resolver::estimate_unit_price;
use crate::config::PriceMode;

/// Resolved unit and total price for one booking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceBreakdown {
    pub unit: Decimal,
    pub total: Decimal,
}

/// How the charged price is determined once a reservation is confirmed.
pub trait PriceResolution: Send + Sync {
    fn resolve(
        &self,
        reservation: &ReservationResult,
        input: &BookingInput,
        waves: &[TicketWave],
        default_price: Decimal,
        at: DateTime<Utc>,
    ) -> PriceBreakdown;
}

/// Prefer the prices the service charged; estimate only when absent.
#[derive(Debug, Default)]
pub struct RemoteAuthoritative;

impl PriceResolution for RemoteAuthoritative {
    fn resolve(
        &self,
        reservation: &ReservationResult,
        input: &BookingInput,
        waves: &[TicketWave],
        default_price: Decimal,
        at: DateTime<Utc>,
    ) -> PriceBreakdown {
        let unit = reservation
            .unit_price
            .unwrap_or_else(|| estimate_unit_price(waves, default_price, at));
        let total = reservation
            .total_price
            .unwrap_or_else(|| unit * Decimal::from(input.ticket_count));

        PriceBreakdown { unit, total }
    }
}

/// Always compute client-side, for plain-insert backends.
#[derive(Debug, Default)]
pub struct LocalEstimate;

impl PriceResolution for LocalEstimate {
    fn resolve(
        &self,
        _reservation: &ReservationResult,
        input: &BookingInput,
        waves: &[TicketWave],
        default_price: Decimal,
        at: DateTime<Utc>,
    ) -> PriceBreakdown {
        let unit = estimate_unit_price(waves, default_price, at);
        PriceBreakdown {
            unit,
            total: unit * Decimal::from(input.ticket_count),
        }
    }
}

/// Strategy for the configured mode.
pub fn strategy_for(mode: PriceMode) -> Box<dyn PriceResolution> {
    match mode {
        PriceMode::Remote => Box::new(RemoteAuthoritative),
        PriceMode::Local => Box::new(LocalEstimate),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_wave(id: &str, price: i64, starts_at: &str, ends_at: &str) -> TicketWave {
        TicketWave {
            id: id.to_string(),
            name: format!("{id} wave"),
            label: String::new(),
            price: Decimal::from(price),
            starts_at: DateTime::parse_from_rfc3339(starts_at).unwrap(),
            ends_at: DateTime::parse_from_rfc3339(ends_at).unwrap(),
        }
    }

    fn waves() -> Vec<TicketWave> {
        vec![make_wave(
            "first",
            500,
            "2026-02-21T00:00:00+03:00",
            "2026-03-07T23:59:59+03:00",
        )]
    }

    fn input(ticket_count: u32) -> BookingInput {
        BookingInput {
            full_name: "Abebe Bikila".to_string(),
            email: "abebe@example.com".to_string(),
            phone: "+251 911 000000".to_string(),
            ticket_count,
        }
    }

    fn reservation(unit: Option<i64>, total: Option<i64>) -> ReservationResult {
        ReservationResult {
            ticket_id: Some("TK-1".to_string()),
            full_name: "Abebe Bikila".to_string(),
            email: "abebe@example.com".to_string(),
            phone: "+251 911 000000".to_string(),
            wave_id: Some("second".to_string()),
            unit_price: unit.map(Decimal::from),
            total_price: total.map(Decimal::from),
        }
    }

    fn during_first_wave() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2026-03-01T12:00:00+03:00")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn service_prices_are_never_recomputed() {
        // the wave active right now says 500, the service charged 700/1400
        let price = RemoteAuthoritative.resolve(
            &reservation(Some(700), Some(1400)),
            &input(2),
            &waves(),
            Decimal::from(500),
            during_first_wave(),
        );

        assert_eq!(price.unit, Decimal::from(700));
        assert_eq!(price.total, Decimal::from(1400));
    }

    #[test]
    fn missing_service_prices_fall_back_to_the_estimate() {
        let price = RemoteAuthoritative.resolve(
            &reservation(None, None),
            &input(3),
            &waves(),
            Decimal::from(500),
            during_first_wave(),
        );

        assert_eq!(price.unit, Decimal::from(500));
        assert_eq!(price.total, Decimal::from(1500));
    }

    #[test]
    fn local_estimate_ignores_service_prices() {
        let price = LocalEstimate.resolve(
            &reservation(Some(700), Some(1400)),
            &input(3),
            &waves(),
            Decimal::from(500),
            during_first_wave(),
        );

        assert_eq!(price.unit, Decimal::from(500));
        assert_eq!(price.total, Decimal::from(1500));
    }

    #[test]
    fn closed_sale_estimates_at_the_default_price() {
        let after = DateTime::parse_from_rfc3339("2026-06-01T00:00:00+03:00")
            .unwrap()
            .with_timezone(&Utc);

        let price = LocalEstimate.resolve(
            &reservation(None, None),
            &input(2),
            &waves(),
            Decimal::from(500),
            after,
        );

        assert_eq!(price.unit, Decimal::from(500));
        assert_eq!(price.total, Decimal::from(1000));
    }
}
