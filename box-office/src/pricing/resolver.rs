//! Wave resolution
//!
//! Pure selection of the active sale window. No I/O and no clock access;
//! the instant is a parameter so boundary crossings are testable.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use shared::TicketWave;

/// First wave whose window contains `at`, both ends inclusive.
///
/// Waves are checked in listed order. Overlapping windows are a
/// configuration error, but the behavior is defined: the earliest listed
/// match wins.
pub fn resolve_wave(waves: &[TicketWave], at: DateTime<Utc>) -> Option<&TicketWave> {
    waves.iter().find(|wave| wave.contains(at))
}

/// Unit price shown to the visitor: the active wave's price, or the event
/// default when sales are closed.
pub fn estimate_unit_price(
    waves: &[TicketWave],
    default_price: Decimal,
    at: DateTime<Utc>,
) -> Decimal {
    resolve_wave(waves, at).map(|w| w.price).unwrap_or(default_price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

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
        vec![
            make_wave("first", 500, "2026-02-21T00:00:00+03:00", "2026-03-07T23:59:59+03:00"),
            make_wave("second", 700, "2026-03-08T00:00:00+03:00", "2026-03-13T23:59:59+03:00"),
            make_wave("third", 1000, "2026-03-14T00:00:00+03:00", "2026-03-14T23:59:59+03:00"),
        ]
    }

    fn at(rfc3339: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(rfc3339).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn instant_inside_a_window_resolves_to_that_wave() {
        let waves = waves();

        let wave = resolve_wave(&waves, at("2026-03-01T12:00:00+03:00")).unwrap();
        assert_eq!(wave.id, "first");

        let wave = resolve_wave(&waves, at("2026-03-10T09:30:00+03:00")).unwrap();
        assert_eq!(wave.id, "second");
    }

    #[test]
    fn window_boundaries_are_inclusive() {
        let waves = waves();

        let wave = resolve_wave(&waves, at("2026-03-08T00:00:00+03:00")).unwrap();
        assert_eq!(wave.id, "second");

        let wave = resolve_wave(&waves, at("2026-03-13T23:59:59+03:00")).unwrap();
        assert_eq!(wave.id, "second");
    }

    #[test]
    fn outside_every_window_is_closed_and_priced_at_default() {
        let waves = waves();
        let before = at("2026-02-20T23:59:59+03:00");
        let after = at("2026-03-15T00:00:00+03:00");

        assert!(resolve_wave(&waves, before).is_none());
        assert!(resolve_wave(&waves, after).is_none());

        let default_price = Decimal::from(500);
        assert_eq!(estimate_unit_price(&waves, default_price, after), default_price);
    }

    #[test]
    fn overlapping_windows_resolve_to_the_earliest_listed() {
        // both cover March 10th; deliberate configuration error
        let overlapping = vec![
            make_wave("early", 500, "2026-03-01T00:00:00+03:00", "2026-03-20T23:59:59+03:00"),
            make_wave("late", 700, "2026-03-05T00:00:00+03:00", "2026-03-25T23:59:59+03:00"),
        ];

        let wave = resolve_wave(&overlapping, at("2026-03-10T12:00:00+03:00")).unwrap();
        assert_eq!(wave.id, "early");

        // still the earliest when listed the other way around
        let reversed: Vec<TicketWave> = overlapping.into_iter().rev().collect();
        let wave = resolve_wave(&reversed, at("2026-03-10T12:00:00+03:00")).unwrap();
        assert_eq!(wave.id, "late");
    }

    #[test]
    fn active_wave_price_wins_over_default() {
        let waves = waves();
        let price = estimate_unit_price(&waves, Decimal::from(500), at("2026-03-14T10:00:00+03:00"));
        assert_eq!(price, Decimal::from(1000));
    }

    #[test]
    fn empty_wave_table_always_uses_default() {
        let now = chrono::Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();
        assert!(resolve_wave(&[], now).is_none());
        assert_eq!(estimate_unit_price(&[], Decimal::from(500), now), Decimal::from(500));
    }
}
