//! Wire types for the reservation RPC
//!
//! Depending on the deployment, the procedure returns a single record or a
//! one-element array, and ticket identifiers arrive as strings or numbers.
//! Both are accepted here and normalized before the result leaves this
//! crate.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use shared::ReservationResult;

/// Request body of `reserve_ticket`
#[derive(Debug, Serialize)]
pub(crate) struct ReserveRequest<'a> {
    pub p_full_name: &'a str,
    pub p_email: &'a str,
    pub p_phone: &'a str,
    pub p_tickets: u32,
}

/// One reservation row as the service sends it
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ReservationRow {
    #[serde(default, deserialize_with = "string_or_number")]
    pub ticket_id: Option<String>,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub wave_id: Option<String>,
    #[serde(default)]
    pub unit_price_etb: Option<Decimal>,
    #[serde(default)]
    pub total_price_etb: Option<Decimal>,
}

/// A record or an array of records, depending on the RPC return type
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum RpcRows {
    One(ReservationRow),
    Many(Vec<ReservationRow>),
}

impl RpcRows {
    /// First row, if any.
    pub fn into_first(self) -> Option<ReservationRow> {
        match self {
            RpcRows::One(row) => Some(row),
            RpcRows::Many(rows) => rows.into_iter().next(),
        }
    }
}

impl From<ReservationRow> for ReservationResult {
    fn from(row: ReservationRow) -> Self {
        Self {
            ticket_id: row.ticket_id,
            full_name: row.full_name,
            email: row.email,
            phone: row.phone,
            wave_id: row.wave_id,
            unit_price: row.unit_price_etb,
            total_price: row.total_price_etb,
        }
    }
}

/// Numeric database ids are carried as strings from here on.
fn string_or_number<'de, D>(de: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        S(String),
        N(i64),
    }

    Ok(Option::<Raw>::deserialize(de)?.map(|raw| match raw {
        Raw::S(s) => s,
        Raw::N(n) => n.to_string(),
    }))
}
