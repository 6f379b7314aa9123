//! HTTP client for the reservation service

use reqwest::{Client, StatusCode};
use shared::{BookingInput, ReservationResult};

use crate::config::ClientConfig;
use crate::error::{ReserveError, ReserveResult};
use crate::wire::{ReserveRequest, RpcRows};

/// Message the service uses to reject bookings outside every sale window.
const NOT_ON_SALE: &str = "Tickets not on sale";

/// HTTP client for the remote reservation procedure.
#[derive(Debug, Clone)]
pub struct ReservationClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl ReservationClient {
    /// Create a new client from configuration.
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        }
    }

    /// Reserve tickets for the given booking input.
    ///
    /// The returned record is normalized: a one-element array from the
    /// service is unwrapped and numeric ids become strings. An empty
    /// result is an error, not a ticket.
    pub async fn reserve(&self, input: &BookingInput) -> ReserveResult<ReservationResult> {
        let url = format!("{}/rpc/reserve_ticket", self.base_url.trim_end_matches('/'));
        let body = ReserveRequest {
            p_full_name: &input.full_name,
            p_email: &input.email,
            p_phone: &input.phone,
            p_tickets: input.ticket_count,
        };

        let mut request = self.client.post(&url).json(&body);
        if let Some(key) = &self.api_key {
            request = request.header(reqwest::header::AUTHORIZATION, format!("Bearer {}", key));
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            return Err(Self::map_rejection(status, text));
        }

        let rows: RpcRows = response.json().await?;
        let row = rows
            .into_first()
            .ok_or_else(|| ReserveError::InvalidResponse("Empty reservation result".to_string()))?;

        tracing::debug!(ticket_id = ?row.ticket_id, wave_id = ?row.wave_id, "Reservation confirmed");

        Ok(row.into())
    }

    /// Map a non-success response to an error, distinguishing the closed
    /// sale signal from generic rejections.
    fn map_rejection(status: StatusCode, text: String) -> ReserveError {
        // The message may arrive bare or wrapped in a JSON error object.
        let message = serde_json::from_str::<serde_json::Value>(&text)
            .ok()
            .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
            .unwrap_or(text);

        if message.contains(NOT_ON_SALE) {
            ReserveError::SalesClosed
        } else if message.trim().is_empty() {
            ReserveError::Rejected(format!("HTTP {}", status))
        } else {
            ReserveError::Rejected(message)
        }
    }
}
