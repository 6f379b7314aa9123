//! Booking service
//!
//! Orchestrates one booking: validate → reserve → price → assemble →
//! encode → notify. Collaborators are injected so the flow is testable
//! without the network or the encoder.

use async_trait::async_trait;
use chrono::{Local, Utc};
use marquee_client::{ReservationClient, ReserveError};
use shared::models::booking::ValidationError;
use shared::{BookingInput, ReservationResult, Ticket};
use thiserror::Error;

use crate::config::AppConfig;
use crate::counter::{FileTicketSequence, SequenceError, TicketSequence, fallback_ticket_id};
use crate::notify::{LogNotifier, Notice, Notifier};
use crate::pricing::{PriceResolution, strategy_for};

use super::assemble::assemble;

/// A booking that did not produce a ticket
#[derive(Debug, Error)]
pub enum BookingError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Reservation(#[from] ReserveError),

    #[error("Sequence error: {0}")]
    Sequence(#[from] SequenceError),
}

impl BookingError {
    /// Notice shown for a failed booking. A closed sale reads differently
    /// from a generic failure.
    pub fn notice(&self) -> Notice {
        match self {
            BookingError::Validation(e) => Notice::MissingInformation {
                detail: e.to_string(),
            },
            BookingError::Reservation(ReserveError::SalesClosed) => Notice::SalesClosed,
            _ => Notice::BookingFailed,
        }
    }
}

/// Remote reservation procedure.
#[async_trait]
pub trait ReservationApi: Send + Sync {
    async fn reserve(&self, input: &BookingInput) -> Result<ReservationResult, ReserveError>;
}

#[async_trait]
impl ReservationApi for ReservationClient {
    async fn reserve(&self, input: &BookingInput) -> Result<ReservationResult, ReserveError> {
        ReservationClient::reserve(self, input).await
    }
}

/// Scannable-code encoder.
pub trait ScanEncoder: Send + Sync {
    fn encode(&self, ticket: &Ticket) -> Result<Vec<u8>, marquee_render::RenderError>;
}

/// Production encoder backed by the QR renderer.
#[derive(Debug, Default)]
pub struct QrScanEncoder;

impl ScanEncoder for QrScanEncoder {
    fn encode(&self, ticket: &Ticket) -> Result<Vec<u8>, marquee_render::RenderError> {
        marquee_render::qr::encode_png(ticket)
    }
}

/// The booking flow with its injected collaborators.
pub struct BookingService {
    config: AppConfig,
    api: Box<dyn ReservationApi>,
    pricing: Box<dyn PriceResolution>,
    encoder: Box<dyn ScanEncoder>,
    sequence: Box<dyn TicketSequence>,
    notifier: Box<dyn Notifier>,
}

impl BookingService {
    pub fn new(
        config: AppConfig,
        api: Box<dyn ReservationApi>,
        pricing: Box<dyn PriceResolution>,
        encoder: Box<dyn ScanEncoder>,
        sequence: Box<dyn TicketSequence>,
        notifier: Box<dyn Notifier>,
    ) -> Self {
        Self {
            config,
            api,
            pricing,
            encoder,
            sequence,
            notifier,
        }
    }

    /// Production wiring from configuration.
    pub fn from_config(config: AppConfig) -> Result<Self, SequenceError> {
        let api = config.client_config().build_client();
        let pricing = strategy_for(config.price_mode);
        let sequence = FileTicketSequence::load(&config.data_dir)?;

        Ok(Self::new(
            config,
            Box::new(api),
            pricing,
            Box::new(QrScanEncoder),
            Box::new(sequence),
            Box::new(LogNotifier),
        ))
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Run one booking. On failure the caller keeps `input` for a retry.
    pub async fn book(&self, input: &BookingInput) -> Result<Ticket, BookingError> {
        match self.try_book(input).await {
            Ok(ticket) => {
                self.notifier.notify(&Notice::BookingConfirmed {
                    ticket_id: ticket.ticket_id.clone(),
                });
                Ok(ticket)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Booking failed");
                self.notifier.notify(&e.notice());
                Err(e)
            }
        }
    }

    async fn try_book(&self, input: &BookingInput) -> Result<Ticket, BookingError> {
        input.validate()?;

        let reservation = self.api.reserve(input).await?;

        let price = self.pricing.resolve(
            &reservation,
            input,
            &self.config.waves,
            self.config.event.base_price,
            Utc::now(),
        );

        let ticket_id = match &reservation.ticket_id {
            Some(id) => id.clone(),
            None => fallback_ticket_id(self.sequence.next()?),
        };

        let mut ticket = assemble(
            ticket_id,
            &reservation,
            input,
            &self.config.event,
            &self.config.waves,
            price,
            Local::now(),
        );

        // Encoder failure degrades to a ticket without a code.
        ticket.qr_png = match self.encoder.encode(&ticket) {
            Ok(png) => Some(png),
            Err(e) => {
                tracing::warn!(error = %e, "Scannable code generation failed");
                None
            }
        };

        Ok(ticket)
    }

    /// Emit a notice through the configured sink.
    pub fn notify(&self, notice: &Notice) {
        self.notifier.notify(notice);
    }
}
