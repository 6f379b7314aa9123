//! Reservation client configuration

/// Configuration for connecting to the reservation service.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Service base URL (e.g. "https://api.example.com")
    pub base_url: String,

    /// Key sent as a bearer token, for deployments that require one
    pub api_key: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new configuration with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
            timeout: 15,
        }
    }

    /// Set the bearer key
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Create a reservation client from this configuration
    pub fn build_client(&self) -> super::ReservationClient {
        super::ReservationClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8090")
    }
}
