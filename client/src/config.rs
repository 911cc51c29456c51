//! Client configuration.

use std::time::Duration;

/// Connection and retry configuration for the PassHolder client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Service endpoint as `host:port`.
    pub endpoint: String,
    /// Bound on TCP connect and TLS handshake.
    pub connect_timeout: Duration,
    /// Bound on the wait for a response to become readable.
    pub select_timeout: Duration,
    /// Additional connect attempts after the first failure.
    pub max_retries: u32,
    /// Fixed delay between connect attempts.
    pub retry_interval: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            endpoint: "127.0.0.1:9443".to_string(),
            connect_timeout: Duration::from_secs(60),
            select_timeout: Duration::from_secs(1),
            max_retries: 3,
            retry_interval: Duration::from_secs(1),
        }
    }
}

impl ClientConfig {
    /// Creates a configuration for the given endpoint with default timeouts.
    pub fn new(endpoint: impl Into<String>) -> Self {
        ClientConfig {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.max_retries, 3);
        assert_eq!(config.retry_interval, Duration::from_secs(1));
        assert_eq!(config.select_timeout, Duration::from_secs(1));
        assert_eq!(config.connect_timeout, Duration::from_secs(60));
    }

    #[test]
    fn test_new_sets_endpoint() {
        let config = ClientConfig::new("holder.example.com:9443");
        assert_eq!(config.endpoint, "holder.example.com:9443");
        assert_eq!(config.max_retries, 3);
    }
}
