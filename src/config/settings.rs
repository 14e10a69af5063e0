use serde::Deserialize;

/// Top-level configuration settings for the application.
///
/// Includes settings for the listening endpoint and the broker core.
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub broker: BrokerSettings,
}

/// Configuration settings for the transport endpoint.
///
/// Defines the host and port the broker will bind to. The endpoint is
/// selected outside the core; the core only consumes it.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

/// Configuration settings for the broker core.
///
/// Controls where completed message ids are persisted and the pacing of
/// the read loop.
#[derive(Debug, Deserialize, Clone)]
pub struct BrokerSettings {
    pub state_file: String,
    pub read_timeout_ms: u64,
    pub error_pause_ms: u64,
}

/// Partial configuration settings loaded from files or environment.
///
/// Allows partial specification of settings. Missing values can be filled using defaults.
#[derive(Debug, Deserialize)]
pub struct PartialSettings {
    pub server: Option<PartialServerSettings>,
    pub broker: Option<PartialBrokerSettings>,
}

/// Partial server settings.
///
/// Used when loading server configuration from external sources with optional values.
#[derive(Debug, Deserialize)]
pub struct PartialServerSettings {
    pub host: Option<String>,
    pub port: Option<u16>,
}

/// Partial broker settings.
///
/// Used for broker configuration from external sources with optional values.
#[derive(Debug, Deserialize)]
pub struct PartialBrokerSettings {
    pub state_file: Option<String>,
    pub read_timeout_ms: Option<u64>,
    pub error_pause_ms: Option<u64>,
}

/// Provides default values for `Settings`.
///
/// Ensures the application has sensible defaults if no configuration is provided.
impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            broker: BrokerSettings {
                state_file: "completed_ids.json".to_string(),
                read_timeout_ms: 100,
                error_pause_ms: 100,
            },
        }
    }
}
