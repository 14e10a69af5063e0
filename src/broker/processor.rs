use tracing::{info, warn};

/// Consumer of successfully received payloads.
///
/// The engine hands each message id to its processor at most once per
/// process lifetime (and at most once ever, once the id is persisted as
/// complete). Implementations interpret the payload however they like;
/// the handshake neither inspects nor depends on its content.
pub trait PayloadProcessor: Send {
    fn process(&mut self, id: &str, payload: &str);
}

/// Default processor used by the binary: logs every payload, surfacing
/// alert payloads at warn level.
///
/// A payload that parses as JSON and carries an `"alert"` field is treated
/// as an alert and logged together with its `dist` value when present.
/// Everything else, JSON or not, is logged at info level.
#[derive(Debug, Default)]
pub struct LogProcessor;

impl PayloadProcessor for LogProcessor {
    fn process(&mut self, id: &str, payload: &str) {
        match serde_json::from_str::<serde_json::Value>(payload) {
            Ok(value) => {
                if let Some(alert) = value.get("alert").and_then(|a| a.as_str()) {
                    match value.get("dist") {
                        Some(dist) => warn!("alert '{alert}' from message {id}, dist {dist}"),
                        None => warn!("alert '{alert}' from message {id}"),
                    }
                } else {
                    info!("processing message {id}: {value}");
                }
            }
            Err(_) => info!("processing message {id}: {payload}"),
        }
    }
}
