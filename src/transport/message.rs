use crate::utils::error::FrameError;

/// Frames sent by the publishing peer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientFrame {
    Publish { id: String, payload: String },
    Release { id: String },
}

impl ClientFrame {
    /// Decodes one framed line into a typed command.
    ///
    /// The frame is split on `|` into at most three parts so the payload
    /// may itself contain `|`. Command tokens are case-insensitive.
    /// Unknown commands and recognized commands with missing fields come
    /// back as a `FrameError`, which callers drop without replying.
    pub fn parse(frame: &str) -> Result<Self, FrameError> {
        let mut parts = frame.splitn(3, '|');
        let command = parts
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_uppercase();

        match command.as_str() {
            "PUBLISH" => {
                let id = parts.next().ok_or(FrameError::MissingField {
                    command: "PUBLISH",
                    field: "id",
                })?;
                let payload = parts.next().ok_or(FrameError::MissingField {
                    command: "PUBLISH",
                    field: "payload",
                })?;
                Ok(ClientFrame::Publish {
                    id: id.trim().to_string(),
                    payload: payload.trim().to_string(),
                })
            }
            "PUBREL" => {
                let id = parts.next().ok_or(FrameError::MissingField {
                    command: "PUBREL",
                    field: "id",
                })?;
                Ok(ClientFrame::Release {
                    id: id.trim().to_string(),
                })
            }
            _ => Err(FrameError::UnknownCommand(command)),
        }
    }
}

/// Acknowledgments sent back to the peer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrokerFrame {
    /// Receipt acknowledgment for a PUBLISH.
    PubRec { id: String },
    /// Completion acknowledgment, sent only after a PUBREL.
    PubComp { id: String },
}

impl BrokerFrame {
    /// Serializes the acknowledgment as one wire line, newline included.
    pub fn encode(&self) -> String {
        match self {
            BrokerFrame::PubRec { id } => format!("PUBREC|{id}\n"),
            BrokerFrame::PubComp { id } => format!("PUBCOMP|{id}\n"),
        }
    }
}

impl std::fmt::Display for BrokerFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.encode().trim_end())
    }
}
