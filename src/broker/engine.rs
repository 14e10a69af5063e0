//! Handshake engine
//!
//! This module contains the state machine that terminates the receiving
//! side of the exactly-once publish handshake. It is responsible for:
//! - acknowledging every PUBLISH with a PUBREC, duplicates included
//! - invoking the payload processor at most once per message id
//! - answering PUBREL with PUBCOMP and persisting the completion
//!
//! Concurrency and usage notes:
//! - The public API here is synchronous and designed to be held behind a
//!   lock (for example `Arc<Mutex<HandshakeEngine>>`) by the transport
//!   layer. Callers should avoid holding the engine lock across network
//!   I/O to prevent blocking frame reception.
//! - Acknowledgments are queued on the writer attached for the current
//!   session; the transport drains that queue into the socket, so a slow
//!   peer never stalls the state machine.

use std::collections::HashSet;

use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, warn};

use crate::broker::processor::PayloadProcessor;
use crate::persistence::DedupStore;
use crate::transport::message::{BrokerFrame, ClientFrame};

/// Position of a message id inside the handshake.
///
/// Ids with no state at all have never been seen (or were completed in a
/// previous process whose transient state is gone; the dedup store covers
/// that case).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandshakeState {
    /// PUBLISH seen and acknowledged, release still pending.
    Received,
    /// PUBREL seen and acknowledged; terminal.
    Complete,
}

pub struct HandshakeEngine {
    /// Ids in the `Received` state. Entries move out on release and are
    /// lost on restart; the dedup store is what survives.
    received: HashSet<String>,
    dedup: DedupStore,
    writer: Option<UnboundedSender<BrokerFrame>>,
    processor: Box<dyn PayloadProcessor>,
}

impl HandshakeEngine {
    pub fn new(dedup: DedupStore, processor: impl PayloadProcessor + 'static) -> Self {
        Self {
            received: HashSet::new(),
            dedup,
            writer: None,
            processor: Box::new(processor),
        }
    }

    /// Binds the acknowledgment queue of the current session.
    pub fn attach_writer(&mut self, writer: UnboundedSender<BrokerFrame>) {
        self.writer = Some(writer);
    }

    /// Drops the current session's queue so its writer task can finish.
    pub fn detach_writer(&mut self) {
        self.writer = None;
    }

    /// Applies one parsed frame to the state machine.
    pub fn handle(&mut self, frame: ClientFrame) {
        match frame {
            ClientFrame::Publish { id, payload } => self.on_publish(id, payload),
            ClientFrame::Release { id } => self.on_release(id),
        }
    }

    fn on_publish(&mut self, id: String, payload: String) {
        // Receipt is acknowledged unconditionally; dedup only guards the
        // processing side effect.
        self.send(BrokerFrame::PubRec { id: id.clone() });

        if self.dedup.contains(&id) {
            debug!("message {id} already completed, not reprocessing");
            return;
        }
        if self.received.contains(&id) {
            debug!("message {id} already received, not reprocessing");
            return;
        }

        self.processor.process(&id, &payload);
        self.received.insert(id);
    }

    fn on_release(&mut self, id: String) {
        // Completion is idempotent: a release for an id with no receipt on
        // record (a replay, or a restart that lost transient state) is
        // still answered and persisted.
        self.send(BrokerFrame::PubComp { id: id.clone() });

        self.received.remove(&id);
        if self.dedup.add(&id) {
            debug!("message {id} completed");
        } else {
            debug!("message {id} completion re-acknowledged");
        }
    }

    fn send(&self, frame: BrokerFrame) {
        let Some(writer) = &self.writer else {
            warn!("no peer attached, dropping {frame}");
            return;
        };
        if let Err(e) = writer.send(frame) {
            warn!("session queue closed, dropping {}", e.0);
        }
    }

    /// Current handshake state of `id`, if it has one.
    pub fn state(&self, id: &str) -> Option<HandshakeState> {
        if self.dedup.contains(id) {
            Some(HandshakeState::Complete)
        } else if self.received.contains(id) {
            Some(HandshakeState::Received)
        } else {
            None
        }
    }
}
