//! # SurePub
//!
//! `surepub` is a small broker that terminates the receiving side of an
//! exactly-once publish handshake (PUBLISH/PUBREC/PUBREL/PUBCOMP) carried
//! as newline-framed text over a TCP byte stream. It acknowledges every
//! receipt, processes each message id at most once regardless of
//! retransmission, and completes a handshake only after the peer releases
//! it.
//!
//! ## Core Modules
//!
//! The library is structured into several modules, each with a distinct responsibility:
//!
//! - `broker`: The handshake state machine and the payload processor seam.
//! - `config`: Handles loading and managing broker configuration.
//! - `persistence`: The durable record of completed message ids.
//! - `transport`: Line framing, the wire protocol, and the TCP session loop.
//! - `utils`: Shared utilities, such as error handling and logging setup.

pub mod broker;
pub mod config;
pub mod persistence;
pub mod transport;
pub mod utils;
