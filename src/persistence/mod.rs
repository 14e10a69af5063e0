//! The `persistence` module provides the durable record of completed
//! message ids.
//!
//! This is what makes at-most-once payload processing hold across process
//! restarts: a replayed PUBLISH for an id that already completed is
//! acknowledged without reaching the payload processor again.
//!
//! The record is a plain JSON array of ids, fully rewritten on each
//! change, so it can be inspected and repaired by hand.

pub mod json_store;

pub use json_store::DedupStore;

#[cfg(test)]
mod tests;
