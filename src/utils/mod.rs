//! The `utils` module provides a collection of utility functions and common
//! definitions used across the `surepub` application.
//!
//! This module centralizes the error taxonomy and the logging setup so the
//! rest of the crate shares one recovery policy and one subscriber.

pub mod error;
pub mod logging;
