pub mod engine;
pub mod processor;

pub use engine::{HandshakeEngine, HandshakeState};
