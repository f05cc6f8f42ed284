//! Shared utilities for the addrcheck decoders.

pub mod logging;

pub use logging::try_init_tracing;
