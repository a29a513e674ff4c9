//! Simulated network device configuration.
//!
//! Nothing here performs network I/O; settings live in process memory.

pub mod network_config;
