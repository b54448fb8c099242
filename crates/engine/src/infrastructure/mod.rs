//! Infrastructure adapters and the ports they implement.

pub mod clock;
pub mod default_config;
pub mod notify;
pub mod ports;
pub mod settings;
