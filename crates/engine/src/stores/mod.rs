//! In-memory state shared across the engine.

pub mod registry;
