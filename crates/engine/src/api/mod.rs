//! Operator-facing API.

pub mod http;
