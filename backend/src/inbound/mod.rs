//! Inbound adapters translating browser requests into domain service calls.

pub mod http;
