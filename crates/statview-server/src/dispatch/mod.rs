//! Dispatcher module exports.
//!
//! Re-exports the endpoint registry and the endpoint trait so services and
//! handlers can depend on this module directly.

pub mod dispatcher;

pub use dispatcher::{Dispatcher, SampleOverrides, StatEndpoint};
