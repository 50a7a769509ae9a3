//! statview server library entry.
//!
//! This crate wires config, the endpoint dispatcher, the built-in
//! statistics services and the HTML pages into an axum router. It is
//! consumed by the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod cli;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod ops;
pub mod pages;
pub mod router;
pub mod services;
pub mod transport;
