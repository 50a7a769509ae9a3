//! Top-level facade crate for statview.
//!
//! Re-exports the core computations and the HTTP server library so users can depend on a single crate.

pub mod core {
    pub use statview_core::*;
}

pub mod server {
    pub use statview_server::*;
}
