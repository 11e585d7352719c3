//! Top-level facade crate for Delphi.
//!
//! Re-exports the counter store and the HTTP service so users can depend on a single crate.

pub mod core {
    pub use delphi_core::*;
}

pub mod server {
    pub use delphi_server::*;
}
