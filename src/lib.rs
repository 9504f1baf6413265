pub mod api;
pub mod config;
pub mod error;
pub mod rankings;
// cmd and reports are modules of the binary crate (main.rs).
