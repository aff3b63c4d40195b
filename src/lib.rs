//! Amount conversion and transfer validation for CW20 tokens on Persistence `core-1`.
//!
//! The `services` modules are pure functions over plain strings and structs; `api`
//! exposes them over HTTP for the browser client.

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod services;

pub use errors::CustomError;
pub use services::amount_service::{half, sanitize_amount_input, to_display, to_raw};
pub use services::transfer_service::{build_transfers, can_submit, is_valid_recipient};
