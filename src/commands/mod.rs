//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `verify.rs` — the single verification pass.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate verification logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod verify;

pub use verify::handle_verify;
