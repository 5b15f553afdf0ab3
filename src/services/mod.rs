//! Service layer containing the verification logic and side-effect helpers.
//!
//! ## Service map
//! - `registry.rs` — declarative rule tables for both audited files.
//! - `evaluate.rs` — substring-presence evaluation of a rule against text.
//! - `probe.rs` — file existence probing + one-shot content loading.
//! - `audit.rs` — per-file audit: short-circuit or evaluate the registry.
//! - `report.rs` — report assembly, summary fold, text rendering.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod audit;
pub mod evaluate;
pub mod output;
pub mod probe;
pub mod registry;
pub mod report;
