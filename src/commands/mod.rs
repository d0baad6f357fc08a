//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `page.rs` — show/submit/refresh/reset: one UI event each, then print the page.
//! - `data.rs` — roster listing and HTML export.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod data;
pub mod page;

pub use data::handle_data_commands;
pub use page::handle_page_commands;
