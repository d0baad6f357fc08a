//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `profile.rs` — form values to `HumanRecord`.
//! - `compare.rs` — comparison engine and the injectable random source.
//! - `render.rs` — tiles, grid attachment, text/HTML projections.
//! - `session.rs` — `KeyValueStore` trait and session save/load/clear.
//! - `storage.rs` — file-backed store and page persistence under `$HOME`.
//! - `events.rs` — load/submit/tile-click/human-click handlers.
//! - `config.rs` — optional `config.toml`.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod compare;
pub mod config;
pub mod events;
pub mod output;
pub mod profile;
pub mod render;
pub mod session;
pub mod storage;
