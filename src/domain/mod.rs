//! Shared data model layer (structs/constants/errors only).
//!
//! ## Files
//! - `models.rs` — dinosaur/human records, roster, tiles, page, config, output envelope.
//! - `constants.rs` — storage keys, schema version, fixed image names.
//! - `errors.rs` — the user-facing failure conditions.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem/network side effects.
//!
//! ## Compatibility note
//! `DinosaurRecord`/`HumanRecord` are persisted in session storage and `Page` is
//! printed by `--json`. Shape changes must bump `SESSION_SCHEMA_VERSION` and keep
//! `docs/contracts/page.schema.json` in sync.

pub mod constants;
pub mod errors;
pub mod models;
