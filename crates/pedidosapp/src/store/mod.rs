//! # Storage Layer
//!
//! This module defines the storage abstraction for pedidos. The [`DataStore`] trait
//! allows the application to work with different storage backends.
//!
//! ## One Document, Whole-File Cycles
//!
//! The whole collection lives in a single JSON document:
//!
//! ```text
//! data/
//! └── pedidos.json        # { "pedidos": [ ... ] }
//! ```
//!
//! There is no incremental format. `load` reads and decodes the entire document,
//! `save` encodes and replaces the entire document. Every save is a complete
//! snapshot, so there is nothing half-appended to recover from.
//!
//! ## Failure Semantics
//!
//! - A document that does not decode as `{ pedidos: [...] }` is a
//!   [`PedidosError::CorruptState`]. It is never replaced by an empty default:
//!   doing so would hide or discard user data.
//! - `save` either replaces the document completely or leaves the previous one in
//!   place (temporary file + rename for [`fs::FileStore`]).
//! - `init` is the only self-healing step: a missing document becomes the empty
//!   collection before the first request is served.
//!
//! ## Concurrency
//!
//! Stores are not synchronized. Two overlapping load→save cycles lose an update.
//! Callers serialize access; [`crate::api::PedidosApi`] holds every store behind one
//! mutex.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production, backed by a file on disk.
//! - [`memory::InMemoryStore`]: For testing logic without filesystem I/O.

use crate::error::{PedidosError, Result};
use crate::model::Collection;

pub mod fs;
pub mod memory;

/// Abstract interface for the backing document.
pub trait DataStore {
    /// Create the empty collection if there is no document yet.
    fn init(&mut self) -> Result<()>;

    /// Read and decode the current collection.
    fn load(&self) -> Result<Collection>;

    /// Replace the stored collection in its entirety.
    fn save(&mut self, collection: &Collection) -> Result<()>;
}

/// Decode a backing document. Anything that is not `{ pedidos: [...] }` is corrupt.
pub fn decode(raw: &str) -> Result<Collection> {
    serde_json::from_str(raw).map_err(|e| PedidosError::CorruptState(e.to_string()))
}

/// Encode a collection the way it is kept on disk: pretty JSON, two-space indent.
pub fn encode(collection: &Collection) -> Result<String> {
    serde_json::to_string_pretty(collection).map_err(PedidosError::Serialization)
}
