//! # Pedidos Architecture
//!
//! Pedidos keeps a collection of order records ("pedidos") in one JSON document on
//! disk, with optional receipt images ("comprobantes") stored next to it. This crate is
//! the UI-agnostic core; the `pedidos` binary is a thin HTTP client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  HTTP Layer (crates/pedidos)                                │
//! │  - Routing, multipart decoding, status codes                │
//! │  - The ONLY place that knows about requests and responses   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Owns the store lock: one load→save cycle at a time       │
//! │  - Parses path ids, stores uploads before create            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - list / create / update / delete                          │
//! │  - load → transform → save, returns `CmdResult`             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DataStore trait                                 │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Whole-Document Persistence
//!
//! Every operation reads the entire backing file, decodes it, applies one change and
//! writes the entire document back. There is no cache between requests and no append
//! log: each save is a complete snapshot, written to a temporary file and renamed over
//! the previous one. A reader therefore sees either the old document or the new one.
//!
//! ## Testing Strategy
//!
//! 1. **Commands** (`commands/*.rs`): unit tests against `InMemoryStore`.
//! 2. **Store** (`tests/`): `FileStore` against a temp directory, including corrupt
//!    and half-written documents.
//! 3. **API** (`api.rs`): dispatch, id coercion, uploads and lock behavior.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Pedido`, `Collection`, `OrderId`)
//! - [`uploads`]: Receipt file intake and retrieval
//! - [`config`]: Configuration
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
pub mod uploads;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
