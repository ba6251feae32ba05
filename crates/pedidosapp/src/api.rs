//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry
//! point for every pedidos operation, whatever the transport.
//!
//! ## Responsibilities
//!
//! - **Serializes store access**: each command's load → save cycle runs under one
//!   mutex, so overlapping requests cannot lose each other's updates.
//! - **Normalizes inputs**: path ids are coerced to [`OrderId`], receipts are
//!   written to the upload area before create runs.
//! - **Returns structured types** (`Result<CmdResult>`), never HTTP responses.
//!
//! ## Generic Over DataStore
//!
//! - Production: `PedidosApi<FileStore>`
//! - Testing: `PedidosApi<InMemoryStore>`

use crate::commands::{self, CmdResult};
use crate::error::{PedidosError, Result};
use crate::model::{OrderId, Pedido};
use crate::store::DataStore;
use crate::uploads::UploadArea;
use serde_json::{Map, Value};
use std::fs;
use std::sync::{Mutex, MutexGuard};
use tracing::warn;

/// An uploaded file as the transport decoded it.
#[derive(Debug, Clone, Copy)]
pub struct Receipt<'a> {
    pub original_name: &'a str,
    pub bytes: &'a [u8],
}

pub struct PedidosApi<S: DataStore> {
    store: Mutex<S>,
    uploads: UploadArea,
}

impl<S: DataStore> PedidosApi<S> {
    pub fn new(store: S, uploads: UploadArea) -> Self {
        Self {
            store: Mutex::new(store),
            uploads,
        }
    }

    /// Create the upload area and, if missing, the empty backing document.
    pub fn init(&self) -> Result<()> {
        self.uploads.init()?;
        self.lock()?.init()
    }

    pub fn list_pedidos(&self) -> Result<CmdResult> {
        commands::list::run(&*self.lock()?)
    }

    pub fn create_pedido(&self, pedido: Pedido, receipt: Option<Receipt<'_>>) -> Result<CmdResult> {
        let stored = receipt
            .map(|r| self.uploads.store(r.original_name, r.bytes))
            .transpose()?;

        let result = self
            .lock()
            .and_then(|mut store| commands::create::run(&mut *store, pedido, stored.as_ref()));

        // A receipt no record points at is garbage.
        if let (Err(_), Some(stored)) = (&result, &stored) {
            if let Err(e) = fs::remove_file(&stored.path) {
                warn!(file = %stored.filename, error = %e, "could not remove orphaned upload");
            }
        }
        result
    }

    pub fn update_pedido(&self, id: &str, fields: Map<String, Value>) -> Result<CmdResult> {
        let id = OrderId::parse(id);
        commands::update::run(&mut *self.lock()?, id, fields)
    }

    pub fn delete_pedido(&self, id: &str) -> Result<CmdResult> {
        let id = OrderId::parse(id);
        commands::delete::run(&mut *self.lock()?, id)
    }

    pub fn uploads(&self) -> &UploadArea {
        &self.uploads
    }

    fn lock(&self) -> Result<MutexGuard<'_, S>> {
        self.store
            .lock()
            .map_err(|_| PedidosError::Store("store lock poisoned".to_string()))
    }
}

pub use crate::commands::{CmdMessage, MessageLevel};
pub use crate::uploads::StoredUpload;
