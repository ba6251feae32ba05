use super::{decode, encode, DataStore};
use crate::error::{PedidosError, Result};
use crate::model::Collection;

/// In-memory storage for testing.
///
/// Keeps the *encoded* document rather than a `Collection`, so every load goes
/// through the same decoding as the file store and tests can plant corrupt content.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    document: Option<String>,
    simulate_write_error: bool,
}

impl InMemoryStore {
    /// An initialized store holding the empty collection.
    pub fn new() -> Self {
        Self {
            document: Some(r#"{"pedidos":[]}"#.to_string()),
            simulate_write_error: false,
        }
    }

    /// A store with no document at all, as before `init`.
    pub fn uninitialized() -> Self {
        Self::default()
    }

    /// Replace the raw document, bypassing encoding.
    pub fn set_raw(&mut self, raw: impl Into<String>) {
        self.document = Some(raw.into());
    }

    pub fn raw(&self) -> Option<&str> {
        self.document.as_deref()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }
}

impl DataStore for InMemoryStore {
    fn init(&mut self) -> Result<()> {
        if self.document.is_none() {
            self.document = Some(encode(&Collection::default())?);
        }
        Ok(())
    }

    fn load(&self) -> Result<Collection> {
        match &self.document {
            Some(raw) => decode(raw),
            None => Err(PedidosError::Store("store is not initialized".to_string())),
        }
    }

    fn save(&mut self, collection: &Collection) -> Result<()> {
        if self.simulate_write_error {
            return Err(PedidosError::Store("Simulated write error".to_string()));
        }
        self.document = Some(encode(collection)?);
        Ok(())
    }
}
