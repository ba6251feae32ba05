//! # Commands
//!
//! One module per operation. Each command runs a single load → transform → save
//! cycle against a [`crate::store::DataStore`] and reports what it touched in a
//! [`CmdResult`]. Commands never lock: serializing cycles is the caller's job.

use crate::model::Pedido;

pub mod create;
pub mod delete;
pub mod list;
pub mod update;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Records created or changed, as stored.
    pub affected_pedidos: Vec<Pedido>,
    /// The full collection, for list.
    pub listed_pedidos: Vec<Pedido>,
    /// Records removed by delete.
    pub removed: usize,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_pedidos(mut self, pedidos: Vec<Pedido>) -> Self {
        self.affected_pedidos = pedidos;
        self
    }

    pub fn with_listed_pedidos(mut self, pedidos: Vec<Pedido>) -> Self {
        self.listed_pedidos = pedidos;
        self
    }

    /// The single record a create or update produced.
    pub fn pedido(&self) -> Option<&Pedido> {
        self.affected_pedidos.first()
    }
}
