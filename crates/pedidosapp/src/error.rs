use crate::model::OrderId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PedidosError {
    #[error("Pedido not found: {0}")]
    NotFound(OrderId),

    #[error("Corrupt store: {0}")]
    CorruptState(String),

    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, PedidosError>;
