use crate::commands::{CmdMessage, CmdResult};
use crate::error::{PedidosError, Result};
use crate::model::OrderId;
use crate::store::DataStore;
use serde_json::{Map, Value};

/// Merge `fields` into the first pedido whose id equals `id`.
///
/// Missing id is `NotFound` and nothing is written.
pub fn run<S: DataStore>(
    store: &mut S,
    id: OrderId,
    fields: Map<String, Value>,
) -> Result<CmdResult> {
    let mut collection = store.load()?;
    let idx = collection
        .position(id)
        .ok_or(PedidosError::NotFound(id))?;

    collection.pedidos[idx].merge(fields);
    store.save(&collection)?;

    let pedido = collection.pedidos.swap_remove(idx);
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Pedido updated: {}", id)));
    Ok(result.with_affected_pedidos(vec![pedido]))
}
