use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::OrderId;
use crate::store::DataStore;

/// Remove every pedido whose id equals `id`. Removing nothing is still a success,
/// and the collection is saved either way.
pub fn run<S: DataStore>(store: &mut S, id: OrderId) -> Result<CmdResult> {
    let mut collection = store.load()?;
    let before = collection.pedidos.len();
    collection.pedidos.retain(|p| !p.matches(id));
    let removed = before - collection.pedidos.len();
    store.save(&collection)?;

    let mut result = CmdResult {
        removed,
        ..CmdResult::default()
    };
    result.add_message(if removed == 0 {
        CmdMessage::info(format!("No pedido with id {}", id))
    } else {
        CmdMessage::success(format!("Pedidos deleted ({}): {}", id, removed))
    });
    Ok(result)
}
