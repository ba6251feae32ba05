use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{OrderId, Pedido};
use crate::store::DataStore;
use crate::uploads::StoredUpload;

/// Append `pedido` as given. No id is assigned and nothing is validated; the only
/// server-side change is `comprobanteUrl` when a receipt was stored.
pub fn run<S: DataStore>(
    store: &mut S,
    mut pedido: Pedido,
    upload: Option<&StoredUpload>,
) -> Result<CmdResult> {
    if let Some(upload) = upload {
        pedido.set_comprobante_url(&upload.public_path);
    }

    let mut collection = store.load()?;
    collection.pedidos.push(pedido.clone());
    store.save(&collection)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(match pedido.id() {
        Some(id) => format!("Pedido created: {}", OrderId::new(id)),
        None => "Pedido created without id".to_string(),
    }));
    Ok(result.with_affected_pedidos(vec![pedido]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::list;
    use crate::error::PedidosError;
    use crate::store::memory::InMemoryStore;
    use serde_json::{json, Value};
    use std::path::PathBuf;

    fn pedido(value: Value) -> Pedido {
        Pedido::from_value(value).unwrap()
    }

    #[test]
    fn created_pedido_is_listed_last() {
        let mut store = InMemoryStore::new();
        run(&mut store, pedido(json!({"id": 1})), None).unwrap();
        run(&mut store, pedido(json!({"id": 2, "total": 10.5})), None).unwrap();

        let listed = list::run(&store).unwrap().listed_pedidos;
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[1], pedido(json!({"id": 2, "total": 10.5})));
    }

    #[test]
    fn returns_the_record_as_stored() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, pedido(json!({"id": 7, "cliente": "Ana"})), None).unwrap();

        assert_eq!(
            result.pedido().unwrap(),
            &pedido(json!({"id": 7, "cliente": "Ana"}))
        );
        assert!(result.pedido().unwrap().comprobante_url().is_none());
    }

    #[test]
    fn upload_sets_comprobante_url() {
        let mut store = InMemoryStore::new();
        let upload = StoredUpload {
            filename: "1-abc.png".into(),
            path: PathBuf::from("uploads/1-abc.png"),
            public_path: "/uploads/1-abc.png".into(),
        };

        let result = run(&mut store, pedido(json!({"id": 1})), Some(&upload)).unwrap();

        let expected = pedido(json!({"id": 1, "comprobanteUrl": "/uploads/1-abc.png"}));
        assert_eq!(result.pedido().unwrap(), &expected);
        assert_eq!(list::run(&store).unwrap().listed_pedidos, vec![expected]);
    }

    #[test]
    fn duplicate_ids_coexist() {
        let mut store = InMemoryStore::new();
        run(&mut store, pedido(json!({"id": 5, "n": 1})), None).unwrap();
        run(&mut store, pedido(json!({"id": 5, "n": 2})), None).unwrap();

        assert_eq!(list::run(&store).unwrap().listed_pedidos.len(), 2);
    }

    #[test]
    fn records_without_id_are_accepted() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, pedido(json!({"nota": "sin id"})), None).unwrap();
        assert_eq!(result.messages[0].content, "Pedido created without id");
    }

    #[test]
    fn failed_save_reports_error() {
        let mut store = InMemoryStore::new();
        store.set_simulate_write_error(true);

        let err = run(&mut store, pedido(json!({"id": 1})), None).unwrap_err();
        assert!(matches!(err, PedidosError::Store(_)));
        store.set_simulate_write_error(false);
        assert!(list::run(&store).unwrap().listed_pedidos.is_empty());
    }
}
