use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let collection = store.load()?;
    Ok(CmdResult::default().with_listed_pedidos(collection.pedidos))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PedidosError;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn fresh_store_lists_nothing() {
        let store = InMemoryStore::new();
        let result = run(&store).unwrap();
        assert!(result.listed_pedidos.is_empty());
    }

    #[test]
    fn lists_in_stored_order() {
        let mut store = InMemoryStore::new();
        store.set_raw(r#"{"pedidos":[{"id":3},{"id":1},{"id":2}]}"#);

        let ids: Vec<_> = run(&store)
            .unwrap()
            .listed_pedidos
            .iter()
            .map(|p| p.id().unwrap())
            .collect();
        assert_eq!(ids, vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn corrupt_document_is_an_error_not_an_empty_list() {
        let mut store = InMemoryStore::new();
        store.set_raw(r#"{"pedidos":[{"id":1}"#);

        let err = run(&store).unwrap_err();
        assert!(matches!(err, PedidosError::CorruptState(_)));
    }
}
