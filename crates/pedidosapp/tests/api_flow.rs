use pedidosapp::api::Receipt;
use pedidosapp::error::PedidosError;
use pedidosapp::model::Pedido;
use pedidosapp::test_utils::TestEnv;
use serde_json::{json, Map, Value};
use std::fs;

fn pedido(value: Value) -> Pedido {
    Pedido::from_value(value).unwrap()
}

fn fields(value: Value) -> Map<String, Value> {
    value.as_object().unwrap().clone()
}

fn listed(env: &TestEnv) -> Vec<Value> {
    env.api
        .list_pedidos()
        .unwrap()
        .listed_pedidos
        .into_iter()
        .map(Pedido::into_value)
        .collect()
}

#[test]
fn full_lifecycle_on_disk() {
    let env = TestEnv::new();
    assert!(listed(&env).is_empty());

    env.api.create_pedido(pedido(json!({"id": 1, "a": 1, "b": 2})), None).unwrap();
    env.api.create_pedido(pedido(json!({"id": 2})), None).unwrap();

    env.api.update_pedido("1", fields(json!({"b": 3, "c": 4}))).unwrap();
    assert_eq!(
        listed(&env),
        vec![json!({"id": 1, "a": 1, "b": 3, "c": 4}), json!({"id": 2})]
    );

    env.api.delete_pedido("1").unwrap();
    env.api.delete_pedido("1").unwrap();
    assert_eq!(listed(&env), vec![json!({"id": 2})]);

    // What the api reports is what a fresh read of the file sees.
    let raw: Value = serde_json::from_str(&fs::read_to_string(&env.data_file).unwrap()).unwrap();
    assert_eq!(raw, json!({"pedidos": [{"id": 2}]}));
}

#[test]
fn receipt_is_written_where_the_record_points() {
    let env = TestEnv::new();
    let receipt = Receipt {
        original_name: "comprobante.png",
        bytes: &[0x89, b'P', b'N', b'G'],
    };

    let result = env
        .api
        .create_pedido(pedido(json!({"id": 3, "total": 120})), Some(receipt))
        .unwrap();

    let url = result.pedido().unwrap().comprobante_url().unwrap();
    let filename = url.strip_prefix("/uploads/").unwrap();
    let on_disk = fs::read(env.uploads_dir.join(filename)).unwrap();
    assert_eq!(on_disk, vec![0x89, b'P', b'N', b'G']);
    assert_eq!(listed(&env).last().unwrap()["comprobanteUrl"], json!(url));
}

#[test]
fn replace_missing_leaves_file_untouched() {
    let env = TestEnv::new();
    env.api.create_pedido(pedido(json!({"id": 1})), None).unwrap();
    let before = fs::read_to_string(&env.data_file).unwrap();

    let err = env.api.update_pedido("999", fields(json!({"x": 1}))).unwrap_err();

    assert!(matches!(err, PedidosError::NotFound(_)));
    assert_eq!(fs::read_to_string(&env.data_file).unwrap(), before);
}

#[test]
fn corrupt_file_fails_every_operation_without_rewriting_it() {
    let env = TestEnv::new();
    fs::write(&env.data_file, "{\"pedidos\": [").unwrap();

    assert!(matches!(env.api.list_pedidos(), Err(PedidosError::CorruptState(_))));
    assert!(matches!(
        env.api.create_pedido(pedido(json!({"id": 1})), None),
        Err(PedidosError::CorruptState(_))
    ));
    assert!(matches!(env.api.delete_pedido("1"), Err(PedidosError::CorruptState(_))));
    assert_eq!(fs::read_to_string(&env.data_file).unwrap(), "{\"pedidos\": [");
}
