use super::error::ApiError;
use super::AppState;
use axum::body::Bytes;
use axum::extract::{FromRequest, Multipart, Path, Request, State};
use axum::http::header::CONTENT_TYPE;
use axum::{Form, Json};
use pedidosapp::api::{CmdMessage, MessageLevel, PedidosApi, Receipt};
use pedidosapp::commands::CmdResult;
use pedidosapp::error::PedidosError;
use pedidosapp::model::Pedido;
use pedidosapp::store::fs::FileStore;
use serde::Serialize;
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{debug, info};

const PEDIDO_FIELD: &str = "pedido";
const RECEIPT_FIELD: &str = "comprobante";

#[derive(Debug, Serialize)]
pub struct Saved {
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pedido: Option<Pedido>,
}

impl Saved {
    fn from_result(result: CmdResult) -> Self {
        Self {
            ok: true,
            pedido: result.affected_pedidos.into_iter().next(),
        }
    }
}

/// Runs a facade call on the blocking pool; file I/O never touches the reactor.
async fn blocking<T, F>(state: &AppState, f: F) -> Result<T, ApiError>
where
    F: FnOnce(&PedidosApi<FileStore>) -> pedidosapp::error::Result<T> + Send + 'static,
    T: Send + 'static,
{
    let api = Arc::clone(&state.api);
    let result = tokio::task::spawn_blocking(move || f(&api)).await?;
    Ok(result?)
}

fn log_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => debug!("{}", message.content),
            MessageLevel::Success => info!("{}", message.content),
        }
    }
}

pub async fn list_pedidos(State(state): State<AppState>) -> Result<Json<Vec<Pedido>>, ApiError> {
    let result = blocking(&state, |api| api.list_pedidos()).await?;
    Ok(Json(result.listed_pedidos))
}

pub async fn create_pedido(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Saved>, ApiError> {
    let mut raw_pedido: Option<String> = None;
    let mut receipt: Option<(String, Bytes)> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            PEDIDO_FIELD => raw_pedido = Some(field.text().await?),
            RECEIPT_FIELD => {
                // A file input left empty arrives as a part without a file name.
                let Some(original_name) = field
                    .file_name()
                    .filter(|name| !name.is_empty())
                    .map(str::to_string)
                else {
                    continue;
                };
                receipt = Some((original_name, field.bytes().await?));
            }
            _ => {}
        }
    }

    let raw_pedido = raw_pedido.ok_or_else(|| {
        PedidosError::MalformedRequest(format!("missing `{}` field", PEDIDO_FIELD))
    })?;
    let pedido = Pedido::from_json_str(&raw_pedido)?;

    let result = blocking(&state, move |api| {
        let receipt = receipt.as_ref().map(|(name, bytes)| Receipt {
            original_name: name,
            bytes,
        });
        api.create_pedido(pedido, receipt)
    })
    .await?;

    log_messages(&result.messages);
    Ok(Json(Saved::from_result(result)))
}

pub async fn update_pedido(
    State(state): State<AppState>,
    Path(id): Path<String>,
    request: Request,
) -> Result<Json<Saved>, ApiError> {
    let fields = merge_fields(request).await?;
    let result = blocking(&state, move |api| api.update_pedido(&id, fields)).await?;

    log_messages(&result.messages);
    Ok(Json(Saved::from_result(result)))
}

pub async fn delete_pedido(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Saved>, ApiError> {
    let result = blocking(&state, move |api| api.delete_pedido(&id)).await?;

    log_messages(&result.messages);
    Ok(Json(Saved {
        ok: true,
        pedido: None,
    }))
}

/// Fields to merge, decoded the way the body announces itself. Bodies of any
/// other type contribute nothing.
async fn merge_fields(request: Request) -> Result<Map<String, Value>, ApiError> {
    let content_type = request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.split(';').next().unwrap_or_default().trim().to_ascii_lowercase())
        .unwrap_or_default();

    if content_type == "application/x-www-form-urlencoded" {
        let Form(pairs) = Form::<Vec<(String, String)>>::from_request(request, &()).await?;
        return Ok(pairs
            .into_iter()
            .map(|(key, value)| (key, Value::String(value)))
            .collect());
    }

    if content_type == "application/json" || content_type.ends_with("+json") {
        let Json(value) = Json::<Value>::from_request(request, &()).await?;
        return json_fields(value);
    }

    Ok(Map::new())
}

/// Objects merge as-is and arrays merge by index. Bare scalars are not a body.
fn json_fields(value: Value) -> Result<Map<String, Value>, ApiError> {
    match value {
        Value::Object(fields) => Ok(fields),
        Value::Array(items) => Ok(items
            .into_iter()
            .enumerate()
            .map(|(index, item)| (index.to_string(), item))
            .collect()),
        other => Err(ApiError::BadRequest(format!(
            "body must be a JSON object or array, got {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn array_body_merges_by_index() {
        let fields = json_fields(json!(["a", {"b": 1}])).unwrap();
        assert_eq!(Value::Object(fields), json!({"0": "a", "1": {"b": 1}}));
    }

    #[test]
    fn scalar_body_is_rejected() {
        for body in [json!(null), json!(3), json!("x"), json!(true)] {
            assert!(matches!(json_fields(body), Err(ApiError::BadRequest(_))));
        }
    }
}
