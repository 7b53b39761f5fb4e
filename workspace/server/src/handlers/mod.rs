use axum::{body::Bytes, extract::Extension, Json};
use serde_json::{json, Value};

use msgverify_core::rpc::{
    RpcError, RpcRequest, RpcResponse, VerifyMessageParams,
    METHOD_GET_NETWORK, METHOD_VERIFY_MESSAGE,
};

use crate::server::{ServerState, State};

pub(crate) struct RpcHandler;

impl RpcHandler {
    /// Handle a JSON-RPC call.
    pub(crate) async fn post(
        Extension(state): Extension<ServerState>,
        body: Bytes,
    ) -> Json<RpcResponse> {
        Json(handle(&state, &body))
    }
}

/// Decode a request body and dispatch the call.
pub(crate) fn handle(state: &State, body: &[u8]) -> RpcResponse {
    let value: Value = match serde_json::from_slice(body) {
        Ok(value) => value,
        Err(e) => {
            return RpcResponse::error(
                Value::Null,
                RpcError::parse_error(e.to_string()),
            )
        }
    };

    let id = value.get("id").cloned().unwrap_or(Value::Null);
    let request: RpcRequest = match serde_json::from_value(value) {
        Ok(request) => request,
        Err(e) => {
            return RpcResponse::error(
                id,
                RpcError::invalid_request(e.to_string()),
            )
        }
    };

    tracing::debug!(method = %request.method, "rpc");

    match dispatch(state, &request.method, request.params) {
        Ok(result) => RpcResponse::result(request.id, result),
        Err(e) => RpcResponse::error(request.id, e),
    }
}

fn dispatch(
    state: &State,
    method: &str,
    params: Value,
) -> std::result::Result<Value, RpcError> {
    match method {
        METHOD_VERIFY_MESSAGE => {
            let params = VerifyMessageParams::from_params(params)?;
            let result = state.service.verify_message(
                &params.address,
                params.message.as_bytes(),
                &params.signature,
            );
            serde_json::to_value(result)
                .map_err(|e| RpcError::internal(e.to_string()))
        }
        METHOD_GET_NETWORK => {
            Ok(json!({ "network": state.service.network() }))
        }
        _ => Err(RpcError::method_not_found(method)),
    }
}
