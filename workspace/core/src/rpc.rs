//! JSON-RPC wire types shared by the server and client.
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Protocol version sent in every response.
pub const JSONRPC_VERSION: &str = "2.0";

/// Verify a signed message or recover its signer.
pub const METHOD_VERIFY_MESSAGE: &str = "verifymessage";

/// Network the server verifies addresses for.
pub const METHOD_GET_NETWORK: &str = "getnetwork";

pub const PARSE_ERROR: i64 = -32700;
pub const INVALID_REQUEST: i64 = -32600;
pub const METHOD_NOT_FOUND: i64 = -32601;
pub const INVALID_PARAMS: i64 = -32602;
pub const INTERNAL_ERROR: i64 = -32603;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jsonrpc: Option<String>,
    pub method: String,
    #[serde(default)]
    pub params: Value,
    #[serde(default)]
    pub id: Value,
}

impl RpcRequest {
    pub fn new(method: &str, params: Value, id: Value) -> Self {
        Self {
            jsonrpc: Some(JSONRPC_VERSION.to_owned()),
            method: method.to_owned(),
            params,
            id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcResponse {
    pub jsonrpc: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,
    #[serde(default)]
    pub id: Value,
}

impl RpcResponse {
    pub fn result(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_owned(),
            result: Some(result),
            error: None,
            id,
        }
    }

    pub fn error(id: Value, error: RpcError) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_owned(),
            result: None,
            error: Some(error),
            id,
        }
    }
}

/// Error object of a failed call.
///
/// Only transport faults are reported this way, a signature that does
/// not verify is a successful call with a negative result.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
#[error("{message} ({code})")]
pub struct RpcError {
    pub code: i64,
    pub message: String,
}

impl RpcError {
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn parse_error(message: impl Into<String>) -> Self {
        Self::new(PARSE_ERROR, message)
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(INVALID_REQUEST, message)
    }

    pub fn method_not_found(method: &str) -> Self {
        Self::new(METHOD_NOT_FOUND, format!("method {} not found", method))
    }

    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self::new(INVALID_PARAMS, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(INTERNAL_ERROR, message)
    }
}

/// Parameters of `verifymessage`.
///
/// An omitted address is the same as an empty one and selects
/// recovery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyMessageParams {
    #[serde(default)]
    pub address: String,
    pub message: String,
    pub signature: String,
}

impl VerifyMessageParams {
    /// Accept named parameters or `[address, message, signature]`.
    pub fn from_params(params: Value) -> Result<Self, RpcError> {
        match params {
            Value::Object(_) => serde_json::from_value(params)
                .map_err(|e| RpcError::invalid_params(e.to_string())),
            Value::Array(values) => {
                let [address, message, signature]: [Value; 3] =
                    values.try_into().map_err(|_| {
                        RpcError::invalid_params(
                            "expected address, message and signature",
                        )
                    })?;
                let text = |value: Value, name: &str| match value {
                    Value::String(s) => Ok(s),
                    _ => Err(RpcError::invalid_params(format!(
                        "{} must be a string",
                        name
                    ))),
                };
                Ok(Self {
                    address: text(address, "address")?,
                    message: text(message, "message")?,
                    signature: text(signature, "signature")?,
                })
            }
            _ => Err(RpcError::invalid_params(
                "expected address, message and signature",
            )),
        }
    }
}
