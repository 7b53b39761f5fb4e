use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};
use url::Url;

use msgverify_core::{
    rpc::{
        RpcRequest, RpcResponse, VerifyMessageParams, METHOD_GET_NETWORK,
        METHOD_VERIFY_MESSAGE,
    },
    Network,
};

use crate::{Error, Result};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Signer reported by recover mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecoveredAddress {
    /// Whether the signature recovered to a public key.
    pub valid: bool,
    /// Address of the recovered key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

#[derive(Deserialize)]
struct NetworkInfo {
    network: Network,
}

/// Message verification client implementation.
pub struct RpcClient;

impl RpcClient {
    /// Check a signature against an address.
    pub async fn verify_message(
        server: Url,
        address: &str,
        message: &str,
        signature: &str,
    ) -> Result<bool> {
        if address.is_empty() {
            return Err(Error::EmptyAddress);
        }
        RpcClient::call_verify_message(server, address, message, signature)
            .await
    }

    /// Recover the address that signed a message.
    pub async fn recover_address(
        server: Url,
        message: &str,
        signature: &str,
    ) -> Result<RecoveredAddress> {
        RpcClient::call_verify_message(server, "", message, signature).await
    }

    /// Call `verifymessage` and return the result in either mode.
    pub async fn call_verify_message<T: DeserializeOwned>(
        server: Url,
        address: &str,
        message: &str,
        signature: &str,
    ) -> Result<T> {
        let params = VerifyMessageParams {
            address: address.to_owned(),
            message: message.to_owned(),
            signature: signature.to_owned(),
        };
        RpcClient::call(
            server,
            METHOD_VERIFY_MESSAGE,
            serde_json::to_value(params)?,
        )
        .await
    }

    /// Network the server accepts addresses for.
    pub async fn network(server: Url) -> Result<Network> {
        let info: NetworkInfo =
            RpcClient::call(server, METHOD_GET_NETWORK, json!([])).await?;
        Ok(info.network)
    }

    /// Send a JSON-RPC request and decode the result.
    pub async fn call<T: DeserializeOwned>(
        server: Url,
        method: &str,
        params: Value,
    ) -> Result<T> {
        let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
        let request = RpcRequest::new(method, params, json!(id));

        tracing::debug!(method = %method, id = %id, "rpc call");

        let client = Client::new();
        let response = client.post(server).json(&request).send().await?;

        response
            .status()
            .is_success()
            .then_some(())
            .ok_or_else(|| Error::ResponseCode(response.status().into()))?;

        let response: RpcResponse = response.json().await?;
        if let Some(error) = response.error {
            return Err(Error::Rpc(error));
        }
        let result = response.result.ok_or(Error::EmptyResponse)?;
        Ok(serde_json::from_value(result)?)
    }
}
