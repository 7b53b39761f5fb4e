use anyhow::Result;
use serde_json::{json, Value};
use serial_test::serial;

use super::test_utils::*;
use msgverify_client::{Error, RpcClient};
use msgverify_core::rpc::{INVALID_PARAMS, METHOD_NOT_FOUND, PARSE_ERROR};

#[tokio::test]
#[serial]
async fn integration_rpc_unknown_method() -> Result<()> {
    let (rx, _handle) = spawn(default_server_config())?;
    let _ = rx.await?;

    let result =
        RpcClient::call::<Value>(server(), "signmessage", json!([])).await;
    match result {
        Err(Error::Rpc(e)) => assert_eq!(METHOD_NOT_FOUND, e.code),
        other => panic!("expected method not found, got {:?}", other),
    }

    Ok(())
}

#[tokio::test]
#[serial]
async fn integration_rpc_invalid_params() -> Result<()> {
    let (rx, _handle) = spawn(default_server_config())?;
    let _ = rx.await?;

    let result = RpcClient::call::<Value>(
        server(),
        "verifymessage",
        json!(["only", "two"]),
    )
    .await;
    match result {
        Err(Error::Rpc(e)) => assert_eq!(INVALID_PARAMS, e.code),
        other => panic!("expected invalid params, got {:?}", other),
    }

    let result = RpcClient::call::<Value>(
        server(),
        "verifymessage",
        json!({ "message": 42, "signature": "" }),
    )
    .await;
    assert!(matches!(result, Err(Error::Rpc(e)) if e.code == INVALID_PARAMS));

    Ok(())
}

#[tokio::test]
#[serial]
async fn integration_rpc_parse_error() -> Result<()> {
    let (rx, _handle) = spawn(default_server_config())?;
    let _ = rx.await?;

    let client = reqwest::Client::new();
    let response: Value = client
        .post(server())
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(json!(PARSE_ERROR), response["error"]["code"]);
    assert_eq!(Value::Null, response["id"]);

    Ok(())
}
