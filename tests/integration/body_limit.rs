use anyhow::Result;
use serial_test::serial;

use super::test_utils::*;
use msgverify_client::{Error, RpcClient};
use msgverify_core::Network;

#[tokio::test]
#[serial]
async fn integration_body_limit() -> Result<()> {
    let mut config = network_server_config(Network::Main);
    config.api.body_limit = 1024;

    let (rx, _handle) = spawn(config)?;
    let _ = rx.await?;

    let (signing_key, address) = new_signer(Network::Main);
    let message = "a".repeat(4096);
    let signature = sign(&signing_key, &message, Network::Main)?;

    let result =
        RpcClient::verify_message(server(), &address, &message, &signature)
            .await;
    assert!(matches!(result, Err(Error::ResponseCode(413))));

    Ok(())
}

#[tokio::test]
#[serial]
async fn integration_large_message() -> Result<()> {
    let mut config = network_server_config(Network::Main);
    config.api.body_limit = 1024 * 1024;

    let (rx, _handle) = spawn(config)?;
    let _ = rx.await?;

    // Long enough to need a five byte length prefix
    let (signing_key, address) = new_signer(Network::Main);
    let message = "b".repeat(70_000);
    let signature = sign(&signing_key, &message, Network::Main)?;

    assert!(
        RpcClient::verify_message(server(), &address, &message, &signature)
            .await?
    );

    Ok(())
}
