use anyhow::Result;
use serial_test::serial;

use super::test_utils::*;
use msgverify_client::RpcClient;
use msgverify_core::Network;

#[tokio::test]
#[serial]
async fn integration_get_network() -> Result<()> {
    let (rx, _handle) = spawn(network_server_config(Network::Regtest))?;
    let _ = rx.await?;

    let network = RpcClient::network(server()).await?;
    assert_eq!(Network::Regtest, network);

    Ok(())
}

#[tokio::test]
#[serial]
async fn integration_api_info() -> Result<()> {
    let (rx, _handle) = spawn(default_server_config())?;
    let _ = rx.await?;

    let url = server().join("api")?;
    let info: serde_json::Value = reqwest::get(url).await?.json().await?;
    assert_eq!("integration-test", info["name"]);
    assert_eq!("0.0.0", info["version"]);

    Ok(())
}
