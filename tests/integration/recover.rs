use anyhow::Result;
use serial_test::serial;

use super::test_utils::*;
use msgverify_client::{RecoveredAddress, RpcClient};
use msgverify_core::Network;

const ADDRESS: &str = "1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH";
const SIGNATURE: &str = "H0OTFLtikk5PkuRQrr1zUi+9S6BIP93OPvx09FGB8HtdSFb1L7ZTjVJKfSHOHrvdNVkkwEDb3fQfMAKU86OdeGI=";

#[tokio::test]
#[serial]
async fn integration_recover_address() -> Result<()> {
    let (rx, _handle) = spawn(default_server_config())?;
    let _ = rx.await?;

    let server = server();

    let recovered =
        RpcClient::recover_address(server.clone(), "Test Message", SIGNATURE)
            .await?;
    assert_eq!(
        RecoveredAddress {
            valid: true,
            address: Some(ADDRESS.to_owned()),
        },
        recovered
    );

    // A different message recovers a different, unrelated key
    let recovered =
        RpcClient::recover_address(server.clone(), "wrong", SIGNATURE)
            .await?;
    assert!(recovered.valid);
    assert_eq!(
        Some("1LCPBkX4zEUtdUak4ByzGvpXRdAGmC59Ku"),
        recovered.address.as_deref()
    );

    let recovered =
        RpcClient::recover_address(server.clone(), "Test Message", "invalid")
            .await?;
    assert_eq!(
        RecoveredAddress {
            valid: false,
            address: None,
        },
        recovered
    );

    Ok(())
}

#[tokio::test]
#[serial]
async fn integration_recover_uses_server_network() -> Result<()> {
    let (rx, _handle) = spawn(network_server_config(Network::Test))?;
    let _ = rx.await?;

    let server = server();

    let recovered =
        RpcClient::recover_address(server.clone(), "Test Message", SIGNATURE)
            .await?;
    assert!(recovered.valid);
    assert_eq!(
        Some("mrCDrCybB6J1vRfbwM5hemdJz73FwDBC8r"),
        recovered.address.as_deref()
    );

    let (signing_key, address) = new_signer(Network::Test);
    let signature = sign(&signing_key, "", Network::Test)?;
    let recovered =
        RpcClient::recover_address(server.clone(), "", &signature).await?;
    assert_eq!(Some(address), recovered.address);

    Ok(())
}
