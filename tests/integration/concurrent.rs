use anyhow::Result;
use serial_test::serial;

use super::test_utils::*;
use msgverify_client::RpcClient;
use msgverify_core::Network;

#[tokio::test]
#[serial]
async fn integration_concurrent_calls() -> Result<()> {
    let (rx, _handle) = spawn(default_server_config())?;
    let _ = rx.await?;

    let mut tasks = Vec::new();
    for i in 0..16 {
        tasks.push(tokio::task::spawn(async move {
            let (signing_key, address) = new_signer(Network::Main);
            let message = format!("message {}", i);
            let signature = sign(&signing_key, &message, Network::Main)?;
            let recovered =
                RpcClient::recover_address(server(), &message, &signature)
                    .await?;
            Ok::<_, anyhow::Error>((address, recovered))
        }));
    }

    for task in tasks {
        let (address, recovered) = task.await??;
        assert!(recovered.valid);
        assert_eq!(Some(address), recovered.address);
    }

    Ok(())
}
