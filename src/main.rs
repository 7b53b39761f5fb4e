use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::Value;
use std::{
    io::{self, Write},
    path::PathBuf,
};
use url::Url;

use msgverify::Result;
use msgverify_client::RpcClient;
use msgverify_core::{Network, VerifyMessageService};

/// Verify signed messages and recover their signing address.
#[derive(Parser, Debug)]
#[clap(name = "msgverify", author, version, about, long_about = None)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Verify a signed message locally.
    Verify {
        /// Network for addresses (main, test or regtest).
        #[clap(short, long, default_value = "main", env = "MSGVERIFY_NETWORK")]
        network: Network,

        /// Address of the signer, omit to recover it.
        #[clap(short, long, default_value = "")]
        address: String,

        /// Message that was signed.
        message: String,

        /// Base64 encoded signature.
        signature: String,
    },
    /// Verify a signed message using a server.
    Remote {
        /// Server URL.
        #[clap(short, long, default_value = "http://127.0.0.1:9070")]
        server: Url,

        /// Address of the signer, omit to recover it.
        #[clap(short, long, default_value = "")]
        address: String,

        /// Message that was signed.
        message: String,

        /// Base64 encoded signature.
        signature: String,
    },
    /// Print the network a server verifies addresses for.
    Network {
        /// Server URL.
        #[clap(short, long, default_value = "http://127.0.0.1:9070")]
        server: Url,
    },
    /// Start a server.
    Server {
        /// Bind to host:port.
        #[clap(short, long, default_value = "127.0.0.1:9070")]
        bind: String,

        /// Config file to load.
        #[clap(short, long, parse(from_os_str))]
        config: PathBuf,
    },
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

async fn run() -> Result<()> {
    let args = Cli::parse();

    match args.command {
        Command::Verify {
            network,
            address,
            message,
            signature,
        } => {
            let service = VerifyMessageService::new(network);
            let result = service.verify_message(
                &address,
                message.as_bytes(),
                &signature,
            );
            print_json(&result)?;
        }
        Command::Remote {
            server,
            address,
            message,
            signature,
        } => {
            let result: Value = RpcClient::call_verify_message(
                server, &address, &message, &signature,
            )
            .await?;
            print_json(&result)?;
        }
        Command::Network { server } => {
            let network = RpcClient::network(server).await?;
            println!("{}", network);
        }
        Command::Server { bind, config } => {
            msgverify_server::start(bind, config).await?;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    msgverify::init_tracing("info");

    if let Err(e) = run().await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}
