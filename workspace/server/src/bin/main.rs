use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Signed message verification server.
#[derive(Parser, Debug)]
#[clap(name = "msgverify-server", author, version, about, long_about = None)]
struct Cli {
    /// Bind to host:port.
    #[clap(short, long, default_value = "127.0.0.1:9070")]
    bind: String,

    /// Config file to load.
    #[clap(short, long, parse(from_os_str))]
    config: PathBuf,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Cli::parse();
    if let Err(e) = msgverify_server::start(args.bind, args.config).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}
