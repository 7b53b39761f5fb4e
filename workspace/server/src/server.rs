use std::{net::SocketAddr, sync::Arc};

use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use axum_server::{tls_rustls::RustlsConfig, Handle};
use serde::Serialize;
use serde_json::json;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer};

use msgverify_core::VerifyMessageService;

use crate::{config::TlsConfig, handlers::RpcHandler, Result, ServerConfig};

/// Server state.
pub struct State {
    /// The server configuration.
    pub config: ServerConfig,
    /// Server information.
    pub info: ServerInfo,
    /// Verifier for the configured network.
    pub service: VerifyMessageService,
}

impl State {
    /// Create server state from a configuration.
    pub fn new(config: ServerConfig, info: ServerInfo) -> Self {
        let service = VerifyMessageService::new(config.service.network);
        Self {
            config,
            info,
            service,
        }
    }
}

/// State shared between handlers, read only once the server starts.
pub(crate) type ServerState = Arc<State>;

/// Server information.
#[derive(Serialize)]
pub struct ServerInfo {
    /// Name of the crate.
    pub name: String,
    /// Version of the crate.
    pub version: String,
}

#[derive(Default)]
pub struct Server;

impl Server {
    /// Create a new server.
    pub fn new() -> Self {
        Self
    }

    /// Start the server.
    pub async fn start(
        &self,
        addr: SocketAddr,
        state: Arc<State>,
        handle: Handle,
    ) -> Result<()> {
        let origins = Server::read_origins(&state)?;
        let limit = state.config.api.body_limit;
        let tls = state.config.tls.as_ref().cloned();

        if let Some(tls) = tls {
            self.run_tls(addr, state, handle, origins, limit, tls).await
        } else {
            self.run(addr, state, handle, origins, limit).await
        }
    }

    /// Start the server running on HTTPS.
    async fn run_tls(
        &self,
        addr: SocketAddr,
        state: Arc<State>,
        handle: Handle,
        origins: Vec<HeaderValue>,
        limit: usize,
        tls: TlsConfig,
    ) -> Result<()> {
        let tls = RustlsConfig::from_pem_file(&tls.cert, &tls.key).await?;
        let app = Server::router(state, origins, limit);
        tracing::info!("listening on {}", addr);
        axum_server::bind_rustls(addr, tls)
            .handle(handle)
            .serve(app.into_make_service())
            .await?;
        Ok(())
    }

    /// Start the server running on HTTP.
    async fn run(
        &self,
        addr: SocketAddr,
        state: Arc<State>,
        handle: Handle,
        origins: Vec<HeaderValue>,
        limit: usize,
    ) -> Result<()> {
        let app = Server::router(state, origins, limit);
        tracing::info!("listening on {}", addr);
        axum_server::bind(addr)
            .handle(handle)
            .serve(app.into_make_service())
            .await?;
        Ok(())
    }

    fn read_origins(state: &State) -> Result<Vec<HeaderValue>> {
        let mut origins = Vec::new();
        for url in state.config.api.origins.iter() {
            origins.push(HeaderValue::from_str(
                url.as_str().trim_end_matches('/'),
            )?);
        }
        Ok(origins)
    }

    pub(crate) fn router(
        state: Arc<State>,
        origins: Vec<HeaderValue>,
        limit: usize,
    ) -> Router {
        let cors = CorsLayer::new()
            .allow_methods(vec![Method::GET, Method::POST])
            .allow_credentials(true)
            .allow_headers(vec![CONTENT_TYPE])
            .expose_headers(vec![])
            .allow_origin(origins);

        Router::new()
            .route("/", post(RpcHandler::post))
            .route("/api", get(api))
            .layer(RequestBodyLimitLayer::new(limit))
            .layer(cors)
            .layer(Extension(state))
    }
}

/// Serve the API identity page.
pub(crate) async fn api(
    Extension(state): Extension<ServerState>,
) -> impl IntoResponse {
    Json(json!(&state.info))
}
