use serde::Deserialize;
use std::path::{Path, PathBuf};
use url::Url;

use msgverify_core::Network;

use crate::{Error, Result};

#[derive(Debug, Default, Deserialize)]
pub struct ServerConfig {
    /// Configuration for message verification.
    #[serde(default)]
    pub service: ServiceConfig,

    /// Configuration for the HTTP API.
    #[serde(default)]
    pub api: ApiConfig,

    /// Configuration for TLS encryption.
    pub tls: Option<TlsConfig>,

    /// Path the file was loaded from used to determine
    /// relative paths.
    #[serde(skip)]
    file: Option<PathBuf>,
}

impl ServerConfig {
    /// Create a new server config for a network.
    pub fn new(network: Network) -> Self {
        Self {
            service: ServiceConfig { network },
            ..Default::default()
        }
    }

    /// Load a configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        if !path.as_ref().is_file() {
            return Err(Error::NotFile(path.as_ref().to_path_buf()));
        }

        let contents = std::fs::read_to_string(path.as_ref())?;
        let mut config: ServerConfig = toml::from_str(&contents)?;
        let file = path.as_ref().canonicalize()?;
        let dir = file
            .parent()
            .map(|p| p.to_path_buf())
            .unwrap_or_default();
        config.file = Some(file);

        if let Some(tls) = config.tls.as_mut() {
            if tls.cert.is_relative() {
                tls.cert = dir.join(&tls.cert);
            }
            if tls.key.is_relative() {
                tls.key = dir.join(&tls.key);
            }

            tls.cert = tls.cert.canonicalize()?;
            tls.key = tls.key.canonicalize()?;
        }

        Ok(config)
    }

    /// File this configuration was loaded from.
    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct ServiceConfig {
    /// Network whose addresses are accepted.
    #[serde(default)]
    pub network: Network,
}

fn default_body_limit() -> usize {
    1024 * 64
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Maximum size of body requests.
    #[serde(default = "default_body_limit")]
    pub body_limit: usize,
    /// List of additional CORS origins for the server.
    #[serde(default)]
    pub origins: Vec<Url>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            body_limit: default_body_limit(),
            origins: Vec::new(),
        }
    }
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct TlsConfig {
    /// Path to the certificate.
    pub cert: PathBuf,
    /// Path to the certificate key file.
    pub key: PathBuf,
}
