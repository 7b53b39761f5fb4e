use msgverify_core::rpc::RpcError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unexpected response status code {0}")]
    ResponseCode(u16),

    #[error("server returned error {0}")]
    Rpc(#[from] RpcError),

    #[error("response has neither a result nor an error")]
    EmptyResponse,

    #[error("verify mode requires an address")]
    EmptyAddress,

    #[error(transparent)]
    Request(#[from] reqwest::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
