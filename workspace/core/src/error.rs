use thiserror::Error;

use crate::Network;

/// Errors decoding a textual signature or address.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("malformed input: {0}")]
    Malformed(String),

    #[error("version byte {version:#04x} does not belong to the {network} network")]
    WrongNetwork { version: u8, network: Network },
}

/// Errors recovering a public key from a signature.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryError {
    #[error("signature does not recover to a valid curve point")]
    InvalidPoint,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown network {0}")]
    UnknownNetwork(String),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Recovery(#[from] RecoveryError),

    #[error(transparent)]
    Ecdsa(#[from] k256::ecdsa::Error),
}
