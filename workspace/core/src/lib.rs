//! Verification of signed messages and recovery of the signing
//! address from compact recoverable signatures.
mod address;
mod error;
pub mod hasher;
pub mod rpc;
mod service;
mod sign;
mod signature;
pub mod verifier;

pub use address::{Address, AddressKind, Network};
pub use error::{DecodeError, Error, RecoveryError};
pub use hasher::{hash_message, MessageDigest};
pub use service::{Mode, Recovered, VerificationResult, VerifyMessageService};
pub use sign::sign_message;
pub use signature::{MessageSignature, SIGNATURE_SIZE};
pub use verifier::RecoveredKey;

pub type Result<T> = std::result::Result<T, error::Error>;
