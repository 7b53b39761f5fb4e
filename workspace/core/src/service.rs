//! The `verifymessage` operation.
//!
//! Every rejection resolves into the result type: a malformed address,
//! a malformed signature and a signature that does not recover all look
//! the same to the caller as a signature from somebody else.
use serde::Serialize;

use crate::{
    hasher::hash_message_with_magic,
    verifier::{recover_address, verify_against_address},
    Address, MessageSignature, Network,
};

/// Mode selected by the address argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Check the signature against this address.
    Verify(String),
    /// Derive the signing address from the signature.
    Recover,
}

impl Mode {
    /// An empty address selects recovery.
    pub fn from_address(address: &str) -> Self {
        if address.is_empty() {
            Self::Recover
        } else {
            Self::Verify(address.to_owned())
        }
    }
}

/// Outcome of recover mode.
///
/// The address is only present for a valid signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recovered {
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    address: Option<Address>,
}

impl Recovered {
    pub fn valid(address: Address) -> Self {
        Self {
            valid: true,
            address: Some(address),
        }
    }

    pub fn invalid() -> Self {
        Self {
            valid: false,
            address: None,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }
}

/// Result of `verifymessage`, serialized as a bare boolean in verify
/// mode and as an object in recover mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum VerificationResult {
    Verified(bool),
    Recovered(Recovered),
}

/// Verifies signed messages for one network.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct VerifyMessageService {
    network: Network,
}

impl VerifyMessageService {
    pub fn new(network: Network) -> Self {
        Self { network }
    }

    pub fn network(&self) -> Network {
        self.network
    }

    /// Run `verifymessage`, selecting the mode from the address.
    pub fn verify_message(
        &self,
        address: &str,
        message: &[u8],
        signature: &str,
    ) -> VerificationResult {
        self.run(Mode::from_address(address), message, signature)
    }

    /// Run in an explicit mode.
    pub fn run(
        &self,
        mode: Mode,
        message: &[u8],
        signature: &str,
    ) -> VerificationResult {
        match mode {
            Mode::Verify(address) => VerificationResult::Verified(
                self.verify(&address, message, signature),
            ),
            Mode::Recover => {
                VerificationResult::Recovered(self.recover(message, signature))
            }
        }
    }

    /// Determine if `signature` over `message` was made by `address`.
    pub fn verify(&self, address: &str, message: &[u8], signature: &str) -> bool {
        let expected = match Address::decode(address, self.network) {
            Ok(address) => address,
            Err(e) => {
                tracing::debug!(error = %e, "rejected address");
                return false;
            }
        };

        let signature = match MessageSignature::decode(signature) {
            Ok(signature) => signature,
            Err(e) => {
                tracing::debug!(error = %e, "rejected signature");
                return false;
            }
        };

        let digest =
            hash_message_with_magic(self.network.message_magic(), message);
        verify_against_address(&digest, &signature, &expected)
    }

    /// Recover the address that signed `message`.
    pub fn recover(&self, message: &[u8], signature: &str) -> Recovered {
        let signature = match MessageSignature::decode(signature) {
            Ok(signature) => signature,
            Err(e) => {
                tracing::debug!(error = %e, "rejected signature");
                return Recovered::invalid();
            }
        };

        let digest =
            hash_message_with_magic(self.network.message_magic(), message);
        match recover_address(&digest, &signature, self.network) {
            Ok(address) => Recovered::valid(address),
            Err(e) => {
                tracing::debug!(error = %e, "signature recovery failed");
                Recovered::invalid()
            }
        }
    }
}
