//! Public key recovery from compact signatures.
use k256::{
    ecdsa::{recoverable, VerifyingKey},
    elliptic_curve::sec1::ToEncodedPoint,
    FieldBytes, PublicKey,
};

use crate::{
    Address, MessageDigest, MessageSignature, Network, RecoveryError,
    SIGNATURE_SIZE,
};

/// Public key recovered from a signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecoveredKey {
    key: VerifyingKey,
    compressed: bool,
}

impl RecoveredKey {
    pub fn verifying_key(&self) -> &VerifyingKey {
        &self.key
    }

    /// Whether the signature committed to the compressed serialization.
    pub fn is_compressed(&self) -> bool {
        self.compressed
    }

    /// SEC1 bytes of the key in the form selected by the signature.
    pub fn to_bytes(&self) -> Vec<u8> {
        PublicKey::from(&self.key)
            .to_encoded_point(self.compressed)
            .as_bytes()
            .to_vec()
    }

    /// Pay to public key hash address for the recovered key.
    pub fn address(&self, network: Network) -> Address {
        Address::from_public_key(&self.key, self.compressed, network)
    }
}

/// Recover the public key that produced `signature` over `digest`.
///
/// The scalars must be in `[1, n - 1]` and the recovered point must be
/// a valid public key that verifies the signature, otherwise
/// `RecoveryError::InvalidPoint` is returned.
pub fn recover_public_key(
    digest: &MessageDigest,
    signature: &MessageSignature,
) -> Result<RecoveredKey, RecoveryError> {
    let mut bytes = [0u8; SIGNATURE_SIZE];
    bytes[..32].copy_from_slice(signature.r());
    bytes[32..64].copy_from_slice(signature.s());
    bytes[64] = signature.recovery_id();

    let recoverable: recoverable::Signature = bytes
        .as_slice()
        .try_into()
        .map_err(|_| RecoveryError::InvalidPoint)?;

    let key = recoverable
        .recover_verifying_key_from_digest_bytes(FieldBytes::from_slice(
            digest.as_bytes(),
        ))
        .map_err(|_| RecoveryError::InvalidPoint)?;

    Ok(RecoveredKey {
        key,
        compressed: signature.is_compressed(),
    })
}

/// Recover the address that produced `signature` over `digest`.
pub fn recover_address(
    digest: &MessageDigest,
    signature: &MessageSignature,
    network: Network,
) -> Result<Address, RecoveryError> {
    Ok(recover_public_key(digest, signature)?.address(network))
}

/// Determine if `signature` over `digest` was made by `expected`.
///
/// Invalid signatures never match.
pub fn verify_against_address(
    digest: &MessageDigest,
    signature: &MessageSignature,
    expected: &Address,
) -> bool {
    match recover_address(digest, signature, expected.network()) {
        Ok(candidate) => &candidate == expected,
        Err(e) => {
            tracing::debug!(error = %e, "signature recovery failed");
            false
        }
    }
}
