//! Produce signatures in the signed message format.
use k256::ecdsa::{recoverable, signature::DigestSigner, SigningKey};

use crate::{hasher::prehash, MessageSignature, Network, Result};

/// Sign a message with a key the caller already holds.
///
/// Signing is deterministic (RFC 6979) so the same key and message
/// always produce the same signature.
pub fn sign_message(
    signing_key: &SigningKey,
    message: &[u8],
    compressed: bool,
    network: Network,
) -> Result<MessageSignature> {
    let digest = prehash(network.message_magic(), message);
    let signature: recoverable::Signature =
        signing_key.try_sign_digest(digest)?;
    let bytes: &[u8] = signature.as_ref();

    let mut r = [0u8; 32];
    let mut s = [0u8; 32];
    r.copy_from_slice(&bytes[..32]);
    s.copy_from_slice(&bytes[32..64]);

    Ok(MessageSignature::new(bytes[64], compressed, r, s)?)
}
