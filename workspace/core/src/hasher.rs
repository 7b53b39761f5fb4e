//! Canonical digest for signed messages.
//!
//! The magic prefix and the message are each serialized with a
//! compact size length prefix and the buffer is hashed twice with
//! SHA-256, which is the framing used by `signmessage` in Bitcoin
//! and its derivatives.
use sha2::{Digest, Sha256};
use std::fmt;

/// Domain separation prefix for Bitcoin signed messages.
pub const BITCOIN_MESSAGE_MAGIC: &str = "Bitcoin Signed Message:\n";

/// Double SHA-256 digest of a framed message.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageDigest([u8; 32]);

impl MessageDigest {
    /// Digest bytes in the order they are signed.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl AsRef<[u8]> for MessageDigest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 32]> for MessageDigest {
    fn from(value: [u8; 32]) -> Self {
        Self(value)
    }
}

impl fmt::Debug for MessageDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MessageDigest({})", hex::encode(self.0))
    }
}

/// Append a compact size integer to the buffer.
pub(crate) fn write_compact_size(buffer: &mut Vec<u8>, value: u64) {
    if value < 0xfd {
        buffer.push(value as u8);
    } else if value <= 0xffff {
        buffer.push(0xfd);
        buffer.extend_from_slice(&(value as u16).to_le_bytes());
    } else if value <= 0xffff_ffff {
        buffer.push(0xfe);
        buffer.extend_from_slice(&(value as u32).to_le_bytes());
    } else {
        buffer.push(0xff);
        buffer.extend_from_slice(&value.to_le_bytes());
    }
}

fn write_var_bytes(buffer: &mut Vec<u8>, bytes: &[u8]) {
    write_compact_size(buffer, bytes.len() as u64);
    buffer.extend_from_slice(bytes);
}

/// Serialize the magic prefix and message into the signed buffer.
pub(crate) fn frame(magic: &str, message: &[u8]) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(magic.len() + message.len() + 18);
    write_var_bytes(&mut buffer, magic.as_bytes());
    write_var_bytes(&mut buffer, message);
    buffer
}

/// SHA-256 state primed with the first hash of the framed message.
///
/// Finalizing the returned state yields the message digest, so it can
/// be handed to APIs that accept a `Digest` rather than raw bytes.
pub(crate) fn prehash(magic: &str, message: &[u8]) -> Sha256 {
    Sha256::new_with_prefix(Sha256::digest(frame(magic, message)))
}

/// Compute the digest of a message with a custom magic prefix.
pub fn hash_message_with_magic(magic: &str, message: &[u8]) -> MessageDigest {
    let mut output = [0u8; 32];
    output.copy_from_slice(&prehash(magic, message).finalize());
    MessageDigest(output)
}

/// Compute the digest of a message with the Bitcoin magic prefix.
pub fn hash_message(message: &[u8]) -> MessageDigest {
    hash_message_with_magic(BITCOIN_MESSAGE_MAGIC, message)
}
