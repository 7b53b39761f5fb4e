//! Compact recoverable signatures in the signed message format.
//!
//! A signature is 65 bytes encoded as base64. The first byte is a
//! header of `27 + recovery_id`, plus `4` when the signing key is
//! serialized in compressed form, followed by the big-endian `r` and
//! `s` scalars.
use std::{fmt, str::FromStr};

use crate::DecodeError;

/// Length of a decoded signature.
pub const SIGNATURE_SIZE: usize = 65;

const HEADER_BASE: u8 = 27;
const HEADER_MAX: u8 = 34;
const COMPRESSED_FLAG: u8 = 4;
const MAX_RECOVERY_ID: u8 = 3;

/// Structured form of a signed message signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageSignature {
    recovery_id: u8,
    compressed: bool,
    r: [u8; 32],
    s: [u8; 32],
}

impl MessageSignature {
    /// Create a signature from its components.
    pub fn new(
        recovery_id: u8,
        compressed: bool,
        r: [u8; 32],
        s: [u8; 32],
    ) -> Result<Self, DecodeError> {
        if recovery_id > MAX_RECOVERY_ID {
            return Err(DecodeError::Malformed(format!(
                "recovery id {} out of range",
                recovery_id
            )));
        }
        Ok(Self {
            recovery_id,
            compressed,
            r,
            s,
        })
    }

    /// Decode a base64 signature.
    pub fn decode(text: &str) -> Result<Self, DecodeError> {
        let bytes = base64::decode(text).map_err(|e| {
            DecodeError::Malformed(format!("signature is not base64: {}", e))
        })?;
        Self::from_bytes(&bytes)
    }

    /// Parse the 65 byte compact form.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        let bytes: &[u8; SIGNATURE_SIZE] = bytes.try_into().map_err(|_| {
            DecodeError::Malformed(format!(
                "signature must be {} bytes, got {}",
                SIGNATURE_SIZE,
                bytes.len()
            ))
        })?;

        let header = bytes[0];
        if !(HEADER_BASE..=HEADER_MAX).contains(&header) {
            return Err(DecodeError::Malformed(format!(
                "signature header {} out of range",
                header
            )));
        }

        let flags = header - HEADER_BASE;
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[1..33]);
        s.copy_from_slice(&bytes[33..65]);

        Ok(Self {
            recovery_id: flags & MAX_RECOVERY_ID,
            compressed: flags & COMPRESSED_FLAG != 0,
            r,
            s,
        })
    }

    /// Header byte for this signature.
    pub fn header(&self) -> u8 {
        let flag = if self.compressed { COMPRESSED_FLAG } else { 0 };
        HEADER_BASE + self.recovery_id + flag
    }

    /// Serialize to the 65 byte compact form.
    pub fn to_bytes(&self) -> [u8; SIGNATURE_SIZE] {
        let mut bytes = [0u8; SIGNATURE_SIZE];
        bytes[0] = self.header();
        bytes[1..33].copy_from_slice(&self.r);
        bytes[33..65].copy_from_slice(&self.s);
        bytes
    }

    /// Encode as base64.
    pub fn encode(&self) -> String {
        base64::encode(self.to_bytes())
    }

    /// Index of the candidate point selected at signing time.
    pub fn recovery_id(&self) -> u8 {
        self.recovery_id
    }

    /// Whether the signer's key is serialized in compressed form.
    pub fn is_compressed(&self) -> bool {
        self.compressed
    }

    pub fn r(&self) -> &[u8; 32] {
        &self.r
    }

    pub fn s(&self) -> &[u8; 32] {
        &self.s
    }
}

impl FromStr for MessageSignature {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

impl fmt::Display for MessageSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.encode())
    }
}
