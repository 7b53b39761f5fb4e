//! Base58Check addresses and the networks they belong to.
use k256::{ecdsa::VerifyingKey, elliptic_curve::sec1::ToEncodedPoint, PublicKey};
use ripemd::Ripemd160;
use serde::{Deserialize, Serialize, Serializer};
use sha2::{Digest, Sha256};
use std::{fmt, str::FromStr};

use crate::{hasher::BITCOIN_MESSAGE_MAGIC, DecodeError, Error};

const PAYLOAD_SIZE: usize = 21;

/// Chain whose address versions are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// Production network.
    Main,
    /// Public test network.
    Test,
    /// Local regression test network.
    Regtest,
}

impl Network {
    /// Version byte for pay to public key hash addresses.
    pub fn pubkey_hash_prefix(&self) -> u8 {
        match self {
            Self::Main => 0x00,
            Self::Test | Self::Regtest => 0x6f,
        }
    }

    /// Version byte for pay to script hash addresses.
    pub fn script_hash_prefix(&self) -> u8 {
        match self {
            Self::Main => 0x05,
            Self::Test | Self::Regtest => 0xc4,
        }
    }

    /// Magic prefix for the signed message digest.
    pub fn message_magic(&self) -> &'static str {
        BITCOIN_MESSAGE_MAGIC
    }

    fn kind_of(&self, version: u8) -> Option<AddressKind> {
        if version == self.pubkey_hash_prefix() {
            Some(AddressKind::PubkeyHash)
        } else if version == self.script_hash_prefix() {
            Some(AddressKind::ScriptHash)
        } else {
            None
        }
    }
}

impl Default for Network {
    fn default() -> Self {
        Self::Main
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Main => "main",
                Self::Test => "test",
                Self::Regtest => "regtest",
            }
        )
    }
}

impl FromStr for Network {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "main" => Ok(Self::Main),
            "test" => Ok(Self::Test),
            "regtest" => Ok(Self::Regtest),
            _ => Err(Error::UnknownNetwork(s.to_owned())),
        }
    }
}

/// Kind of hash committed to by an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressKind {
    /// Hash of a serialized public key.
    PubkeyHash,
    /// Hash of a redeem script.
    ScriptHash,
}

/// Decoded address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address {
    network: Network,
    kind: AddressKind,
    hash: [u8; 20],
}

impl Address {
    /// Create an address from its parts.
    pub fn new(network: Network, kind: AddressKind, hash: [u8; 20]) -> Self {
        Self {
            network,
            kind,
            hash,
        }
    }

    /// Pay to public key hash address for a key.
    ///
    /// The compressed flag selects which serialization of the key is
    /// hashed, so the same key yields two distinct addresses.
    pub fn from_public_key(
        key: &VerifyingKey,
        compressed: bool,
        network: Network,
    ) -> Self {
        let point = PublicKey::from(key).to_encoded_point(compressed);
        Self::new(network, AddressKind::PubkeyHash, hash160(point.as_bytes()))
    }

    /// Decode an address, only accepting versions of `network`.
    pub fn decode(text: &str, network: Network) -> Result<Self, DecodeError> {
        let payload = bs58::decode(text)
            .with_check(None)
            .into_vec()
            .map_err(|e| DecodeError::Malformed(format!("address: {}", e)))?;

        if payload.len() != PAYLOAD_SIZE {
            return Err(DecodeError::Malformed(format!(
                "address payload must be {} bytes, got {}",
                PAYLOAD_SIZE,
                payload.len()
            )));
        }

        let version = payload[0];
        let kind = network
            .kind_of(version)
            .ok_or(DecodeError::WrongNetwork { version, network })?;

        let mut hash = [0u8; 20];
        hash.copy_from_slice(&payload[1..]);
        Ok(Self::new(network, kind, hash))
    }

    /// Encode as Base58Check.
    pub fn encode(&self) -> String {
        let version = match self.kind {
            AddressKind::PubkeyHash => self.network.pubkey_hash_prefix(),
            AddressKind::ScriptHash => self.network.script_hash_prefix(),
        };
        let mut payload = Vec::with_capacity(PAYLOAD_SIZE);
        payload.push(version);
        payload.extend_from_slice(&self.hash);
        bs58::encode(payload).with_check().into_string()
    }

    pub fn network(&self) -> Network {
        self.network
    }

    pub fn kind(&self) -> AddressKind {
        self.kind
    }

    pub fn hash(&self) -> &[u8; 20] {
        &self.hash
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.encode())
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// RIPEMD-160 of SHA-256.
pub(crate) fn hash160(bytes: &[u8]) -> [u8; 20] {
    let mut output = [0u8; 20];
    output.copy_from_slice(&Ripemd160::digest(Sha256::digest(bytes)));
    output
}
