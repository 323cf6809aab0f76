//! # Registry Configuration
//!
//! Immutable configuration and the key-space layout for the registry.

use crate::domain::invariants::limits;
use crate::domain::value_objects::{AccountId, DocumentHash};
use serde::{Deserialize, Serialize};

/// Configuration for the attestation registry.
///
/// The administrator is the only identity allowed to cancel outright;
/// the registry address is where companion funding must be paid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Identity with cancellation rights over every document.
    pub administrator: AccountId,

    /// Identity that must receive companion funding payments.
    pub registry_address: AccountId,

    /// Minimum companion funding per registration, in base currency units.
    pub min_funding: u64,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            administrator: AccountId::ZERO,
            registry_address: AccountId::ZERO,
            min_funding: limits::MIN_FUNDING_AMOUNT,
        }
    }
}

impl RegistryConfig {
    /// Create a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the administrator identity.
    #[must_use]
    pub fn with_administrator(mut self, administrator: AccountId) -> Self {
        self.administrator = administrator;
        self
    }

    /// Set the registry's funding address.
    #[must_use]
    pub fn with_registry_address(mut self, registry_address: AccountId) -> Self {
        self.registry_address = registry_address;
        self
    }

    /// Set the minimum funding threshold.
    #[must_use]
    pub fn with_min_funding(mut self, min_funding: u64) -> Self {
        self.min_funding = min_funding;
        self
    }
}

/// Value stored under the canceled-flag key. The flag is presence-based:
/// absent means active, this single byte means canceled.
pub const CANCELED_FLAG: &[u8] = &[1];

/// Key prefixes for the key-value store.
///
/// All keys are prefixed to namespace different data types.
#[derive(Debug, Clone, Copy)]
pub enum KeyPrefix {
    /// Token reference: `tok:{hash}` -> 8-byte big-endian token id
    Token,
    /// Administrator record: `adm:{hash}` -> 32-byte account
    Admin,
    /// Signer set: `sgn:{hash}` -> 32-byte-stride identity blob
    Signers,
    /// Signature set: `sig:{hash}` -> 32-byte-stride identity blob
    Signatures,
    /// Cancellation flag: `cxl:{hash}` -> [1]
    Canceled,
    /// Per-user document index: `usr:{account}` -> 32-byte-stride hash blob
    UserIndex,
}

impl KeyPrefix {
    /// Get the byte prefix for this key type.
    #[must_use]
    pub fn as_bytes(&self) -> &'static [u8] {
        match self {
            KeyPrefix::Token => b"tok:",
            KeyPrefix::Admin => b"adm:",
            KeyPrefix::Signers => b"sgn:",
            KeyPrefix::Signatures => b"sig:",
            KeyPrefix::Canceled => b"cxl:",
            KeyPrefix::UserIndex => b"usr:",
        }
    }

    /// Build a full key with the given suffix.
    #[must_use]
    pub fn key(&self, suffix: &[u8]) -> Vec<u8> {
        let mut key = self.as_bytes().to_vec();
        key.extend_from_slice(suffix);
        key
    }

    /// Build a token-reference key from a document hash.
    #[must_use]
    pub fn token_key(hash: &DocumentHash) -> Vec<u8> {
        KeyPrefix::Token.key(hash.as_bytes())
    }

    /// Build an administrator key from a document hash.
    #[must_use]
    pub fn admin_key(hash: &DocumentHash) -> Vec<u8> {
        KeyPrefix::Admin.key(hash.as_bytes())
    }

    /// Build a signer-set key from a document hash.
    #[must_use]
    pub fn signers_key(hash: &DocumentHash) -> Vec<u8> {
        KeyPrefix::Signers.key(hash.as_bytes())
    }

    /// Build a signature-set key from a document hash.
    #[must_use]
    pub fn signatures_key(hash: &DocumentHash) -> Vec<u8> {
        KeyPrefix::Signatures.key(hash.as_bytes())
    }

    /// Build a cancellation-flag key from a document hash.
    #[must_use]
    pub fn canceled_key(hash: &DocumentHash) -> Vec<u8> {
        KeyPrefix::Canceled.key(hash.as_bytes())
    }

    /// Build a user-index key from an account identity.
    #[must_use]
    pub fn user_key(account: &AccountId) -> Vec<u8> {
        KeyPrefix::UserIndex.key(account.as_bytes())
    }
}
