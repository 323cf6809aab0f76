//! # Value Objects
//!
//! Immutable domain primitives for the attestation registry.
//! These types represent concepts that are defined by their value, not identity.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

// =============================================================================
// DOCUMENT HASH (32 bytes)
// =============================================================================

/// A 32-byte content hash identifying a document.
///
/// The hash is the primary key for all per-document state; two uploads of the
/// same bytes are the same document.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct DocumentHash(pub [u8; 32]);

impl DocumentHash {
    /// The zero hash.
    pub const ZERO: Self = Self([0u8; 32]);

    /// Creates a document hash from a 32-byte array.
    #[must_use]
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Creates a document hash from a slice. Returns None if wrong length.
    #[must_use]
    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        if slice.len() == 32 {
            let mut bytes = [0u8; 32];
            bytes.copy_from_slice(slice);
            Some(Self(bytes))
        } else {
            None
        }
    }

    /// Computes the hash of raw document content (SHA-256).
    #[must_use]
    pub fn digest(content: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(content);
        Self(hasher.finalize().into())
    }

    /// Returns the underlying bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Returns true if this is the zero hash.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

impl fmt::Debug for DocumentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Display for DocumentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for byte in &self.0[..4] {
            write!(f, "{byte:02x}")?;
        }
        write!(f, "...")?;
        for byte in &self.0[28..] {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl From<[u8; 32]> for DocumentHash {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl From<DocumentHash> for [u8; 32] {
    fn from(hash: DocumentHash) -> Self {
        hash.0
    }
}

// =============================================================================
// ACCOUNT ID (32 bytes)
// =============================================================================

/// A 32-byte account identity.
///
/// Identifies callers, signers, payment parties, and the administrator.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct AccountId(pub [u8; 32]);

impl AccountId {
    /// The zero account.
    pub const ZERO: Self = Self([0u8; 32]);

    /// Creates an account id from a 32-byte array.
    #[must_use]
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Creates an account id from a slice. Returns None if wrong length.
    #[must_use]
    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        if slice.len() == 32 {
            let mut bytes = [0u8; 32];
            bytes.copy_from_slice(slice);
            Some(Self(bytes))
        } else {
            None
        }
    }

    /// Returns the underlying bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Returns true if this is the zero account.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

impl fmt::Debug for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for byte in &self.0[..4] {
            write!(f, "{byte:02x}")?;
        }
        write!(f, "...")?;
        for byte in &self.0[28..] {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl From<[u8; 32]> for AccountId {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl From<AccountId> for [u8; 32] {
    fn from(account: AccountId) -> Self {
        account.0
    }
}

// =============================================================================
// TOKEN REFERENCE
// =============================================================================

/// Opaque handle to the unique token minted for a registered document.
///
/// The issuer never hands out 0, so 0 is free to mean "unset" in storage.
/// Persisted as 8 big-endian bytes.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct TokenRef(pub u64);

impl TokenRef {
    /// Creates a token reference from its numeric id.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Decodes a token reference from its 8-byte storage form.
    /// Returns None if wrong length.
    #[must_use]
    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        let bytes: [u8; 8] = slice.try_into().ok()?;
        Some(Self(u64::from_be_bytes(bytes)))
    }

    /// Returns the 8-byte big-endian storage form.
    #[must_use]
    pub const fn to_be_bytes(self) -> [u8; 8] {
        self.0.to_be_bytes()
    }

    /// Returns the numeric id.
    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for TokenRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TokenRef({})", self.0)
    }
}

impl fmt::Display for TokenRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TokenRef {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<TokenRef> for u64 {
    fn from(token: TokenRef) -> Self {
        token.0
    }
}

// =============================================================================
// TOKEN SPEC
// =============================================================================

/// Mint parameters for the unique per-document token.
///
/// One indivisible unit per document: total 1, zero decimals. The name embeds
/// a prefix of the document hash so the token is traceable to its document.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct TokenSpec {
    /// Token name, `FILE-<first 8 hash bytes as hex>`.
    pub name: String,
    /// Unit label shown by wallets and explorers.
    pub unit: String,
    /// Total supply. Always 1 for document tokens.
    pub total: u64,
    /// Decimal places. Always 0 for document tokens.
    pub decimals: u32,
}

impl TokenSpec {
    /// Builds the mint spec for a document.
    #[must_use]
    pub fn for_document(hash: &DocumentHash) -> Self {
        Self {
            name: format!("FILE-{}", hex::encode(&hash.as_bytes()[..8])),
            unit: "FILE".to_string(),
            total: 1,
            decimals: 0,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_hash_zero() {
        assert!(DocumentHash::ZERO.is_zero());
        assert!(!DocumentHash::new([1u8; 32]).is_zero());
    }

    #[test]
    fn test_document_hash_from_slice_length_checked() {
        assert!(DocumentHash::from_slice(&[0u8; 32]).is_some());
        assert!(DocumentHash::from_slice(&[0u8; 31]).is_none());
        assert!(DocumentHash::from_slice(&[0u8; 33]).is_none());
        assert!(DocumentHash::from_slice(&[]).is_none());
    }

    #[test]
    fn test_document_hash_digest_is_deterministic() {
        let a = DocumentHash::digest(b"contract draft v3");
        let b = DocumentHash::digest(b"contract draft v3");
        let c = DocumentHash::digest(b"contract draft v4");

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(!a.is_zero());
    }

    #[test]
    fn test_account_id_from_slice_length_checked() {
        assert!(AccountId::from_slice(&[7u8; 32]).is_some());
        assert!(AccountId::from_slice(&[7u8; 20]).is_none());
    }

    #[test]
    fn test_token_ref_roundtrip_be_bytes() {
        let token = TokenRef::new(0x0102_0304_0506_0708);
        let bytes = token.to_be_bytes();
        assert_eq!(bytes, [1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(TokenRef::from_slice(&bytes), Some(token));
        assert_eq!(TokenRef::from_slice(&bytes[..7]), None);
    }

    #[test]
    fn test_token_spec_name_embeds_hash_prefix() {
        let mut bytes = [0u8; 32];
        bytes[..8].copy_from_slice(&[0xde, 0xad, 0xbe, 0xef, 0x01, 0x02, 0x03, 0x04]);
        let spec = TokenSpec::for_document(&DocumentHash::new(bytes));

        assert_eq!(spec.name, "FILE-deadbeef01020304");
        assert_eq!(spec.unit, "FILE");
        assert_eq!(spec.total, 1);
        assert_eq!(spec.decimals, 0);
    }

    #[test]
    fn test_display_abbreviates_hex() {
        let hash = DocumentHash::new([0xab; 32]);
        let shown = format!("{hash}");
        assert!(shown.starts_with("0xabababab"));
        assert!(shown.contains("..."));
    }
}
