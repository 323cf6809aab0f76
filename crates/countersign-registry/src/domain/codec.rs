//! # Blob Codec
//!
//! Fixed-stride encodings for the flat byte blobs held in the key-value
//! store. Signer sets, signature sets, and per-user document lists are all
//! stored as bare concatenations of 32-byte entries: no header, no separator,
//! order preserved exactly as written.
//!
//! Membership tests are exact-match linear scans. Duplicates survive encoding
//! verbatim; only the idempotent-append helpers refuse to introduce them.

use crate::domain::errors::StoreError;
use crate::domain::value_objects::{AccountId, DocumentHash};

/// Entry width shared by every blob in the store.
const STRIDE: usize = 32;

fn decode_stride_blob(blob: &[u8], what: &str) -> Result<Vec<[u8; 32]>, StoreError> {
    if blob.len() % STRIDE != 0 {
        return Err(StoreError::Corruption {
            message: format!(
                "{what} blob length {} is not a multiple of {STRIDE}",
                blob.len()
            ),
        });
    }
    Ok(blob
        .chunks_exact(STRIDE)
        .map(|chunk| {
            let mut entry = [0u8; 32];
            entry.copy_from_slice(chunk);
            entry
        })
        .collect())
}

// =============================================================================
// IDENTITY LIST
// =============================================================================

/// Ordered sequence of account identities decoded from a 32-byte-stride blob.
///
/// Used for both the signer set (written once at creation, duplicates kept
/// verbatim) and the signature set (append-only, idempotent insertion).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IdentityList(Vec<AccountId>);

impl IdentityList {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Wraps an existing sequence of identities, order and duplicates kept.
    #[must_use]
    pub fn from_entries(entries: Vec<AccountId>) -> Self {
        Self(entries)
    }

    /// Decodes a blob. Fails with `Corruption` if the length is not a
    /// multiple of the stride.
    pub fn from_blob(blob: &[u8]) -> Result<Self, StoreError> {
        let entries = decode_stride_blob(blob, "identity")?;
        Ok(Self(entries.into_iter().map(AccountId::new).collect()))
    }

    /// Encodes back to the flat storage form.
    #[must_use]
    pub fn to_blob(&self) -> Vec<u8> {
        let mut blob = Vec::with_capacity(self.0.len() * STRIDE);
        for entry in &self.0 {
            blob.extend_from_slice(entry.as_bytes());
        }
        blob
    }

    /// Number of entries, duplicates counted.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the list holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Exact-match linear scan.
    #[must_use]
    pub fn contains(&self, account: &AccountId) -> bool {
        self.0.iter().any(|entry| entry == account)
    }

    /// Appends unconditionally.
    pub fn push(&mut self, account: AccountId) {
        self.0.push(account);
    }

    /// Appends only if absent. Returns true if the entry was added.
    pub fn push_if_absent(&mut self, account: &AccountId) -> bool {
        if self.contains(account) {
            false
        } else {
            self.0.push(*account);
            true
        }
    }

    /// True if every entry of `self` appears in `other`.
    ///
    /// Membership is by value, so a duplicated entry in `self` is satisfied
    /// by a single occurrence in `other`.
    #[must_use]
    pub fn is_subset_of(&self, other: &Self) -> bool {
        self.0.iter().all(|entry| other.contains(entry))
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &AccountId> {
        self.0.iter()
    }
}

impl From<Vec<AccountId>> for IdentityList {
    fn from(entries: Vec<AccountId>) -> Self {
        Self(entries)
    }
}

// =============================================================================
// HASH LIST
// =============================================================================

/// Ordered sequence of document hashes decoded from a 32-byte-stride blob.
///
/// Backs the per-user index of registered documents. Append-only with
/// idempotent insertion; entries survive cancellation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HashList(Vec<DocumentHash>);

impl HashList {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Decodes a blob. Fails with `Corruption` if the length is not a
    /// multiple of the stride.
    pub fn from_blob(blob: &[u8]) -> Result<Self, StoreError> {
        let entries = decode_stride_blob(blob, "hash")?;
        Ok(Self(entries.into_iter().map(DocumentHash::new).collect()))
    }

    /// Encodes back to the flat storage form.
    #[must_use]
    pub fn to_blob(&self) -> Vec<u8> {
        let mut blob = Vec::with_capacity(self.0.len() * STRIDE);
        for entry in &self.0 {
            blob.extend_from_slice(entry.as_bytes());
        }
        blob
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the list holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Exact-match linear scan.
    #[must_use]
    pub fn contains(&self, hash: &DocumentHash) -> bool {
        self.0.iter().any(|entry| entry == hash)
    }

    /// Appends only if absent. Returns true if the entry was added.
    pub fn push_if_absent(&mut self, hash: &DocumentHash) -> bool {
        if self.contains(hash) {
            false
        } else {
            self.0.push(*hash);
            true
        }
    }

    /// Consumes the list, yielding entries in insertion order.
    #[must_use]
    pub fn into_entries(self) -> Vec<DocumentHash> {
        self.0
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &DocumentHash> {
        self.0.iter()
    }
}

impl From<Vec<DocumentHash>> for HashList {
    fn from(entries: Vec<DocumentHash>) -> Self {
        Self(entries)
    }
}

// =============================================================================
// TESTS
// =============================================================================
