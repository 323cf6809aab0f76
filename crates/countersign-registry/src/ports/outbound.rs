//! # Outbound Ports (Driven Ports)
//!
//! Dependencies required by the registry service. These are the interfaces
//! this library requires the host application to implement.

use crate::domain::entities::PaymentInstruction;
use crate::domain::errors::{AssetError, PaymentError, StoreError};
use crate::domain::value_objects::{AccountId, TokenRef, TokenSpec};

/// Result of a prefix scan: matching key-value pairs, unordered.
pub type ScanResult = Vec<(Vec<u8>, Vec<u8>)>;

/// Abstract interface for key-value database operations.
///
/// Every per-document and per-user blob lives behind this port.
/// Testing: `InMemoryKVStore`. Durable: `FileBackedKVStore`.
pub trait KeyValueStore: Send + Sync {
    /// Get a value by key.
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError>;

    /// Put a single key-value pair.
    fn put(&mut self, key: &[u8], value: &[u8]) -> Result<(), StoreError>;

    /// Delete a key.
    fn delete(&mut self, key: &[u8]) -> Result<(), StoreError>;

    /// Execute an atomic batch write.
    ///
    /// ## Atomicity Guarantee (INVARIANT-5)
    ///
    /// Either ALL operations in the batch succeed, or NONE are applied.
    /// The service funnels every mutation of a call through one batch.
    fn atomic_batch_write(&mut self, operations: Vec<BatchOperation>) -> Result<(), StoreError>;

    /// Check if a key exists.
    fn exists(&self, key: &[u8]) -> Result<bool, StoreError>;

    /// Iterate over keys with a prefix.
    fn prefix_scan(&self, prefix: &[u8]) -> Result<ScanResult, StoreError>;
}

/// Batch operation for atomic writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchOperation {
    /// Put a key-value pair.
    Put { key: Vec<u8>, value: Vec<u8> },
    /// Delete a key.
    Delete { key: Vec<u8> },
}

impl BatchOperation {
    /// Create a Put operation.
    pub fn put(key: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>) -> Self {
        BatchOperation::Put {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Create a Delete operation.
    pub fn delete(key: impl Into<Vec<u8>>) -> Self {
        BatchOperation::Delete { key: key.into() }
    }
}

/// Abstract interface for companion payment verification.
///
/// Registration calls arrive with a funding instruction; the policy decides
/// whether it satisfies the registry's terms. The service hands in the
/// registry address and threshold from its own configuration so policies
/// stay stateless.
pub trait PaymentVerifier: Send + Sync {
    /// Verify a single companion payment against the registry's terms.
    fn verify(
        &self,
        payment: &PaymentInstruction,
        caller: &AccountId,
        registry_address: &AccountId,
        min_funding: u64,
    ) -> Result<(), PaymentError>;
}

/// Abstract interface for the external token issuer.
///
/// One unique token is minted per registered document and deleted again on
/// cancellation. Deletion failures are surfaced but the registry treats them
/// as best-effort.
pub trait AssetIssuer: Send + Sync {
    /// Mint a token for a document. The registry retains management rights.
    fn mint(&mut self, spec: &TokenSpec) -> Result<TokenRef, AssetError>;

    /// Delete a previously minted token.
    fn delete(&mut self, token: TokenRef) -> Result<(), AssetError>;
}
