//! # Registry Service
//!
//! The main service implementing the attestation registry APIs.
//!
//! ## Architecture
//!
//! This service:
//! 1. Implements `DocumentRegistryApi` for registration and cancellation
//! 2. Implements `SigningWorkflowApi` for attestation and the veto
//! 3. Implements `UserIndexApi` for per-user document listings
//! 4. Enforces all five domain invariants
//! 5. Uses dependency injection for storage, payments, and token issuance
//!
//! Every mutating call gathers its writes into one batch and commits through
//! `KeyValueStore::atomic_batch_write`; every precondition failure returns
//! before the batch is built, so failed calls leave storage untouched.

mod helpers;
mod index;
mod registry;
mod signing;

use crate::config::{KeyPrefix, RegistryConfig, CANCELED_FLAG};
use crate::domain::codec::{HashList, IdentityList};
use crate::domain::entities::{CallContext, DocumentRecord};
use crate::domain::errors::{RegistryError, StoreError};
use crate::domain::invariants::{
    document_state, limits, verify_document, DocumentState, InvariantCheckResult,
    InvariantViolation,
};
use crate::domain::value_objects::{AccountId, DocumentHash, TokenRef, TokenSpec};
use crate::ports::inbound::{DocumentRegistryApi, SigningWorkflowApi, UserIndexApi};
use crate::ports::outbound::{AssetIssuer, BatchOperation, KeyValueStore, PaymentVerifier};

/// The attestation registry service.
///
/// Generic over its driven ports so hosts can swap storage engines, payment
/// policies, and token issuers without touching the state machine.
pub struct RegistryService<KV, PV, AI>
where
    KV: KeyValueStore,
    PV: PaymentVerifier,
    AI: AssetIssuer,
{
    /// Key-value store holding all per-document and per-user blobs.
    pub(crate) kv_store: KV,
    /// Companion payment policy for registration calls.
    pub(crate) payments: PV,
    /// External token issuer, one unique token per document.
    pub(crate) assets: AI,
    /// Service configuration.
    pub(crate) config: RegistryConfig,
}

/// Dependencies for RegistryService.
pub struct RegistryDependencies<KV, PV, AI> {
    pub kv_store: KV,
    pub payments: PV,
    pub assets: AI,
}

impl<KV, PV, AI> RegistryService<KV, PV, AI>
where
    KV: KeyValueStore,
    PV: PaymentVerifier,
    AI: AssetIssuer,
{
    /// Create a new registry service with the given dependencies.
    pub fn new(deps: RegistryDependencies<KV, PV, AI>, config: RegistryConfig) -> Self {
        Self {
            kv_store: deps.kv_store,
            payments: deps.payments,
            assets: deps.assets,
            config,
        }
    }

    /// The configuration this service was built with.
    #[must_use]
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// The token issuer, for hosts that track issued tokens themselves.
    #[must_use]
    pub fn assets(&self) -> &AI {
        &self.assets
    }

    /// Sweeps every stored document through the domain invariant checks.
    ///
    /// Scans the signer-set namespace, which holds one key per registered
    /// hash (cancellation clears the blob but keeps the key). Returns the
    /// violations found per hash; an empty result means storage is sound.
    pub fn audit_documents(
        &self,
    ) -> Result<Vec<(DocumentHash, Vec<InvariantViolation>)>, RegistryError> {
        let prefix = KeyPrefix::Signers.as_bytes();
        let entries = self.kv_store.prefix_scan(prefix)?;

        let mut findings = Vec::new();
        for (key, blob) in entries {
            let Some(hash) = DocumentHash::from_slice(&key[prefix.len()..]) else {
                return Err(
                    StoreError::corruption("signer key suffix is not a document hash").into(),
                );
            };
            let signers = IdentityList::from_blob(&blob)?;
            let signatures = self.signature_set(&hash)?;
            let canceled = self.is_canceled(&hash)?;

            if let InvariantCheckResult::Invalid(violations) =
                verify_document(canceled, &signers, &signatures)
            {
                tracing::warn!(
                    hash = %hash,
                    violations = violations.len(),
                    "document fails invariant audit"
                );
                findings.push((hash, violations));
            }
        }
        Ok(findings)
    }

    /// Assembles the record for `hash` from its storage keys, or `None` if
    /// the hash was never registered.
    ///
    /// Records are never deleted once written, so a canceled document still
    /// yields `Some` with `canceled` set.
    pub fn record(&self, hash: &DocumentHash) -> Result<Option<DocumentRecord>, RegistryError> {
        let Some(token_ref) = self.stored_token(hash)? else {
            return Ok(None);
        };
        let admin_bytes = self
            .kv_store
            .get(&KeyPrefix::admin_key(hash))?
            .ok_or_else(|| StoreError::corruption("record has a token but no administrator"))?;
        let administrator =
            AccountId::from_slice(&admin_bytes).ok_or_else(|| StoreError::Corruption {
                message: format!("administrator blob has length {}", admin_bytes.len()),
            })?;
        Ok(Some(DocumentRecord {
            token_ref,
            administrator,
            canceled: self.is_canceled(hash)?,
        }))
    }
}

impl
    RegistryService<
        crate::adapters::InMemoryKVStore,
        crate::adapters::StandardPaymentPolicy,
        crate::adapters::SequentialAssetIssuer,
    >
{
    /// Create a service over in-memory adapters. Convenient for embedding
    /// and tests.
    #[must_use]
    pub fn new_in_memory(config: RegistryConfig) -> Self {
        Self::new(
            RegistryDependencies {
                kv_store: crate::adapters::InMemoryKVStore::new(),
                payments: crate::adapters::StandardPaymentPolicy::new(),
                assets: crate::adapters::SequentialAssetIssuer::new(),
            },
            config,
        )
    }
}
