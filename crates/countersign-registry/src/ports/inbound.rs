//! # Inbound Ports (Driving Ports)
//!
//! The primary API for the attestation registry.
//!
//! These are the public APIs this library exposes to the application.
//! Implementations must enforce all domain invariants.

use crate::domain::entities::CallContext;
use crate::domain::errors::RegistryError;
use crate::domain::value_objects::{AccountId, DocumentHash, TokenRef};

/// Document lifecycle API: registration, cancellation, record lookups.
pub trait DocumentRegistryApi {
    /// Register a document with its required signer set.
    ///
    /// Re-registering an existing hash is a no-op that returns the original
    /// token unchanged (INVARIANT-4); the signer and signature sets are not
    /// reset, and the requester's index gains the hash at most once.
    ///
    /// ## Atomicity (INVARIANT-5)
    ///
    /// This operation is atomic. Either all data is written or none.
    ///
    /// ## Errors
    ///
    /// - `MalformedRequest`: not exactly one companion payment
    /// - `AlreadyCanceled`: the hash was canceled earlier (terminal)
    /// - `PaymentInvalid`: companion funding fails the payment policy
    /// - `Asset`: token mint failed; nothing is written
    fn create(
        &mut self,
        ctx: &CallContext,
        hash: DocumentHash,
        signers: &[AccountId],
    ) -> Result<TokenRef, RegistryError>;

    /// Cancel a document outright. Administrator only.
    ///
    /// Clears both sets, marks the hash canceled forever, and deletes the
    /// minted token on a best-effort basis. Returns the token that was
    /// associated with the document.
    ///
    /// ## Errors
    ///
    /// - `Unauthorized`: caller is not the configured administrator
    /// - `NotFound`: hash was never registered
    /// - `AlreadyCanceled`: cancellation is terminal
    fn cancel(&mut self, ctx: &CallContext, hash: DocumentHash) -> Result<TokenRef, RegistryError>;

    /// Token minted for the document, or None if the hash is unregistered.
    /// Never errors on unknown hashes.
    fn token_ref(&self, hash: &DocumentHash) -> Result<Option<TokenRef>, RegistryError>;

    /// True iff the document is registered and not canceled.
    /// Unregistered hashes count as inactive.
    fn is_active(&self, hash: &DocumentHash) -> Result<bool, RegistryError>;
}

/// Attestation API: signing, completion, and the single-signer veto.
pub trait SigningWorkflowApi {
    /// Record the signer's attestation. Self-attestation only: the caller
    /// must be the signer it attests for.
    ///
    /// Signing twice is a no-op success; the signature set never holds
    /// duplicates (INVARIANT-3 guards membership at this point).
    ///
    /// ## Errors
    ///
    /// - `MalformedRequest`: companion payments present
    /// - `AlreadyCanceled`: document was canceled
    /// - `NotFound`: hash unregistered or signer set missing
    /// - `Unauthorized`: caller is not the signer, or not a signer-set member
    fn sign(
        &mut self,
        ctx: &CallContext,
        hash: DocumentHash,
        signer: AccountId,
    ) -> Result<bool, RegistryError>;

    /// True iff the calling identity has attested to this document.
    /// A missing or empty signature set is plain false, not an error.
    fn is_signed(&self, ctx: &CallContext, hash: DocumentHash) -> Result<bool, RegistryError>;

    /// True iff every required signer has attested.
    ///
    /// False when the document is canceled, when either set is missing or
    /// empty, or when any signer-set entry lacks a matching signature.
    /// Duplicate signer entries are each checked by value, so one signature
    /// satisfies all copies.
    fn is_complete(&self, ctx: &CallContext, hash: DocumentHash) -> Result<bool, RegistryError>;

    /// Veto the document: identical effect to cancellation, triggerable by
    /// any single authorized signer.
    ///
    /// Authorization is exactly as `sign`: the caller must be the signer and
    /// the signer must be a member of the signer set.
    ///
    /// ## Errors
    ///
    /// Same conditions as `sign`, minus the idempotent-success case.
    fn reject(
        &mut self,
        ctx: &CallContext,
        hash: DocumentHash,
        signer: AccountId,
    ) -> Result<TokenRef, RegistryError>;

    /// Number of required signers. 0 if the hash is unregistered or canceled.
    fn total_signers(&self, hash: &DocumentHash) -> Result<u64, RegistryError>;

    /// Number of attestations recorded. 0 if unregistered or canceled.
    fn signed_count(&self, hash: &DocumentHash) -> Result<u64, RegistryError>;
}

/// Per-user registration index.
pub trait UserIndexApi {
    /// Documents the calling identity has registered, in insertion order.
    /// Canceled documents remain listed; unknown identities get an empty list.
    fn list_owned(&self, ctx: &CallContext) -> Result<Vec<DocumentHash>, RegistryError>;
}
