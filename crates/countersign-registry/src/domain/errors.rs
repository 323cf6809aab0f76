//! # Error Types
//!
//! All error types for the attestation registry.

use crate::domain::value_objects::TokenRef;
use thiserror::Error;

// =============================================================================
// REGISTRY ERRORS
// =============================================================================

/// Errors returned by registry operations.
///
/// Every error aborts its call before any write is issued, so a failed call
/// leaves storage untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A raw argument failed validation before reaching the service.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// Mutation attempted on a canceled document. Cancellation is terminal.
    #[error("document already canceled")]
    AlreadyCanceled,

    /// Operation on a hash with no document record or signer set.
    #[error("document not found")]
    NotFound,

    /// Caller identity mismatch, non-member signer, or non-administrator
    /// cancellation attempt.
    #[error("unauthorized: {reason}")]
    Unauthorized { reason: String },

    /// Companion funding failed the payment policy.
    #[error("payment invalid: {0}")]
    PaymentInvalid(#[from] PaymentError),

    /// Wrong number of companion payment instructions for the operation.
    #[error("malformed request: expected {expected} companion payments, got {actual}")]
    MalformedRequest { expected: usize, actual: usize },

    /// Key-value store failure.
    #[error("storage error: {0}")]
    Storage(#[from] StoreError),

    /// Token issuer failure.
    #[error("asset error: {0}")]
    Asset(#[from] AssetError),
}

impl RegistryError {
    /// Returns true if the call was rejected by a precondition rather than
    /// failing in infrastructure.
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        !matches!(self, Self::Storage(_) | Self::Asset(_))
    }

    /// Returns true for authorization failures.
    #[must_use]
    pub fn is_authorization_failure(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// Shorthand for an `Unauthorized` error with a reason.
    #[must_use]
    pub fn unauthorized(reason: &str) -> Self {
        Self::Unauthorized {
            reason: reason.to_string(),
        }
    }

    /// Shorthand for an `InvalidInput` error with a reason.
    #[must_use]
    pub fn invalid_input(reason: &str) -> Self {
        Self::InvalidInput {
            reason: reason.to_string(),
        }
    }
}

// =============================================================================
// STORE ERRORS
// =============================================================================

/// Errors from the key-value store port.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Underlying I/O failure.
    #[error("I/O error: {message}")]
    Io { message: String },

    /// Stored bytes do not decode (e.g. blob length not a stride multiple).
    #[error("corruption detected: {message}")]
    Corruption { message: String },

    /// Key not present.
    #[error("key not found")]
    NotFound,
}

impl StoreError {
    /// Shorthand for a `Corruption` error with a message.
    #[must_use]
    pub fn corruption(message: &str) -> Self {
        Self::Corruption {
            message: message.to_string(),
        }
    }
}

// =============================================================================
// PAYMENT ERRORS
// =============================================================================

/// Violations of the companion payment policy.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PaymentError {
    /// Payment recipient is not the registry's own address.
    #[error("payment recipient is not the registry address")]
    WrongRecipient,

    /// Payment amount below the funding threshold.
    #[error("payment amount {amount} below minimum {minimum}")]
    AmountBelowMinimum { amount: u64, minimum: u64 },

    /// Payment sender does not match the calling identity.
    #[error("payment sender does not match caller")]
    SenderMismatch,

    /// Payment carries a redirect of remaining funds.
    #[error("payment redirects remaining funds")]
    FundsRedirect,

    /// Payment carries an ownership transfer.
    #[error("payment transfers account ownership")]
    OwnershipTransfer,
}

// =============================================================================
// ASSET ERRORS
// =============================================================================

/// Errors from the token issuer port.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AssetError {
    /// Token could not be minted.
    #[error("mint failed: {message}")]
    MintFailed { message: String },

    /// Token reference is not known to the issuer.
    #[error("unknown token: {0}")]
    UnknownToken(TokenRef),

    /// Token deletion failed.
    #[error("delete failed for token {token}: {message}")]
    DeleteFailed { token: TokenRef, message: String },
}

// =============================================================================
// TESTS
// =============================================================================
