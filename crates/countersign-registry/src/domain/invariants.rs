//! # Domain Invariants
//!
//! Critical invariants that MUST hold for every document in the registry.
//! The service enforces them at call time; tests sweep them after the fact.
//!
//! - INVARIANT-1: Terminal Cancellation (canceled never reverts to active)
//! - INVARIANT-2: Cleared Sets on Cancel (canceled documents hold no entries)
//! - INVARIANT-3: Authorized Signatures (signatures drawn from the signer set)
//! - INVARIANT-4: Idempotent Registration (re-create changes nothing)
//! - INVARIANT-5: Atomic Calls (each call commits all writes or none)

use crate::domain::codec::IdentityList;
use crate::domain::value_objects::AccountId;

// =============================================================================
// DOCUMENT STATE
// =============================================================================

/// Lifecycle state of a document hash, derived from storage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocumentState {
    /// Never registered.
    Uninitialized,
    /// Registered and accepting signatures.
    Active,
    /// Canceled. Terminal: no operation leaves this state.
    Canceled,
}

/// Derives the lifecycle state from the two storage facts that define it.
///
/// The canceled flag wins even without a registration record, so a hash
/// whose record was never written but whose flag is set still refuses
/// re-registration.
#[must_use]
pub fn document_state(registered: bool, canceled: bool) -> DocumentState {
    if canceled {
        DocumentState::Canceled
    } else if registered {
        DocumentState::Active
    } else {
        DocumentState::Uninitialized
    }
}

// =============================================================================
// INVARIANT CHECKS
// =============================================================================

/// INVARIANT-2: Cleared Sets on Cancel
///
/// A canceled document carries empty signer and signature sets. Both are
/// wiped in the same atomic batch that sets the flag.
#[must_use]
pub fn check_canceled_sets_cleared(
    canceled: bool,
    signers: &IdentityList,
    signatures: &IdentityList,
) -> bool {
    if canceled {
        signers.is_empty() && signatures.is_empty()
    } else {
        true
    }
}

/// INVARIANT-3: Authorized Signatures
///
/// Every signature entry was a signer-set member when it was added.
/// Membership is checked at sign time and the sets are only ever cleared
/// together, so the subset relation holds at rest as well.
#[must_use]
pub fn check_signatures_authorized(signers: &IdentityList, signatures: &IdentityList) -> bool {
    signatures.is_subset_of(signers)
}

/// Checks all per-document invariants over one document's decoded state.
#[must_use]
pub fn verify_document(
    canceled: bool,
    signers: &IdentityList,
    signatures: &IdentityList,
) -> InvariantCheckResult {
    let mut violations = Vec::new();

    if !check_canceled_sets_cleared(canceled, signers, signatures) {
        violations.push(InvariantViolation::CanceledSetsNotCleared {
            signers: signers.len(),
            signatures: signatures.len(),
        });
    }

    if !canceled {
        for account in signatures.iter() {
            if !signers.contains(account) {
                violations.push(InvariantViolation::UnauthorizedSignature { account: *account });
            }
        }
    }

    if violations.is_empty() {
        InvariantCheckResult::Valid
    } else {
        InvariantCheckResult::Invalid(violations)
    }
}

// =============================================================================
// INVARIANT TYPES
// =============================================================================

/// Result of checking all invariants for a document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvariantCheckResult {
    /// All invariants hold.
    Valid,
    /// One or more invariants violated.
    Invalid(Vec<InvariantViolation>),
}

impl InvariantCheckResult {
    /// Returns true if all invariants hold.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// Specific invariant violation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvariantViolation {
    /// Canceled document still holds set entries.
    CanceledSetsNotCleared { signers: usize, signatures: usize },
    /// Signature present from an identity outside the signer set.
    UnauthorizedSignature { account: AccountId },
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CanceledSetsNotCleared { signers, signatures } => {
                write!(
                    f,
                    "canceled document holds {signers} signers and {signatures} signatures"
                )
            }
            Self::UnauthorizedSignature { account } => {
                write!(f, "signature from non-member identity {account}")
            }
        }
    }
}

// =============================================================================
// REGISTRY LIMIT CONSTANTS
// =============================================================================

/// Protocol constants shared by the service, policies, and call handler.
pub mod limits {
    /// Minimum companion funding per registration, in base currency units.
    pub const MIN_FUNDING_AMOUNT: u64 = 5_000_000;

    /// Width of a document hash in bytes.
    pub const DOCUMENT_HASH_LEN: usize = 32;

    /// Width of an account identity in bytes.
    pub const IDENTITY_LEN: usize = 32;

    /// Width of a stored token reference in bytes.
    pub const TOKEN_REF_LEN: usize = 8;

    /// Companion payments required by a registration call.
    pub const CREATE_COMPANION_PAYMENTS: usize = 1;
}

// =============================================================================
// TESTS
// =============================================================================
