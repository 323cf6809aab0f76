//! # Domain Entities
//!
//! Core domain entities for the attestation registry.

use crate::domain::value_objects::{AccountId, TokenRef};
use serde::{Deserialize, Serialize};

/// Per-document record assembled from storage on read.
///
/// A record exists once a document has been registered and is never deleted;
/// `canceled` moves from false to true exactly once and never back. The
/// record is rebuilt from its storage keys on every read rather than cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecord {
    /// Token minted for this document at registration.
    pub token_ref: TokenRef,
    /// Administrator recorded at registration time.
    pub administrator: AccountId,
    /// Terminal cancellation flag.
    pub canceled: bool,
}

impl DocumentRecord {
    /// Creates a record for a freshly registered document.
    #[must_use]
    pub const fn new(token_ref: TokenRef, administrator: AccountId) -> Self {
        Self {
            token_ref,
            administrator,
            canceled: false,
        }
    }
}

/// A companion funding instruction accompanying a registration call.
///
/// Carries the fields the payment policy inspects; anything else about the
/// transfer is the host's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentInstruction {
    /// Identity the funds are drawn from.
    pub sender: AccountId,
    /// Identity the funds are paid to.
    pub recipient: AccountId,
    /// Amount in base currency units.
    pub amount: u64,
    /// If set, remaining funds are redirected on close. Never acceptable.
    pub redirect_funds_to: Option<AccountId>,
    /// If set, account ownership is handed over. Never acceptable.
    pub transfer_ownership_to: Option<AccountId>,
}

impl PaymentInstruction {
    /// A plain transfer with no redirect flags.
    #[must_use]
    pub const fn transfer(sender: AccountId, recipient: AccountId, amount: u64) -> Self {
        Self {
            sender,
            recipient,
            amount,
            redirect_funds_to: None,
            transfer_ownership_to: None,
        }
    }
}

/// Per-call envelope: who is calling and what companion payments arrived
/// alongside the call.
///
/// The host delivers calls one at a time, already grouped with their
/// companion instructions; the registry only counts and inspects them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallContext {
    /// The calling identity.
    pub caller: AccountId,
    /// Companion payment instructions delivered with the call.
    pub payments: Vec<PaymentInstruction>,
}

impl CallContext {
    /// A call with no companion payments.
    #[must_use]
    pub fn bare(caller: AccountId) -> Self {
        Self {
            caller,
            payments: Vec::new(),
        }
    }

    /// A call accompanied by a single payment instruction.
    #[must_use]
    pub fn with_payment(caller: AccountId, payment: PaymentInstruction) -> Self {
        Self {
            caller,
            payments: vec![payment],
        }
    }
}
