//! Call handler for hosts that deliver requests as raw bytes.
//!
//! Argument blobs are validated here, before any service logic runs: a hash
//! or identity that is not exactly 32 bytes is rejected with `InvalidInput`.
//! Each dispatched call gets a fresh [`CallId`] so host logs can be tied to
//! service logs.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::domain::entities::CallContext;
use crate::domain::errors::RegistryError;
use crate::domain::value_objects::{AccountId, DocumentHash, TokenRef};
use crate::ports::inbound::{DocumentRegistryApi, SigningWorkflowApi, UserIndexApi};
use crate::ports::outbound::{AssetIssuer, KeyValueStore, PaymentVerifier};
use crate::service::RegistryService;

/// Identifier tying one dispatched call to its log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CallId(Uuid);

impl CallId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for CallId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CallId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A decoded registry request with raw byte arguments.
///
/// Arguments stay as byte blobs until dispatch so that hosts can forward
/// wire payloads without pre-validating them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", content = "args")]
pub enum RegistryCall {
    Create { hash: Vec<u8>, signers: Vec<Vec<u8>> },
    Sign { hash: Vec<u8>, signer: Vec<u8> },
    IsSigned { hash: Vec<u8> },
    IsComplete { hash: Vec<u8> },
    Reject { hash: Vec<u8>, signer: Vec<u8> },
    Cancel { hash: Vec<u8> },
    ListOwned,
    GetTokenRef { hash: Vec<u8> },
    IsActive { hash: Vec<u8> },
    TotalSigners { hash: Vec<u8> },
    SignedCount { hash: Vec<u8> },
}

impl RegistryCall {
    /// Operation name for logging.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Create { .. } => "create",
            Self::Sign { .. } => "sign",
            Self::IsSigned { .. } => "is_signed",
            Self::IsComplete { .. } => "is_complete",
            Self::Reject { .. } => "reject",
            Self::Cancel { .. } => "cancel",
            Self::ListOwned => "list_owned",
            Self::GetTokenRef { .. } => "get_token_ref",
            Self::IsActive { .. } => "is_active",
            Self::TotalSigners { .. } => "total_signers",
            Self::SignedCount { .. } => "signed_count",
        }
    }
}

/// Result of a dispatched call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CallOutcome {
    Token(TokenRef),
    TokenLookup(Option<TokenRef>),
    Flag(bool),
    Count(u64),
    Owned(Vec<DocumentHash>),
}

/// Dispatches [`RegistryCall`] requests into a [`RegistryService`].
pub struct RegistryCallHandler<KV, PV, AI>
where
    KV: KeyValueStore,
    PV: PaymentVerifier,
    AI: AssetIssuer,
{
    service: RegistryService<KV, PV, AI>,
}

impl<KV, PV, AI> RegistryCallHandler<KV, PV, AI>
where
    KV: KeyValueStore,
    PV: PaymentVerifier,
    AI: AssetIssuer,
{
    pub fn new(service: RegistryService<KV, PV, AI>) -> Self {
        Self { service }
    }

    /// The wrapped service.
    #[must_use]
    pub fn service(&self) -> &RegistryService<KV, PV, AI> {
        &self.service
    }

    /// Unwrap the handler, returning the service.
    #[must_use]
    pub fn into_service(self) -> RegistryService<KV, PV, AI> {
        self.service
    }

    /// Validate argument blobs and run the call against the service.
    pub fn dispatch(
        &mut self,
        ctx: &CallContext,
        call: RegistryCall,
    ) -> Result<CallOutcome, RegistryError> {
        let call_id = CallId::new();
        tracing::debug!(call_id = %call_id, op = call.name(), caller = %ctx.caller, "dispatching call");

        let result = self.run(ctx, call);
        if let Err(error) = &result {
            tracing::debug!(call_id = %call_id, %error, "call rejected");
        }
        result
    }

    fn run(&mut self, ctx: &CallContext, call: RegistryCall) -> Result<CallOutcome, RegistryError> {
        match call {
            RegistryCall::Create { hash, signers } => {
                let hash = parse_hash(&hash)?;
                let signers = signers
                    .iter()
                    .map(|blob| parse_identity(blob))
                    .collect::<Result<Vec<_>, _>>()?;
                let token = self.service.create(ctx, hash, &signers)?;
                Ok(CallOutcome::Token(token))
            }
            RegistryCall::Sign { hash, signer } => {
                let hash = parse_hash(&hash)?;
                let signer = parse_identity(&signer)?;
                let signed = self.service.sign(ctx, hash, signer)?;
                Ok(CallOutcome::Flag(signed))
            }
            RegistryCall::IsSigned { hash } => {
                let hash = parse_hash(&hash)?;
                Ok(CallOutcome::Flag(self.service.is_signed(ctx, hash)?))
            }
            RegistryCall::IsComplete { hash } => {
                let hash = parse_hash(&hash)?;
                Ok(CallOutcome::Flag(self.service.is_complete(ctx, hash)?))
            }
            RegistryCall::Reject { hash, signer } => {
                let hash = parse_hash(&hash)?;
                let signer = parse_identity(&signer)?;
                let token = self.service.reject(ctx, hash, signer)?;
                Ok(CallOutcome::Token(token))
            }
            RegistryCall::Cancel { hash } => {
                let hash = parse_hash(&hash)?;
                let token = self.service.cancel(ctx, hash)?;
                Ok(CallOutcome::Token(token))
            }
            RegistryCall::ListOwned => Ok(CallOutcome::Owned(self.service.list_owned(ctx)?)),
            RegistryCall::GetTokenRef { hash } => {
                let hash = parse_hash(&hash)?;
                Ok(CallOutcome::TokenLookup(self.service.token_ref(&hash)?))
            }
            RegistryCall::IsActive { hash } => {
                let hash = parse_hash(&hash)?;
                Ok(CallOutcome::Flag(self.service.is_active(&hash)?))
            }
            RegistryCall::TotalSigners { hash } => {
                let hash = parse_hash(&hash)?;
                Ok(CallOutcome::Count(self.service.total_signers(&hash)?))
            }
            RegistryCall::SignedCount { hash } => {
                let hash = parse_hash(&hash)?;
                Ok(CallOutcome::Count(self.service.signed_count(&hash)?))
            }
        }
    }
}

fn parse_hash(blob: &[u8]) -> Result<DocumentHash, RegistryError> {
    DocumentHash::from_slice(blob)
        .ok_or_else(|| RegistryError::invalid_input("hash must be exactly 32 bytes"))
}

fn parse_identity(blob: &[u8]) -> Result<AccountId, RegistryError> {
    AccountId::from_slice(blob)
        .ok_or_else(|| RegistryError::invalid_input("identity must be exactly 32 bytes"))
}
