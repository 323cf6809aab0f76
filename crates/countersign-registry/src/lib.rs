//! # Countersign Registry
//!
//! Multi-party document attestation over a flat key-value byte store. A
//! document is known only by the 32-byte hash of its content; registering it
//! mints a unique external token, names the identities that must attest, and
//! then tracks attestations until every listed signer has signed or one of
//! them vetoes.
//!
//! ## Storage Layout
//!
//! All state lives in prefixed byte blobs keyed by document hash or account:
//!
//! ```text
//! tok:<hash> -> token ref          (8 bytes, big-endian)
//! adm:<hash> -> administrator      (32 bytes)
//! sgn:<hash> -> signer set         (N x 32 bytes, order preserved)
//! sig:<hash> -> signature set      (N x 32 bytes, append-only)
//! cxl:<hash> -> cancellation flag  (1 byte, present only once canceled)
//! usr:<id>   -> registered hashes  (N x 32 bytes, append-only)
//! ```
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Description |
//! |----|-----------|-------------|
//! | 1 | Terminal Cancellation | A canceled hash never becomes active again |
//! | 2 | Cleared Sets on Cancel | Canceled documents hold no signer/signature entries |
//! | 3 | Authorized Signatures | Every signature was drawn from the signer set |
//! | 4 | Idempotent Registration | Re-creating a hash returns the original token |
//! | 5 | Atomic Calls | Each call commits all of its writes or none |
//!
//! ## Crate Structure (Hexagonal Architecture)
//!
//! - `domain/` - Pure domain logic (value objects, blob codec, invariants)
//! - `ports/` - Port traits (inbound API, outbound SPI)
//! - `service/` - Application service implementing the APIs
//! - `adapters/` - Store, payment, and token-issuer implementations
//! - `config` - Service configuration and storage key prefixes
//!
//! ## Usage
//!
//! ```ignore
//! use countersign_registry::{CallContext, RegistryConfig, RegistryService};
//!
//! let config = RegistryConfig::new().with_administrator(admin);
//! let mut service = RegistryService::new_in_memory(config);
//!
//! // Register a document and collect attestations
//! let token = service.create(&create_ctx, hash, &signers)?;
//! service.sign(&CallContext::bare(alice), hash, alice)?;
//! let done = service.is_complete(&CallContext::bare(alice), hash)?;
//! ```

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod service;
pub mod test_utils;

// Re-export key types for convenience
pub use config::{KeyPrefix, RegistryConfig};
pub use domain::codec::{HashList, IdentityList};
pub use domain::entities::{CallContext, DocumentRecord, PaymentInstruction};
pub use domain::errors::{AssetError, PaymentError, RegistryError, StoreError};
pub use domain::invariants::{limits, DocumentState, InvariantViolation};
pub use domain::value_objects::{AccountId, DocumentHash, TokenRef, TokenSpec};
pub use ports::inbound::{DocumentRegistryApi, SigningWorkflowApi, UserIndexApi};
pub use ports::outbound::{AssetIssuer, BatchOperation, KeyValueStore, PaymentVerifier};
pub use service::{RegistryDependencies, RegistryService};

// Re-export adapter types
pub use adapters::{
    CallId, CallOutcome, FileBackedKVStore, InMemoryKVStore, RecordingAssetIssuer, RegistryCall,
    RegistryCallHandler, SequentialAssetIssuer, StandardPaymentPolicy,
};
