//! # Domain Layer
//!
//! Pure domain logic for the attestation registry.
//! This layer contains NO external dependencies beyond serialization and
//! hashing primitives - no I/O, no clocks, no storage.
//!
//! ## Modules
//!
//! - `value_objects` - DocumentHash, AccountId, TokenRef, TokenSpec
//! - `codec` - Fixed-stride blob encodings for signer/signature/index sets
//! - `entities` - DocumentRecord, PaymentInstruction, CallContext
//! - `errors` - Domain error types
//! - `invariants` - Per-document invariant checks and protocol limits

pub mod codec;
pub mod entities;
pub mod errors;
pub mod invariants;
pub mod value_objects;
