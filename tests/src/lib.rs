//! # Countersign Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/       # Whole-registry flows
//!     ├── flows.rs       # Attestation lifecycle scenarios
//!     ├── persistence.rs # File-backed store reopen checks
//!     └── wire.rs        # Raw-byte handler dispatch
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p countersign-tests
//!
//! # By category
//! cargo test -p countersign-tests integration::flows
//! cargo test -p countersign-tests integration::persistence
//! ```

pub mod integration;
