//! # Integration Tests
//!
//! Whole-registry flows exercising the service through its public API,
//! the raw-byte handler, and the file-backed store.

pub mod flows;
pub mod persistence;
pub mod wire;
