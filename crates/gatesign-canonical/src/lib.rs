//! Canonical primitives for gatesign parameter authentication.
//!
//! Everything that participates in signing lives in this crate: the
//! uppercase-normalized parameter set exchanged with the payment gateway,
//! the deterministic pre-sign string builder, and the wire-format field
//! validators. The signing string is recomputed independently by the remote
//! counterparty, so the join rules here must be reproduced exactly.
//!
#![deny(missing_docs)]

/// Deterministic pre-sign string construction.
pub mod canonicalizer;
/// Uppercase-normalized parameter sets.
pub mod params;
/// Validation helpers for wire-format fields.
pub mod validation;

pub use canonicalizer::{canonical_string, SIGNATURE_FIELD};
pub use params::ParameterSet;
pub use validation::ValidationError;
