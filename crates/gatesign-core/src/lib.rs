//! Signing, verification, typed parsing, and status classification for
//! gatesign payment-gateway messages.
//!
//! This crate provides:
//! - Signing context and configuration ([`GatewayConfig`], [`HashAlg`])
//! - Signature computation and callback verification over canonical strings
//! - Typed parsing of verified callback parameters ([`ParsedTransaction`])
//! - Status-code classification into outcome categories ([`StatusCategory`])
//! - A stateless façade orchestrating the outbound and inbound flows
//!
//! Core invariants:
//! - The request and response secrets are independent and selected by an
//!   explicit [`FlowDirection`], never by a shared default
//! - Inbound parameters are parsed only after their signature verifies
//! - An unmapped status code is an explicit error, never a silent category
//!
#![deny(missing_docs)]

/// Signing context, configuration, and endpoint selection.
pub mod context;
/// Top-level error type for façade operations.
pub mod errors;
/// Outbound and inbound flow orchestration.
pub mod gateway;
/// Typed parsing of verified callback fields.
pub mod parser;
/// Signature computation and verification.
pub mod signer;
/// Status-code classification.
pub mod status;

pub use context::{ConfigError, DirectLinkCredentials, FlowDirection, GatewayConfig, HashAlg};
pub use errors::GatewayError;
pub use gateway::{CallbackOutcome, Gateway};
pub use parser::{parse, ParseError, ParsedTransaction};
pub use signer::{sign, verify, SignatureError};
pub use status::{classify, status_description, StatusCategory, UnknownStatus};
