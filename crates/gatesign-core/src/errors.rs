use thiserror::Error;

use crate::context::ConfigError;
use crate::parser::ParseError;
use crate::signer::SignatureError;
use crate::status::UnknownStatus;

/// Top-level error for façade operations.
///
/// Every variant is deterministic for a given input; none is worth an
/// automatic retry. `InvalidSignature` and `UnknownStatus` are the ones the
/// host typically routes to its alerting layer.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Required field missing or empty at signing time.
    #[error("missing or empty required parameter: {field}")]
    InvalidParameters {
        /// Name of the missing field (or alternatives, for either-of rules).
        field: &'static str,
    },
    /// Amount is not a plain non-negative integer string.
    #[error("invalid amount '{value}': expected base currency units with no decimal point")]
    InvalidAmount {
        /// Offending amount value.
        value: String,
    },
    /// Inbound signature did not match the recomputed value. Terminal for
    /// the inbound flow; parsing never runs.
    #[error("signature verification failed")]
    InvalidSignature,
    /// The inbound parameter set carried no signature to verify.
    #[error("signature extraction failed: {0}")]
    Signature(#[from] SignatureError),
    /// A verified field could not be parsed into its typed form.
    #[error("field parsing failed: {0}")]
    Parse(#[from] ParseError),
    /// Status code outside the known partition.
    #[error("status classification failed: {0}")]
    UnknownStatus(#[from] UnknownStatus),
    /// Invalid signing configuration.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}
