//! Status-code classification.
//!
//! The gateway reports payment state as a numeric code. Codes map onto four
//! coarse outcome categories; a code outside the known partition is an
//! explicit error carrying the offending value, so operators can extend the
//! table instead of a transaction being silently misfiled.

use std::fmt;

use serde::Serialize;
use tracing::debug;

/// Coarse outcome category for a gateway status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusCategory {
    /// Payment authorized, captured, or pending in the merchant's favor.
    Success,
    /// Payment refused by the acquirer.
    Decline,
    /// Unrecoverable processing error; actual result undetermined.
    Exception,
    /// Cancelled by the client.
    Cancel,
}

impl StatusCategory {
    /// Lowercase label, as hosts historically consumed it.
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusCategory::Success => "success",
            StatusCategory::Decline => "decline",
            StatusCategory::Exception => "exception",
            StatusCategory::Cancel => "cancel",
        }
    }
}

impl fmt::Display for StatusCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status code outside the known partition.
#[derive(Debug, thiserror::Error)]
#[error("gateway returned unknown status: {code}")]
pub struct UnknownStatus {
    /// The unmapped status code, preserved for operators.
    pub code: i32,
}

const SUCCESS_CODES: &[i32] = &[4, 5, 9, 41, 51, 91];
const DECLINE_CODES: &[i32] = &[2, 93];
const EXCEPTION_CODES: &[i32] = &[52, 92];
const CANCEL_CODES: &[i32] = &[1];

/// Classifies a numeric status code into its outcome category.
///
/// The partition is gateway-defined and fixed; any code outside it fails
/// with [`UnknownStatus`] rather than defaulting to a category.
pub fn classify(code: i32) -> Result<StatusCategory, UnknownStatus> {
    let category = if SUCCESS_CODES.contains(&code) {
        StatusCategory::Success
    } else if DECLINE_CODES.contains(&code) {
        StatusCategory::Decline
    } else if EXCEPTION_CODES.contains(&code) {
        StatusCategory::Exception
    } else if CANCEL_CODES.contains(&code) {
        StatusCategory::Cancel
    } else {
        return Err(UnknownStatus { code });
    };
    debug!(code, %category, "classified status");
    Ok(category)
}

/// Human-readable description of a status code, from the gateway's
/// parameter cookbook. Covers more codes than the classification partition;
/// classification never consults it.
pub fn status_description(code: i32) -> Option<&'static str> {
    let description = match code {
        0 => "Incomplete or invalid",
        1 => "Cancelled by client",
        2 => "Authorization refused",
        4 => "Order stored",
        41 => "Waiting client payment",
        5 => "Authorized",
        51 => "Authorization waiting",
        52 => "Authorization not known",
        59 => "Author. to get manually",
        6 => "Authorized and canceled",
        61 => "Author. deletion waiting",
        62 => "Author. deletion uncertain",
        63 => "Author. deletion refused",
        7 => "Payment deleted",
        71 => "Payment deletion pending",
        72 => "Payment deletion uncertain",
        73 => "Payment deletion refused",
        74 => "Payment deleted (not accepted)",
        75 => "Deletion processed by merchant",
        8 => "Refund",
        81 => "Refund pending",
        82 => "Refund uncertain",
        83 => "Refund refused",
        84 => "Payment declined by the acquirer (will be debited)",
        85 => "Refund processed by merchant",
        9 => "Payment requested",
        91 => "Payment processing",
        92 => "Payment uncertain",
        93 => "Payment refused",
        94 => "Refund declined by the acquirer",
        95 => "Payment processed by merchant",
        97 | 98 | 99 => "Being processed (intermediate technical status)",
        _ => return None,
    };
    Some(description)
}
