use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use gatesign_canonical::{validation, ParameterSet, SIGNATURE_FIELD};

/// Errors from typed parsing of callback fields.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// A required field is absent from the parameter set.
    #[error("missing required field {field}")]
    MissingField {
        /// Name of the absent field.
        field: &'static str,
    },
    /// A present field could not be interpreted in its expected format.
    #[error("{field} ('{value}') could not be parsed")]
    InvalidField {
        /// Name of the malformed field.
        field: &'static str,
        /// Offending value.
        value: String,
    },
}

/// Typed projection of a verified parameter set.
///
/// Only ever constructed from parameters whose signature has been checked;
/// the façade enforces that ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedTransaction {
    /// Order identifier (ORDERID).
    pub order_id: i64,
    /// Numeric gateway status code (STATUS).
    pub status: i32,
    /// Transaction date (TRXDATE, `MM/DD/YY` on the wire), when present.
    pub trx_date: Option<NaiveDate>,
    /// Card expiry (ED, `MMYY` on the wire), pinned to the first of the
    /// month since the wire format carries no day.
    pub card_expiry: Option<NaiveDate>,
    /// Remaining fields, passed through verbatim under their uppercase
    /// names. The signature entry is not carried over.
    pub extra: BTreeMap<String, String>,
}

/// Parses a verified parameter set into a typed transaction record.
///
/// ORDERID and STATUS are required integers; TRXDATE and ED are optional.
/// Two-digit years expand by adding 2000 — the gateway's documented
/// convention, accepted as-is even though it only covers 2000-2099.
pub fn parse(params: &ParameterSet) -> Result<ParsedTransaction, ParseError> {
    let order_id = required(params, "ORDERID")?
        .parse::<i64>()
        .map_err(|_| invalid(params, "ORDERID"))?;
    let status = required(params, "STATUS")?
        .parse::<i32>()
        .map_err(|_| invalid(params, "STATUS"))?;

    // Present-but-empty date fields are treated as absent; the gateway
    // omits values it has nothing to say about.
    let trx_date = match params.get("TRXDATE").filter(|v| !v.is_empty()) {
        Some(value) => Some(parse_trx_date(value)?),
        None => None,
    };
    let card_expiry = match params.get("ED").filter(|v| !v.is_empty()) {
        Some(value) => Some(parse_expiry(value)?),
        None => None,
    };

    let extra: BTreeMap<String, String> = params
        .iter()
        .filter(|(key, _)| !matches!(*key, "ORDERID" | "STATUS" | "TRXDATE" | "ED"))
        .filter(|(key, _)| *key != SIGNATURE_FIELD)
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();

    Ok(ParsedTransaction {
        order_id,
        status,
        trx_date,
        card_expiry,
        extra,
    })
}

fn required<'a>(params: &'a ParameterSet, field: &'static str) -> Result<&'a str, ParseError> {
    params
        .get(field)
        .filter(|value| !value.is_empty())
        .ok_or(ParseError::MissingField { field })
}

fn invalid(params: &ParameterSet, field: &'static str) -> ParseError {
    ParseError::InvalidField {
        field,
        value: params.get(field).unwrap_or_default().to_string(),
    }
}

/// Parses `MM/DD/YY`, expanding the two-digit year into 2000-2099.
fn parse_trx_date(value: &str) -> Result<NaiveDate, ParseError> {
    let invalid = || ParseError::InvalidField {
        field: "TRXDATE",
        value: value.to_string(),
    };

    let parts: Vec<&str> = value.split('/').collect();
    let [month, day, year] = parts.as_slice() else {
        return Err(invalid());
    };
    let month: u32 = month.parse().map_err(|_| invalid())?;
    let day: u32 = day.parse().map_err(|_| invalid())?;
    let year: i32 = year.parse().map_err(|_| invalid())?;

    NaiveDate::from_ymd_opt(year + 2000, month, day).ok_or_else(invalid)
}

/// Parses `MMYY`, pinning the day to the first of the month.
fn parse_expiry(value: &str) -> Result<NaiveDate, ParseError> {
    let invalid = || ParseError::InvalidField {
        field: "ED",
        value: value.to_string(),
    };

    validation::validate_expiry(value).map_err(|_| invalid())?;
    let month: u32 = value[..2].parse().map_err(|_| invalid())?;
    let year: i32 = value[2..].parse().map_err(|_| invalid())?;

    NaiveDate::from_ymd_opt(year + 2000, month, 1).ok_or_else(invalid)
}
