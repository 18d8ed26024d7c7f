use serde::Serialize;
use tracing::{debug, warn};

use gatesign_canonical::{validation, ParameterSet, SIGNATURE_FIELD};

use crate::context::{DirectLinkCredentials, FlowDirection, GatewayConfig};
use crate::errors::GatewayError;
use crate::parser::{self, ParsedTransaction};
use crate::signer;
use crate::status::{self, StatusCategory};

/// Result of a verified, parsed, and classified inbound callback.
#[derive(Debug, Clone, Serialize)]
pub struct CallbackOutcome {
    /// Typed transaction record.
    pub transaction: ParsedTransaction,
    /// Outcome category derived from the status code.
    pub category: StatusCategory,
}

/// Stateless façade over signing, verification, parsing, and
/// classification.
///
/// Holds only the immutable [`GatewayConfig`]; every call operates on its
/// own parameter set, so concurrent use needs no coordination.
#[derive(Debug, Clone)]
pub struct Gateway {
    config: GatewayConfig,
}

impl Gateway {
    /// Creates a façade over the given configuration.
    pub fn new(config: GatewayConfig) -> Self {
        Self { config }
    }

    /// The configuration this façade was built with.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Outbound hosted-payment-page flow: validates and enriches the
    /// parameter set, then signs it with the request secret.
    ///
    /// CURRENCY falls back to the configured default when absent. ORDERID,
    /// AMOUNT, CURRENCY, and LANGUAGE must then be non-empty, and AMOUNT
    /// must be a plain non-negative integer string. The merchant identifier
    /// is injected before signing so it is covered by the signature.
    pub fn prepare_request(
        &self,
        mut params: ParameterSet,
    ) -> Result<ParameterSet, GatewayError> {
        if params.get("CURRENCY").map_or(true, str::is_empty) {
            params.insert("CURRENCY", self.config.default_currency());
        }

        for field in ["ORDERID", "AMOUNT", "CURRENCY", "LANGUAGE"] {
            require_non_empty(&params, field)?;
        }
        check_amount(&params)?;

        params.insert("PSPID", self.config.pspid());
        self.sign_into(&mut params);
        debug!(fields = params.len(), "prepared outbound request");
        Ok(params)
    }

    /// Outbound server-to-server (DirectLink) flow: like
    /// [`prepare_request`](Self::prepare_request) but keyed to an API user,
    /// whose credentials are injected and covered by the signature.
    ///
    /// DirectLink operations address either a new order (ORDERID) or an
    /// existing payment (PAYID); exactly one of the two must be present.
    pub fn prepare_direct_link(
        &self,
        mut params: ParameterSet,
        credentials: &DirectLinkCredentials,
    ) -> Result<ParameterSet, GatewayError> {
        let has_order = params.get("ORDERID").is_some_and(|v| !v.is_empty());
        let has_payid = params.get("PAYID").is_some_and(|v| !v.is_empty());
        if !has_order && !has_payid {
            return Err(GatewayError::InvalidParameters {
                field: "ORDERID or PAYID",
            });
        }

        require_non_empty(&params, "AMOUNT")?;
        check_amount(&params)?;

        params.insert("PSPID", self.config.pspid());
        params.insert("USERID", credentials.user_id());
        params.insert("PSWD", credentials.password());
        self.sign_into(&mut params);
        debug!(fields = params.len(), "prepared direct-link request");
        Ok(params)
    }

    /// Inbound flow: verifies the callback signature with the response
    /// secret, then parses and classifies.
    ///
    /// A missing or mismatched signature is terminal; parsing is not
    /// reachable for unverified input. This is the only way the crate hands
    /// out a [`ParsedTransaction`].
    pub fn handle_callback(
        &self,
        params: ParameterSet,
    ) -> Result<CallbackOutcome, GatewayError> {
        let verified = signer::verify(
            &params,
            self.config.secret_for(FlowDirection::Response),
            self.config.hash_alg(),
        )?;
        if !verified {
            warn!("rejecting inbound callback: signature mismatch");
            return Err(GatewayError::InvalidSignature);
        }

        let transaction = parser::parse(&params)?;
        let category = status::classify(transaction.status)?;
        debug!(
            order_id = transaction.order_id,
            status = transaction.status,
            %category,
            "accepted inbound callback"
        );
        Ok(CallbackOutcome {
            transaction,
            category,
        })
    }

    fn sign_into(&self, params: &mut ParameterSet) {
        let signature = signer::sign(
            params,
            self.config.secret_for(FlowDirection::Request),
            self.config.hash_alg(),
        );
        params.insert(SIGNATURE_FIELD, signature);
    }
}

fn require_non_empty(params: &ParameterSet, field: &'static str) -> Result<(), GatewayError> {
    match params.get(field) {
        Some(value) if !value.is_empty() => Ok(()),
        _ => Err(GatewayError::InvalidParameters { field }),
    }
}

fn check_amount(params: &ParameterSet) -> Result<(), GatewayError> {
    let value = params.get("AMOUNT").unwrap_or_default();
    validation::validate_amount(value).map_err(|_| GatewayError::InvalidAmount {
        value: value.to_string(),
    })
}
