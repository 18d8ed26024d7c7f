use std::fmt;

use serde::{Deserialize, Serialize};

/// Hosted-payment-page endpoint (test environment).
pub const ORDER_STANDARD_TEST_URL: &str = "https://secure.ogone.com/ncol/test/orderstandard.asp";
/// Hosted-payment-page endpoint (production environment).
pub const ORDER_STANDARD_PROD_URL: &str = "https://secure.ogone.com/ncol/prod/orderstandard.asp";
/// Server-to-server (DirectLink) endpoint (test environment).
pub const DIRECT_LINK_TEST_URL: &str = "https://secure.ogone.com/ncol/test/orderdirect.asp";
/// Server-to-server (DirectLink) endpoint (production environment).
pub const DIRECT_LINK_PROD_URL: &str = "https://secure.ogone.com/ncol/prod/orderdirect.asp";

/// Hash algorithms the gateway accepts for signature computation.
///
/// Anything outside this allow-list is a configuration error, rejected
/// before any hashing takes place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlg {
    /// SHA-1 (the gateway's historical default).
    Sha1,
    /// SHA-256.
    Sha256,
    /// SHA-512 (the safer default).
    #[default]
    Sha512,
}

impl HashAlg {
    /// Parses a configured algorithm name against the allow-list.
    pub fn from_name(name: &str) -> Result<Self, ConfigError> {
        match name {
            "sha1" => Ok(HashAlg::Sha1),
            "sha256" => Ok(HashAlg::Sha256),
            "sha512" => Ok(HashAlg::Sha512),
            other => Err(ConfigError::UnsupportedAlgorithm(other.to_string())),
        }
    }

    /// Lowercase name as it appears in configuration.
    pub fn name(&self) -> &'static str {
        match self {
            HashAlg::Sha1 => "sha1",
            HashAlg::Sha256 => "sha256",
            HashAlg::Sha512 => "sha512",
        }
    }
}

impl fmt::Display for HashAlg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which shared secret keys the signature.
///
/// Outbound requests and inbound callbacks use independent secrets agreed
/// with the gateway; selection is always explicit to keep the two from
/// being conflated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowDirection {
    /// Outbound flow: signing a request before submission.
    Request,
    /// Inbound flow: verifying a callback from the gateway.
    Response,
}

impl fmt::Display for FlowDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlowDirection::Request => f.write_str("request"),
            FlowDirection::Response => f.write_str("response"),
        }
    }
}

/// Errors raised at configuration time, before any message is processed.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Algorithm name outside the allow-list.
    #[error("unsupported hash algorithm: {0}")]
    UnsupportedAlgorithm(String),
    /// A shared secret is missing or empty.
    #[error("missing shared secret for the {0} flow")]
    MissingSecret(FlowDirection),
    /// The merchant identifier is missing or empty.
    #[error("missing merchant identifier (PSPID)")]
    MissingPspid,
}

/// Immutable signing configuration.
///
/// Built once from the host application's settings and shared read-only
/// across concurrent calls; nothing here is mutated per request.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pspid: String,
    sha_in_secret: String,
    sha_out_secret: String,
    hash_alg: HashAlg,
    default_currency: String,
    production: bool,
}

impl GatewayConfig {
    /// Creates a configuration with the default algorithm (sha512), default
    /// currency (EUR), and the test environment selected.
    ///
    /// Fails fast on an empty merchant identifier or empty secret.
    pub fn new(
        pspid: impl Into<String>,
        sha_in_secret: impl Into<String>,
        sha_out_secret: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let pspid = pspid.into();
        let sha_in_secret = sha_in_secret.into();
        let sha_out_secret = sha_out_secret.into();

        if pspid.is_empty() {
            return Err(ConfigError::MissingPspid);
        }
        if sha_in_secret.is_empty() {
            return Err(ConfigError::MissingSecret(FlowDirection::Request));
        }
        if sha_out_secret.is_empty() {
            return Err(ConfigError::MissingSecret(FlowDirection::Response));
        }

        Ok(Self {
            pspid,
            sha_in_secret,
            sha_out_secret,
            hash_alg: HashAlg::default(),
            default_currency: "EUR".to_string(),
            production: false,
        })
    }

    /// Selects the hash algorithm.
    pub fn with_hash_alg(mut self, hash_alg: HashAlg) -> Self {
        self.hash_alg = hash_alg;
        self
    }

    /// Sets the currency injected into outbound requests that carry none.
    pub fn with_default_currency(mut self, currency: impl Into<String>) -> Self {
        self.default_currency = currency.into();
        self
    }

    /// Selects the production endpoints instead of the test ones.
    pub fn with_production(mut self, production: bool) -> Self {
        self.production = production;
        self
    }

    /// Merchant identifier (PSPID).
    pub fn pspid(&self) -> &str {
        &self.pspid
    }

    /// Configured hash algorithm.
    pub fn hash_alg(&self) -> HashAlg {
        self.hash_alg
    }

    /// Currency injected into outbound requests that carry none.
    pub fn default_currency(&self) -> &str {
        &self.default_currency
    }

    /// True when the production endpoints are selected.
    pub fn production(&self) -> bool {
        self.production
    }

    /// Shared secret for the given flow direction.
    pub fn secret_for(&self, direction: FlowDirection) -> &str {
        match direction {
            FlowDirection::Request => &self.sha_in_secret,
            FlowDirection::Response => &self.sha_out_secret,
        }
    }

    /// Hosted-payment-page endpoint for the configured environment.
    pub fn order_standard_url(&self) -> &'static str {
        if self.production {
            ORDER_STANDARD_PROD_URL
        } else {
            ORDER_STANDARD_TEST_URL
        }
    }

    /// DirectLink endpoint for the configured environment.
    pub fn direct_link_url(&self) -> &'static str {
        if self.production {
            DIRECT_LINK_PROD_URL
        } else {
            DIRECT_LINK_TEST_URL
        }
    }
}

/// User id/password pair injected into server-to-server requests.
#[derive(Debug, Clone)]
pub struct DirectLinkCredentials {
    user_id: String,
    password: String,
}

impl DirectLinkCredentials {
    /// Creates a credential pair.
    pub fn new(user_id: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            password: password.into(),
        }
    }

    /// API user id (USERID).
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// API password (PSWD).
    pub fn password(&self) -> &str {
        &self.password
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn algorithm_allow_list() {
        assert_eq!(HashAlg::from_name("sha1").unwrap(), HashAlg::Sha1);
        assert_eq!(HashAlg::from_name("sha256").unwrap(), HashAlg::Sha256);
        assert_eq!(HashAlg::from_name("sha512").unwrap(), HashAlg::Sha512);
        assert!(matches!(
            HashAlg::from_name("md5"),
            Err(ConfigError::UnsupportedAlgorithm(_))
        ));
        assert!(matches!(
            HashAlg::from_name("SHA512"),
            Err(ConfigError::UnsupportedAlgorithm(_))
        ));
    }

    #[test]
    fn default_algorithm_is_sha512() {
        let config = GatewayConfig::new("MyPSPID", "in", "out").unwrap();
        assert_eq!(config.hash_alg(), HashAlg::Sha512);
        assert_eq!(config.default_currency(), "EUR");
        assert!(!config.production());
    }

    #[test]
    fn empty_secrets_fail_fast() {
        assert!(matches!(
            GatewayConfig::new("MyPSPID", "", "out"),
            Err(ConfigError::MissingSecret(FlowDirection::Request))
        ));
        assert!(matches!(
            GatewayConfig::new("MyPSPID", "in", ""),
            Err(ConfigError::MissingSecret(FlowDirection::Response))
        ));
        assert!(matches!(
            GatewayConfig::new("", "in", "out"),
            Err(ConfigError::MissingPspid)
        ));
    }

    #[test]
    fn secrets_are_selected_by_direction() {
        let config = GatewayConfig::new("MyPSPID", "in-secret", "out-secret").unwrap();
        assert_eq!(config.secret_for(FlowDirection::Request), "in-secret");
        assert_eq!(config.secret_for(FlowDirection::Response), "out-secret");
    }

    #[test]
    fn endpoint_selection_follows_production_flag() {
        let test = GatewayConfig::new("MyPSPID", "in", "out").unwrap();
        assert_eq!(test.order_standard_url(), ORDER_STANDARD_TEST_URL);
        assert_eq!(test.direct_link_url(), DIRECT_LINK_TEST_URL);

        let prod = test.clone().with_production(true);
        assert_eq!(prod.order_standard_url(), ORDER_STANDARD_PROD_URL);
        assert_eq!(prod.direct_link_url(), DIRECT_LINK_PROD_URL);
    }
}
