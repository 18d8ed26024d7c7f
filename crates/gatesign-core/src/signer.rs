use sha1::Sha1;
use sha2::{Digest, Sha256, Sha512};
use tracing::{debug, warn};

use gatesign_canonical::{canonical_string, ParameterSet, SIGNATURE_FIELD};

use crate::context::HashAlg;

/// Errors from signature extraction during verification.
#[derive(Debug, thiserror::Error)]
pub enum SignatureError {
    /// The parameter set carries no signature entry.
    #[error("no signature found in parameter set; not a gateway callback?")]
    MissingSignature,
}

/// Signs a parameter set, returning the uppercase hexadecimal digest.
///
/// The digest covers the canonical string of the set (empty values and any
/// existing signature entry excluded), keyed by interleaving the secret.
/// Signing a set with zero signable entries still succeeds; the gateway may
/// send callbacks with minimal fields.
pub fn sign(params: &ParameterSet, secret: &str, alg: HashAlg) -> String {
    let material = canonical_string(params, secret);
    let digest = match alg {
        HashAlg::Sha1 => hex::encode(Sha1::digest(material.as_bytes())),
        HashAlg::Sha256 => hex::encode(Sha256::digest(material.as_bytes())),
        HashAlg::Sha512 => hex::encode(Sha512::digest(material.as_bytes())),
    };
    let signature = digest.to_uppercase();
    // The canonical string embeds the secret; only the digest is loggable.
    debug!(%alg, fields = params.len(), %signature, "computed signature");
    signature
}

/// Verifies the signature entry of a parameter set against a recomputed one.
///
/// Returns `Ok(false)` on mismatch so call sites can decide whether a bad
/// signature is an error or merely a rejected message; a missing signature
/// entry is always an error.
pub fn verify(params: &ParameterSet, secret: &str, alg: HashAlg) -> Result<bool, SignatureError> {
    let claimed = params
        .get(SIGNATURE_FIELD)
        .filter(|value| !value.is_empty())
        .ok_or(SignatureError::MissingSignature)?
        .to_uppercase();

    let expected = sign(params, secret, alg);
    let matches = expected == claimed;
    if !matches {
        warn!(%alg, "signature mismatch on inbound parameters");
    }
    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC_SECRET: &str = "Mysecretsig1875!?";

    #[test]
    fn sha512_known_vector() {
        let params: ParameterSet = [("d", "a"), ("a", "b")].into_iter().collect();
        assert_eq!(
            sign(&params, "c", HashAlg::Sha512),
            "B499539D7E0B2B1FB5CCFE9FFDDBAD1EDF345757C094443ED795662F879FB250\
             EEEB22CBB2D2F3C129E2CAE735044CDB7B08397502204B0683EA370F6D76FB6A"
        );
    }

    #[test]
    fn sha1_in_known_vector() {
        let params: ParameterSet = [
            ("amount", "1500"),
            ("currency", "EUR"),
            ("operation", "RES"),
            ("orderID", "1234"),
            ("PSPID", "MyPSPID"),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            sign(&params, DOC_SECRET, HashAlg::Sha1),
            "EB52902BCC4B50DC1250E5A7C1068ECF97751256"
        );
    }

    #[test]
    fn sha1_out_known_vector() {
        let params: ParameterSet = [
            ("acceptance", "1234"),
            ("amount", "15"),
            ("brand", "VISA"),
            ("cardno", "xxxxxxxxxxxx1111"),
            ("currency", "EUR"),
            ("NCERROR", "0"),
            ("orderId", "12"),
            ("payid", "32100123"),
            ("pm", "CreditCard"),
            ("status", "9"),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            sign(&params, DOC_SECRET, HashAlg::Sha1),
            "B209960D5703DD1047F95A0F97655FFE5AC8BD52"
        );
    }

    #[test]
    fn round_trip_sign_then_verify() {
        let mut params: ParameterSet = [
            ("orderID", "1234"),
            ("amount", "1500"),
            ("currency", "EUR"),
        ]
        .into_iter()
        .collect();
        let signature = sign(&params, "secret", HashAlg::Sha512);
        params.insert(SIGNATURE_FIELD, signature);
        assert!(verify(&params, "secret", HashAlg::Sha512).unwrap());
    }

    #[test]
    fn verify_is_case_insensitive_on_the_claimed_signature() {
        let mut params: ParameterSet = [("orderID", "1234")].into_iter().collect();
        let signature = sign(&params, "secret", HashAlg::Sha256).to_lowercase();
        params.insert("shasign", signature);
        assert!(verify(&params, "secret", HashAlg::Sha256).unwrap());
    }

    #[test]
    fn verify_rejects_wrong_secret() {
        let mut params: ParameterSet = [("orderID", "1234")].into_iter().collect();
        let signature = sign(&params, "secret", HashAlg::Sha512);
        params.insert(SIGNATURE_FIELD, signature);
        assert!(!verify(&params, "other-secret", HashAlg::Sha512).unwrap());
    }

    #[test]
    fn verify_without_signature_is_an_error() {
        let params: ParameterSet = [("orderID", "1234")].into_iter().collect();
        assert!(matches!(
            verify(&params, "secret", HashAlg::Sha512),
            Err(SignatureError::MissingSignature)
        ));
    }

    #[test]
    fn empty_signature_entry_counts_as_missing() {
        let params: ParameterSet = [("orderID", "1234"), ("SHASIGN", "")].into_iter().collect();
        assert!(matches!(
            verify(&params, "secret", HashAlg::Sha512),
            Err(SignatureError::MissingSignature)
        ));
    }
}
