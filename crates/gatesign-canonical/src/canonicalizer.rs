use crate::params::ParameterSet;

/// Field that carries the signature itself. It is never included in the
/// string it signs, regardless of the case it arrived in.
pub const SIGNATURE_FIELD: &str = "SHASIGN";

/// Builds the deterministic pre-sign string for a parameter set.
///
/// Rules, matching what the gateway recomputes on its side:
/// - keys are uppercase (guaranteed by [`ParameterSet`] ingestion)
/// - entries with empty values are dropped
/// - the [`SIGNATURE_FIELD`] entry is dropped
/// - remaining entries are joined as `KEY=value` in ascending byte order,
///   with the secret between every pair and once more at the end
///
/// The secret doubles as pair separator and trailing terminator; this
/// asymmetry is deliberate and must not be "simplified" into a plain join.
/// A set with zero signable entries yields the secret alone.
pub fn canonical_string(params: &ParameterSet, secret: &str) -> String {
    let mut out = String::new();
    for (key, value) in params.iter() {
        if value.is_empty() || key == SIGNATURE_FIELD {
            continue;
        }
        out.push_str(key);
        out.push('=');
        out.push_str(value);
        out.push_str(secret);
    }
    if out.is_empty() {
        out.push_str(secret);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_pairs_with_secret_separator_and_terminator() {
        let params: ParameterSet = [("d", "a"), ("a", "b")].into_iter().collect();
        assert_eq!(canonical_string(&params, "c"), "A=bcD=ac");
    }

    #[test]
    fn empty_set_yields_secret_alone() {
        let params = ParameterSet::new();
        assert_eq!(canonical_string(&params, "secret"), "secret");
    }

    #[test]
    fn all_entries_filtered_yields_secret_alone() {
        let params: ParameterSet = [("shasign", "ABC"), ("empty", "")].into_iter().collect();
        assert_eq!(canonical_string(&params, "secret"), "secret");
    }
}
