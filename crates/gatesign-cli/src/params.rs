//! KEY=VALUE argument parsing.

use gatesign_canonical::ParameterSet;

/// Parses `KEY=VALUE` command-line arguments into a parameter set.
///
/// The value may itself contain `=`; only the first one splits. An argument
/// without any `=` is an error.
pub fn parse_pairs(args: &[String]) -> Result<ParameterSet, String> {
    let mut params = ParameterSet::new();
    for arg in args {
        let (key, value) = arg
            .split_once('=')
            .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", arg))?;
        if key.is_empty() {
            return Err(format!("empty key in '{}'", arg));
        }
        params.insert(key, value);
    }
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_the_first_equals_sign() {
        let args = vec!["orderID=12".to_string(), "CN=a=b".to_string()];
        let params = parse_pairs(&args).unwrap();
        assert_eq!(params.get("ORDERID"), Some("12"));
        assert_eq!(params.get("CN"), Some("a=b"));
    }

    #[test]
    fn empty_values_are_allowed() {
        let params = parse_pairs(&["IP=".to_string()]).unwrap();
        assert_eq!(params.get("IP"), Some(""));
    }

    #[test]
    fn rejects_arguments_without_equals() {
        assert!(parse_pairs(&["orderID".to_string()]).is_err());
        assert!(parse_pairs(&["=12".to_string()]).is_err());
    }
}
