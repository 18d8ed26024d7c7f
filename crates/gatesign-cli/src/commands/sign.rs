//! Sign command implementation.

use gatesign_core::{sign, HashAlg};
use serde_json::json;

use crate::output;
use crate::params::parse_pairs;

pub fn run(
    pairs: Vec<String>,
    secret: String,
    alg: String,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let alg = HashAlg::from_name(&alg)?;
    if secret.is_empty() {
        return Err("secret must not be empty".into());
    }
    let params = parse_pairs(&pairs)?;

    let signature = sign(&params, &secret, alg);

    if json_output {
        println!(
            "{}",
            output::format_json(&json!({
                "alg": alg.name(),
                "signature": signature,
            }))
        );
    } else {
        println!("{}", signature);
    }
    Ok(())
}
