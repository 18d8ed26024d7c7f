//! Verify command implementation.

use gatesign_core::{verify, HashAlg};
use serde_json::json;

use crate::output;
use crate::params::parse_pairs;

pub fn run(
    pairs: Vec<String>,
    secret: String,
    alg: String,
    strict: bool,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let alg = HashAlg::from_name(&alg)?;
    let params = parse_pairs(&pairs)?;

    let valid = verify(&params, &secret, alg)
        .map_err(|e| format!("Verification failed: {}", e))?;

    if json_output {
        println!("{}", output::format_json(&json!({ "valid": valid })));
    } else if valid {
        println!("OK");
    } else {
        println!("MISMATCH");
    }

    if strict && !valid {
        std::process::exit(1);
    }
    Ok(())
}
