//! Callback command implementation.

use gatesign_core::{Gateway, GatewayConfig, HashAlg};
use serde_json::json;

use crate::output;
use crate::params::parse_pairs;

pub fn run(
    pairs: Vec<String>,
    pspid: String,
    sha_in: String,
    sha_out: String,
    alg: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let alg = HashAlg::from_name(&alg)?;
    let config = GatewayConfig::new(pspid, sha_in, sha_out)?.with_hash_alg(alg);
    let gateway = Gateway::new(config);

    let params = parse_pairs(&pairs)?;
    let outcome = gateway
        .handle_callback(params)
        .map_err(|e| format!("Callback rejected: {}", e))?;

    let transaction = serde_json::to_value(&outcome.transaction)?;
    println!(
        "{}",
        output::format_json(&json!({
            "category": outcome.category,
            "transaction": transaction,
        }))
    );
    Ok(())
}
