//! Gatesign CLI - sign parameter sets and verify gateway callbacks from the
//! command line.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod output;
mod params;

use commands::{callback, classify, sign, verify};

#[derive(Parser)]
#[command(name = "gatesign")]
#[command(about = "Payment-gateway signing and callback verification CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign a parameter set and print the signature
    Sign {
        /// Parameters as KEY=VALUE pairs
        params: Vec<String>,
        /// Shared secret to sign with
        #[arg(long)]
        secret: String,
        /// Hash algorithm (sha1, sha256, sha512)
        #[arg(long, default_value = "sha512")]
        alg: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Verify the SHASIGN entry of a parameter set
    Verify {
        /// Parameters as KEY=VALUE pairs, including SHASIGN
        params: Vec<String>,
        /// Shared secret to verify against
        #[arg(long)]
        secret: String,
        /// Hash algorithm (sha1, sha256, sha512)
        #[arg(long, default_value = "sha512")]
        alg: String,
        /// Exit with error code on signature mismatch
        #[arg(long)]
        strict: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run the full inbound pipeline: verify, parse, classify
    Callback {
        /// Callback parameters as KEY=VALUE pairs, including SHASIGN
        params: Vec<String>,
        /// Merchant identifier (PSPID)
        #[arg(long)]
        pspid: String,
        /// Request-flow shared secret
        #[arg(long)]
        sha_in: String,
        /// Response-flow shared secret
        #[arg(long)]
        sha_out: String,
        /// Hash algorithm (sha1, sha256, sha512)
        #[arg(long, default_value = "sha512")]
        alg: String,
    },
    /// Classify a numeric status code
    Classify {
        /// Gateway status code
        code: i32,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Sign {
            params,
            secret,
            alg,
            json,
        } => sign::run(params, secret, alg, json),
        Commands::Verify {
            params,
            secret,
            alg,
            strict,
            json,
        } => verify::run(params, secret, alg, strict, json),
        Commands::Callback {
            params,
            pspid,
            sha_in,
            sha_out,
            alg,
        } => callback::run(params, pspid, sha_in, sha_out, alg),
        Commands::Classify { code, json } => classify::run(code, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
