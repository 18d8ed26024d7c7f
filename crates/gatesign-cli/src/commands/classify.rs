//! Classify command implementation.

use gatesign_core::{classify, status_description};
use serde_json::json;

use crate::output;

pub fn run(code: i32, json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    let description = status_description(code);

    let category = classify(code).map_err(|e| {
        match description {
            // Documented code outside the partition: name it for operators.
            Some(description) => format!("{} ({})", e, description),
            None => e.to_string(),
        }
    })?;

    if json_output {
        println!(
            "{}",
            output::format_json(&json!({
                "code": code,
                "category": category,
                "description": description,
            }))
        );
    } else {
        match description {
            Some(description) => println!("{} - {}", category, description),
            None => println!("{}", category),
        }
    }
    Ok(())
}
