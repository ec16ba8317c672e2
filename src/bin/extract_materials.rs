//! Simple CLI wrapping the extraction pipeline.
//!
//! Reads a saved product page from a file (or stdin) and prints the
//! materials report the way a display surface would, or the raw response
//! record with `--json`.

use std::env;
use std::fs;
use std::io::{self, Read};

use fiberlens::extract;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut json_output = false;
    let mut path: Option<String> = None;
    for arg in env::args().skip(1) {
        if arg == "--json" {
            json_output = true;
        } else {
            path = Some(arg);
        }
    }

    let html = match path {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let result = extract(&html)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    match &result.materials {
        Some(materials) => {
            println!("Materials: {materials}");
            println!("Source: {} · Confidence: {}", result.source, result.confidence);
        }
        None => println!("No materials found on this page"),
    }

    Ok(())
}
