use anyhow::{Context, Result};
use std::io::{self, Read};

/// Split text into addresses, one per line, skipping blank lines
pub fn parse_addresses(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Expand the address arguments, reading stdin for "-"
pub fn read_addresses(args: &[String]) -> Result<Vec<String>> {
    let mut addresses = Vec::new();
    for arg in args {
        if arg == "-" {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            addresses.extend(parse_addresses(&buffer));
        } else {
            addresses.push(arg.clone());
        }
    }
    Ok(addresses)
}
