use anyhow::{Context, Result};
use clap::Subcommand;
use wasm_cashaddr::{convert, decode_address, AddressFormat};

use crate::input::read_addresses;

#[derive(Subcommand)]
pub enum AddressCommand {
    /// Convert addresses to another format
    Convert {
        /// Addresses to convert ("-" reads one per line from stdin)
        #[arg(required = true)]
        addresses: Vec<String>,
        /// Target format (legacy, ecash, bitcoincash)
        #[arg(short, long)]
        to: String,
        /// Source format; detected from each address when omitted
        #[arg(short, long)]
        from: Option<String>,
    },
    /// Decode an address to its type, version byte and hash (hex)
    Decode {
        /// The address to decode
        address: String,
        /// Address format; detected when omitted
        #[arg(short, long)]
        format: Option<String>,
    },
}

pub fn handle_command(command: AddressCommand) -> Result<()> {
    match command {
        AddressCommand::Convert {
            addresses,
            to,
            from,
        } => {
            let to = parse_format(&to)?;
            let from = from.as_deref().map(parse_format).transpose()?;
            let addresses = read_addresses(&addresses)?;
            tracing::debug!(count = addresses.len(), %to, "converting addresses");
            for address in addresses {
                println!("{}", convert_one(&address, from, to)?);
            }
            Ok(())
        }
        AddressCommand::Decode { address, format } => {
            println!("{}", decode_one(&address, format.as_deref())?);
            Ok(())
        }
    }
}

fn parse_format(name: &str) -> Result<AddressFormat> {
    name.parse::<AddressFormat>()
        .with_context(|| format!("Unknown format: {}", name))
}

fn resolve_format(address: &str, format: Option<AddressFormat>) -> Result<AddressFormat> {
    match format {
        Some(format) => Ok(format),
        None => AddressFormat::detect(address)
            .with_context(|| format!("Could not detect format of {}", address)),
    }
}

fn convert_one(address: &str, from: Option<AddressFormat>, to: AddressFormat) -> Result<String> {
    let from = resolve_format(address, from)?;
    convert(address, from, to).with_context(|| format!("Failed to convert {}", address))
}

fn decode_one(address: &str, format: Option<&str>) -> Result<String> {
    let format = format.map(parse_format).transpose()?;
    let format = resolve_format(address, format)?;
    let payload =
        decode_address(address, format).with_context(|| format!("Failed to decode {}", address))?;
    Ok(format!(
        "format: {}\ntype: {}\nversion: {}\nhash: {}",
        format,
        payload.address_type(),
        payload.version,
        hex::encode(payload.hash)
    ))
}
