//! Conversions behind the `move-bcs` subcommands. Each returns the text to
//! print so it can be tested without a terminal.

use anyhow::{Context, Result};
use move_bcs_types::U256;
use tracing::debug;

use crate::config::OutputConfig;

/// Parse a decimal u256 argument
pub fn parse_value(text: &str) -> Result<U256> {
    text.parse()
        .with_context(|| format!("Invalid u256 value {:?}", text))
}

/// Parse hex input, with or without a 0x prefix
pub fn parse_hex(text: &str) -> Result<Vec<u8>> {
    let text = text.trim();
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);

    hex::decode(digits).with_context(|| format!("Invalid hex input {:?}", text))
}

pub fn encode_value(text: &str, output: &OutputConfig) -> Result<String> {
    let value = parse_value(text)?;
    let bytes = move_bcs_codec::encode(&value)?;
    debug!(%value, len = bytes.len(), "encoded u256");
    Ok(output.format_hex(&bytes))
}

pub fn decode_value(hex_text: &str) -> Result<String> {
    let bytes = parse_hex(hex_text)?;
    let value: U256 = move_bcs_codec::decode(&bytes)
        .context("Failed to decode BCS u256")?;
    debug!(%value, "decoded u256");
    Ok(value.to_string())
}

pub fn encode_sequence(texts: &[String], output: &OutputConfig) -> Result<String> {
    let values = texts
        .iter()
        .map(|text| parse_value(text))
        .collect::<Result<Vec<_>>>()?;
    let bytes = move_bcs_codec::encode(&values)?;
    debug!(count = values.len(), len = bytes.len(), "encoded u256 sequence");
    Ok(output.format_hex(&bytes))
}

pub fn decode_sequence(hex_text: &str) -> Result<Vec<String>> {
    let bytes = parse_hex(hex_text)?;
    let values: Vec<U256> = move_bcs_codec::decode(&bytes)
        .context("Failed to decode BCS u256 sequence")?;
    debug!(count = values.len(), "decoded u256 sequence");
    Ok(values.iter().map(U256::to_string).collect())
}

pub fn to_json(text: &str) -> Result<String> {
    let value = parse_value(text)?;
    serde_json::to_string(&value).context("Failed to serialize u256 as JSON")
}

pub fn from_json(json: &str) -> Result<String> {
    let value: U256 = serde_json::from_str(json)
        .context("Failed to parse JSON u256")?;
    Ok(value.to_string())
}
