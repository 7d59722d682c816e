//! Quantity decoding command

use crate::output::{print_table, OutputFormat};
use anyhow::{Context, Result};
use insights_lib::quantity::parse_quantity;
use serde::Serialize;
use tabled::Tabled;

/// Row for the decoded quantity
#[derive(Tabled, Serialize)]
struct QuantityRow {
    #[tabled(rename = "Input")]
    input: String,
    #[tabled(rename = "Value")]
    value: f64,
}

/// Decode one quantity string and print the result
pub fn run(quantity: &str, format: OutputFormat) -> Result<()> {
    let value = parse_quantity(quantity)
        .with_context(|| format!("cannot decode quantity {:?}", quantity))?;

    print_table(
        &[QuantityRow {
            input: quantity.to_string(),
            value,
        }],
        format,
    );
    Ok(())
}
