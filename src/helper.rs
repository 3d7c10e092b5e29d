use std::io::{stdin, stdout, Write};

use crate::{InventoryError, Result};

/// Renders an amount as dollars with two decimals
pub fn format_price(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Splits a `key=value` setting
pub fn parse_setting(setting: &str) -> Result<(String, String)> {
    match setting.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(InventoryError::ConfigError {
            message: format!("Expected key=value, got '{}'", setting),
        }),
    }
}

/// Asks a yes/no question on the terminal; anything but y/yes is a no
pub fn confirm(prompt: &str) -> Result<bool> {
    print!("{} [y/N]: ", prompt);
    stdout().flush().map_err(InventoryError::Io)?;

    let mut input = String::new();
    stdin().read_line(&mut input).map_err(InventoryError::Io)?;

    let input = input.trim().to_lowercase();
    Ok(input == "y" || input == "yes")
}
