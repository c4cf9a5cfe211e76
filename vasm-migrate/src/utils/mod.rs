// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::fmt::Display;

use eyre::bail;

use style::{BOLD, ERROR};

mod style;

pub fn convert_gwei_to_wei(fee_str: &str) -> eyre::Result<u128> {
    let gwei = match fee_str.parse::<f64>() {
        Ok(fee) if fee >= 0.0 => fee,
        Ok(_) => bail!("Max fee per gas must be non-negative"),
        Err(_) => bail!("Invalid max fee per gas value: {}", fee_str),
    };

    if !gwei.is_finite() {
        bail!("Invalid gwei value: must be finite");
    }

    let wei = gwei * 1e9;
    if wei >= u128::MAX as f64 {
        bail!("Result outside valid range for wei");
    }

    Ok(wei as u128)
}

pub fn decode0x(text: impl AsRef<str>) -> eyre::Result<Vec<u8>> {
    let text = text.as_ref().trim();
    let text = text.strip_prefix("0x").unwrap_or(text);
    Ok(hex::decode(text)?)
}

pub fn print_error(err: impl Display) {
    eprintln!("{ERROR}error{ERROR:#}{BOLD}:{BOLD:#} {err}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gwei_to_wei() {
        assert_eq!(convert_gwei_to_wei("1").unwrap(), 1_000_000_000);
        assert_eq!(convert_gwei_to_wei("0.5").unwrap(), 500_000_000);
        assert_eq!(convert_gwei_to_wei("0").unwrap(), 0);
    }

    #[test]
    fn gwei_rejects_bad_values() {
        assert!(convert_gwei_to_wei("-1").is_err());
        assert!(convert_gwei_to_wei("abc").is_err());
        assert!(convert_gwei_to_wei("inf").is_err());
        assert!(convert_gwei_to_wei("1e40").is_err());
    }

    #[test]
    fn decodes_with_and_without_prefix() {
        assert_eq!(decode0x("0xdead").unwrap(), vec![0xde, 0xad]);
        assert_eq!(decode0x(" beef\n").unwrap(), vec![0xbe, 0xef]);
        assert!(decode0x("0xzz").is_err());
    }
}
