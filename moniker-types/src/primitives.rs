use crate::error::MonikerError;

/// 20-byte wallet address.
pub type Address = [u8; 20];

/// Length of an address in hex digits, without the `0x` prefix.
pub const ADDRESS_HEX_LEN: usize = 40;

/// Parse a hex address. The `0x` prefix is optional and case is ignored.
pub fn parse_address(s: &str) -> Result<Address, MonikerError> {
    let s = s.trim();
    let hex_part = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);

    if hex_part.len() != ADDRESS_HEX_LEN {
        return Err(MonikerError::InvalidAddress {
            reason: format!(
                "expected {} hex digits, got {}",
                ADDRESS_HEX_LEN,
                hex_part.len()
            ),
        });
    }

    let bytes = hex::decode(hex_part).map_err(|e| MonikerError::InvalidAddress {
        reason: e.to_string(),
    })?;
    let mut address = [0u8; 20];
    address.copy_from_slice(&bytes);
    Ok(address)
}

/// Canonical form of an address: lowercase hex with a `0x` prefix.
pub fn format_address(address: &Address) -> String {
    format!("0x{}", hex::encode(address))
}
