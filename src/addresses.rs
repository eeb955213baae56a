// External imports
use ethers::types::Address;

// Standard library imports
use std::str::FromStr;

// Internal imports
use crate::error::{ConfigError, ConfigResult};

/// Địa chỉ của Exchange contract đã deploy
pub const EXCHANGE_CONTRACT_ADDRESS: &str = "0x3F3F5dF88dC9F13eac63DF89EC16ef6e7E25DdE7";

/// Địa chỉ của Crypto Dev Token contract đã deploy
pub const TOKEN_CONTRACT_ADDRESS: &str = "0xd9145CCE52D386f254917e481eB44e9943F39138";

/// Parse địa chỉ contract, trả về lỗi cấu hình nếu không hợp lệ
pub fn parse_address(name: &str, value: &str) -> ConfigResult<Address> {
    Address::from_str(value)
        .map_err(|_| ConfigError::InvalidAddress(name.to_string(), value.to_string()))
}
