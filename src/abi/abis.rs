// External imports
use ethers::abi::Abi;

// Third party imports
use once_cell::sync::Lazy;

// Internal imports
use crate::abi::parse_abi;

/// Artifact của Exchange contract (hardhat build output)
pub const EXCHANGE_ARTIFACT: &str = include_str!("Exchange.json");

/// Artifact của Crypto Dev Token contract (hardhat build output)
pub const TOKEN_ARTIFACT: &str = include_str!("CryptoDevToken.json");

/// ABI của Exchange contract
pub static EXCHANGE_CONTRACT_ABI: Lazy<Abi> =
    Lazy::new(|| parse_abi("Exchange", EXCHANGE_ARTIFACT).unwrap());

/// ABI của Crypto Dev Token contract
pub static TOKEN_CONTRACT_ABI: Lazy<Abi> =
    Lazy::new(|| parse_abi("CryptoDevToken", TOKEN_ARTIFACT).unwrap());

/// Module tests
#[cfg(test)]
mod tests {
    use super::*;

    /// Test ABI của Exchange chứa các hàm chính
    #[test]
    fn test_exchange_abi() {
        assert!(EXCHANGE_CONTRACT_ABI.function("addLiquidity").is_ok());
        assert!(EXCHANGE_CONTRACT_ABI.function("ethToCryptoDevToken").is_ok());
        assert!(EXCHANGE_CONTRACT_ABI.function("cryptoDevTokenToEth").is_ok());
        assert!(EXCHANGE_CONTRACT_ABI.function("getReserve").is_ok());
        assert!(EXCHANGE_CONTRACT_ABI.event("Transfer").is_ok());
    }

    /// Test ABI của Crypto Dev Token chứa các hàm chính
    #[test]
    fn test_token_abi() {
        assert!(TOKEN_CONTRACT_ABI.function("mint").is_ok());
        assert!(TOKEN_CONTRACT_ABI.function("claim").is_ok());
        assert!(TOKEN_CONTRACT_ABI.function("balanceOf").is_ok());
        assert!(TOKEN_CONTRACT_ABI.event("Approval").is_ok());
    }
}
