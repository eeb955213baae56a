// Internal imports
pub mod abi;
pub mod addresses;
pub mod config;
pub mod contracts;
pub mod error;

// Re-export các module chính
pub use abi::abis::{EXCHANGE_CONTRACT_ABI, TOKEN_CONTRACT_ABI};
pub use addresses::{EXCHANGE_CONTRACT_ADDRESS, TOKEN_CONTRACT_ADDRESS};
pub use config::{settings, ContractConfig, ContractSettings};
pub use contracts::{bind_contract, exchange_contract, token_contract};
pub use error::{ConfigError, ConfigResult};
