// External imports
use ethers::{contract::Contract, middleware::Middleware};

// Standard library imports
use std::sync::Arc;

// Internal imports
use crate::config::{settings, ContractConfig};
use crate::error::ConfigResult;

/// Tạo contract instance từ cấu hình
pub fn bind_contract<M: Middleware>(
    config: &ContractConfig,
    client: Arc<M>,
) -> ConfigResult<Contract<M>> {
    let address = config.parsed_address()?;
    Ok(Contract::new(address, config.abi.clone(), client))
}

/// Tạo instance cho Exchange contract
pub fn exchange_contract<M: Middleware>(client: Arc<M>) -> ConfigResult<Contract<M>> {
    let settings = settings()?;
    bind_contract(&settings.exchange, client)
}

/// Tạo instance cho Crypto Dev Token contract
pub fn token_contract<M: Middleware>(client: Arc<M>) -> ConfigResult<Contract<M>> {
    let settings = settings()?;
    bind_contract(&settings.token, client)
}
