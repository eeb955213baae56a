// External imports
use ethers::{abi::Abi, types::Address};

// Third party imports
use once_cell::sync::OnceCell;
use serde_json::Value;
use tracing::{error, info};

// Internal imports
use crate::abi::{self, abis};
use crate::addresses::{self, EXCHANGE_CONTRACT_ADDRESS, TOKEN_CONTRACT_ADDRESS};
use crate::error::{ConfigError, ConfigResult};

/// Cấu hình của một contract: địa chỉ kèm ABI
#[derive(Debug, Clone)]
pub struct ContractConfig {
    /// Tên của contract
    pub name: String,
    /// Địa chỉ của contract, giữ nguyên dạng chuỗi
    pub address: String,
    /// ABI của contract
    pub abi: Abi,
    /// Trường `abi` gốc của artifact, giữ nguyên thứ tự
    pub abi_json: Value,
}

impl ContractConfig {
    /// Tạo cấu hình contract từ artifact và địa chỉ
    pub fn from_artifact(name: &str, address: &str, content: &str) -> ConfigResult<Self> {
        // Kiểm tra địa chỉ hợp lệ trước khi đọc artifact
        addresses::parse_address(name, address)?;

        let artifact = abi::parse_artifact(name, content)?;
        let abi: Abi = serde_json::from_value(artifact.abi.clone())
            .map_err(|e| ConfigError::InvalidAbi(name.to_string(), e.to_string()))?;

        Ok(Self {
            name: name.to_string(),
            address: address.to_string(),
            abi,
            abi_json: artifact.abi,
        })
    }

    /// Parse địa chỉ sang ethers::types::Address
    pub fn parsed_address(&self) -> ConfigResult<Address> {
        addresses::parse_address(&self.name, &self.address)
    }
}

/// Tập cấu hình cho cặp contract Exchange và Crypto Dev Token
#[derive(Debug, Clone)]
pub struct ContractSettings {
    /// Cấu hình Exchange contract
    pub exchange: ContractConfig,
    /// Cấu hình Crypto Dev Token contract
    pub token: ContractConfig,
}

impl ContractSettings {
    /// Tải cấu hình từ các artifact nhúng sẵn
    pub fn load() -> ConfigResult<Self> {
        let exchange = ContractConfig::from_artifact(
            "Exchange",
            EXCHANGE_CONTRACT_ADDRESS,
            abis::EXCHANGE_ARTIFACT,
        )?;
        info!("Đã tải cấu hình contract {} tại {}", exchange.name, exchange.address);

        let token = ContractConfig::from_artifact(
            "CryptoDevToken",
            TOKEN_CONTRACT_ADDRESS,
            abis::TOKEN_ARTIFACT,
        )?;
        info!("Đã tải cấu hình contract {} tại {}", token.name, token.address);

        Ok(Self { exchange, token })
    }
}

static SETTINGS: OnceCell<ContractSettings> = OnceCell::new();

/// Lấy tập cấu hình toàn cục, tải một lần duy nhất
pub fn settings() -> ConfigResult<&'static ContractSettings> {
    SETTINGS.get_or_try_init(|| {
        ContractSettings::load().map_err(|e| {
            error!("Không thể tải cấu hình contract: {}", e);
            e
        })
    })
}
