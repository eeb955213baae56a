// Third party imports
use thiserror::Error;

/// Lỗi cấu hình contract
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Artifact không phải JSON hợp lệ
    #[error("Malformed artifact {0}: {1}")]
    MalformedArtifact(String, String),
    /// Artifact thiếu trường `abi`
    #[error("Artifact {0} is missing the `abi` field")]
    MissingAbiField(String),
    /// ABI không hợp lệ
    #[error("Invalid ABI in artifact {0}: {1}")]
    InvalidAbi(String, String),
    /// Địa chỉ contract không hợp lệ
    #[error("Invalid contract address for {0}: {1}")]
    InvalidAddress(String, String),
    /// Lỗi đọc file artifact
    #[error("Cannot read artifact file {0}: {1}")]
    Io(String, String),
}

/// Kiểu kết quả cho cấu hình contract
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Module tests
#[cfg(test)]
mod tests {
    use super::*;

    /// Test ConfigError
    #[test]
    fn test_config_error_display() {
        let error = ConfigError::MissingAbiField("Exchange".to_string());
        assert_eq!(error.to_string(), "Artifact Exchange is missing the `abi` field");

        let error = ConfigError::InvalidAddress("Token".to_string(), "0x123".to_string());
        assert_eq!(error.to_string(), "Invalid contract address for Token: 0x123");
    }
}
