// External imports
use ethers::abi::Abi;

// Standard library imports
use std::{fs, path::Path};

// Third party imports
use serde::{Deserialize, Serialize};
use serde_json::Value;

// Internal imports
use crate::error::{ConfigError, ConfigResult};

// Re-export module abis từ file abis.rs
pub mod abis;
pub use abis::*;

/// Artifact của contract sau khi compile (định dạng hardhat)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artifact {
    /// Tên của contract
    #[serde(rename = "contractName")]
    pub contract_name: String,
    /// Trường `abi` gốc, giữ nguyên thứ tự
    pub abi: Value,
    /// Bytecode đã compile
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bytecode: Option<String>,
}

/// Parse artifact document, yêu cầu trường `abi` dạng mảng
pub fn parse_artifact(name: &str, content: &str) -> ConfigResult<Artifact> {
    let document: Value = serde_json::from_str(content)
        .map_err(|e| ConfigError::MalformedArtifact(name.to_string(), e.to_string()))?;

    let abi = match document.get("abi") {
        Some(abi) if abi.is_array() => abi.clone(),
        Some(_) => {
            return Err(ConfigError::InvalidAbi(
                name.to_string(),
                "`abi` is not an array".to_string(),
            ))
        }
        None => return Err(ConfigError::MissingAbiField(name.to_string())),
    };

    let contract_name = document
        .get("contractName")
        .and_then(Value::as_str)
        .unwrap_or(name)
        .to_string();
    let bytecode = document
        .get("bytecode")
        .and_then(Value::as_str)
        .map(String::from);

    Ok(Artifact {
        contract_name,
        abi,
        bytecode,
    })
}

/// Trích xuất trường `abi` từ artifact, không biến đổi nội dung
pub fn extract_abi_json(name: &str, content: &str) -> ConfigResult<Value> {
    Ok(parse_artifact(name, content)?.abi)
}

/// Parse trường `abi` của artifact thành ethers::abi::Abi
pub fn parse_abi(name: &str, content: &str) -> ConfigResult<Abi> {
    let abi_json = extract_abi_json(name, content)?;
    serde_json::from_value(abi_json)
        .map_err(|e| ConfigError::InvalidAbi(name.to_string(), e.to_string()))
}

/// Đọc artifact từ file
pub fn read_artifact_from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Artifact> {
    let path = path.as_ref();
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("artifact");

    let content = fs::read_to_string(path)
        .map_err(|e| ConfigError::Io(path.display().to_string(), e.to_string()))?;

    parse_artifact(name, &content)
}
