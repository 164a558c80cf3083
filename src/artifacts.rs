//! Loading of compiled contract artifacts.
//!
//! Artifacts are the JSON files emitted by the Solidity build, carrying the
//! creation bytecode under the `bytecode` key as a 0x-prefixed hex string.

use std::{fs::File, io::Read, path::Path};

use alloy::hex;

use crate::errors::ScriptError;

/// Reads the creation bytecode of the given contract from its artifact file
pub fn read_artifact_bytecode(
    artifacts_dir: &str,
    contract_name: &str,
) -> Result<Vec<u8>, ScriptError> {
    let file_path = Path::new(artifacts_dir).join(format!("{contract_name}.json"));
    if !file_path.exists() {
        return Err(ScriptError::ArtifactLoading(format!(
            "artifact file not found: {}",
            file_path.display()
        )));
    }

    // Parse the json content into objects
    let mut file_contents = String::new();
    File::open(&file_path)
        .map_err(|e| ScriptError::ArtifactLoading(e.to_string()))?
        .read_to_string(&mut file_contents)
        .map_err(|e| ScriptError::ArtifactLoading(e.to_string()))?;
    let parsed_json =
        json::parse(&file_contents).map_err(|e| ScriptError::ArtifactLoading(e.to_string()))?;

    // Extract the creation bytecode
    let bytecode_hex = parsed_json["bytecode"]
        .as_str()
        .ok_or(ScriptError::ArtifactLoading(format!(
            "no bytecode field in artifact for {contract_name}"
        )))?;

    hex::decode(bytecode_hex).map_err(|e| ScriptError::ArtifactLoading(e.to_string()))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn reads_bytecode_from_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = r#"{"contractName":"FakeNFTMarketplace","abi":[],"bytecode":"0x6080604052"}"#;
        fs::write(dir.path().join("FakeNFTMarketplace.json"), artifact).unwrap();

        let bytecode =
            read_artifact_bytecode(dir.path().to_str().unwrap(), "FakeNFTMarketplace").unwrap();
        assert_eq!(bytecode, vec![0x60, 0x80, 0x60, 0x40, 0x52]);
    }

    #[test]
    fn missing_artifact_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_artifact_bytecode(dir.path().to_str().unwrap(), "CryptoDevsDAO")
            .unwrap_err();
        assert!(matches!(err, ScriptError::ArtifactLoading(_)));
    }

    #[test]
    fn missing_bytecode_field_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("CryptoDevsDAO.json"), r#"{"abi":[]}"#).unwrap();

        let err = read_artifact_bytecode(dir.path().to_str().unwrap(), "CryptoDevsDAO")
            .unwrap_err();
        assert!(matches!(err, ScriptError::ArtifactLoading(_)));
    }
}
