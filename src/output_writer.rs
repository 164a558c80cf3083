use std::{fmt::LowerHex, fs, fs::File, io::Read, path::PathBuf};

use json::JsonValue;

use crate::errors::ScriptError;

/// Keys under which values are recorded in the output file
pub enum OutputKeys {
    /// Key related to a deployment
    Deployment {
        /// The contract the deployment belongs to
        key: &'static str,
    },
}

/// Read a deployed address
pub fn read_output_file(file_path: &str, key: OutputKeys) -> Result<String, ScriptError> {
    if !PathBuf::from(file_path).exists() {
        return Err(ScriptError::JsonOutputError(String::from(
            "Deployed addresses file not found",
        )));
    }

    // Parse it's json content into objects
    let parsed_json = get_json_from_file(file_path)?;
    let final_key = match key {
        OutputKeys::Deployment { key } => parsed_json[key]["deploy"].clone(),
    };

    final_key
        .as_str()
        .map(ToString::to_string)
        .ok_or(ScriptError::JsonOutputError(String::from(
            "No address recorded for the given contract",
        )))
}

/// Writes the given address for the deployed contract
pub fn write_output_file<T: LowerHex>(
    file_path: &str,
    key: OutputKeys,
    value: T,
) -> Result<(), ScriptError> {
    // If the file doesn't exist, create it
    if !PathBuf::from(file_path).exists() {
        fs::write(file_path, "{}").map_err(|e| ScriptError::JsonOutputError(e.to_string()))?;
    }

    // Parse it's json content into objects
    let mut parsed_json = get_json_from_file(file_path)?;

    // Update the right key
    match key {
        OutputKeys::Deployment { key } => {
            parsed_json[key]["deploy"] = JsonValue::String(format!("{value:#x}"))
        }
    };

    // Write the updated json back to the file
    fs::write(file_path, json::stringify_pretty(parsed_json, 4))
        .map_err(|e| ScriptError::JsonOutputError(e.to_string()))?;

    Ok(())
}

/// Parses the JSON file at the given path
fn get_json_from_file(file_path: &str) -> Result<JsonValue, ScriptError> {
    let mut file_contents = String::new();
    File::open(file_path)
        .map_err(|e| ScriptError::JsonOutputError(e.to_string()))?
        .read_to_string(&mut file_contents)
        .map_err(|e| ScriptError::JsonOutputError(e.to_string()))?;

    json::parse(&file_contents).map_err(|e| ScriptError::JsonOutputError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use alloy::primitives::address;

    use super::*;

    #[test]
    fn round_trips_deployment_addresses() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("deployed.json");
        let file_path = file_path.to_str().unwrap();

        let marketplace = address!("1111111111111111111111111111111111111111");
        let dao = address!("2222222222222222222222222222222222222222");

        write_output_file(
            file_path,
            OutputKeys::Deployment {
                key: "fake-nft-marketplace",
            },
            marketplace,
        )
        .unwrap();
        write_output_file(
            file_path,
            OutputKeys::Deployment {
                key: "cryptodevs-dao",
            },
            dao,
        )
        .unwrap();

        let read_marketplace = read_output_file(
            file_path,
            OutputKeys::Deployment {
                key: "fake-nft-marketplace",
            },
        )
        .unwrap();
        let read_dao = read_output_file(
            file_path,
            OutputKeys::Deployment {
                key: "cryptodevs-dao",
            },
        )
        .unwrap();

        assert_eq!(read_marketplace, format!("{marketplace:#x}"));
        assert_eq!(read_dao, format!("{dao:#x}"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = read_output_file(
            "definitely-not-there.json",
            OutputKeys::Deployment {
                key: "cryptodevs-dao",
            },
        )
        .unwrap_err();
        assert!(matches!(err, ScriptError::JsonOutputError(_)));
    }
}
