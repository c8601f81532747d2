//! Truffle build artifacts, read to find where a contract was deployed.

use std::{collections::HashMap, fs, path::Path};

use ethers::types::Address;
use serde::Deserialize;

use crate::errors::MigrationError;

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TruffleArtifact {
    pub contract_name: String,
    /// keyed by network id, as reported by `net_version`
    #[serde(default)]
    pub networks: HashMap<String, NetworkDeployment>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NetworkDeployment {
    pub address: String,
}

impl TruffleArtifact {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MigrationError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            MigrationError::Configuration(format!(
                "Failed to read artifact at {}: {e}",
                path.display()
            ))
        })?;

        Self::from_json(&content).map_err(|e| {
            MigrationError::Configuration(format!(
                "Failed to parse artifact at {}: {e}",
                path.display()
            ))
        })
    }

    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Failing here means the contract cannot be found on the node, which is
    /// a lookup failure rather than a bad network name.
    pub fn address_for_network(&self, network_id: &str) -> Result<Address, MigrationError> {
        let deployment = self.networks.get(network_id).ok_or_else(|| {
            MigrationError::RemoteCall(format!(
                "{} has not been deployed to network id {network_id}",
                self.contract_name
            ))
        })?;

        deployment.address.parse().map_err(|e| {
            MigrationError::RemoteCall(format!(
                "Invalid {} address {:?}: {e}",
                self.contract_name, deployment.address
            ))
        })
    }
}
