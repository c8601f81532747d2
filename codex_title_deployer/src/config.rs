use std::{error::Error, path::PathBuf};

use codex_title_contracts::{config::ContractNetworkConfig, errors::MigrationError};
use ethers::types::Address;
use tracing::{info, warn};

const RPC_URL_ENV_VAR: &str = "RPC_URL";
const CHAIN_ID_ENV_VAR: &str = "CHAIN_ID";
const TOKEN_PROXY_ARTIFACT_ENV_VAR: &str = "TOKEN_PROXY_ARTIFACT";
const TOKEN_PROXY_ADDRESS_ENV_VAR: &str = "TOKEN_PROXY_ADDRESS";

// ganache defaults
const DEFAULT_RPC_URL: &str = "http://localhost:7545";
const DEFAULT_CHAIN_ID: u64 = 1337;
const DEFAULT_TOKEN_PROXY_ARTIFACT: &str = "build/contracts/TokenProxy.json";

#[derive(Debug)]
pub struct DeployerConfig {
    pub rpc_url: String,
    pub chain_id: u64,
    pub token_proxy_artifact: PathBuf,
    pub token_proxy_address: Option<String>,
}

impl DeployerConfig {
    /// load from env, else local
    pub fn load() -> Self {
        match Self::try_from_env() {
            Ok(c) => {
                info!("Loaded config from env");
                c
            }
            Err(e) => {
                warn!("Failed to load config from env: {}", e);
                info!("Loading local config");
                Self::local()
            }
        }
    }

    fn local() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            chain_id: DEFAULT_CHAIN_ID,
            token_proxy_artifact: PathBuf::from(DEFAULT_TOKEN_PROXY_ARTIFACT),
            token_proxy_address: None,
        }
    }

    fn try_from_env() -> Result<Self, Box<dyn Error>> {
        dotenv::dotenv().ok();

        let rpc_url = std::env::var(RPC_URL_ENV_VAR)?;
        let chain_id = std::env::var(CHAIN_ID_ENV_VAR)?.parse()?;
        let token_proxy_artifact = std::env::var(TOKEN_PROXY_ARTIFACT_ENV_VAR)
            .unwrap_or_else(|_| DEFAULT_TOKEN_PROXY_ARTIFACT.to_string())
            .into();
        let token_proxy_address = std::env::var(TOKEN_PROXY_ADDRESS_ENV_VAR).ok();

        Ok(Self {
            rpc_url,
            chain_id,
            token_proxy_artifact,
            token_proxy_address,
        })
    }

    pub fn get_network_config(&self) -> ContractNetworkConfig {
        ContractNetworkConfig {
            rpc_url: self.rpc_url.clone(),
            chain_id: self.chain_id,
        }
    }

    pub fn parsed_token_proxy_address(&self) -> Result<Option<Address>, MigrationError> {
        self.token_proxy_address
            .as_deref()
            .map(|address| {
                address.parse().map_err(|e| {
                    MigrationError::Configuration(format!(
                        "Invalid {TOKEN_PROXY_ADDRESS_ENV_VAR} {address:?}: {e}"
                    ))
                })
            })
            .transpose()
    }
}
