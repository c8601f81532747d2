//! Sets the token URI prefix of the deployed `CodexTitle` for a network.

use async_trait::async_trait;
use ethers::types::Address;
use tracing::{error, info};

use crate::{errors::MigrationError, network::Network};

#[async_trait]
pub trait TokenUriPrefixSetter: Send + Sync {
    async fn set_token_uri_prefix(&self, prefix: &str) -> Result<(), MigrationError>;
}

/// Where the already-deployed contracts live, and how to get a handle on them.
#[async_trait]
pub trait DeployedContracts: Send + Sync {
    type CodexTitle: TokenUriPrefixSetter;

    async fn token_proxy_address(&self) -> Result<Address, MigrationError>;

    fn codex_title_at(&self, address: Address) -> Self::CodexTitle;
}

pub fn resolve_token_uri_prefix(network: &str) -> Result<&'static str, MigrationError> {
    let network: Network = network.parse()?;
    Ok(network.token_uri_prefix())
}

/// Resolves the prefix for `network` and sets it on `CodexTitle` through the
/// token proxy. Unknown networks fail before anything is looked up or sent.
pub async fn apply_token_uri_prefix<C>(
    contracts: &C,
    network: &str,
) -> Result<&'static str, MigrationError>
where
    C: DeployedContracts + ?Sized,
{
    let token_uri_prefix = resolve_token_uri_prefix(network)?;

    let token_proxy = contracts.token_proxy_address().await?;
    let codex_title = contracts.codex_title_at(token_proxy);

    info!(%network, ?token_proxy, "Setting the tokenURIPrefix to: {token_uri_prefix}");

    codex_title.set_token_uri_prefix(token_uri_prefix).await?;

    Ok(token_uri_prefix)
}

#[derive(Debug)]
pub enum MigrationOutcome {
    Applied(&'static str),
    Failed(MigrationError),
}

impl MigrationOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }
}

pub struct SetTokenUriPrefix<C> {
    contracts: C,
}

impl<C> SetTokenUriPrefix<C>
where
    C: DeployedContracts,
{
    pub fn new(contracts: C) -> Self {
        Self { contracts }
    }

    /// Never returns the error as `Err`: failures are logged and reported in
    /// the outcome, the caller decides whether they abort the deployment.
    pub async fn run(&self, network: &str) -> MigrationOutcome {
        match apply_token_uri_prefix(&self.contracts, network).await {
            Ok(prefix) => MigrationOutcome::Applied(prefix),
            Err(err) => {
                error!(%network, "{err}");
                MigrationOutcome::Failed(err)
            }
        }
    }
}
