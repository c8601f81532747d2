use std::sync::Arc;

use async_trait::async_trait;
use ethers::{providers::Middleware, types::Address};
use tracing::debug;

use crate::{
    artifacts::TruffleArtifact, contracts::codex_title::CodexTitleContract,
    errors::MigrationError, token_uri::DeployedContracts,
};

pub enum TokenProxyLocation {
    /// Look the address up in the artifact under the node's network id.
    Artifact(TruffleArtifact),
    Address(Address),
}

/// Contracts deployed by Truffle, reached through the `TokenProxy`.
pub struct TruffleDeployments<M> {
    client: Arc<M>,
    token_proxy: TokenProxyLocation,
}

impl<M: Middleware> TruffleDeployments<M> {
    pub fn new(client: Arc<M>, token_proxy: TokenProxyLocation) -> Self {
        Self {
            client,
            token_proxy,
        }
    }
}

#[async_trait]
impl<M> DeployedContracts for TruffleDeployments<M>
where
    M: Middleware + 'static,
{
    type CodexTitle = CodexTitleContract<M>;

    async fn token_proxy_address(&self) -> Result<Address, MigrationError> {
        let artifact = match &self.token_proxy {
            TokenProxyLocation::Address(address) => return Ok(*address),
            TokenProxyLocation::Artifact(artifact) => artifact,
        };

        let network_id = self
            .client
            .get_net_version()
            .await
            .map_err(|e| MigrationError::RemoteCall(e.to_string()))?;
        debug!(%network_id, "looking up deployed TokenProxy");

        artifact.address_for_network(&network_id)
    }

    fn codex_title_at(&self, address: Address) -> CodexTitleContract<M> {
        CodexTitleContract::at(address, self.client.clone())
    }
}
