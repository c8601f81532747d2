pub mod config;
pub mod ethers_client;
pub mod logging;

use std::process::ExitCode;

use clap::Parser;
use codex_title_contracts::{
    artifacts::TruffleArtifact,
    deployments::{TokenProxyLocation, TruffleDeployments},
    token_uri::{resolve_token_uri_prefix, MigrationOutcome, SetTokenUriPrefix},
};

use crate::{config::DeployerConfig, ethers_client::get_writer_ethers_client};

/// Sets the CodexTitle token URI prefix for a deployment network.
#[derive(Debug, Parser)]
struct Arguments {
    /// Deployment network name, e.g. `ganache`.
    #[clap(long, env)]
    network: String,

    /// Mnemonic account index used to sign the transaction.
    #[clap(long, env, default_value_t = 0)]
    account_index: u32,

    #[clap(long, env, default_value = "info,codex_title_contracts=debug")]
    log_filter: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Arguments::parse();
    logging::initialize(&args.log_filter);

    match run(&args).await {
        Ok(MigrationOutcome::Applied(_)) => ExitCode::SUCCESS,
        // already logged by the migration
        Ok(MigrationOutcome::Failed(_)) => ExitCode::FAILURE,
        Err(err) => {
            tracing::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &Arguments) -> anyhow::Result<MigrationOutcome> {
    // an unknown network is reported ahead of any setup failure
    if let Err(err) = resolve_token_uri_prefix(&args.network) {
        tracing::error!(network = %args.network, "{err}");
        return Ok(MigrationOutcome::Failed(err));
    }

    let config = DeployerConfig::load();
    let signer = get_writer_ethers_client(args.account_index, &config.get_network_config())?;

    let token_proxy = match config.parsed_token_proxy_address()? {
        Some(address) => TokenProxyLocation::Address(address),
        None => {
            TokenProxyLocation::Artifact(TruffleArtifact::load(&config.token_proxy_artifact)?)
        }
    };

    let migration = SetTokenUriPrefix::new(TruffleDeployments::new(signer, token_proxy));
    Ok(migration.run(&args.network).await)
}
