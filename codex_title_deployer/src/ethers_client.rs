use std::{env, sync::Arc};

use anyhow::Context;
use codex_title_contracts::config::ContractNetworkConfig;
use dotenv::dotenv;
use ethers::{
    core::k256::ecdsa::SigningKey,
    middleware::SignerMiddleware,
    providers::{Http, Provider},
    signers::{coins_bip39::English, MnemonicBuilder, Signer, Wallet},
};

pub type EtherSigner = SignerMiddleware<Provider<Http>, Wallet<SigningKey>>;

pub fn get_writer_ethers_client(
    id: u32,
    config: &ContractNetworkConfig,
) -> anyhow::Result<Arc<EtherSigner>> {
    dotenv().ok();

    let seed = env::var("MNEMONIC").context("MNEMONIC must be set to sign the migration")?;

    let wallet = MnemonicBuilder::<English>::default()
        .phrase(&*seed)
        .index(id)?
        .build()?
        .with_chain_id(config.chain_id);

    let provider = Provider::<Http>::try_from(config.rpc_url.as_str())
        .with_context(|| format!("invalid RPC url {}", config.rpc_url))?;
    Ok(Arc::new(SignerMiddleware::new(provider, wallet)))
}
