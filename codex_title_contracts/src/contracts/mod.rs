pub mod codex_title;

#[cfg(test)]
pub mod test_utils {
    use std::{env, sync::Arc};

    use ethers::{
        core::k256::ecdsa::SigningKey,
        middleware::SignerMiddleware,
        providers::{Http, Provider},
        signers::{coins_bip39::English, MnemonicBuilder, Signer, Wallet},
    };

    use crate::config::ContractNetworkConfig;

    /// Node the Truffle migrations ran against, and the `TokenProxy` artifact they wrote.
    pub fn live_network() -> (ContractNetworkConfig, String) {
        dotenv::dotenv().ok();

        let network = ContractNetworkConfig {
            rpc_url: env::var("RPC_URL").unwrap(),
            chain_id: env::var("CHAIN_ID").unwrap().parse().unwrap(),
        };
        (network, env::var("TOKEN_PROXY_ARTIFACT").unwrap())
    }

    pub fn get_writer_ethers_client(
        id: u32,
        network: &ContractNetworkConfig,
    ) -> Arc<SignerMiddleware<Provider<Http>, Wallet<SigningKey>>> {
        let wallet = MnemonicBuilder::<English>::default()
            .phrase(env::var("MNEMONIC").unwrap().as_str())
            .index(id)
            .unwrap()
            .build()
            .unwrap()
            .with_chain_id(network.chain_id);

        let provider = Provider::<Http>::try_from(network.rpc_url.as_str()).unwrap();
        Arc::new(SignerMiddleware::new(provider, wallet))
    }
}
