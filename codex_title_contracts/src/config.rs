#[derive(Clone, Debug, PartialEq)]
pub struct ContractNetworkConfig {
    pub rpc_url: String,
    pub chain_id: u64,
}
