use std::sync::Arc;

use async_trait::async_trait;
use ethers::{
    abi::Address,
    contract::ContractCall,
    providers::Middleware,
    types::{TransactionReceipt, U64},
};
use tracing::debug;

use crate::{errors::MigrationError, token_uri::TokenUriPrefixSetter};

// Include generated contract types from build script
include!(concat!(env!("OUT_DIR"), "/codex_title_contract.rs"));

/// `CodexTitle` ABI bound to an address, usually the `TokenProxy` in front of it.
pub struct CodexTitleContract<M> {
    contract: CodexTitle<M>,
}

impl<M: Middleware> CodexTitleContract<M> {
    pub fn at(address: Address, client: Arc<M>) -> Self {
        Self {
            contract: CodexTitle::new(address, client),
        }
    }

    pub fn address(&self) -> Address {
        self.contract.address()
    }

    // legacy so pre-London ganache accepts it
    fn set_token_uri_prefix_call(&self, prefix: &str) -> ContractCall<M, ()> {
        self.contract
            .set_token_uri_prefix(prefix.to_owned())
            .legacy()
    }
}

#[async_trait]
impl<M> TokenUriPrefixSetter for CodexTitleContract<M>
where
    M: Middleware + 'static,
{
    async fn set_token_uri_prefix(&self, prefix: &str) -> Result<(), MigrationError> {
        let call = self.set_token_uri_prefix_call(prefix);

        let receipt = call
            .send()
            .await
            .map_err(|e| MigrationError::RemoteCall(e.to_string()))?
            .await
            .map_err(|e| MigrationError::RemoteCall(e.to_string()))?
            .ok_or_else(|| {
                MigrationError::RemoteCall(String::from(
                    "setTokenURIPrefix transaction was dropped before it was mined",
                ))
            })?;

        check_receipt(&receipt)?;

        debug!(
            tx_hash = ?receipt.transaction_hash,
            block = ?receipt.block_number,
            "setTokenURIPrefix mined"
        );
        Ok(())
    }
}

fn check_receipt(receipt: &TransactionReceipt) -> Result<(), MigrationError> {
    match receipt.status {
        Some(status) if status == U64::zero() => Err(MigrationError::RemoteCall(format!(
            "setTokenURIPrefix reverted in tx {:?}",
            receipt.transaction_hash
        ))),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, time::Duration};

    use ethers::{
        abi::{self, Address, Token},
        providers::Provider,
        types::{
            transaction::eip2718::TypedTransaction, Transaction, TransactionReceipt, H256, U256,
            U64,
        },
        utils::id,
    };

    use super::{check_receipt, CodexTitleContract};
    use crate::{errors::MigrationError, token_uri::TokenUriPrefixSetter};

    const PREFIX: &str = "http://localhost:3001/token";

    fn codex_title_address() -> Address {
        "0x345ca3e014aaf5dca488057592ee47305d9b3e10"
            .parse()
            .unwrap()
    }

    #[test]
    fn call_encodes_prefix_as_the_only_argument() {
        let (provider, _mock) = Provider::mocked();
        let codex_title = CodexTitleContract::at(codex_title_address(), Arc::new(provider));

        let call = codex_title.set_token_uri_prefix_call(PREFIX);

        let mut expected = id("setTokenURIPrefix(string)").to_vec();
        expected.extend(abi::encode(&[Token::String(PREFIX.to_owned())]));
        assert_eq!(call.calldata().unwrap().to_vec(), expected);
        assert_eq!(call.tx.to_addr(), Some(&codex_title_address()));
        assert!(matches!(call.tx, TypedTransaction::Legacy(_)));
    }

    #[tokio::test]
    async fn node_error_is_a_remote_call_error() {
        // no responses queued, the first request fails
        let (provider, _mock) = Provider::mocked();
        let codex_title = CodexTitleContract::at(codex_title_address(), Arc::new(provider));

        let err = codex_title.set_token_uri_prefix(PREFIX).await.unwrap_err();

        assert!(matches!(err, MigrationError::RemoteCall(_)));
    }

    #[tokio::test]
    async fn dropped_transaction_is_a_remote_call_error() {
        let (provider, mock) = Provider::mocked();
        let provider = provider.interval(Duration::from_millis(10));
        // popped last-in first-out
        mock.push::<Option<Transaction>, _>(None).unwrap();
        mock.push::<H256, _>(H256::repeat_byte(0xab)).unwrap();
        mock.push::<U256, _>(U256::from(50_000)).unwrap();
        mock.push::<U256, _>(U256::from(20_000_000_000u64)).unwrap();
        let codex_title = CodexTitleContract::at(codex_title_address(), Arc::new(provider));

        let err = codex_title.set_token_uri_prefix(PREFIX).await.unwrap_err();

        let MigrationError::RemoteCall(message) = &err else {
            panic!("expected a remote call error, got {err:?}");
        };
        assert!(message.contains("dropped"), "{message}");
    }

    #[test]
    fn reverted_receipt_is_a_remote_call_error() {
        let receipt = TransactionReceipt {
            status: Some(U64::zero()),
            ..Default::default()
        };

        let err = check_receipt(&receipt).unwrap_err();
        assert!(!err.is_configuration());
    }

    #[test]
    fn successful_or_pre_byzantium_receipts_pass() {
        for status in [Some(U64::one()), None] {
            let receipt = TransactionReceipt {
                status,
                ..Default::default()
            };
            assert!(check_receipt(&receipt).is_ok());
        }
    }
}
