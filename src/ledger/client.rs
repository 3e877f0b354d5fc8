//! Ledger client: the trait seam and the Hedera testnet implementation.
//!
//! # Responsibilities
//! - Parse operator credentials into SDK types
//! - Build, freeze, and sign the token-creation transaction
//! - Submit it and surface network rejection via the receipt
//!
//! Cryptographic signing, fee handling, and consensus submission are all
//! delegated to the `hedera` SDK; nothing here retries a failed call.

use async_trait::async_trait;
use hedera::{AccountId, Client, PrivateKey, TokenCreateTransaction, TokenType};

use crate::config::OperatorConfig;
use crate::ledger::token::TokenSpec;
use crate::ledger::types::{LedgerError, LedgerResult, TokenCreateOutcome};

/// The seam between the workflow and the network.
///
/// The workflow only ever submits one creation request and releases the
/// connection; tests substitute a mock for the real client.
#[async_trait]
pub trait TokenLedger: Send + Sync {
    /// Submit a token-creation transaction and block until its receipt is
    /// available. A transaction the network rejected surfaces here as an
    /// error, not as an outcome.
    async fn create_token(&self, spec: &TokenSpec) -> LedgerResult<TokenCreateOutcome>;

    /// Release the underlying network connection.
    ///
    /// The workflow calls this exactly once, on success and failure paths
    /// alike. Implementations must tolerate being dropped afterwards.
    fn close(&self);
}

/// Ledger client bound to the Hedera testnet.
pub struct HederaLedger {
    client: Client,
    operator_id: AccountId,
    operator_key: PrivateKey,
}

impl HederaLedger {
    /// Create a testnet client with the operator as fee payer.
    ///
    /// Parses the account id and ECDSA private key from their configuration
    /// strings; no network traffic happens until the first submission.
    pub fn for_testnet(operator: &OperatorConfig) -> LedgerResult<Self> {
        let operator_id: AccountId = operator
            .account_id
            .parse()
            .map_err(|e| LedgerError::AccountId(format!("{e}")))?;
        let operator_key = PrivateKey::from_str_ecdsa(&operator.private_key)
            .map_err(|e| LedgerError::PrivateKey(format!("{e}")))?;

        let client = Client::for_testnet();
        client.set_operator(operator_id, operator_key.clone());

        tracing::info!(
            operator_id = %operator_id,
            "Hedera client initialized for testnet"
        );

        Ok(Self {
            client,
            operator_id,
            operator_key,
        })
    }
}

#[async_trait]
impl TokenLedger for HederaLedger {
    async fn create_token(&self, spec: &TokenSpec) -> LedgerResult<TokenCreateOutcome> {
        let mut tx = TokenCreateTransaction::new();
        tx.token_type(TokenType::FungibleCommon)
            .name(spec.name.clone())
            .symbol(spec.symbol.clone())
            .decimals(spec.decimals)
            .initial_supply(spec.initial_supply)
            // The operator holds the treasury and the admin key
            .treasury_account_id(self.operator_id)
            .admin_key(self.operator_key.public_key())
            .freeze_default(spec.freeze_default)
            .token_memo(spec.token_memo.clone())
            .transaction_memo(spec.transaction_memo.clone());

        // Freeze against the client's fee/network context, then sign with
        // the paying key before submission
        tx.freeze_with(&self.client)
            .map_err(|e| LedgerError::Freeze(format!("{e}")))?;
        tx.sign(self.operator_key.clone());

        let response = tx
            .execute(&self.client)
            .await
            .map_err(|e| LedgerError::Submit(format!("{e}")))?;
        let transaction_id = response.transaction_id.to_string();

        tracing::info!(
            transaction_id = %transaction_id,
            "Token create transaction submitted"
        );

        // Receipt retrieval is where an on-network failure shows up
        let receipt = response
            .get_receipt(&self.client)
            .await
            .map_err(|e| LedgerError::Receipt(format!("{e}")))?;
        let token_id = receipt.token_id.ok_or(LedgerError::MissingTokenId)?;

        Ok(TokenCreateOutcome {
            transaction_id,
            token_id: token_id.to_string(),
        })
    }

    fn close(&self) {
        // The SDK tears down its channels when the client drops
        tracing::debug!("Closing Hedera client");
    }
}

impl std::fmt::Debug for HederaLedger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HederaLedger")
            .field("operator_id", &self.operator_id)
            .finish()
    }
}
