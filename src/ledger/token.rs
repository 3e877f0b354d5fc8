//! Token-creation request fields.
//!
//! The request is a plain value object; the ledger performs all validation.
//! Field values follow the tutorial: a fungible token named after the
//! operator, two decimals, a fixed initial supply, freezing disabled.

/// Tag used as the token symbol, transaction memo, and token-memo prefix.
pub const TUTORIAL_TAG: &str = "HFW-HTS";

/// Decimal precision of the token.
pub const DEFAULT_DECIMALS: u32 = 2;

/// Initial supply, denominated in the smallest unit.
pub const DEFAULT_INITIAL_SUPPLY: u64 = 1_000_000;

/// Properties of the fungible token to create.
///
/// Treasury and admin key are not carried here: both are always the
/// operator, applied by the ledger client at submission time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSpec {
    pub name: String,
    pub symbol: String,
    pub decimals: u32,
    pub initial_supply: u64,
    pub freeze_default: bool,
    pub token_memo: String,
    pub transaction_memo: String,
}

impl TokenSpec {
    /// The tutorial's fungible token, named after the operator.
    pub fn fungible_for(display_name: &str) -> Self {
        Self {
            name: format!("{display_name} coin"),
            symbol: TUTORIAL_TAG.to_string(),
            decimals: DEFAULT_DECIMALS,
            initial_supply: DEFAULT_INITIAL_SUPPLY,
            freeze_default: false,
            token_memo: format!("{TUTORIAL_TAG} token by {display_name}"),
            transaction_memo: TUTORIAL_TAG.to_string(),
        }
    }
}
