use serde::{Deserialize, Serialize};
use serde_json::Number;

/// A CW20 contract the client knows how to display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenDescriptor {
    pub address: String,
    pub name: String,
    pub symbol: String,
    pub decimals: u32,
}

/// One token's balance query result as reported by the wallet side.
///
/// `balance` is `None` when the balance query failed and `decimals` is `None` when
/// the token info query returned nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceQueryResult {
    pub address: String,
    pub name: String,
    pub symbol: String,
    pub balance: Option<String>,
    pub decimals: Option<Number>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenBalance {
    pub address: String,
    pub name: String,
    pub symbol: String,
    pub balance: String, // raw base units
    pub decimals: u32,
    pub formatted_balance: String,
    pub half_amount: String,
    pub max_amount: String,
}
