use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::token::BalanceQueryResult;

/// A row of the transfer form: whether the token is ticked and what was typed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenSelection {
    pub token_address: String,
    pub selected: bool,
    pub amount: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRequest {
    pub token_address: String,
    pub raw_amount: String,
    pub recipient: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cw20ExecuteMsg {
    Transfer { recipient: String, amount: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecuteMessage {
    pub contract: String,
    pub msg: Cw20ExecuteMsg,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    pub denom: String,
    pub amount: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fee {
    pub amount: Vec<Coin>,
    pub gas: String,
}

/// Everything the signer needs to broadcast one batch of CW20 transfers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferPlan {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub sender: String,
    pub recipient: String,
    pub transfers: Vec<TransferRequest>,
    pub messages: Vec<ExecuteMessage>,
    pub fee: Fee,
    pub memo: String,
}

#[derive(Debug, Deserialize)]
pub struct TransferCheckRequest {
    pub selections: Vec<TokenSelection>,
    pub recipient: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TransferCheckResponse {
    pub can_submit: bool,
}

/// Balances are taken in query-result form and re-derived on the server.
#[derive(Debug, Deserialize)]
pub struct BuildTransfersRequest {
    pub sender: String,
    pub recipient: String,
    pub selections: Vec<TokenSelection>,
    pub balances: Vec<BalanceQueryResult>,
}
