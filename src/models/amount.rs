use serde::{Deserialize, Serialize};
use serde_json::Number;

#[derive(Debug, Deserialize)]
pub struct ToDisplayRequest {
    pub raw_amount: String,
    pub decimals: Number,
}

#[derive(Debug, Deserialize)]
pub struct ToRawRequest {
    pub amount: String,
    pub decimals: Number,
}

#[derive(Debug, Deserialize)]
pub struct HalfRequest {
    pub amount: String,
}

#[derive(Debug, Deserialize)]
pub struct SanitizeRequest {
    pub input: String,
    pub max: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AmountResponse {
    pub amount: String,
}

#[derive(Debug, Deserialize)]
pub struct RecipientRequest {
    pub recipient: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RecipientResponse {
    pub recipient: String,
    pub valid: bool,
}
