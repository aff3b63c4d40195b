use log::warn;

use crate::{
    errors::CustomError,
    models::token::{BalanceQueryResult, TokenBalance},
    services::amount_service::{decimals_from_number, half, to_display, DEFAULT_DECIMALS},
};

pub struct BalanceService;

impl BalanceService {
    /// Builds a display row for one token: formatted balance plus Half/Max presets.
    pub fn format_balance(result: &BalanceQueryResult) -> Result<TokenBalance, CustomError> {
        let balance = match &result.balance {
            Some(balance) => balance.trim().to_string(),
            None => {
                warn!("Balance query failed for token {}, showing 0", result.address);
                "0".to_string()
            }
        };

        let decimals = match &result.decimals {
            Some(decimals) => decimals_from_number(decimals)?,
            None => {
                warn!(
                    "Token info unavailable for {}, assuming {} decimals",
                    result.address, DEFAULT_DECIMALS
                );
                DEFAULT_DECIMALS
            }
        };

        let formatted_balance = to_display(&balance, decimals)?;
        let half_amount = half(&formatted_balance)?;

        Ok(TokenBalance {
            address: result.address.clone(),
            name: result.name.clone(),
            symbol: result.symbol.clone(),
            balance,
            decimals,
            max_amount: formatted_balance.clone(),
            formatted_balance,
            half_amount,
        })
    }

    /// Formats every token's balance, failing on the first malformed entry.
    pub fn format_balances(
        results: &[BalanceQueryResult],
    ) -> Result<Vec<TokenBalance>, CustomError> {
        results.iter().map(Self::format_balance).collect()
    }
}
