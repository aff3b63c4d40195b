use chrono::Utc;
use log::{debug, info};
use uuid::Uuid;

use crate::{
    errors::CustomError,
    models::{
        token::TokenBalance,
        transfer::{Cw20ExecuteMsg, ExecuteMessage, TokenSelection, TransferPlan, TransferRequest},
    },
    services::{
        amount_service::{is_positive_amount, parse_raw, to_display, to_raw},
        network_config::{transfer_fee, ADDRESS_PREFIX, MAX_ADDRESS_LEN, MIN_ADDRESS_LEN, TRANSFER_MEMO},
    },
};

/// Format-only address check: prefix and length, no checksum or existence lookup.
pub fn is_valid_recipient(address: &str) -> bool {
    let address = address.trim();
    !address.is_empty()
        && address.starts_with(ADDRESS_PREFIX)
        && (MIN_ADDRESS_LEN..=MAX_ADDRESS_LEN).contains(&address.chars().count())
}

/// Whether the transfer button should be enabled for the current form state.
pub fn can_submit(selections: &[TokenSelection], recipient: &str) -> bool {
    let any_selected = selections.iter().any(|s| s.selected);
    let any_positive = selections
        .iter()
        .any(|s| s.selected && is_positive_amount(&s.amount));
    let recipient_valid = is_valid_recipient(recipient);

    debug!(
        "Transfer button state: any_selected={} any_positive={} recipient_valid={}",
        any_selected, any_positive, recipient_valid
    );
    any_selected && any_positive && recipient_valid
}

/// Turns the selected rows into transfer requests in base units.
///
/// Rows that are unticked, empty, zero or not a number are skipped, as are amounts
/// that truncate to zero base units. An amount above the token's raw balance is
/// refused; the balance's formatted fields are never consulted.
pub fn build_transfers(
    selections: &[TokenSelection],
    balances: &[TokenBalance],
    recipient: &str,
) -> Result<Vec<TransferRequest>, CustomError> {
    let recipient = recipient.trim();
    if !is_valid_recipient(recipient) {
        return Err(CustomError::InvalidRecipientError(recipient.to_string()));
    }

    let mut transfers = Vec::new();
    for selection in selections
        .iter()
        .filter(|s| s.selected && is_positive_amount(&s.amount))
    {
        let token = balances
            .iter()
            .find(|b| b.address == selection.token_address)
            .ok_or_else(|| CustomError::TokenNotFoundError(selection.token_address.clone()))?;

        let raw_amount = to_raw(&selection.amount, token.decimals)?;
        if parse_raw(&raw_amount)? > parse_raw(&token.balance)? {
            return Err(CustomError::InvalidAmountError(format!(
                "{} exceeds available {} {}",
                selection.amount.trim(),
                to_display(&token.balance, token.decimals)?,
                token.symbol
            )));
        }

        if raw_amount == "0" {
            debug!(
                "Skipping {}: {} is below one base unit",
                token.symbol,
                selection.amount.trim()
            );
            continue;
        }

        transfers.push(TransferRequest {
            token_address: token.address.clone(),
            raw_amount,
            recipient: recipient.to_string(),
        });
    }

    if transfers.is_empty() {
        return Err(CustomError::NoTransfersSelectedError);
    }
    Ok(transfers)
}

pub struct TransferService;

impl TransferService {
    /// Builds the CW20 execute messages and fee for one signing round.
    pub fn build_plan(
        sender: &str,
        selections: &[TokenSelection],
        balances: &[TokenBalance],
        recipient: &str,
    ) -> Result<TransferPlan, CustomError> {
        let sender = sender.trim();
        if !is_valid_recipient(sender) {
            return Err(CustomError::ValidationError(format!(
                "sender {} is not a {} address",
                sender, ADDRESS_PREFIX
            )));
        }

        let transfers = build_transfers(selections, balances, recipient)?;
        let messages = transfers
            .iter()
            .map(|transfer| ExecuteMessage {
                contract: transfer.token_address.clone(),
                msg: Cw20ExecuteMsg::Transfer {
                    recipient: transfer.recipient.clone(),
                    amount: transfer.raw_amount.clone(),
                },
            })
            .collect();

        let plan = TransferPlan {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            sender: sender.to_string(),
            recipient: recipient.trim().to_string(),
            transfers,
            messages,
            fee: transfer_fee(),
            memo: TRANSFER_MEMO.to_string(),
        };

        info!(
            "Built transfer plan {} with {} message(s) to {}",
            plan.id,
            plan.messages.len(),
            plan.recipient
        );
        Ok(plan)
    }
}
