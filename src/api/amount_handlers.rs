use actix_web::{post, web, HttpResponse};

use crate::{
    errors::CustomError,
    models::{
        amount::{
            AmountResponse, HalfRequest, RecipientRequest, RecipientResponse, SanitizeRequest,
            ToDisplayRequest, ToRawRequest,
        },
        api_response::success_response,
        token::BalanceQueryResult,
    },
    services::{
        amount_service::{decimals_from_number, half, sanitize_amount_input, to_display, to_raw},
        balance_service::BalanceService,
        transfer_service::is_valid_recipient,
    },
};

#[post("/balances/format")]
async fn format_balances(req: web::Json<Vec<BalanceQueryResult>>) -> Result<HttpResponse, CustomError> {
    let rows = BalanceService::format_balances(&req)?;
    Ok(success_response(rows))
}

#[post("/amounts/to-display")]
async fn amount_to_display(req: web::Json<ToDisplayRequest>) -> Result<HttpResponse, CustomError> {
    let decimals = decimals_from_number(&req.decimals)?;
    let amount = to_display(&req.raw_amount, decimals)?;
    Ok(success_response(AmountResponse { amount }))
}

#[post("/amounts/to-raw")]
async fn amount_to_raw(req: web::Json<ToRawRequest>) -> Result<HttpResponse, CustomError> {
    let decimals = decimals_from_number(&req.decimals)?;
    let amount = to_raw(&req.amount, decimals)?;
    Ok(success_response(AmountResponse { amount }))
}

#[post("/amounts/half")]
async fn amount_half(req: web::Json<HalfRequest>) -> Result<HttpResponse, CustomError> {
    let amount = half(&req.amount)?;
    Ok(success_response(AmountResponse { amount }))
}

#[post("/amounts/sanitize")]
async fn sanitize_amount(req: web::Json<SanitizeRequest>) -> Result<HttpResponse, CustomError> {
    let amount = sanitize_amount_input(&req.input, &req.max)?;
    Ok(success_response(AmountResponse { amount }))
}

#[post("/recipients/validate")]
async fn validate_recipient(req: web::Json<RecipientRequest>) -> HttpResponse {
    success_response(RecipientResponse {
        valid: is_valid_recipient(&req.recipient),
        recipient: req.recipient.trim().to_string(),
    })
}
