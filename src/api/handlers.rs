use actix_web::{get, post, web, HttpResponse};

use crate::{
    errors::CustomError,
    models::{
        api_response::success_response,
        transfer::{BuildTransfersRequest, TransferCheckRequest, TransferCheckResponse},
    },
    services::{
        balance_service::BalanceService,
        network_config::{get_network_config, get_tokens},
        transfer_service::{can_submit, TransferService},
    },
};

#[get("/network")]
async fn get_network() -> HttpResponse {
    success_response(get_network_config())
}

#[get("/tokens")]
async fn list_tokens() -> HttpResponse {
    success_response(get_tokens())
}

#[post("/transfers/check")]
async fn check_transfer(req: web::Json<TransferCheckRequest>) -> HttpResponse {
    success_response(TransferCheckResponse {
        can_submit: can_submit(&req.selections, &req.recipient),
    })
}

#[post("/transfers/build")]
async fn build_transfer(req: web::Json<BuildTransfersRequest>) -> Result<HttpResponse, CustomError> {
    let balances = BalanceService::format_balances(&req.balances)?;
    let plan = TransferService::build_plan(&req.sender, &req.selections, &balances, &req.recipient)?;
    Ok(success_response(plan))
}
