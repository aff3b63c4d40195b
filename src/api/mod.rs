use actix_web::web;

use crate::errors::CustomError;

mod amount_handlers;
mod handlers;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                CustomError::ValidationError(err.to_string()).into()
            }))
            .service(handlers::get_network)
            .service(handlers::list_tokens)
            .service(handlers::check_transfer)
            .service(handlers::build_transfer)
            .service(amount_handlers::format_balances)
            .service(amount_handlers::amount_to_display)
            .service(amount_handlers::amount_to_raw)
            .service(amount_handlers::amount_half)
            .service(amount_handlers::sanitize_amount)
            .service(amount_handlers::validate_recipient),
    );
}
