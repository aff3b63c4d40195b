use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{App, HttpServer};
use dotenv::dotenv;
use log::{error, info};

use cw20_transfer_backend::{api, config::Config};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    info!("Listening on {}:{}", config.host, config.port);
    let origins = config.allowed_origins.clone();

    HttpServer::new(move || {
        let cors = origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec![
                header::CONTENT_TYPE,
                header::AUTHORIZATION,
                header::ACCEPT,
            ])
            .supports_credentials();
        App::new()
            .configure(api::config)
            .wrap(cors)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
