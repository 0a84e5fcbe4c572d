use std::io;

use actix_web::{web::{self, Data}, App, HttpServer, middleware::Logger};
use tracing::info;
use tracing_subscriber::EnvFilter;

use api::HttpApi;
use config::Config;

mod api;
mod auth;
mod config;
mod controller;
mod data;
mod render;
mod routes;
mod session;
mod view;

#[actix_web::main]
async fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let config = Config::load()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    info!(api = %config.api_url, "listening on {}:{}", config.bind_addr, config.port);

    let api_url = config.api_url.clone();
    let api_timeout = config.api_timeout;
    HttpServer::new(move || {
        App::new()
            .app_data(Data::new(HttpApi::new(&api_url, api_timeout)))
            .configure(routes::configure::<HttpApi>)
            .wrap(Logger::default())
            .default_service(web::to(routes::default_handler))
    })
    .bind((config.bind_addr.as_str(), config.port))?
    .run()
    .await
}
