//! Backend server for the card table.
//!
//! One actix-web application: a health probe plus the WebSocket entry
//! point. Everything stateful lives behind the shared [`ct_hosting::Lobby`].

pub mod handlers;

use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::Responder;
use actix_web::middleware::Logger;
use actix_web::web;
use ct_core::Geometry;
use ct_gameroom::TickConfig;
use ct_hosting::Lobby;
use std::sync::Arc;

async fn health() -> impl Responder {
    HttpResponse::Ok().body("ok")
}

pub async fn run() -> Result<(), std::io::Error> {
    let lobby = web::Data::new(Arc::new(Lobby::new(Geometry::default(), TickConfig::default())));
    log::info!("starting card table server");
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::new("%r %s %Ts"))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .app_data(lobby.clone())
            .route("/health", web::get().to(health))
            .service(web::scope("/room").route("/{room_id}", web::get().to(handlers::enter)))
    })
    .workers(6)
    .bind(std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:1999".to_string()))?
    .run()
    .await
}
