use ct_hosting::Lobby;
use actix_web::HttpRequest;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;
use std::sync::Arc;

/// WebSocket upgrade into the named room. Any name is a valid room; the
/// lobby creates it on first entry.
pub async fn enter(
    lobby: web::Data<Arc<Lobby>>,
    path: web::Path<String>,
    body: web::Payload,
    req: HttpRequest,
) -> impl Responder {
    let room = path.into_inner();
    log::info!("connection entering room {}", room);
    match actix_ws::handle(&req, body) {
        Ok((response, session, stream)) => match lobby.bridge(&room, session, stream).await {
            Ok(()) => response.map_into_left_body(),
            Err(e) => HttpResponse::NotFound()
                .body(e.to_string())
                .map_into_right_body(),
        },
        Err(e) => HttpResponse::InternalServerError()
            .body(e.to_string())
            .map_into_right_body(),
    }
}
