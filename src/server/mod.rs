//! HTTP surface over the point ledger.
//!
//! Public routes read the ledger and register players; routes under
//! `/admin` require the [`ADMIN_HEADER`] to carry the admin password.
mod handlers;
mod request;
mod response;

pub use handlers::*;
pub use request::*;
pub use response::*;

use crate::*;
use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpServer;
use actix_web::middleware::Logger;
use actix_web::web;

/// Registers every route for a book over `S`. The app must provide
/// `web::Data<Book<S>>` and `web::Data<Gate>`.
#[rustfmt::skip]
pub fn routes<S>(cfg: &mut web::ServiceConfig)
where
    S: Store + 'static,
{
    cfg.route("/health",          web::get().to(health))
        .route("/register",       web::post().to(register::<S>))
        .route("/points/{user}",  web::get().to(points::<S>))
        .route("/roster",         web::get().to(roster::<S>))
        .route("/leaderboard",    web::get().to(leaderboard::<S>))
        .route("/stamp",          web::get().to(stamp::<S>))
        .service(
            web::scope("/admin")
                .route("/update", web::post().to(update::<S>))
                .route("/set",    web::post().to(set::<S>))
                .route("/import", web::post().to(import::<S>))
                .route("/export", web::get().to(export::<S>)),
        );
}

pub async fn run(settings: Settings) -> std::io::Result<()> {
    let book = web::Data::new(settings.book());
    let gate = web::Data::new(settings.gate());
    log::info!("starting points server on {}", settings.bind);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::new("%r %s %Ts"))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .app_data(book.clone())
            .app_data(gate.clone())
            .configure(routes::<Disk>)
    })
    .bind(settings.bind.as_str())?
    .run()
    .await
}
