use super::*;
use crate::*;
use actix_web::HttpRequest;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::http::header;
use actix_web::web;

/// Header carrying the admin password on privileged routes.
pub const ADMIN_HEADER: &str = "x-admin-password";

fn admitted(req: &HttpRequest, gate: &Gate) -> bool {
    req.headers()
        .get(ADMIN_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(|secret| gate.admits(secret))
        .unwrap_or(false)
}

fn failure(e: LedgerError) -> HttpResponse {
    match e {
        LedgerError::Invalid(_) => HttpResponse::BadRequest().body(e.to_string()),
        _ => {
            log::error!("{}", e);
            HttpResponse::InternalServerError().body(e.to_string())
        }
    }
}

fn unauthorized() -> HttpResponse {
    HttpResponse::Unauthorized().body("wrong admin password")
}

fn unknown(user: &str) -> HttpResponse {
    HttpResponse::NotFound().body(format!("{} is not registered", user))
}

pub async fn health() -> impl Responder {
    HttpResponse::Ok().body("ok")
}

pub async fn register<S>(book: web::Data<Book<S>>, req: web::Json<RegisterRequest>) -> impl Responder
where
    S: Store + 'static,
{
    let user = req.user_id.trim();
    match book.register(user) {
        Err(e) => failure(e),
        Ok(false) => HttpResponse::Conflict().body(format!("{} already exists", user)),
        Ok(true) => {
            HttpResponse::Created().json(PointsResponse::from((user.to_string(), 0 as Points)))
        }
    }
}

pub async fn points<S>(book: web::Data<Book<S>>, path: web::Path<String>) -> impl Responder
where
    S: Store + 'static,
{
    let user = path.into_inner();
    match book.get(&user) {
        Err(e) => failure(e),
        Ok(None) => unknown(&user),
        Ok(Some(points)) => HttpResponse::Ok().json(PointsResponse::from((user, points))),
    }
}

pub async fn roster<S>(book: web::Data<Book<S>>) -> impl Responder
where
    S: Store + 'static,
{
    match book.roster() {
        Err(e) => failure(e),
        Ok(users) => HttpResponse::Ok().json(
            users
                .into_iter()
                .map(PointsResponse::from)
                .collect::<Vec<PointsResponse>>(),
        ),
    }
}

pub async fn leaderboard<S>(book: web::Data<Book<S>>) -> impl Responder
where
    S: Store + 'static,
{
    match book.leaderboard().and_then(|rows| Ok((rows, book.stamp()?))) {
        Err(e) => failure(e),
        Ok((rows, updated)) => HttpResponse::Ok().json(BoardResponse { rows, updated }),
    }
}

pub async fn stamp<S>(book: web::Data<Book<S>>) -> impl Responder
where
    S: Store + 'static,
{
    match book.stamp() {
        Err(e) => failure(e),
        Ok(updated) => HttpResponse::Ok().json(StampResponse { updated }),
    }
}

pub async fn update<S>(
    req: HttpRequest,
    book: web::Data<Book<S>>,
    gate: web::Data<Gate>,
    body: web::Json<UpdateRequest>,
) -> impl Responder
where
    S: Store + 'static,
{
    if !admitted(&req, &gate) {
        return unauthorized();
    }
    match book.update(&body.user_id, body.delta) {
        Err(e) => failure(e),
        Ok(None) => unknown(&body.user_id),
        Ok(Some(points)) => {
            HttpResponse::Ok().json(PointsResponse::from((body.user_id.clone(), points)))
        }
    }
}

pub async fn set<S>(
    req: HttpRequest,
    book: web::Data<Book<S>>,
    gate: web::Data<Gate>,
    body: web::Json<SetRequest>,
) -> impl Responder
where
    S: Store + 'static,
{
    if !admitted(&req, &gate) {
        return unauthorized();
    }
    match book.set(&body.user_id, body.points) {
        Err(e) => failure(e),
        Ok(None) => unknown(&body.user_id),
        Ok(Some(points)) => {
            HttpResponse::Ok().json(PointsResponse::from((body.user_id.clone(), points)))
        }
    }
}

pub async fn import<S>(
    req: HttpRequest,
    book: web::Data<Book<S>>,
    gate: web::Data<Gate>,
    body: web::Bytes,
) -> impl Responder
where
    S: Store + 'static,
{
    if !admitted(&req, &gate) {
        return unauthorized();
    }
    match std::str::from_utf8(&body) {
        Err(_) => HttpResponse::BadRequest().body("upload must be UTF-8 JSON"),
        Ok(document) => match book.import(document) {
            Err(e) => failure(e),
            Ok(ledger) => HttpResponse::Ok().json(ImportResponse {
                users: ledger.len(),
            }),
        },
    }
}

pub async fn export<S>(
    req: HttpRequest,
    book: web::Data<Book<S>>,
    gate: web::Data<Gate>,
) -> impl Responder
where
    S: Store + 'static,
{
    if !admitted(&req, &gate) {
        return unauthorized();
    }
    match book.export() {
        Err(e) => failure(e),
        Ok(document) => HttpResponse::Ok()
            .content_type("application/json")
            .insert_header((
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", LEDGER_FILE),
            ))
            .body(document),
    }
}
