mod services;
mod store;

use crate::store::state::StoreState;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::info;
use mime_guess::from_path;
use std::thread;
use std::time::Duration;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

/// Serves the compiled frontend from the embedded bundle. Unknown paths
/// fall back to `index.html` so the single-page app owns its routing.
async fn serve_frontend(req: HttpRequest) -> HttpResponse {
    let trimmed = req.path().trim_start_matches('/');
    let candidate = if trimmed.is_empty() { "index.html" } else { trimmed };

    let file = STATIC_DIR
        .get_file(candidate)
        .or_else(|| STATIC_DIR.get_file("index.html"));
    match file {
        Some(file) => {
            let mime = from_path(file.path()).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => HttpResponse::NotFound().body("frontend bundle not built"),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let host = "127.0.0.1";
    let port = 8080;
    let url = format!("http://{}:{}", host, port);

    {
        let _url_clone = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            let _ = webbrowser::open(&_url_clone);
        });
    }

    let store = StoreState::local();
    info!(
        "Survey log: {} / metrics document: {}",
        store.survey_path.display(),
        store.metrics_path.display()
    );
    info!("Server running at {}", url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::JsonConfig::default().limit(64 * 1024))
            .app_data(web::Data::new(store.clone()))
            .service(services::survey::configure_routes())
            .service(services::metrics::configure_routes())
            .default_service(web::route().to(serve_frontend))
    })
    .bind((host, port))?
    .run()
    .await
}
