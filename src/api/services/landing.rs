//! Embedded landing and not-found pages

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use rust_embed::Embed;
use tracing::{trace, warn};

#[derive(Embed)]
#[folder = "assets/"]
struct PageAssets;

fn load_page(name: &str) -> Option<String> {
    match PageAssets::get(name) {
        Some(file) => Some(String::from_utf8_lossy(&file.data).into_owned()),
        None => {
            warn!("Embedded page missing: {}", name);
            None
        }
    }
}

/// GET / , /go and /go/go
pub async fn landing_page() -> HttpResponse {
    trace!("Serving landing page");

    let body = load_page("index.html")
        .unwrap_or_else(|| "<h1>golinks</h1>".to_string())
        .replace("%GOLINKS_VERSION%", env!("CARGO_PKG_VERSION"));

    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}

/// 404 page for unknown shortlinks
///
/// Only well-formed shortlinks are echoed back; anything else is shown
/// without the key so no request text reaches the HTML.
pub fn not_found_page(shortlink: Option<&str>) -> HttpResponse {
    let key = shortlink
        .filter(|s| crate::utils::is_valid_shortlink(s))
        .unwrap_or("");

    let body = load_page("not_found.html")
        .unwrap_or_else(|| "<h1>Not Found</h1>".to_string())
        .replace("%SHORTLINK%", key);

    HttpResponse::build(StatusCode::NOT_FOUND)
        .content_type("text/html; charset=utf-8")
        .body(body)
}
