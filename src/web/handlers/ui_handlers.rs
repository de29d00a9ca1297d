// src/web/handlers/ui_handlers.rs

use actix_web::HttpResponse;

use crate::web::assets;

pub async fn index_handler() -> HttpResponse {
  HttpResponse::Ok()
    .content_type("text/html; charset=utf-8")
    .body(assets::INDEX_HTML)
}

pub async fn app_css_handler() -> HttpResponse {
  HttpResponse::Ok()
    .content_type("text/css; charset=utf-8")
    .body(assets::APP_CSS)
}

pub async fn app_js_handler() -> HttpResponse {
  HttpResponse::Ok()
    .content_type("application/javascript; charset=utf-8")
    .body(assets::APP_JS)
}
