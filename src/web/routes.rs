// src/web/routes.rs

use actix_web::web;

use crate::web::handlers::{product_handlers, ui_handlers};

async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

/// Called from `main.rs` to configure services for the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    // Embedded front-end
    .route("/", web::get().to(ui_handlers::index_handler))
    .route("/assets/app.css", web::get().to(ui_handlers::app_css_handler))
    .route("/assets/app.js", web::get().to(ui_handlers::app_js_handler))
    // REST surface
    .service(
      web::scope("/api")
        .route("/health", web::get().to(health_check_handler))
        .service(
          web::scope("/products")
            // "/categories" must be registered ahead of "/{product_id}"
            .route("/categories", web::get().to(product_handlers::list_categories_handler))
            .route("", web::get().to(product_handlers::list_products_handler))
            .route("", web::post().to(product_handlers::create_product_handler))
            .route("/{product_id}", web::get().to(product_handlers::get_product_handler))
            .route("/{product_id}", web::put().to(product_handlers::update_product_handler))
            .route(
              "/{product_id}",
              web::delete().to(product_handlers::delete_product_handler),
            ),
        ),
    );
}
