// food_app/src/web/routes.rs

use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::web::handlers::{cart_handlers, product_handlers};

async fn health_check_handler() -> HttpResponse {
  HttpResponse::Ok().json(json!({ "status": "ok", "message": "Food App API running" }))
}

// Called in `main.rs` (and by the HTTP tests) to configure services for the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .route("/", web::get().to(health_check_handler))
    .service(
      web::scope("/api")
        .route("/products", web::get().to(product_handlers::list_products_handler))
        .service(
          web::scope("/cart")
            .route("", web::get().to(cart_handlers::get_cart_handler))
            .route("/add", web::post().to(cart_handlers::add_to_cart_handler)),
        ),
    );
}
