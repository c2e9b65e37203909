use actix_web::web;

pub mod games;
pub mod health;

/// Register every route. `main.rs` and the test app builder share this, so
/// tests exercise exactly the production paths.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(health::root));

    // Health check: /health
    cfg.service(web::scope("/health").configure(health::configure_routes));

    // Game sessions: /gamestates/**
    cfg.service(web::scope("/gamestates").configure(games::configure_routes));
}
