use super::{controllers, middleware, models};
use axum::{
    middleware::from_fn,
    routing::{get, post, Router},
};

#[rustfmt::skip]
pub fn get_routes() -> Router<models::AppState> {
    Router::new()
        .route("/", get(controllers::root))
        .route("/index", get(controllers::root))
        .route("/create", get(controllers::create))
        .route("/_save", post(controllers::save))
        .route("/_update", post(controllers::update))
        .route("/_delete", post(controllers::delete))
        .route("/_clear", post(controllers::clear))
        .route("/_edit", post(controllers::edit))
        .fallback(controllers::not_found)
}

pub fn build_app(state: models::AppState) -> Router {
    get_routes()
        .layer(from_fn(middleware::html_headers))
        .with_state(state)
}
