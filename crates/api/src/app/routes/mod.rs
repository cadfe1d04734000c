use axum::Router;

pub mod shows;
pub mod system;

/// Router for all inventory endpoints.
pub fn router() -> Router {
    Router::new().merge(shows::router())
}
