use axum::{routing::get, Router};
use crate::handlers::dashboard::dashboard;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/dashboard", get(dashboard))
}
