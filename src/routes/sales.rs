use axum::{
    routing::{delete, get},
    Router,
};
use crate::handlers::sale::{create_sale, delete_sale, list_sales};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/sales", get(list_sales).post(create_sale))
        .route("/sales/{id}", delete(delete_sale))
}
