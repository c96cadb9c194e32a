pub mod dashboard;
pub mod products;
pub mod sales;

use axum::Router;
use crate::state::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(products::routes())
        .merge(sales::routes())
        .merge(dashboard::routes())
}
