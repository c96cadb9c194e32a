// src/handlers/dashboard.rs
use axum::{extract::State, Json};
use tracing::instrument;

use crate::domain;
use crate::dtos::dashboard::DashboardResponse;
use crate::error::AppError;
use crate::models::sale::{Sale, SaleWithProduct};
use crate::state::AppState;

const RECENT_SALES_LIMIT: i64 = 5;

// GET /dashboard - Product count, totals over every sale, and the five
// most recent sales.
#[instrument(skip(state))]
pub async fn dashboard(
    State(state): State<AppState>,
) -> Result<Json<DashboardResponse>, AppError> {
    let product_count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM products")
        .fetch_one(&state.db_pool)
        .await?;

    let all_sales = sqlx::query_as::<_, Sale>(
        "SELECT id, product_id, quantity_sold, date,
                total_revenue::FLOAT8 AS total_revenue,
                profit::FLOAT8        AS profit,
                created_at
         FROM sales",
    )
    .fetch_all(&state.db_pool)
    .await?;
    let totals = domain::aggregate(&all_sales).into();

    let recent = sqlx::query_as::<_, SaleWithProduct>(
        "SELECT s.id, s.product_id, s.quantity_sold, s.date,
                s.total_revenue::FLOAT8 AS total_revenue,
                s.profit::FLOAT8        AS profit,
                s.created_at,
                p.name AS product_name
         FROM sales s
         LEFT JOIN products p ON p.id = s.product_id
         ORDER BY s.date DESC, s.id DESC
         LIMIT $1",
    )
    .bind(RECENT_SALES_LIMIT)
    .fetch_all(&state.db_pool)
    .await?;

    Ok(Json(DashboardResponse {
        product_count,
        totals,
        recent_sales: recent.into_iter().map(Into::into).collect(),
    }))
}
