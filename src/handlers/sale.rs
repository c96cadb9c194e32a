// src/handlers/sale.rs
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use tracing::{error, instrument};

use crate::domain;
use crate::dtos::sale::{CreateSaleRequest, SaleListQuery, SaleListResponse, SaleResponse};
use crate::error::AppError;
use crate::models::product::Product;
use crate::models::sale::{Sale, SaleWithProduct};
use crate::state::AppState;

const SALE_COLUMNS: &str = "id, product_id, quantity_sold, date,
       total_revenue::FLOAT8 AS total_revenue,
       profit::FLOAT8        AS profit,
       created_at";

// Sale rows joined with the product name for display. The join is LEFT so
// sales survive the deletion of their product.
const SALES_WITH_PRODUCT: &str = "SELECT s.id, s.product_id, s.quantity_sold, s.date,
       s.total_revenue::FLOAT8 AS total_revenue,
       s.profit::FLOAT8        AS profit,
       s.created_at,
       p.name AS product_name
FROM sales s
LEFT JOIN products p ON p.id = s.product_id";

const SALES_ORDER: &str = "ORDER BY s.date DESC, s.id DESC";

// GET /sales - List sales, newest first, with optional exact-date filter
// and limit. The summary aggregates the filtered rows.
#[instrument(skip(state))]
pub async fn list_sales(
    State(state): State<AppState>,
    Query(params): Query<SaleListQuery>,
) -> Result<Json<SaleListResponse>, AppError> {
    if matches!(params.limit, Some(limit) if limit <= 0) {
        return Err(AppError::validation("limit must be a positive integer"));
    }

    let rows = match (params.date, params.limit) {
        (Some(date), Some(limit)) => {
            let query = format!("{SALES_WITH_PRODUCT} WHERE s.date = $1 {SALES_ORDER} LIMIT $2");
            sqlx::query_as::<_, SaleWithProduct>(&query)
                .bind(date)
                .bind(limit)
                .fetch_all(&state.db_pool)
                .await
        }
        (Some(date), None) => {
            let query = format!("{SALES_WITH_PRODUCT} WHERE s.date = $1 {SALES_ORDER}");
            sqlx::query_as::<_, SaleWithProduct>(&query)
                .bind(date)
                .fetch_all(&state.db_pool)
                .await
        }
        (None, Some(limit)) => {
            let query = format!("{SALES_WITH_PRODUCT} {SALES_ORDER} LIMIT $1");
            sqlx::query_as::<_, SaleWithProduct>(&query)
                .bind(limit)
                .fetch_all(&state.db_pool)
                .await
        }
        (None, None) => {
            let query = format!("{SALES_WITH_PRODUCT} {SALES_ORDER}");
            sqlx::query_as::<_, SaleWithProduct>(&query)
                .fetch_all(&state.db_pool)
                .await
        }
    };

    let rows = match rows {
        Ok(rows) => rows,
        Err(e) => {
            error!(?e, "Failed to fetch sales");
            return Err(e.into());
        }
    };

    let summary = domain::aggregate(rows.iter().map(|row| &row.sale)).into();
    let sales = rows.into_iter().map(SaleResponse::from).collect();

    Ok(Json(SaleListResponse { summary, sales }))
}

// POST /sales - Record a sale. Revenue and profit are computed here from
// the product's prices at this moment and stored as a snapshot; later
// product edits do not touch existing sale rows.
#[instrument(skip(state, payload))]
pub async fn create_sale(
    State(state): State<AppState>,
    Json(payload): Json<CreateSaleRequest>,
) -> Result<(StatusCode, Json<SaleResponse>), AppError> {
    payload.validate()?;

    let product = sqlx::query_as::<_, Product>(
        "SELECT id, serial_number, name,
                cost_price::FLOAT8     AS cost_price,
                shipping_cost::FLOAT8  AS shipping_cost,
                sales_fee::FLOAT8      AS sales_fee,
                selling_price::FLOAT8  AS selling_price,
                created_at, updated_at
         FROM products WHERE id = $1",
    )
    .bind(payload.product_id)
    .fetch_optional(&state.db_pool)
    .await?;

    // Missing product falls back to zeroed figures instead of failing
    let figures = domain::compute_sale(product.as_ref(), payload.quantity_sold);

    let query = format!(
        "INSERT INTO sales (product_id, quantity_sold, date, total_revenue, profit)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING {SALE_COLUMNS}"
    );
    let sale = sqlx::query_as::<_, Sale>(&query)
        .bind(payload.product_id)
        .bind(payload.quantity_sold)
        .bind(payload.date)
        .bind(figures.total_revenue)
        .bind(figures.profit)
        .fetch_one(&state.db_pool)
        .await?;

    let response = SaleResponse::new(sale, product.map(|p| p.name));
    Ok((StatusCode::CREATED, Json(response)))
}

// DELETE /sales/:id - Delete sale
#[instrument(skip(state), fields(id))]
pub async fn delete_sale(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<()>, AppError> {
    let result = sqlx::query("DELETE FROM sales WHERE id = $1")
        .bind(id)
        .execute(&state.db_pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::not_found("Sale not found"));
    }

    Ok(Json(()))
}
