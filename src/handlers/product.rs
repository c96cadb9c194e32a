// src/handlers/product.rs
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use tracing::{error, instrument};

use crate::domain;
use crate::dtos::product::{
    CreateProductRequest, EstimateQuery, EstimateResponse, ProductResponse, UpdateProductRequest,
};
use crate::error::AppError;
use crate::models::product::Product;
use crate::state::AppState;

const PRODUCT_COLUMNS: &str = "id, serial_number, name,
       cost_price::FLOAT8     AS cost_price,
       shipping_cost::FLOAT8  AS shipping_cost,
       sales_fee::FLOAT8      AS sales_fee,
       selling_price::FLOAT8  AS selling_price,
       created_at, updated_at";

// GET /products - List all products, ordered by name
#[instrument(skip(state))]
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductResponse>>, AppError> {
    let query = format!("SELECT {PRODUCT_COLUMNS} FROM products ORDER BY name");
    match sqlx::query_as::<_, Product>(&query)
        .fetch_all(&state.db_pool)
        .await
    {
        Ok(products) => {
            let response = products.into_iter().map(ProductResponse::from).collect();
            Ok(Json(response))
        }
        Err(e) => {
            error!(?e, "Failed to fetch products");
            Err(e.into())
        }
    }
}

// GET /products/:id - Get single product
#[instrument(skip(state), fields(id))]
pub async fn get_product(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<ProductResponse>, AppError> {
    let query = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1");
    let product = sqlx::query_as::<_, Product>(&query)
        .bind(id)
        .fetch_optional(&state.db_pool)
        .await?
        .ok_or_else(|| AppError::not_found("Product not found"))?;

    Ok(Json(ProductResponse::from(product)))
}

// GET /products/estimate - Live unit-profit preview for the product form.
// Nothing is persisted.
#[instrument]
pub async fn estimate_profit(
    Query(params): Query<EstimateQuery>,
) -> Json<EstimateResponse> {
    let estimated_unit_profit = domain::estimated_unit_profit(
        params.cost_price,
        params.shipping_cost,
        params.sales_fee,
        params.selling_price,
    );
    Json(EstimateResponse { estimated_unit_profit })
}

// POST /products - Create new product
#[instrument(skip(state, payload))]
pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<ProductResponse>), AppError> {
    payload.validate()?;

    let query = format!(
        "INSERT INTO products (serial_number, name, cost_price, shipping_cost, sales_fee, selling_price)
         VALUES ($1, $2, $3, $4, $5, $6)
         RETURNING {PRODUCT_COLUMNS}"
    );
    let product = sqlx::query_as::<_, Product>(&query)
        .bind(payload.serial_number.trim())
        .bind(payload.name.trim())
        .bind(payload.cost_price)
        .bind(payload.shipping_cost)
        .bind(payload.sales_fee)
        .bind(payload.selling_price)
        .fetch_one(&state.db_pool)
        .await?;

    Ok((StatusCode::CREATED, Json(ProductResponse::from(product))))
}

// PUT /products/:id - Full-field update; refreshes updated_at
#[instrument(skip(state, payload), fields(id))]
pub async fn update_product(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateProductRequest>,
) -> Result<Json<ProductResponse>, AppError> {
    payload.validate()?;

    let query = format!(
        "UPDATE products SET
         serial_number = $1,
         name = $2,
         cost_price = $3,
         shipping_cost = $4,
         sales_fee = $5,
         selling_price = $6,
         updated_at = NOW()
         WHERE id = $7
         RETURNING {PRODUCT_COLUMNS}"
    );
    let product = sqlx::query_as::<_, Product>(&query)
        .bind(payload.serial_number.trim())
        .bind(payload.name.trim())
        .bind(payload.cost_price)
        .bind(payload.shipping_cost)
        .bind(payload.sales_fee)
        .bind(payload.selling_price)
        .bind(id)
        .fetch_optional(&state.db_pool)
        .await?
        .ok_or_else(|| AppError::not_found("Product not found"))?;

    Ok(Json(ProductResponse::from(product)))
}

// DELETE /products/:id - Delete product. Sales referencing it are kept and
// fall back to a "Product ID: <id>" label when listed.
#[instrument(skip(state), fields(id))]
pub async fn delete_product(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<()>, AppError> {
    let result = sqlx::query("DELETE FROM products WHERE id = $1")
        .bind(id)
        .execute(&state.db_pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::not_found("Product not found"));
    }

    Ok(Json(()))
}
