// src/dtos/sale.rs
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::SalesTotals;
use crate::error::{AppError, FieldErrors};
use crate::models::sale::{Sale, SaleWithProduct};

#[derive(Debug, Deserialize)]
pub struct CreateSaleRequest {
    pub product_id: i64,
    pub quantity_sold: i32,
    pub date: NaiveDate,
}

impl CreateSaleRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut errors = FieldErrors::new();

        if self.product_id <= 0 {
            errors.insert("product_id", "Please select a product".to_string());
        }
        if self.quantity_sold <= 0 {
            errors.insert("quantity_sold", "Quantity must be a positive number".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::InvalidFields(errors))
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SaleListQuery {
    /// Exact-date filter (YYYY-MM-DD).
    pub date: Option<NaiveDate>,
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct SaleResponse {
    pub id: i64,
    pub product_id: i64,
    pub product_name: String,
    pub quantity_sold: i32,
    pub date: NaiveDate,
    pub total_revenue: f64,
    pub profit: f64,
    pub created_at: Option<DateTime<Utc>>,
}

impl SaleResponse {
    /// Builds the response row, substituting the `Product ID: <id>` label
    /// when the referenced product no longer exists.
    pub fn new(sale: Sale, product_name: Option<String>) -> Self {
        let product_name =
            product_name.unwrap_or_else(|| format!("Product ID: {}", sale.product_id));
        Self {
            id: sale.id,
            product_id: sale.product_id,
            product_name,
            quantity_sold: sale.quantity_sold,
            date: sale.date,
            total_revenue: sale.total_revenue,
            profit: sale.profit,
            created_at: sale.created_at,
        }
    }
}

impl From<SaleWithProduct> for SaleResponse {
    fn from(row: SaleWithProduct) -> Self {
        Self::new(row.sale, row.product_name)
    }
}

#[derive(Debug, Serialize)]
pub struct SalesSummary {
    pub total_revenue: f64,
    pub total_profit: f64,
    pub count: usize,
}

impl From<SalesTotals> for SalesSummary {
    fn from(totals: SalesTotals) -> Self {
        Self {
            total_revenue: totals.total_revenue,
            total_profit: totals.total_profit,
            count: totals.count,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SaleListResponse {
    pub summary: SalesSummary,
    pub sales: Vec<SaleResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sale(product_id: i64) -> Sale {
        Sale {
            id: 1,
            product_id,
            quantity_sold: 2,
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            total_revenue: 40.0,
            profit: 12.0,
            created_at: None,
        }
    }

    #[test]
    fn rejects_zero_quantity() {
        let req = CreateSaleRequest {
            product_id: 1,
            quantity_sold: 0,
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        };
        match req.validate() {
            Err(AppError::InvalidFields(fields)) => {
                assert!(fields.contains_key("quantity_sold"));
            }
            other => panic!("expected field errors, got {other:?}"),
        }
    }

    #[test]
    fn rejects_missing_product_selection() {
        let req = CreateSaleRequest {
            product_id: 0,
            quantity_sold: 1,
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn accepts_positive_quantity() {
        let req = CreateSaleRequest {
            product_id: 3,
            quantity_sold: 1,
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn deleted_product_gets_fallback_label() {
        let response = SaleResponse::new(sale(42), None);
        assert_eq!(response.product_name, "Product ID: 42");
    }

    #[test]
    fn live_product_name_is_used() {
        let response = SaleResponse::new(sale(42), Some("Widget".to_string()));
        assert_eq!(response.product_name, "Widget");
    }
}
