// src/dtos/dashboard.rs
use serde::Serialize;

use crate::dtos::sale::{SaleResponse, SalesSummary};

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub product_count: i64,
    pub totals: SalesSummary,
    pub recent_sales: Vec<SaleResponse>,
}
