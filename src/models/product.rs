use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct Product {
    pub id: i64,
    pub serial_number: String,
    pub name: String,
    pub cost_price: f64,
    pub shipping_cost: f64,
    pub sales_fee: f64,
    pub selling_price: f64,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}
