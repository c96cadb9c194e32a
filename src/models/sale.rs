use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

/// A recorded transaction. `total_revenue` and `profit` are snapshots taken
/// from the referenced product at insert time and are never recomputed.
#[derive(Debug, Clone, FromRow)]
pub struct Sale {
    pub id: i64,
    pub product_id: i64,
    pub quantity_sold: i32,
    pub date: NaiveDate,
    pub total_revenue: f64,
    pub profit: f64,
    pub created_at: Option<DateTime<Utc>>,
}

/// Sale row with the referenced product's name expanded read-only.
/// The name is None when the product has since been deleted.
#[derive(Debug, FromRow)]
pub struct SaleWithProduct {
    #[sqlx(flatten)]
    pub sale: Sale,
    pub product_name: Option<String>,
}
