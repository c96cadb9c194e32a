// src/domain.rs
//
// Pure monetary calculations shared by the product and sale handlers.
// Nothing here touches the database or mutates its inputs.

use crate::models::product::Product;
use crate::models::sale::Sale;

/// Revenue/profit pair for a single prospective or recorded sale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaleFigures {
    pub total_revenue: f64,
    pub profit: f64,
}

/// Running totals over a collection of sales.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SalesTotals {
    pub total_revenue: f64,
    pub total_profit: f64,
    pub count: usize,
}

/// Profit a single unit would earn at the given price breakdown. Shown live
/// while composing a new product; never stored.
pub fn estimated_unit_profit(
    cost_price: f64,
    shipping_cost: f64,
    sales_fee: f64,
    selling_price: f64,
) -> f64 {
    selling_price - (cost_price + shipping_cost + sales_fee)
}

/// Revenue and profit for selling `quantity` units of `product`.
///
/// A missing product yields zeroed figures rather than an error: a sale can
/// outlive its product, and the caller records it with zero values instead
/// of failing.
pub fn compute_sale(product: Option<&Product>, quantity: i32) -> SaleFigures {
    let Some(product) = product else {
        return SaleFigures { total_revenue: 0.0, profit: 0.0 };
    };

    let quantity = f64::from(quantity);
    let total_revenue = product.selling_price * quantity;
    let total_cost = (product.cost_price + product.shipping_cost + product.sales_fee) * quantity;

    SaleFigures {
        total_revenue,
        profit: total_revenue - total_cost,
    }
}

/// Sums the stored revenue/profit snapshots over `sales`. Empty input gives
/// an all-zero result.
pub fn aggregate<'a, I>(sales: I) -> SalesTotals
where
    I: IntoIterator<Item = &'a Sale>,
{
    let mut totals = SalesTotals { total_revenue: 0.0, total_profit: 0.0, count: 0 };
    for sale in sales {
        totals.total_revenue += sale.total_revenue;
        totals.total_profit += sale.profit;
        totals.count += 1;
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn product(cost: f64, shipping: f64, fee: f64, selling: f64) -> Product {
        Product {
            id: 1,
            serial_number: "SN-001".to_string(),
            name: "Widget".to_string(),
            cost_price: cost,
            shipping_cost: shipping,
            sales_fee: fee,
            selling_price: selling,
            created_at: None,
            updated_at: None,
        }
    }

    fn sale(id: i64, revenue: f64, profit: f64) -> Sale {
        Sale {
            id,
            product_id: 1,
            quantity_sold: 1,
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            total_revenue: revenue,
            profit,
            created_at: None,
        }
    }

    #[test]
    fn unit_profit_subtracts_all_cost_components() {
        assert_eq!(estimated_unit_profit(5.0, 2.0, 1.0, 20.0), 12.0);
        assert_eq!(estimated_unit_profit(0.0, 0.0, 0.0, 0.0), 0.0);
        // Selling below cost gives a negative estimate, not an error
        assert_eq!(estimated_unit_profit(10.0, 1.0, 1.0, 5.0), -7.0);
    }

    #[test]
    fn compute_sale_concrete_scenario() {
        // cost 5 + shipping 2 + fee 1, selling 20, quantity 3
        let p = product(5.0, 2.0, 1.0, 20.0);
        let figures = compute_sale(Some(&p), 3);
        assert_eq!(figures.total_revenue, 60.0);
        assert_eq!(figures.profit, 36.0);
    }

    #[test]
    fn compute_sale_matches_definition() {
        let p = product(3.25, 0.75, 1.10, 12.40);
        let q = 7;
        let figures = compute_sale(Some(&p), q);
        assert_eq!(figures.total_revenue, p.selling_price * f64::from(q));
        let total_cost = (p.cost_price + p.shipping_cost + p.sales_fee) * f64::from(q);
        assert_eq!(figures.profit, figures.total_revenue - total_cost);
    }

    #[test]
    fn compute_sale_missing_product_is_zero_fallback() {
        for q in [1, 5, 1000] {
            let figures = compute_sale(None, q);
            assert_eq!(figures.total_revenue, 0.0);
            assert_eq!(figures.profit, 0.0);
        }
    }

    #[test]
    fn compute_sale_is_deterministic() {
        let p = product(5.0, 2.0, 1.0, 20.0);
        assert_eq!(compute_sale(Some(&p), 3), compute_sale(Some(&p), 3));
    }

    #[test]
    fn aggregate_empty_is_zero() {
        let sales: Vec<Sale> = Vec::new();
        let totals = aggregate(&sales);
        assert_eq!(totals.total_revenue, 0.0);
        assert_eq!(totals.total_profit, 0.0);
        assert_eq!(totals.count, 0);
    }

    #[test]
    fn aggregate_sums_snapshots() {
        let sales = [sale(1, 50.0, 10.50), sale(2, 30.0, -2.25)];
        let totals = aggregate(&sales);
        assert_eq!(totals.total_revenue, 80.0);
        assert_eq!(totals.total_profit, 8.25);
        assert_eq!(totals.count, 2);
    }

    #[test]
    fn aggregate_is_order_independent() {
        let a = [sale(1, 10.0, 2.5), sale(2, 20.0, -1.0), sale(3, 5.0, 0.75)];
        let b = [a[2].clone(), a[0].clone(), a[1].clone()];
        assert_eq!(aggregate(&a), aggregate(&b));
    }
}
