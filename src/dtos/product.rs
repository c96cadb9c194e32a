// src/dtos/product.rs
use serde::{Deserialize, Serialize};

use crate::error::{AppError, FieldErrors};
use crate::models::product::Product;

fn check_money(errors: &mut FieldErrors, field: &'static str, value: f64, label: &str) {
    if !value.is_finite() || value < 0.0 {
        errors.insert(field, format!("{label} must be a valid non-negative number"));
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub serial_number: String,
    pub name: String,
    pub cost_price: f64,
    pub shipping_cost: f64,
    pub sales_fee: f64,
    pub selling_price: f64,
}

impl CreateProductRequest {
    /// Field-level validation, run before any insert is attempted.
    pub fn validate(&self) -> Result<(), AppError> {
        let mut errors = FieldErrors::new();

        if self.serial_number.trim().is_empty() {
            errors.insert("serial_number", "Serial number is required".to_string());
        }
        if self.name.trim().is_empty() {
            errors.insert("name", "Product name is required".to_string());
        }
        check_money(&mut errors, "cost_price", self.cost_price, "Cost price");
        check_money(&mut errors, "shipping_cost", self.shipping_cost, "Shipping cost");
        check_money(&mut errors, "sales_fee", self.sales_fee, "Sales fee");
        check_money(&mut errors, "selling_price", self.selling_price, "Selling price");

        if errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::InvalidFields(errors))
        }
    }
}

// Updates replace every field; there is no partial patch.
#[derive(Debug, Deserialize)]
pub struct UpdateProductRequest {
    pub serial_number: String,
    pub name: String,
    pub cost_price: f64,
    pub shipping_cost: f64,
    pub sales_fee: f64,
    pub selling_price: f64,
}

impl UpdateProductRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        // Same rules as creation
        CreateProductRequest {
            serial_number: self.serial_number.clone(),
            name: self.name.clone(),
            cost_price: self.cost_price,
            shipping_cost: self.shipping_cost,
            sales_fee: self.sales_fee,
            selling_price: self.selling_price,
        }
        .validate()
    }
}

/// Query parameters for the live profit estimate shown while composing a
/// product. Blank fields in the form arrive as absent parameters and count
/// as zero.
#[derive(Debug, Deserialize)]
pub struct EstimateQuery {
    #[serde(default)]
    pub cost_price: f64,
    #[serde(default)]
    pub shipping_cost: f64,
    #[serde(default)]
    pub sales_fee: f64,
    #[serde(default)]
    pub selling_price: f64,
}

#[derive(Debug, Serialize)]
pub struct EstimateResponse {
    pub estimated_unit_profit: f64,
}

#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: i64,
    pub serial_number: String,
    pub name: String,
    pub cost_price: f64,
    pub shipping_cost: f64,
    pub sales_fee: f64,
    pub selling_price: f64,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            serial_number: product.serial_number,
            name: product.name,
            cost_price: product.cost_price,
            shipping_cost: product.shipping_cost,
            sales_fee: product.sales_fee,
            selling_price: product.selling_price,
            created_at: product.created_at.map(|dt| dt.to_rfc3339()),
            updated_at: product.updated_at.map(|dt| dt.to_rfc3339()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateProductRequest {
        CreateProductRequest {
            serial_number: "SN-100".to_string(),
            name: "Widget".to_string(),
            cost_price: 5.0,
            shipping_cost: 2.0,
            sales_fee: 1.0,
            selling_price: 20.0,
        }
    }

    #[test]
    fn accepts_valid_product() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn rejects_negative_cost_price() {
        let mut req = valid_request();
        req.cost_price = -1.0;
        match req.validate() {
            Err(AppError::InvalidFields(fields)) => {
                assert!(fields.contains_key("cost_price"));
                assert_eq!(fields.len(), 1);
            }
            other => panic!("expected field errors, got {other:?}"),
        }
    }

    #[test]
    fn rejects_blank_serial_number() {
        let mut req = valid_request();
        req.serial_number = "   ".to_string();
        match req.validate() {
            Err(AppError::InvalidFields(fields)) => {
                assert!(fields.contains_key("serial_number"));
            }
            other => panic!("expected field errors, got {other:?}"),
        }
    }

    #[test]
    fn collects_every_failing_field() {
        let req = CreateProductRequest {
            serial_number: String::new(),
            name: String::new(),
            cost_price: -1.0,
            shipping_cost: -0.5,
            sales_fee: f64::NAN,
            selling_price: -3.0,
        };
        match req.validate() {
            Err(AppError::InvalidFields(fields)) => assert_eq!(fields.len(), 6),
            other => panic!("expected field errors, got {other:?}"),
        }
    }

    #[test]
    fn zero_amounts_are_allowed() {
        let mut req = valid_request();
        req.cost_price = 0.0;
        req.shipping_cost = 0.0;
        req.sales_fee = 0.0;
        req.selling_price = 0.0;
        assert!(req.validate().is_ok());
    }
}
