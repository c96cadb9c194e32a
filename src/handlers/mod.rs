pub mod dashboard;
pub mod product;
pub mod sale;
