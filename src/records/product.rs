// Product records and queries
// Author: Gabriel Demetrios Lafis

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::query::{
    average, filter_records, group_and_aggregate, join_to_string, sorted_desc_by_key,
    AvgAggregator, SumAggregator,
};

/// A product in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub stock: i64,
}

impl Product {
    /// Create a new product
    pub fn new(name: &str, category: &str, price: f64, stock: i64) -> Self {
        Product {
            name: name.to_string(),
            category: category.to_string(),
            price,
            stock,
        }
    }
}

/// Products priced strictly above the threshold, most expensive first
pub fn products_priced_over(products: &[Product], threshold: f64) -> Vec<Product> {
    let expensive = filter_records(products, |p| p.price > threshold);
    sorted_desc_by_key(&expensive, |p| p.price)
}

/// Total units in stock per category
pub fn stock_by_category(products: &[Product]) -> HashMap<String, i64> {
    group_and_aggregate(
        products,
        |p| p.category.clone(),
        &SumAggregator::new(|p: &Product| p.stock),
    )
}

/// All products as a single `"name:price"` listing joined with `" ; "`
pub fn name_price_listing(products: &[Product]) -> String {
    join_to_string(products, |p| format!("{}:{:.2}", p.name, p.price), " ; ")
}

/// Mean price across all products, or `None` when the catalog is empty
pub fn average_price(products: &[Product]) -> Option<f64> {
    average(products, |p| p.price)
}

/// Mean price per category
pub fn average_price_by_category(products: &[Product]) -> HashMap<String, f64> {
    group_and_aggregate(
        products,
        |p| p.category.clone(),
        &AvgAggregator::new(|p: &Product| p.price),
    )
}

/// Fixed sample data for the demo driver
pub fn sample_products() -> Vec<Product> {
    vec![
        Product::new("Televisor", "Electrónica", 450.0, 5),
        Product::new("Cargador", "Electrónica", 25.0, 50),
        Product::new("Licuadora", "Hogar", 150.0, 10),
        Product::new("Cafetera", "Hogar", 120.0, 4),
        Product::new("Libro Java", "Libros", 80.0, 20),
        Product::new("Auriculares", "Electrónica", 110.0, 15),
    ]
}
