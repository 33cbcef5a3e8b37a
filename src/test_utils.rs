//! Row builders for unit tests.

use chrono::NaiveDateTime;

use crate::model::{Customer, Order, OrderItem, OrderStatus, Payment, Product, Review, SalesRow};
use crate::model::timestamp;

/// Parse a `YYYY-MM-DD HH:MM:SS` literal.
pub fn ts(value: &str) -> NaiveDateTime {
    timestamp::parse(value).expect("valid test timestamp")
}

pub fn order(order_id: &str, status: OrderStatus, purchased: &str) -> Order {
    Order {
        order_id: order_id.to_string(),
        customer_id: format!("c-{}", order_id),
        order_status: status,
        order_purchase_timestamp: ts(purchased),
        order_approved_at: None,
        order_delivered_carrier_date: None,
        order_delivered_customer_date: None,
        order_estimated_delivery_date: None,
    }
}

pub fn delivered_order(order_id: &str, purchased: &str, delivered: &str) -> Order {
    Order {
        order_delivered_customer_date: Some(ts(delivered)),
        ..order(order_id, OrderStatus::Delivered, purchased)
    }
}

pub fn item(order_id: &str, product_id: &str, price: f64) -> OrderItem {
    OrderItem {
        order_id: order_id.to_string(),
        order_item_id: 1,
        product_id: product_id.to_string(),
        seller_id: None,
        shipping_limit_date: None,
        price,
        freight_value: 0.0,
    }
}

pub fn product(product_id: &str, category: &str) -> Product {
    Product {
        product_id: product_id.to_string(),
        product_category_name: Some(category.to_string()),
    }
}

pub fn customer(customer_id: &str, state: &str) -> Customer {
    Customer {
        customer_id: customer_id.to_string(),
        customer_unique_id: None,
        customer_city: None,
        customer_state: state.to_string(),
    }
}

pub fn review(order_id: &str, score: u8) -> Review {
    Review {
        review_id: None,
        order_id: order_id.to_string(),
        review_score: score,
        review_creation_date: None,
    }
}

pub fn payment(order_id: &str, value: f64) -> Payment {
    Payment {
        order_id: order_id.to_string(),
        payment_sequential: Some(1),
        payment_type: Some("credit_card".to_string()),
        payment_installments: Some(1),
        payment_value: value,
    }
}

/// A delivered sales row with no dimensions or delivery speed.
pub fn sales_row(order_id: &str, purchased: &str, price: f64) -> SalesRow {
    SalesRow::from_parts(
        &order(order_id, OrderStatus::Delivered, purchased),
        &item(order_id, "p-1", price),
    )
}

/// Sales row with a status other than delivered.
pub fn sales_row_with_status(
    order_id: &str,
    status: OrderStatus,
    purchased: &str,
    price: f64,
) -> SalesRow {
    SalesRow::from_parts(
        &order(order_id, status, purchased),
        &item(order_id, "p-1", price),
    )
}

/// Sales row that already carries a delivery speed bucket.
pub fn speed_row(order_id: &str, days: i64, bucket: &str, price: f64) -> SalesRow {
    SalesRow {
        delivery_days: Some(days),
        delivery_speed: Some(bucket.to_string()),
        ..sales_row(order_id, "2023-01-01 00:00:00", price)
    }
}

/// Assert two floats are equal within a small tolerance.
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}
