//! Row types for the transaction datasets and the derived sales rows.
//!
//! Every dataset is held as a plain `Vec` of one of these rows. Field names
//! match the CSV headers so rows deserialize directly from the exports.

pub mod timestamp;

use std::fmt;

use chrono::{Datelike, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Fulfillment status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Created,
    Approved,
    Invoiced,
    Processing,
    Shipped,
    Delivered,
    Canceled,
    Unavailable,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Created => "created",
            OrderStatus::Approved => "approved",
            OrderStatus::Invoiced => "invoiced",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Canceled => "canceled",
            OrderStatus::Unavailable => "unavailable",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of `orders_dataset.csv`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Order {
    pub order_id: String,
    pub customer_id: String,
    pub order_status: OrderStatus,
    #[serde(deserialize_with = "timestamp::required")]
    pub order_purchase_timestamp: NaiveDateTime,
    #[serde(default, deserialize_with = "timestamp::optional")]
    pub order_approved_at: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "timestamp::optional")]
    pub order_delivered_carrier_date: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "timestamp::optional")]
    pub order_delivered_customer_date: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "timestamp::optional")]
    pub order_estimated_delivery_date: Option<NaiveDateTime>,
}

/// One row of `order_items_dataset.csv`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrderItem {
    pub order_id: String,
    #[serde(default)]
    pub order_item_id: u32,
    pub product_id: String,
    #[serde(default)]
    pub seller_id: Option<String>,
    #[serde(default, deserialize_with = "timestamp::optional")]
    pub shipping_limit_date: Option<NaiveDateTime>,
    pub price: f64,
    #[serde(default)]
    pub freight_value: f64,
}

/// One row of `products_dataset.csv`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    pub product_id: String,
    #[serde(default)]
    pub product_category_name: Option<String>,
}

/// One row of `customers_dataset.csv`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Customer {
    pub customer_id: String,
    #[serde(default)]
    pub customer_unique_id: Option<String>,
    #[serde(default)]
    pub customer_city: Option<String>,
    pub customer_state: String,
}

/// One row of `order_reviews_dataset.csv`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Review {
    #[serde(default)]
    pub review_id: Option<String>,
    pub order_id: String,
    pub review_score: u8,
    #[serde(default, deserialize_with = "timestamp::optional")]
    pub review_creation_date: Option<NaiveDateTime>,
}

/// One row of `order_payments_dataset.csv`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Payment {
    pub order_id: String,
    #[serde(default)]
    pub payment_sequential: Option<u32>,
    #[serde(default)]
    pub payment_type: Option<String>,
    #[serde(default)]
    pub payment_installments: Option<u32>,
    pub payment_value: f64,
}

/// One order line joined with its order.
///
/// `category` and `state` are filled by [`crate::sales::attach_dimensions`];
/// `delivery_days` and `delivery_speed` by [`crate::filters::add_delivery_speed`].
#[derive(Debug, Clone, PartialEq)]
pub struct SalesRow {
    pub order_id: String,
    pub order_item_id: u32,
    pub product_id: String,
    pub customer_id: String,
    pub order_status: OrderStatus,
    pub order_purchase_timestamp: NaiveDateTime,
    pub order_delivered_customer_date: Option<NaiveDateTime>,
    pub price: f64,
    pub freight_value: f64,
    pub category: Option<String>,
    pub state: Option<String>,
    pub delivery_days: Option<i64>,
    pub delivery_speed: Option<String>,
}

impl SalesRow {
    /// Combine an order with one of its items.
    pub fn from_parts(order: &Order, item: &OrderItem) -> Self {
        Self {
            order_id: item.order_id.clone(),
            order_item_id: item.order_item_id,
            product_id: item.product_id.clone(),
            customer_id: order.customer_id.clone(),
            order_status: order.order_status,
            order_purchase_timestamp: order.order_purchase_timestamp,
            order_delivered_customer_date: order.order_delivered_customer_date,
            price: item.price,
            freight_value: item.freight_value,
            category: None,
            state: None,
            delivery_days: None,
            delivery_speed: None,
        }
    }
}

/// Rows that carry order-level identity: usable by the status and period
/// filters and the status distribution.
pub trait OrderRecord {
    fn order_id(&self) -> &str;
    fn order_status(&self) -> OrderStatus;
    fn purchased_at(&self) -> NaiveDateTime;
}

impl OrderRecord for Order {
    fn order_id(&self) -> &str {
        &self.order_id
    }

    fn order_status(&self) -> OrderStatus {
        self.order_status
    }

    fn purchased_at(&self) -> NaiveDateTime {
        self.order_purchase_timestamp
    }
}

impl OrderRecord for SalesRow {
    fn order_id(&self) -> &str {
        &self.order_id
    }

    fn order_status(&self) -> OrderStatus {
        self.order_status
    }

    fn purchased_at(&self) -> NaiveDateTime {
        self.order_purchase_timestamp
    }
}

/// Calendar month key. Orders chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn of(timestamp: NaiveDateTime) -> Self {
        Self {
            year: timestamp.year(),
            month: timestamp.month(),
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}
