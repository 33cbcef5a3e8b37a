//! Shared fixtures for integration tests.
//!
//! Provides a small transaction export (six CSV files) and row builders.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use shopmetrics::model::{timestamp, Order, OrderItem, OrderStatus, Review, SalesRow};

pub const ORDERS_CSV: &str = "\
order_id,customer_id,order_status,order_purchase_timestamp,order_approved_at,order_delivered_carrier_date,order_delivered_customer_date,order_estimated_delivery_date
o-2301,c1,delivered,2023-01-04 10:15:00,2023-01-04 10:30:00,2023-01-05 08:00:00,2023-01-06 16:00:00,2023-01-15 00:00:00
o-2302,c2,delivered,2023-01-20 14:00:00,2023-01-20 14:10:00,2023-01-22 09:00:00,2023-01-27 11:00:00,2023-02-03 00:00:00
o-2303,c3,delivered,2023-02-11 09:45:00,2023-02-11 10:00:00,2023-02-13 12:00:00,2023-02-28 18:00:00,2023-02-25 00:00:00
o-2304,c1,canceled,2023-02-14 19:00:00,,,,2023-02-28 00:00:00
o-2305,c4,shipped,2023-03-02 08:00:00,2023-03-02 08:05:00,2023-03-03 10:00:00,,2023-03-14 00:00:00
o-2201,c2,delivered,2022-01-09 12:00:00,2022-01-09 12:20:00,2022-01-10 09:00:00,2022-01-19 15:00:00,2022-01-25 00:00:00
o-2202,c3,delivered,2022-02-17 16:30:00,2022-02-17 16:40:00,2022-02-18 10:00:00,2022-02-20 10:00:00,2022-03-01 00:00:00
";

pub const ORDER_ITEMS_CSV: &str = "\
order_id,order_item_id,product_id,seller_id,shipping_limit_date,price,freight_value
o-2301,1,p-phone,s1,2023-01-06 00:00:00,400.00,15.00
o-2301,2,p-case,s1,2023-01-06 00:00:00,25.00,3.00
o-2302,1,p-novel,s2,2023-01-22 00:00:00,18.50,4.00
o-2303,1,p-phone,s1,2023-02-13 00:00:00,380.00,15.00
o-2304,1,p-lamp,s3,2023-02-16 00:00:00,60.00,8.00
o-2305,1,p-lamp,s3,2023-03-04 00:00:00,60.00,8.00
o-2201,1,p-phone,s1,2022-01-11 00:00:00,350.00,15.00
o-2202,1,p-novel,s2,2022-02-19 00:00:00,16.50,4.00
o-9999,1,p-phone,s1,2023-01-01 00:00:00,10000.00,0.00
";

pub const PRODUCTS_CSV: &str = "\
product_id,product_category_name,product_name_length,product_description_length,product_photos_qty,product_weight_g,product_length_cm,product_height_cm,product_width_cm
p-phone,electronics,42,800,4,300,15,2,8
p-case,accessories,20,150,1,50,16,2,9
p-novel,books,35,400,1,400,20,3,14
p-lamp,home,28,220,2,1500,30,45,30
";

pub const CUSTOMERS_CSV: &str = "\
customer_id,customer_unique_id,customer_zip_code_prefix,customer_city,customer_state
c1,u1,90001,los angeles,CA
c2,u2,10001,new york,NY
c3,u3,73301,austin,TX
c4,u4,60601,chicago,IL
";

pub const REVIEWS_CSV: &str = "\
review_id,order_id,review_score,review_comment_title,review_comment_message,review_creation_date,review_answer_timestamp
r1,o-2301,5,,fast and fine,2023-01-07 00:00:00,2023-01-08 10:00:00
r2,o-2302,4,,,2023-01-28 00:00:00,
r3,o-2303,1,late,arrived after estimate,2023-03-01 00:00:00,2023-03-02 09:00:00
r4,o-2201,3,,,2022-01-20 00:00:00,
";

pub const PAYMENTS_CSV: &str = "\
order_id,payment_sequential,payment_type,payment_installments,payment_value
o-2301,1,credit_card,4,443.00
o-2302,1,debit_card,1,22.50
o-2303,1,credit_card,2,395.00
o-2304,1,voucher,1,68.00
";

/// Write the fixture export into `dir`.
pub fn write_dataset_dir(dir: &Path) {
    fs::write(dir.join("orders_dataset.csv"), ORDERS_CSV).unwrap();
    fs::write(dir.join("order_items_dataset.csv"), ORDER_ITEMS_CSV).unwrap();
    fs::write(dir.join("products_dataset.csv"), PRODUCTS_CSV).unwrap();
    fs::write(dir.join("customers_dataset.csv"), CUSTOMERS_CSV).unwrap();
    fs::write(dir.join("order_reviews_dataset.csv"), REVIEWS_CSV).unwrap();
    fs::write(dir.join("order_payments_dataset.csv"), PAYMENTS_CSV).unwrap();
}

pub fn ts(value: &str) -> chrono::NaiveDateTime {
    timestamp::parse(value).expect("valid timestamp literal")
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

pub fn review(order_id: &str, score: u8) -> Review {
    Review {
        review_id: None,
        order_id: order_id.to_string(),
        review_score: score,
        review_creation_date: None,
    }
}

pub fn sales_row(order_id: &str, status: OrderStatus, purchased: &str, price: f64) -> SalesRow {
    SalesRow::from_parts(&order(order_id, status, purchased), &item(order_id, "p-1", price))
}

pub fn approx_eq(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < 1e-9
}
