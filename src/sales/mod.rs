//! Sales builder: joins orders and their items into one row per line item.

use std::collections::HashMap;

use tracing::debug;

use crate::model::{Customer, Order, OrderItem, Product, SalesRow};

/// Inner-join `order_items` to `orders` on `order_id`.
///
/// Every item whose order exists yields exactly one row, in item order.
/// Items referencing an unknown order are dropped.
pub fn build_sales_data(orders: &[Order], order_items: &[OrderItem]) -> Vec<SalesRow> {
    let orders_by_id: HashMap<&str, &Order> = orders
        .iter()
        .map(|order| (order.order_id.as_str(), order))
        .collect();

    let rows: Vec<SalesRow> = order_items
        .iter()
        .filter_map(|item| {
            orders_by_id
                .get(item.order_id.as_str())
                .map(|order| SalesRow::from_parts(order, item))
        })
        .collect();

    let orphaned = order_items.len() - rows.len();
    if orphaned > 0 {
        debug!(orphaned, "dropped order items without a matching order");
    }
    debug!(rows = rows.len(), "sales rows built");
    rows
}

/// Fill each row's product category and customer state.
///
/// Rows whose product or customer is unknown keep `None` for that field.
/// Metrics grouped by the field skip such rows.
pub fn attach_dimensions(
    rows: &[SalesRow],
    products: &[Product],
    customers: &[Customer],
) -> Vec<SalesRow> {
    let categories: HashMap<&str, Option<&str>> = products
        .iter()
        .map(|p| (p.product_id.as_str(), p.product_category_name.as_deref()))
        .collect();
    let states: HashMap<&str, &str> = customers
        .iter()
        .map(|c| (c.customer_id.as_str(), c.customer_state.as_str()))
        .collect();

    let mut unmatched_products = 0usize;
    let mut unmatched_customers = 0usize;

    let enriched = rows
        .iter()
        .map(|row| {
            let category = match categories.get(row.product_id.as_str()) {
                Some(category) => category.map(str::to_string),
                None => {
                    unmatched_products += 1;
                    None
                }
            };
            let state = match states.get(row.customer_id.as_str()) {
                Some(state) => Some(state.to_string()),
                None => {
                    unmatched_customers += 1;
                    None
                }
            };
            SalesRow {
                category,
                state,
                ..row.clone()
            }
        })
        .collect();

    if unmatched_products > 0 || unmatched_customers > 0 {
        debug!(
            unmatched_products,
            unmatched_customers, "sales rows without product or customer match"
        );
    }
    enriched
}
