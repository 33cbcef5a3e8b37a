//! Customer experience: reviews, delivery timing, order status, payments.

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::model::{OrderRecord, OrderStatus, Payment, Review, SalesRow};

/// Reviews belonging to orders present in `rows`.
fn relevant_reviews<'a>(
    rows: &[SalesRow],
    reviews: &'a [Review],
) -> impl Iterator<Item = &'a Review> {
    let order_ids: HashSet<String> = rows.iter().map(|row| row.order_id.clone()).collect();
    reviews
        .iter()
        .filter(move |review| order_ids.contains(&review.order_id))
}

fn shares<K: Ord + Copy>(counts: &BTreeMap<K, usize>) -> BTreeMap<K, f64> {
    let total: usize = counts.values().sum();
    if total == 0 {
        return BTreeMap::new();
    }
    counts
        .iter()
        .map(|(key, count)| (*key, *count as f64 / total as f64))
        .collect()
}

/// Count of each review score among the reviews of `rows`' orders.
pub fn calculate_review_score_distribution(
    rows: &[SalesRow],
    reviews: &[Review],
) -> BTreeMap<u8, usize> {
    let mut counts = BTreeMap::new();
    for review in relevant_reviews(rows, reviews) {
        *counts.entry(review.review_score).or_default() += 1;
    }
    counts
}

/// Proportion of each review score; sums to 1 unless empty.
pub fn calculate_review_score_shares(rows: &[SalesRow], reviews: &[Review]) -> BTreeMap<u8, f64> {
    shares(&calculate_review_score_distribution(rows, reviews))
}

/// Mean review score for the orders in `rows`.
pub fn calculate_average_review_score(rows: &[SalesRow], reviews: &[Review]) -> Option<f64> {
    let (sum, count) = relevant_reviews(rows, reviews)
        .fold((0u64, 0usize), |(sum, count), review| {
            (sum + u64::from(review.review_score), count + 1)
        });
    super::mean(sum as f64, count)
}

/// Mean review score per delivery-speed bucket.
///
/// Rows are joined to reviews on `order_id`; an order with several items
/// in the same bucket counts once per distinct score. Rows without a bucket
/// are skipped.
pub fn calculate_delivery_review_correlation(
    rows: &[SalesRow],
    reviews: &[Review],
) -> BTreeMap<String, f64> {
    let mut scores_by_order: HashMap<&str, Vec<u8>> = HashMap::new();
    for review in reviews {
        scores_by_order
            .entry(review.order_id.as_str())
            .or_default()
            .push(review.review_score);
    }

    let mut seen: HashSet<(&str, Option<i64>, &str, u8)> = HashSet::new();
    let mut totals: BTreeMap<&str, (u64, usize)> = BTreeMap::new();
    for row in rows {
        let Some(bucket) = row.delivery_speed.as_deref() else {
            continue;
        };
        let Some(scores) = scores_by_order.get(row.order_id.as_str()) else {
            continue;
        };
        for &score in scores {
            if seen.insert((row.order_id.as_str(), row.delivery_days, bucket, score)) {
                let entry = totals.entry(bucket).or_default();
                entry.0 += u64::from(score);
                entry.1 += 1;
            }
        }
    }

    totals
        .into_iter()
        .filter_map(|(bucket, (sum, count))| {
            super::mean(sum as f64, count).map(|avg| (bucket.to_string(), avg))
        })
        .collect()
}

/// Mean delivery days over rows that have them.
pub fn calculate_average_delivery_time(rows: &[SalesRow]) -> Option<f64> {
    let (sum, count) = rows
        .iter()
        .filter_map(|row| row.delivery_days)
        .fold((0i64, 0usize), |(sum, count), days| (sum + days, count + 1));
    super::mean(sum as f64, count)
}

/// Number of distinct orders per status.
pub fn calculate_order_status_distribution<R: OrderRecord>(
    rows: &[R],
) -> BTreeMap<OrderStatus, usize> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut counts = BTreeMap::new();
    for row in rows {
        if seen.insert(row.order_id()) {
            *counts.entry(row.order_status()).or_default() += 1;
        }
    }
    counts
}

/// Proportion of distinct orders per status.
pub fn calculate_order_status_shares<R: OrderRecord>(rows: &[R]) -> BTreeMap<OrderStatus, f64> {
    shares(&calculate_order_status_distribution(rows))
}

/// Sum of payment values.
pub fn calculate_payment_total(payments: &[Payment]) -> f64 {
    payments
        .iter()
        .fold(0.0, |total, payment| total + payment.payment_value)
}
