//! Table loader: reads the six transaction exports into typed row-sets.
//!
//! Each dataset lives in a fixed file under the data directory. Extra columns
//! are ignored; a missing file, a missing required column or an unparsable
//! cell fails the whole load.

use std::fmt;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::model::{Customer, Order, OrderItem, Payment, Product, Review};


/// Result type for loader operations.
pub type Result<T> = std::result::Result<T, LoadError>;

/// Errors that can occur while loading datasets.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Dataset file missing: {}", path.display())]
    Missing { path: PathBuf },

    #[error("Dataset file unreadable: {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed record in {} at line {line}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        line: u64,
        #[source]
        source: csv::Error,
    },

    #[error("Invalid value in {} at line {line}: {message}", path.display())]
    InvalidValue {
        path: PathBuf,
        line: u64,
        message: String,
    },
}

impl LoadError {
    fn malformed(path: &Path, source: csv::Error) -> Self {
        let line = source.position().map(|p| p.line()).unwrap_or_default();
        LoadError::Malformed {
            path: path.to_path_buf(),
            line,
            source,
        }
    }
}

/// The named datasets and their file names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatasetKind {
    Orders,
    OrderItems,
    Products,
    Customers,
    Reviews,
    Payments,
}

impl DatasetKind {
    pub const ALL: [DatasetKind; 6] = [
        DatasetKind::Orders,
        DatasetKind::OrderItems,
        DatasetKind::Products,
        DatasetKind::Customers,
        DatasetKind::Reviews,
        DatasetKind::Payments,
    ];

    /// Short dataset name.
    pub fn name(&self) -> &'static str {
        match self {
            DatasetKind::Orders => "orders",
            DatasetKind::OrderItems => "order_items",
            DatasetKind::Products => "products",
            DatasetKind::Customers => "customers",
            DatasetKind::Reviews => "reviews",
            DatasetKind::Payments => "payments",
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            DatasetKind::Orders => "orders_dataset.csv",
            DatasetKind::OrderItems => "order_items_dataset.csv",
            DatasetKind::Products => "products_dataset.csv",
            DatasetKind::Customers => "customers_dataset.csv",
            DatasetKind::Reviews => "order_reviews_dataset.csv",
            DatasetKind::Payments => "order_payments_dataset.csv",
        }
    }

    pub fn path_in(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(self.file_name())
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// All datasets, one row-set per [`DatasetKind`].
#[derive(Debug, Clone, Default)]
pub struct Datasets {
    pub orders: Vec<Order>,
    pub order_items: Vec<OrderItem>,
    pub products: Vec<Product>,
    pub customers: Vec<Customer>,
    pub reviews: Vec<Review>,
    pub payments: Vec<Payment>,
}

impl Datasets {
    pub fn row_count(&self, kind: DatasetKind) -> usize {
        match kind {
            DatasetKind::Orders => self.orders.len(),
            DatasetKind::OrderItems => self.order_items.len(),
            DatasetKind::Products => self.products.len(),
            DatasetKind::Customers => self.customers.len(),
            DatasetKind::Reviews => self.reviews.len(),
            DatasetKind::Payments => self.payments.len(),
        }
    }
}

/// Load every dataset from `data_dir`.
pub fn load_all_datasets(data_dir: impl AsRef<Path>) -> Result<Datasets> {
    let data_dir = data_dir.as_ref();
    info!(data_dir = %data_dir.display(), "loading datasets");

    let datasets = Datasets {
        orders: load_orders(data_dir)?,
        order_items: load_order_items(data_dir)?,
        products: load_products(data_dir)?,
        customers: load_customers(data_dir)?,
        reviews: load_reviews(data_dir)?,
        payments: load_payments(data_dir)?,
    };

    for kind in DatasetKind::ALL {
        info!(dataset = %kind, rows = datasets.row_count(kind), "dataset loaded");
    }
    Ok(datasets)
}

pub fn load_orders(data_dir: &Path) -> Result<Vec<Order>> {
    read_rows(&DatasetKind::Orders.path_in(data_dir), no_checks)
}

pub fn load_order_items(data_dir: &Path) -> Result<Vec<OrderItem>> {
    read_rows(&DatasetKind::OrderItems.path_in(data_dir), |item: &OrderItem| {
        if item.price.is_finite() {
            Ok(())
        } else {
            Err(format!("price must be a finite number, got {}", item.price))
        }
    })
}

pub fn load_products(data_dir: &Path) -> Result<Vec<Product>> {
    read_rows(&DatasetKind::Products.path_in(data_dir), no_checks)
}

pub fn load_customers(data_dir: &Path) -> Result<Vec<Customer>> {
    read_rows(&DatasetKind::Customers.path_in(data_dir), no_checks)
}

pub fn load_reviews(data_dir: &Path) -> Result<Vec<Review>> {
    read_rows(&DatasetKind::Reviews.path_in(data_dir), |review: &Review| {
        if (1..=5).contains(&review.review_score) {
            Ok(())
        } else {
            Err(format!(
                "review_score must be between 1 and 5, got {}",
                review.review_score
            ))
        }
    })
}

pub fn load_payments(data_dir: &Path) -> Result<Vec<Payment>> {
    read_rows(&DatasetKind::Payments.path_in(data_dir), no_checks)
}

fn no_checks<T>(_: &T) -> std::result::Result<(), String> {
    Ok(())
}

fn open(path: &Path) -> Result<File> {
    if path.is_dir() {
        return Err(LoadError::Unreadable {
            path: path.to_path_buf(),
            source: io::Error::other("path is a directory"),
        });
    }
    File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => LoadError::Missing {
            path: path.to_path_buf(),
        },
        _ => LoadError::Unreadable {
            path: path.to_path_buf(),
            source,
        },
    })
}

/// Read a headed CSV file into rows, running `check` on each row.
fn read_rows<T, F>(path: &Path, check: F) -> Result<Vec<T>>
where
    T: DeserializeOwned,
    F: Fn(&T) -> std::result::Result<(), String>,
{
    debug!(path = %path.display(), "reading dataset");
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(open(path)?);

    let headers = reader
        .headers()
        .map_err(|source| LoadError::malformed(path, source))?
        .clone();

    let mut record = csv::StringRecord::new();
    let mut rows = Vec::new();
    while reader
        .read_record(&mut record)
        .map_err(|source| LoadError::malformed(path, source))?
    {
        let row: T = record
            .deserialize(Some(&headers))
            .map_err(|source| LoadError::malformed(path, source))?;
        if let Err(message) = check(&row) {
            return Err(LoadError::InvalidValue {
                path: path.to_path_buf(),
                line: record.position().map(|p| p.line()).unwrap_or_default(),
                message,
            });
        }
        rows.push(row);
    }
    Ok(rows)
}
