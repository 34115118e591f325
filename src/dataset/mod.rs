//! Dataset subsystem for orderdesk
//!
//! Holds the fixed, ordered collection of orders the engine queries.
//!
//! # Invariants
//!
//! - `orderId` is unique across the dataset
//! - The dataset never changes after construction
//! - Insertion order is the default row order

mod errors;
mod order;
mod sample;

use std::collections::HashSet;
use std::fs;
use std::path::Path;

pub use errors::{DatasetError, DatasetResult};
pub use order::{Order, User};

use crate::observability::Event;

/// Immutable, validated collection of orders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    orders: Vec<Order>,
}

impl Dataset {
    /// Builds a dataset, rejecting duplicate order IDs
    pub fn new(orders: Vec<Order>) -> DatasetResult<Self> {
        let mut seen = HashSet::with_capacity(orders.len());
        for order in &orders {
            if !seen.insert(order.order_id.as_str()) {
                return Err(DatasetError::DuplicateOrderId(order.order_id.clone()));
            }
        }
        Ok(Self { orders })
    }

    /// The 41 orders shipped with the dashboard
    pub fn sample() -> Self {
        Self {
            orders: sample::sample_orders(),
        }
    }

    /// Parses a JSON array of orders
    pub fn from_json_str(json: &str) -> DatasetResult<Self> {
        let orders: Vec<Order> = serde_json::from_str(json)?;
        Self::new(orders)
    }

    /// Loads a JSON array of orders from disk
    pub fn from_json_file(path: &Path) -> DatasetResult<Self> {
        let content = fs::read_to_string(path)?;
        let dataset = Self::from_json_str(&content)?;
        tracing::info!(
            event = %Event::DatasetLoaded,
            path = %path.display(),
            orders = dataset.len(),
            "dataset loaded"
        );
        Ok(dataset)
    }

    /// Orders in insertion order
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Looks up an order by ID
    pub fn get(&self, order_id: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.order_id == order_id)
    }

    /// Returns the number of orders
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Returns true if the dataset has no orders
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

impl Default for Dataset {
    fn default() -> Self {
        Self::sample()
    }
}
