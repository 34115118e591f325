//! Order records as they appear in the dashboard table

use serde::{Deserialize, Serialize};

/// The person an order belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Display name, searchable and sortable
    pub name: String,
}

/// A single row of the order table.
///
/// Orders are immutable once they enter a [`Dataset`](super::Dataset).
/// `date` is the display string ("Just now", "Feb 2, 2023", ...) and is
/// resolved to an instant only when the executor needs one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique row key, also the selection key
    pub order_id: String,
    /// Owner of the order
    pub user: User,
    /// Project name
    pub project: String,
    /// Delivery address
    pub address: String,
    /// Free-form display date
    pub date: String,
    /// Status label, matched case-insensitively
    pub status: String,
    /// Whether the row renders an external link marker
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_external_link: Option<bool>,
}

impl Order {
    /// Creates an order without an external link marker
    pub fn new(
        order_id: impl Into<String>,
        user_name: impl Into<String>,
        project: impl Into<String>,
        address: impl Into<String>,
        date: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            order_id: order_id.into(),
            user: User {
                name: user_name.into(),
            },
            project: project.into(),
            address: address.into(),
            date: date.into(),
            status: status.into(),
            has_external_link: None,
        }
    }

    /// Returns the order with the external link marker set
    pub fn with_external_link(mut self, has_link: bool) -> Self {
        self.has_external_link = Some(has_link);
        self
    }

    /// Returns the order ID
    pub fn id(&self) -> &str {
        &self.order_id
    }

    /// Returns the user name
    pub fn user_name(&self) -> &str {
        &self.user.name
    }
}
