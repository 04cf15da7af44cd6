//! Dashboard counters

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub categories: u64,
    pub products: u64,
    pub active_products: u64,
    pub announcements: u64,
}
