//! Public menu view models
//!
//! What the customer-facing menu renders: products with their display
//! price and category name already resolved.

use serde::{Deserialize, Serialize};

use super::{Category, Product};

/// Shown when a product's category no longer exists
pub const UNSPECIFIED_CATEGORY: &str = "غير محدد";

/// Product as rendered on the public menu
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuProduct {
    #[serde(flatten)]
    pub product: Product,
    /// Empty when the product has no price to show
    pub price_label: String,
    pub category_name: String,
}

impl MenuProduct {
    pub fn resolve(product: Product, categories: &[Category]) -> Self {
        let category_name = categories
            .iter()
            .find(|c| c.id == product.category_id)
            .map(|c| c.name_ar.clone())
            .unwrap_or_else(|| UNSPECIFIED_CATEGORY.to_string());
        Self {
            price_label: product.price_label(),
            category_name,
            product,
        }
    }
}

/// A category page: the category and its visible products in display order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryMenu {
    pub category: Category,
    pub products: Vec<MenuProduct>,
}
