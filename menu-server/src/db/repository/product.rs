//! Product Repository

use shared::models::{Product, ProductCreate, ProductUpdate};
use surrealdb::sql::Datetime;

use super::RepoResult;
use super::collection::{Collection, RecordKind};
use crate::db::models::{ProductPatch, ProductRecord};

pub struct ProductKind;

impl RecordKind for ProductKind {
    const TABLE: &'static str = "products";
    const ORDER_BY: &'static str = "sort_order ASC";
    const LABEL: &'static str = "Product";

    type Record = ProductRecord;
    type Model = Product;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Patch = ProductPatch;

    fn new_record(data: ProductCreate, now: Datetime) -> ProductRecord {
        ProductRecord::new(data, now)
    }

    fn to_patch(data: ProductUpdate, now: Datetime) -> ProductPatch {
        ProductPatch::new(data, now)
    }
}

pub type ProductRepository = Collection<ProductKind>;

impl Collection<ProductKind> {
    /// Active products of one category, ascending `order`
    pub async fn by_category(&self, category_id: &str) -> RepoResult<Vec<Product>> {
        let records: Vec<ProductRecord> = self
            .db()
            .query(
                "SELECT * FROM products WHERE category_id = $category_id AND is_active = true ORDER BY sort_order ASC",
            )
            .bind(("category_id", category_id.to_string()))
            .await?
            .take(0)?;
        Ok(records.into_iter().map(Product::from).collect())
    }
}
