//! Category Repository

use shared::models::{Category, CategoryCreate, CategoryUpdate};
use surrealdb::sql::Datetime;

use super::collection::{Collection, RecordKind};
use crate::db::models::{CategoryPatch, CategoryRecord};

pub struct CategoryKind;

impl RecordKind for CategoryKind {
    const TABLE: &'static str = "categories";
    const ORDER_BY: &'static str = "sort_order ASC";
    const LABEL: &'static str = "Category";

    type Record = CategoryRecord;
    type Model = Category;
    type Create = CategoryCreate;
    type Update = CategoryUpdate;
    type Patch = CategoryPatch;

    fn new_record(data: CategoryCreate, now: Datetime) -> CategoryRecord {
        CategoryRecord::new(data, now)
    }

    fn to_patch(data: CategoryUpdate, now: Datetime) -> CategoryPatch {
        CategoryPatch::new(data, now)
    }
}

pub type CategoryRepository = Collection<CategoryKind>;
