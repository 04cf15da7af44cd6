//! Dashboard counters

use shared::models::DashboardStats;

use super::RepoResult;
use super::collection::Visibility;
use super::{AnnouncementRepository, CategoryRepository, ProductRepository};
use crate::db::Database;

#[derive(Clone)]
pub struct StatsRepository {
    categories: CategoryRepository,
    products: ProductRepository,
    announcements: AnnouncementRepository,
}

impl StatsRepository {
    pub fn new(db: Database) -> Self {
        Self {
            categories: CategoryRepository::new(db.clone()),
            products: ProductRepository::new(db.clone()),
            announcements: AnnouncementRepository::new(db),
        }
    }

    pub async fn dashboard(&self) -> RepoResult<DashboardStats> {
        Ok(DashboardStats {
            categories: self.categories.count(Visibility::All).await?,
            products: self.products.count(Visibility::All).await?,
            active_products: self.products.count(Visibility::Public).await?,
            announcements: self.announcements.count(Visibility::All).await?,
        })
    }
}
