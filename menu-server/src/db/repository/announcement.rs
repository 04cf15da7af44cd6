//! Announcement Repository

use chrono::{DateTime, Utc};
use shared::models::{Announcement, AnnouncementCreate, AnnouncementUpdate, retain_displayed};
use surrealdb::sql::Datetime;

use super::RepoResult;
use super::collection::{Collection, RecordKind, Visibility};
use crate::db::models::{AnnouncementPatch, AnnouncementRecord};

pub struct AnnouncementKind;

impl RecordKind for AnnouncementKind {
    const TABLE: &'static str = "announcements";
    const ORDER_BY: &'static str = "priority DESC";
    const LABEL: &'static str = "Announcement";

    type Record = AnnouncementRecord;
    type Model = Announcement;
    type Create = AnnouncementCreate;
    type Update = AnnouncementUpdate;
    type Patch = AnnouncementPatch;

    fn new_record(data: AnnouncementCreate, now: Datetime) -> AnnouncementRecord {
        AnnouncementRecord::new(data, now)
    }

    fn to_patch(data: AnnouncementUpdate, now: Datetime) -> AnnouncementPatch {
        AnnouncementPatch::new(data, now)
    }
}

pub type AnnouncementRepository = Collection<AnnouncementKind>;

impl Collection<AnnouncementKind> {
    /// Announcements shown to customers at `now`.
    ///
    /// The store query filters on the active flag and orders by priority;
    /// the display range is checked afterwards, in memory.
    pub async fn displayed_at(&self, now: DateTime<Utc>) -> RepoResult<Vec<Announcement>> {
        let active = self.list(Visibility::Public).await?;
        Ok(retain_displayed(active, now))
    }
}
