//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`auth`] - 登录 / 当前管理员
//! - [`menu`] - 公开菜单 (无需认证)
//! - [`categories`] - 分类管理
//! - [`products`] - 商品管理
//! - [`announcements`] - 公告管理
//! - [`settings`] - 站点设置
//! - [`stats`] - 仪表盘统计
//! - [`images`] - 图片上传 / 删除
//! - [`admins`] - 管理员账号 (超级管理员)

pub mod admins;
pub mod announcements;
pub mod auth;
pub mod categories;
pub mod health;
pub mod images;
pub mod menu;
pub mod products;
pub mod settings;
pub mod stats;

use shared::ErrorCode;

use crate::db::repository::RepoError;
use crate::utils::AppError;

/// 将仓储层的 NotFound 映射为具体资源的错误码
pub(crate) fn not_found_as(code: ErrorCode, id: &str) -> impl FnOnce(RepoError) -> AppError + '_ {
    move |err| match err {
        RepoError::NotFound(_) => AppError::new(code).with_detail("id", id),
        other => other.into(),
    }
}
