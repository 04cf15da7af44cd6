//! HTTP 服务组装

pub mod http;

pub use http::{build_app, build_router};
