//! HTTP request handlers

pub mod health;
pub mod recommend;

pub use health::health_check;
pub use recommend::{recommend, recommend_preflight};
