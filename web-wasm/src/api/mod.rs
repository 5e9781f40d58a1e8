//! バックエンドAPI

pub mod analyze;
