//! Recipe Lens CLI
//!
//! ブラウザ版と同じ `/analyze` エンドポイントへ画像を送り、結果を端末に表示する。

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod image_file;
pub mod report;
