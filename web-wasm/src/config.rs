//! 画面設定
//!
//! 解析エンドポイントは既定で `/analyze`。ページ側で
//! `<meta name="recipe-lens-endpoint" content="...">` を置くと上書きできる。

use recipe_lens_common::DEFAULT_ANALYZE_PATH;

pub const ENDPOINT_META_NAME: &str = "recipe-lens-endpoint";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebConfig {
    pub endpoint: String,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ANALYZE_PATH.to_string(),
        }
    }
}

impl WebConfig {
    /// ページの `<meta>` から読み込む
    pub fn load() -> Self {
        let selector = format!("meta[name=\"{}\"]", ENDPOINT_META_NAME);
        let content = gloo::utils::document()
            .query_selector(&selector)
            .ok()
            .flatten()
            .and_then(|meta| meta.get_attribute("content"));

        Self::from_meta(content)
    }

    pub fn from_meta(content: Option<String>) -> Self {
        match content.map(|c| c.trim().to_string()) {
            Some(endpoint) if !endpoint.is_empty() => Self { endpoint },
            _ => Self::default(),
        }
    }
}
