//! 解析レスポンスの型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - AnalysisResponse: `/analyze` の成功レスポンス
//! - Recipe: レシピ候補1件
//! - ErrorBody: 失敗レスポンスのボディ

use serde::{Deserialize, Deserializer, Serialize};

/// `/analyze` のレスポンス
///
/// リストは欠落・`null` どちらも「なし」として扱う。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detected_items: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipes: Option<Vec<Recipe>>,

    /// アップロード画像の公開URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AnalysisResponse {
    /// 検出された食材（欠落時は空）
    pub fn detected_items(&self) -> &[String] {
        self.detected_items.as_deref().unwrap_or(&[])
    }

    /// レシピ候補（欠落時は空）
    pub fn recipes(&self) -> &[Recipe] {
        self.recipes.as_deref().unwrap_or(&[])
    }
}

/// レシピ候補
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub image: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub used_ingredient_count: Option<u32>,   // 手持ち食材の使用数

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub missed_ingredient_count: Option<u32>, // 不足食材数
}

/// `null` を空文字として読む
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// 失敗レスポンスのボディ
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
