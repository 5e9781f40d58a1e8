//! 結果表示モデル
//!
//! サーバーから来た文字列は信用しない。テキストは制御文字を除去し、
//! URLは許可したスキームだけ通す。DOMへの挿入はテキストノード経由で行う前提。

use crate::types::{AnalysisResponse, Recipe};

/// 食材が0件のときのプレースホルダー
pub const NO_ITEMS_TEXT: &str = "No food items detected";

/// レシピが0件のときのプレースホルダー
pub const NO_RECIPES_TEXT: &str = "No recipe suggestions available";

/// レシピリンクのラベル
pub const VIEW_RECIPE_LABEL: &str = "View Recipe";

/// 無効化したリンクの置き換え先
const NEUTRAL_HREF: &str = "#";

/// 結果領域に描画する内容
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsView {
    pub food_items: Vec<ListEntry>,
    pub recipes: RecipeArea,
}

impl ResultsView {
    pub fn from_response(response: &AnalysisResponse) -> Self {
        let items = response.detected_items();
        let food_items = if items.is_empty() {
            vec![ListEntry::Placeholder]
        } else {
            items.iter().map(|s| ListEntry::Item(sanitize_text(s))).collect()
        };

        let recipes = response.recipes();
        let recipes = if recipes.is_empty() {
            RecipeArea::Placeholder
        } else {
            RecipeArea::Cards(recipes.iter().map(render_recipe_card).collect())
        };

        Self { food_items, recipes }
    }
}

/// 食材リストの1行
#[derive(Debug, Clone, PartialEq)]
pub enum ListEntry {
    Item(String),
    Placeholder,
}

impl ListEntry {
    pub fn text(&self) -> &str {
        match self {
            ListEntry::Item(text) => text,
            ListEntry::Placeholder => NO_ITEMS_TEXT,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, ListEntry::Placeholder)
    }
}

/// レシピ領域
#[derive(Debug, Clone, PartialEq)]
pub enum RecipeArea {
    Cards(Vec<RecipeCard>),
    Placeholder,
}

impl RecipeArea {
    pub fn cards(&self) -> &[RecipeCard] {
        match self {
            RecipeArea::Cards(cards) => cards,
            RecipeArea::Placeholder => &[],
        }
    }
}

/// レシピカード
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeCard {
    pub title: String,
    /// 許可されないスキームの画像は `None`
    pub image_src: Option<String>,
    pub link_href: String,
    pub link_label: &'static str,
    pub ingredient_summary: Option<String>,
}

/// Recipe からカードを組み立てる
pub fn render_recipe_card(recipe: &Recipe) -> RecipeCard {
    RecipeCard {
        title: sanitize_text(&recipe.title),
        image_src: sanitize_url(&recipe.image, UrlUse::Image),
        link_href: sanitize_url(&recipe.url, UrlUse::Link).unwrap_or_else(|| NEUTRAL_HREF.to_string()),
        link_label: VIEW_RECIPE_LABEL,
        ingredient_summary: ingredient_summary(recipe.used_ingredient_count, recipe.missed_ingredient_count),
    }
}

fn ingredient_summary(used: Option<u32>, missed: Option<u32>) -> Option<String> {
    match (used, missed) {
        (Some(used), Some(missed)) => Some(format!("Uses {} of your ingredients, {} missing", used, missed)),
        (Some(used), None) => Some(format!("Uses {} of your ingredients", used)),
        (None, Some(missed)) => Some(format!("{} {} missing", missed, plural(missed, "ingredient"))),
        (None, None) => None,
    }
}

fn plural(n: u32, word: &str) -> String {
    if n == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}

/// 制御文字（ESC、NUL、改行など）を除去
pub fn sanitize_text(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_control()).collect()
}

/// URLの用途
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlUse {
    Link,
    Image,
}

/// 相対URLと http/https だけを通す。画像は `data:image/` も可。
///
/// スキーム判定ではブラウザと同様に途中の空白・制御文字を無視する（`java\tscript:` 対策）。
pub fn sanitize_url(raw: &str, usage: UrlUse) -> Option<String> {
    let cleaned = sanitize_text(raw.trim());
    if cleaned.is_empty() {
        return None;
    }

    let compact: String = cleaned.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    let Some(scheme) = scheme_of(&compact) else {
        return Some(cleaned);
    };

    let allowed = match scheme.to_ascii_lowercase().as_str() {
        "http" | "https" => true,
        "data" => usage == UrlUse::Image && compact.to_ascii_lowercase().starts_with("data:image/"),
        _ => false,
    };

    allowed.then_some(cleaned)
}

/// `scheme:` 部分を取り出す。`/` `?` `#` が先に来れば相対URL。
fn scheme_of(url: &str) -> Option<&str> {
    let end = url.find([':', '/', '?', '#'])?;
    if url[end..].starts_with(':') {
        Some(&url[..end])
    } else {
        None
    }
}
