//! レシピカードコンポーネント

use leptos::prelude::*;
use recipe_lens_common::RecipeCard;

/// サニタイズ済みの `RecipeCard` を描画する。文字列はテキストノード・属性として挿入。
#[component]
pub fn RecipeCardView(card: RecipeCard) -> impl IntoView {
    let RecipeCard {
        title,
        image_src,
        link_href,
        link_label,
        ingredient_summary,
    } = card;

    let image = image_src.map(|src| view! { <img src=src alt=title.clone() /> });
    let summary = ingredient_summary.map(|s| view! { <p class="recipe-meta">{s}</p> });

    view! {
        <div class="recipe-card">
            {image}
            <div class="recipe-card-content">
                <h3>{title}</h3>
                {summary}
                <a
                    href=link_href
                    target="_blank"
                    rel="noopener noreferrer"
                    class="choose-photo-btn"
                >
                    {link_label}
                </a>
            </div>
        </div>
    }
}
