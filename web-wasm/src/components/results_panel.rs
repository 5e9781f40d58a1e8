//! 結果表示コンポーネント

use leptos::prelude::*;
use recipe_lens_common::{RecipeArea, ResultsView, NO_RECIPES_TEXT};

use super::recipe_card::RecipeCardView;

#[component]
pub fn ResultsPanel(results: ResultsView) -> impl IntoView {
    let ResultsView { food_items, recipes } = results;

    let items = food_items
        .into_iter()
        .map(|entry| {
            let class = if entry.is_placeholder() { "placeholder" } else { "food-item" };
            view! { <li class=class>{entry.text().to_string()}</li> }
        })
        .collect_view();

    let recipes = match recipes {
        RecipeArea::Cards(cards) => cards
            .into_iter()
            .map(|card| view! { <RecipeCardView card=card /> })
            .collect_view()
            .into_any(),
        RecipeArea::Placeholder => view! { <div class="no-recipes">{NO_RECIPES_TEXT}</div> }.into_any(),
    };

    view! {
        <section id="results" class="results">
            <div class="results-block">
                <h2>"Detected Food Items"</h2>
                <ul id="foodItems" class="food-items">{items}</ul>
            </div>
            <div class="results-block">
                <h2>"Recipe Suggestions"</h2>
                <div id="recipes" class="recipes-grid">{recipes}</div>
            </div>
        </section>
    }
}
