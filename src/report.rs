//! 解析結果の端末表示

use recipe_lens_common::{ListEntry, RecipeArea, ResultsView};

pub fn render_report(view: &ResultsView) -> String {
    let mut out = String::from("Detected Food Items\n");

    for entry in &view.food_items {
        match entry {
            ListEntry::Item(item) => out.push_str(&format!("  - {}\n", item)),
            ListEntry::Placeholder => out.push_str(&format!("  {}\n", entry.text())),
        }
    }

    out.push_str("\nRecipe Suggestions\n");

    match &view.recipes {
        RecipeArea::Placeholder => out.push_str(&format!("  {}\n", recipe_lens_common::NO_RECIPES_TEXT)),
        RecipeArea::Cards(cards) => {
            for (i, card) in cards.iter().enumerate() {
                out.push_str(&format!("  {}. {}\n", i + 1, card.title));
                if let Some(summary) = &card.ingredient_summary {
                    out.push_str(&format!("     {}\n", summary));
                }
                out.push_str(&format!("     {}: {}\n", card.link_label, card.link_href));
                if let Some(image) = &card.image_src {
                    out.push_str(&format!("     Image: {}\n", image));
                }
            }
        }
    }

    out
}
