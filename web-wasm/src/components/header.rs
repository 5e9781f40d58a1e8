//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Recipe Lens"</h1>
            <p class="subtitle">"Snap your ingredients, get recipe ideas"</p>
        </header>
    }
}
