//! ローディング表示コンポーネント

use leptos::prelude::*;

#[component]
pub fn LoadingIndicator() -> impl IntoView {
    view! {
        <div class="loading">
            <div class="spinner" />
            <p class="loading-text">"Analyzing your image..."</p>
        </div>
    }
}
