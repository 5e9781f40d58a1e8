//! メインアプリケーションコンポーネント
//!
//! 状態機械 (`UploadController`) はシグナルに入れて子コンポーネントへ明示的に渡す。
//! 通信の続きは `spawn_local` のタスクで実行し、最後に必ず `complete` を1回呼ぶ。

use leptos::prelude::*;
use recipe_lens_common::{Completion, UploadController, UploadTarget};
use web_sys::File;

use crate::api::analyze::post_image;
use crate::components::{
    header::Header,
    loading_indicator::LoadingIndicator,
    results_panel::ResultsPanel,
    upload_area::UploadArea,
};
use crate::config::WebConfig;

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let WebConfig { endpoint } = WebConfig::load();
    log::info!("analyze endpoint: {}", endpoint);

    let controller = RwSignal::new(UploadController::new());

    // ファイル選択ハンドラ（ドロップ・ファイルピッカー共通）
    let on_file_selected = move |file: File| {
        submit(controller, endpoint.clone(), file);
    };

    let is_loading = move || controller.with(|c| c.loading_visible());
    let results = move || controller.with(|c| c.results().cloned());

    view! {
        <div class="container">
            <Header />

            <UploadArea on_file_selected=on_file_selected />

            <Show when=is_loading>
                <LoadingIndicator />
            </Show>

            {move || results().map(|results| view! { <ResultsPanel results=results /> })}
        </div>
    }
}

/// 1回分の送信
fn submit(controller: RwSignal<UploadController>, endpoint: String, file: File) {
    let target = UploadTarget::new(file.name(), file.type_(), file.size() as u64);

    let ticket = match controller.try_update(|c| c.begin(&target)) {
        Some(Ok(ticket)) => ticket,
        Some(Err(err)) => {
            log::warn!("upload rejected: {}", err);
            gloo::dialogs::alert(&err.alert_message());
            return;
        }
        None => return,
    };

    log::info!(
        "submit #{}: {} ({}, {} bytes)",
        ticket.id(),
        target.file_name,
        target.mime_type,
        target.size
    );

    wasm_bindgen_futures::spawn_local(async move {
        let outcome = post_image(&endpoint, &file).await;
        if let Err(err) = &outcome {
            log::error!("analyze #{} failed: {}", ticket.id(), err);
        }

        match controller.try_update(|c| c.complete(ticket, outcome)) {
            Some(Completion::Alert(message)) => gloo::dialogs::alert(&message),
            Some(Completion::Stale) => log::debug!("discarding stale response #{}", ticket.id()),
            Some(Completion::Shown) | None => {}
        }
    });
}
