//! アップロードエリアコンポーネント
//!
//! ドラッグ&ドロップとファイルピッカーのどちらでも、先頭の1ファイルだけを渡す。

use leptos::html::Input;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Event, File, FileList, HtmlInputElement};

#[component]
pub fn UploadArea<F>(on_file_selected: F) -> impl IntoView
where
    F: Fn(File) + 'static + Clone,
{
    let (is_dragover, set_is_dragover) = signal(false);
    let file_input = NodeRef::<Input>::new();

    let on_drop = {
        let on_file_selected = on_file_selected.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);

            if let Some(file) = ev.data_transfer().and_then(|dt| dt.files()).and_then(first_file) {
                on_file_selected(file);
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    // ファイル選択ダイアログを開く
    let on_click = move |_| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    let on_change = {
        let on_file_selected = on_file_selected.clone();
        move |ev: Event| {
            let Some(input) = ev
                .target()
                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            else {
                return;
            };

            if let Some(file) = input.files().and_then(first_file) {
                on_file_selected(file);
            }
            // 同じファイルを続けて選んでも change が発火するように
            input.set_value("");
        }
    };

    view! {
        <div
            class=move || if is_dragover.get() { "upload-box dragover" } else { "upload-box" }
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:click=on_click
        >
            <div class="upload-icon">"📷"</div>
            <p>"Drag & drop a photo here, or click to choose one"</p>
            <p class="text-muted">"Supported formats: JPEG, PNG, HEIC"</p>
        </div>
        // アップロードボックスの外に置く（クリックが再び伝播しないように）
        <input
            type="file"
            id="fileInput"
            accept="image/*"
            style="display: none"
            node_ref=file_input
            on:change=on_change
        />
    }
}

fn first_file(files: FileList) -> Option<File> {
    files.get(0)
}
