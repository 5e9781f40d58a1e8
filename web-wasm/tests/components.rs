//! コンポーネントのDOMテスト（wasm-pack test --headless --firefox）

#![cfg(target_arch = "wasm32")]

use leptos::mount::mount_to;
use leptos::prelude::*;
use recipe_lens_common::{
    interpret_response, render_recipe_card, Recipe, ResultsView, NO_ITEMS_TEXT, NO_RECIPES_TEXT,
};
use recipe_lens_web::components::recipe_card::RecipeCardView;
use recipe_lens_web::components::results_panel::ResultsPanel;
use recipe_lens_web::components::upload_area::UploadArea;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{DataTransfer, DragEvent, DragEventInit, Element, File, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

/// body 直下にマウント先を作る
fn mount_point() -> HtmlElement {
    let container: HtmlElement = gloo::utils::document()
        .create_element("div")
        .expect("div作成失敗")
        .dyn_into()
        .expect("HtmlElementではない");
    gloo::utils::body()
        .append_child(&container)
        .expect("追加失敗");
    container
}

fn query_all(root: &Element, selector: &str) -> Vec<Element> {
    let list = root.query_selector_all(selector).expect("セレクタ不正");
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn query_one(root: &Element, selector: &str) -> Element {
    let found = query_all(root, selector);
    assert_eq!(found.len(), 1, "{} がちょうど1つあるはず", selector);
    found.into_iter().next().expect("要素がない")
}

fn text_of(element: &Element) -> String {
    element.text_content().unwrap_or_default()
}

fn results_for(body: &str) -> ResultsView {
    let response = interpret_response(200, body).expect("成功扱いになるはず");
    ResultsView::from_response(&response)
}

fn make_file(name: &str, mime: &str) -> File {
    let data = js_sys::Uint8Array::from(&[0xFFu8, 0xD8, 0xFF][..]);
    let parts = js_sys::Array::of1(&data);
    let options = web_sys::FilePropertyBag::new();
    options.set_type(mime);
    File::new_with_u8_array_sequence_and_options(&parts, name, &options).expect("File作成失敗")
}

fn drag_event(kind: &str, data: Option<&DataTransfer>) -> DragEvent {
    let init = DragEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    init.set_data_transfer(data);
    DragEvent::new_with_event_init_dict(kind, &init).expect("DragEvent作成失敗")
}

/// 描画の反映を待つ（setTimeout 0）
async fn next_tick() {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        gloo::utils::window()
            .set_timeout_with_callback(&resolve)
            .expect("setTimeout失敗");
    });
    JsFuture::from(promise).await.expect("待機失敗");
}

/// 空の結果はプレースホルダーを1つずつ表示
#[wasm_bindgen_test]
fn test_results_panel_placeholders() {
    let container = mount_point();
    let results = results_for("{}");
    let _handle = mount_to(container.clone(), move || view! { <ResultsPanel results=results /> });

    let items = query_all(&container, "#foodItems li");
    assert_eq!(items.len(), 1);
    assert_eq!(text_of(&items[0]), NO_ITEMS_TEXT);
    assert_eq!(items[0].class_name(), "placeholder");

    let no_recipes = query_one(&container, "#recipes .no-recipes");
    assert_eq!(text_of(&no_recipes), NO_RECIPES_TEXT);
    assert!(query_all(&container, ".recipe-card").is_empty());

    container.remove();
}

/// 食材とレシピカードがデータ通りに並ぶ
#[wasm_bindgen_test]
fn test_results_panel_items_and_cards() {
    let container = mount_point();
    let results = results_for(
        r#"{
            "detected_items": ["apple", "egg"],
            "recipes": [
                {"title": "Apple Pie", "image": "/i/pie.jpg", "url": "https://example.com/pie"},
                {"title": "Omelette", "image": null, "url": "/r/omelette"}
            ]
        }"#,
    );
    let _handle = mount_to(container.clone(), move || view! { <ResultsPanel results=results /> });

    let items: Vec<String> = query_all(&container, "#foodItems li").iter().map(text_of).collect();
    assert_eq!(items, ["apple", "egg"]);
    assert!(query_all(&container, ".no-recipes").is_empty());

    let cards = query_all(&container, "#recipes .recipe-card");
    assert_eq!(cards.len(), 2);

    let pie = &cards[0];
    assert_eq!(
        query_one(pie, "img").get_attribute("src").as_deref(),
        Some("/i/pie.jpg")
    );
    assert_eq!(text_of(&query_one(pie, "h3")), "Apple Pie");
    let link = query_one(pie, "a");
    assert_eq!(link.get_attribute("href").as_deref(), Some("https://example.com/pie"));
    assert_eq!(link.get_attribute("target").as_deref(), Some("_blank"));
    assert_eq!(text_of(&link), "View Recipe");

    let omelette = &cards[1];
    assert!(query_all(omelette, "img").is_empty());
    assert_eq!(text_of(&query_one(omelette, "h3")), "Omelette");
    assert_eq!(
        query_one(omelette, "a").get_attribute("href").as_deref(),
        Some("/r/omelette")
    );

    container.remove();
}

/// 危険なURLはリンクを無効化し画像を出さない。タイトルはテキストとして挿入
#[wasm_bindgen_test]
fn test_recipe_card_neutralizes_hostile_urls() {
    let container = mount_point();
    let card = render_recipe_card(&Recipe {
        title: "<b>Toast</b>".into(),
        image: "javascript:alert(1)".into(),
        url: "java\tscript:alert(1)".into(),
        ..Default::default()
    });
    let _handle = mount_to(container.clone(), move || view! { <RecipeCardView card=card /> });

    let card = query_one(&container, ".recipe-card");
    assert!(query_all(&card, "img").is_empty());
    assert!(query_all(&card, "b").is_empty());
    assert_eq!(text_of(&query_one(&card, "h3")), "<b>Toast</b>");
    assert_eq!(query_one(&card, "a").get_attribute("href").as_deref(), Some("#"));

    container.remove();
}

/// dragover で強調、dragleave で解除
#[wasm_bindgen_test]
async fn test_upload_area_dragover_highlight() {
    let container = mount_point();
    let _handle = mount_to(container.clone(), || {
        view! { <UploadArea on_file_selected=|_file: File| {} /> }
    });

    let upload_box = query_one(&container, ".upload-box");
    assert_eq!(upload_box.class_name(), "upload-box");

    let dragover = drag_event("dragover", None);
    upload_box.dispatch_event(&dragover).expect("dispatch失敗");
    assert!(dragover.default_prevented());
    next_tick().await;
    assert_eq!(upload_box.class_name(), "upload-box dragover");

    upload_box
        .dispatch_event(&drag_event("dragleave", None))
        .expect("dispatch失敗");
    next_tick().await;
    assert_eq!(upload_box.class_name(), "upload-box");

    container.remove();
}

/// ドロップは先頭の1ファイルだけを渡し、強調を解除する
#[wasm_bindgen_test]
async fn test_upload_area_drop_forwards_first_file() {
    let container = mount_point();
    let received = Rc::new(RefCell::new(Vec::<String>::new()));
    let on_file = {
        let received = Rc::clone(&received);
        move |file: File| received.borrow_mut().push(file.name())
    };
    let _handle = mount_to(container.clone(), move || {
        view! { <UploadArea on_file_selected=on_file /> }
    });

    let upload_box = query_one(&container, ".upload-box");
    upload_box
        .dispatch_event(&drag_event("dragover", None))
        .expect("dispatch失敗");
    next_tick().await;

    let data = DataTransfer::new().expect("DataTransfer作成失敗");
    data.items()
        .add_with_file(&make_file("first.jpg", "image/jpeg"))
        .expect("追加失敗");
    data.items()
        .add_with_file(&make_file("second.png", "image/png"))
        .expect("追加失敗");

    let drop = drag_event("drop", Some(&data));
    upload_box.dispatch_event(&drop).expect("dispatch失敗");
    assert!(drop.default_prevented());
    assert_eq!(*received.borrow(), ["first.jpg"]);

    next_tick().await;
    assert_eq!(upload_box.class_name(), "upload-box");

    container.remove();
}
