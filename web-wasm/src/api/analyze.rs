//! `/analyze` 呼び出し
//!
//! 画像を multipart (`image` フィールド) で送信し、ステータスとボディを
//! 共通ライブラリの `interpret_response` に渡す。

use recipe_lens_common::{interpret_response, AnalysisResponse, SubmitError, UPLOAD_FIELD_NAME};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, RequestMode, Response};

/// ファイルを `image` フィールドに載せたフォームを作る
pub fn build_form_data(file: &File) -> Result<FormData, JsValue> {
    let form = FormData::new()?;
    form.append_with_blob_and_filename(UPLOAD_FIELD_NAME, file, &file.name())?;
    Ok(form)
}

/// 画像を送信して解析結果を得る
pub async fn post_image(endpoint: &str, file: &File) -> Result<AnalysisResponse, SubmitError> {
    let form = build_form_data(file).map_err(|e| SubmitError::Request(describe_js_error(&e)))?;
    let (status, body) = send(endpoint, &form)
        .await
        .map_err(|e| SubmitError::Network(describe_js_error(&e)))?;

    interpret_response(status, &body)
}

async fn send(endpoint: &str, form: &FormData) -> Result<(u16, String), JsValue> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(form);

    let request = Request::new_with_str_and_init(endpoint, &opts)?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window is not available"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    let body = JsFuture::from(resp.text()?).await?;
    Ok((resp.status(), body.as_string().unwrap_or_default()))
}

/// JSの例外をログ用の文字列にする
pub fn describe_js_error(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
