//! HTTPレスポンスの解釈
//!
//! ブラウザとCLIで成功・失敗の判定を揃えるため、ステータスとボディ文字列だけを受け取る。

use crate::error::SubmitError;
use crate::types::{AnalysisResponse, ErrorBody};

/// ステータスコードとボディから送信結果を決める
pub fn interpret_response(status: u16, body: &str) -> Result<AnalysisResponse, SubmitError> {
    if (200..300).contains(&status) {
        return serde_json::from_str(body).map_err(|e| SubmitError::Parse(e.to_string()));
    }

    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|m| !m.trim().is_empty());

    Err(SubmitError::Http { status, message })
}
