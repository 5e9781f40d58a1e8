//! 送信エラーとアラート文言

use thiserror::Error;

/// 非画像ファイルを拒否したときのアラート
pub const INVALID_FILE_MESSAGE: &str = "Please upload an image file.";

/// サーバーがエラーメッセージを返さなかったときのアラート
pub const HTTP_FALLBACK_MESSAGE: &str = "An error occurred while processing the image";

/// 通信失敗・パース失敗時のアラート
pub const GENERIC_FALLBACK_MESSAGE: &str =
    "An error occurred while processing the image. Please try again.";

/// 送信1回分の失敗
///
/// `Display` はログ用、`alert_message` はユーザー向け。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("invalid file type: {mime_type:?}")]
    InvalidFileType { mime_type: String },

    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("<no message>"))]
    Http { status: u16, message: Option<String> },

    #[error("network failure: {0}")]
    Network(String),

    #[error("response parse failure: {0}")]
    Parse(String),

    /// 送信前のリクエスト組み立てに失敗
    #[error("request build failure: {0}")]
    Request(String),
}

impl SubmitError {
    /// ブロッキングアラートに表示する文言
    pub fn alert_message(&self) -> String {
        match self {
            SubmitError::InvalidFileType { .. } => INVALID_FILE_MESSAGE.to_string(),
            SubmitError::Http { message: Some(message), .. } => message.clone(),
            SubmitError::Http { message: None, .. } => HTTP_FALLBACK_MESSAGE.to_string(),
            SubmitError::Network(_) | SubmitError::Parse(_) | SubmitError::Request(_) => {
                GENERIC_FALLBACK_MESSAGE.to_string()
            }
        }
    }
}
