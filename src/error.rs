use recipe_lens_common::SubmitError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecipeLensError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("解析エンドポイントが設定されていません。`recipe-lens config --set-endpoint URL` か環境変数 RECIPE_LENS_ENDPOINT で設定してください")]
    MissingEndpoint,

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTPクライアント初期化エラー: {0}")]
    HttpClient(String),

    #[error(transparent)]
    Submit(#[from] SubmitError),
}

impl RecipeLensError {
    /// ユーザーに見せる文言（送信エラーはアラート文言をそのまま使う）
    pub fn user_message(&self) -> String {
        match self {
            RecipeLensError::Submit(err) => err.alert_message(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RecipeLensError>;
