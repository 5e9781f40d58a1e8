//! アップロード対象の検証

use crate::error::SubmitError;

/// 受け付けるMIMEタイプの接頭辞
pub const IMAGE_MIME_PREFIX: &str = "image/";

/// multipartのフィールド名
pub const UPLOAD_FIELD_NAME: &str = "image";

/// 解析エンドポイントの既定パス
pub const DEFAULT_ANALYZE_PATH: &str = "/analyze";

/// 選択されたファイルのメタデータ
///
/// バイト列はプラットフォーム側（`web_sys::File` / CLIのバッファ）が持つ。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadTarget {
    pub file_name: String,
    pub mime_type: String,
    pub size: u64,
}

impl UploadTarget {
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, size: u64) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            size,
        }
    }

    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with(IMAGE_MIME_PREFIX)
    }
}

/// 宣言されたMIMEタイプが `image/` で始まらなければ拒否
pub fn validate_upload(target: &UploadTarget) -> Result<(), SubmitError> {
    if target.is_image() {
        Ok(())
    } else {
        Err(SubmitError::InvalidFileType {
            mime_type: target.mime_type.clone(),
        })
    }
}
