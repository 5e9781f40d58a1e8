//! ローカル画像の読み込みとMIMEタイプ判定
//!
//! ブラウザがファイルの `type` を決めるのと同じく、拡張子を優先する。
//! 拡張子で決まらなければ先頭バイトから推定する。

use crate::error::{RecipeLensError, Result};
use recipe_lens_common::UploadTarget;
use std::path::Path;

/// 判定できなかったときのMIMEタイプ（検証で拒否される）
pub const UNKNOWN_MIME_TYPE: &str = "application/octet-stream";

const IMAGE_EXTENSIONS: &[(&str, &str)] = &[
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("gif", "image/gif"),
    ("webp", "image/webp"),
    ("bmp", "image/bmp"),
    ("tif", "image/tiff"),
    ("tiff", "image/tiff"),
    ("heic", "image/heic"),
    ("heif", "image/heif"),
];

#[derive(Debug, Clone)]
pub struct LocalImage {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl LocalImage {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(RecipeLensError::FileNotFound(path.display().to_string()));
        }

        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let mime_type = detect_mime_type(path, &bytes);

        Ok(Self {
            file_name,
            mime_type,
            bytes,
        })
    }

    /// 検証用のメタデータ
    pub fn target(&self) -> UploadTarget {
        UploadTarget::new(&self.file_name, &self.mime_type, self.bytes.len() as u64)
    }
}

/// 拡張子 → 先頭バイトの順でMIMEタイプを決める
pub fn detect_mime_type(path: &Path, bytes: &[u8]) -> String {
    if let Some(mime) = mime_from_extension(path) {
        return mime.to_string();
    }

    image::guess_format(bytes)
        .map(|format| format.to_mime_type().to_string())
        .unwrap_or_else(|_| UNKNOWN_MIME_TYPE.to_string())
}

fn mime_from_extension(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_string_lossy().to_lowercase();
    IMAGE_EXTENSIONS
        .iter()
        .find(|(e, _)| *e == ext)
        .map(|(_, mime)| *mime)
}
