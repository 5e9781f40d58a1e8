//! 解析エンドポイントのHTTPクライアント
//!
//! ブラウザ版と同じ契約: `POST {endpoint}`、multipart の `image` フィールドに
//! ファイル名とMIMEタイプ付きで画像を載せる。

use crate::error::{RecipeLensError, Result};
use crate::image_file::LocalImage;
use indicatif::ProgressBar;
use recipe_lens_common::{
    interpret_response, AnalysisResponse, Completion, ResultsView, SubmitError, UploadController,
    UPLOAD_FIELD_NAME,
};
use reqwest::multipart::{Form, Part};
use std::time::Duration;
use tracing::{debug, info, warn};

pub struct AnalyzeClient {
    http: reqwest::Client,
    endpoint: String,
}

impl AnalyzeClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RecipeLensError::HttpClient(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// 画像を1回送信する（リトライなし）
    pub async fn submit(&self, image: &LocalImage) -> std::result::Result<AnalysisResponse, SubmitError> {
        let part = Part::bytes(image.bytes.clone())
            .file_name(image.file_name.clone())
            .mime_str(&image.mime_type)
            .map_err(|e| SubmitError::Request(format!("content type {:?}: {}", image.mime_type, e)))?;
        let form = Form::new().part(UPLOAD_FIELD_NAME, part);

        let response = self
            .http
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;
        debug!(status, bytes = body.len(), "analyze response received");

        interpret_response(status, &body)
    }
}

/// 解析の成功結果
#[derive(Debug, Clone)]
pub struct Analysis {
    pub response: AnalysisResponse,
    pub view: ResultsView,
}

/// 状態機械を通して1回分の解析を行う
///
/// 画像でなければ通信せずに `InvalidFileType` を返す。
/// `progress` は Loading の間だけスピナーを回す。
pub async fn analyze(client: &AnalyzeClient, image: &LocalImage, progress: &ProgressBar) -> Result<Analysis> {
    let mut controller = UploadController::new();
    let ticket = controller.begin(&image.target())?;

    info!(
        ticket = ticket.id(),
        file = %image.file_name,
        mime = %image.mime_type,
        bytes = image.bytes.len(),
        endpoint = client.endpoint(),
        "submitting image"
    );
    progress.set_message(format!("{} を解析中...", image.file_name));
    progress.enable_steady_tick(Duration::from_millis(100));

    let outcome = client.submit(image).await;
    progress.finish_and_clear();

    match outcome {
        Ok(response) => {
            controller.complete(ticket, Ok(response.clone()));
            let view = controller
                .results()
                .cloned()
                .ok_or_else(|| SubmitError::Parse("response was not rendered".to_string()))?;
            Ok(Analysis { response, view })
        }
        Err(err) => {
            warn!(ticket = ticket.id(), "analyze failed: {}", err);
            if let Completion::Alert(message) = controller.complete(ticket, Err(err.clone())) {
                debug!(alert = %message, "analysis ended with alert");
            }
            Err(err.into())
        }
    }
}
