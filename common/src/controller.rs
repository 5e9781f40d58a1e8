//! アップロード状態機械
//!
//! `Idle → Loading → {ResultsShown | Alerted}`
//!
//! DOMも通信も持たない。ブラウザとCLIはそれぞれ
//! `begin` で送信を開始し、通信の完了を `complete` に1回だけ渡す。
//! 送信が重なった場合は最後に開始したものが勝ち、古い完了は捨てる。

use crate::error::SubmitError;
use crate::render::ResultsView;
use crate::types::AnalysisResponse;
use crate::upload::{validate_upload, UploadTarget};

/// 送信ごとに発行する識別子
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// 画面の状態
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    ResultsShown(ResultsView),
    Alerted { message: String },
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Loading => "loading",
            Phase::ResultsShown(_) => "results-shown",
            Phase::Alerted { .. } => "alerted",
        }
    }
}

/// `complete` の結果
#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    /// 結果領域を表示した
    Shown,
    /// このメッセージでアラートを出す
    Alert(String),
    /// 新しい送信があるため無視した
    Stale,
}

#[derive(Debug, Clone, Default)]
pub struct UploadController {
    phase: Phase,
    latest: Option<Ticket>,
    issued: u64,
}

impl UploadController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading)
    }

    pub fn loading_visible(&self) -> bool {
        self.is_loading()
    }

    pub fn results_visible(&self) -> bool {
        matches!(self.phase, Phase::ResultsShown(_))
    }

    /// 表示中の結果
    pub fn results(&self) -> Option<&ResultsView> {
        match &self.phase {
            Phase::ResultsShown(view) => Some(view),
            _ => None,
        }
    }

    /// 最後に発行したチケット
    pub fn latest_ticket(&self) -> Option<Ticket> {
        self.latest
    }

    /// 送信を開始する
    ///
    /// 画像でなければ状態を変えずに `InvalidFileType` を返す。通信してはならない。
    pub fn begin(&mut self, target: &UploadTarget) -> Result<Ticket, SubmitError> {
        validate_upload(target)?;

        self.issued += 1;
        let ticket = Ticket(self.issued);
        self.latest = Some(ticket);
        self.phase = Phase::Loading;
        Ok(ticket)
    }

    /// 通信の完了を反映する
    pub fn complete(
        &mut self,
        ticket: Ticket,
        outcome: Result<AnalysisResponse, SubmitError>,
    ) -> Completion {
        if self.latest != Some(ticket) || !self.is_loading() {
            return Completion::Stale;
        }

        match outcome {
            Ok(response) => {
                self.phase = Phase::ResultsShown(ResultsView::from_response(&response));
                Completion::Shown
            }
            Err(err) => {
                let message = err.alert_message();
                self.phase = Phase::Alerted { message: message.clone() };
                Completion::Alert(message)
            }
        }
    }
}
