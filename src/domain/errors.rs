//! # Domain Errors
//!
//! 型付きのドメインエラー

use thiserror::Error;

/// 順位表データ取得のエラー
#[derive(Error, Debug)]
pub enum FetchError {
    /// 2xx 以外のステータス
    #[error("Error fetching data: {status} {body}")]
    Status { status: u16, body: String },

    /// `response` 配列が空、または存在しない
    #[error("No data found in API response")]
    EmptyPayload,

    /// リクエスト送信の失敗
    #[error("Request failed: {0}")]
    Transport(String),

    /// レスポンスボディが JSON として読めない
    #[error("Failed to decode API response: {0}")]
    Decode(String),
}

impl FetchError {
    /// ステータスエラーかどうか
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// クラウドリソースが既に存在する
///
/// 再実行時に毎回発生する想定内の失敗。アダプターが SDK のエラーから判別して返す。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} '{name}' already exists")]
pub struct AlreadyExists {
    pub kind: &'static str,
    pub name: String,
}

impl AlreadyExists {
    pub fn new(kind: &'static str, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }

    /// `anyhow::Error` のチェーンに `AlreadyExists` が含まれるか
    pub fn is_in(error: &anyhow::Error) -> bool {
        error.chain().any(|cause| cause.is::<AlreadyExists>())
    }
}
