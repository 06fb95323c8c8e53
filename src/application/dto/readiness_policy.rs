//! # Readiness Policy DTO
//!
//! リソースの準備完了を待つポーリング設定

use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;
pub const DEFAULT_INITIAL_DELAY_MS: u64 = 1000;
pub const DEFAULT_MAX_DELAY_MS: u64 = 8000;

/// 準備完了ポーリングの設定
///
/// 作成直後のバケットが参照可能になるまで、指数バックオフで有限回だけ確認する
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ReadinessPolicy {
    /// 確認の最大回数
    pub max_attempts: u32,
    /// 最初の待ち時間（ミリ秒）
    pub initial_delay_ms: u64,
    /// 待ち時間の上限（ミリ秒）
    pub max_delay_ms: u64,
}

impl ReadinessPolicy {
    pub fn new(max_attempts: u32, initial_delay_ms: u64, max_delay_ms: u64) -> Self {
        Self {
            max_attempts,
            initial_delay_ms,
            max_delay_ms,
        }
    }

    /// 待ち時間なしで `max_attempts` 回確認する
    pub fn immediate(max_attempts: u32) -> Self {
        Self::new(max_attempts, 0, 0)
    }

    /// `attempt` 回目（1始まり）の確認が失敗した後の待ち時間
    pub fn delay_for(&self, attempt: u32) -> u64 {
        let shift = attempt.saturating_sub(1).min(32);
        let delay = self.initial_delay_ms.saturating_mul(1u64 << shift);
        std::cmp::min(delay, self.max_delay_ms)
    }
}

impl Default for ReadinessPolicy {
    fn default() -> Self {
        Self::new(
            DEFAULT_MAX_ATTEMPTS,
            DEFAULT_INITIAL_DELAY_MS,
            DEFAULT_MAX_DELAY_MS,
        )
    }
}
