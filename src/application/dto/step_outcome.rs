//! # Step Outcome DTO
//!
//! ワークフローの各ステップの結果

use std::fmt;

/// ワークフローのステップ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    CreateBucket,
    WaitForBucket,
    CreateDatabase,
    FetchStandings,
    ExtractStandings,
    UploadStandings,
    CreateTable,
    ConfigureQueryOutput,
}

impl Step {
    /// 実行順の全ステップ
    pub const ALL: [Step; 8] = [
        Step::CreateBucket,
        Step::WaitForBucket,
        Step::CreateDatabase,
        Step::FetchStandings,
        Step::ExtractStandings,
        Step::UploadStandings,
        Step::CreateTable,
        Step::ConfigureQueryOutput,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Step::CreateBucket => "Create S3 bucket",
            Step::WaitForBucket => "Wait for S3 bucket",
            Step::CreateDatabase => "Create Glue database",
            Step::FetchStandings => "Fetch standings",
            Step::ExtractStandings => "Extract standings",
            Step::UploadStandings => "Upload standings",
            Step::CreateTable => "Create Glue table",
            Step::ConfigureQueryOutput => "Configure Athena output",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// ステップの結果
///
/// 失敗してもワークフローは止めない。呼び出し側が続行を判断する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// 成功（詳細メッセージ）
    Succeeded(String),
    /// 失敗（原因）
    Failed(String),
    /// 実行しなかった（理由）
    Skipped(String),
}

impl StepOutcome {
    pub fn succeeded(detail: impl Into<String>) -> Self {
        StepOutcome::Succeeded(detail.into())
    }

    pub fn failed(reason: impl Into<String>) -> Self {
        StepOutcome::Failed(reason.into())
    }

    pub fn skipped(reason: impl Into<String>) -> Self {
        StepOutcome::Skipped(reason.into())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, StepOutcome::Succeeded(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, StepOutcome::Failed(_))
    }

    pub fn message(&self) -> &str {
        match self {
            StepOutcome::Succeeded(m) | StepOutcome::Failed(m) | StepOutcome::Skipped(m) => m,
        }
    }

    /// 進捗表示用の記号
    pub fn symbol(&self) -> &'static str {
        match self {
            StepOutcome::Succeeded(_) => "✓",
            StepOutcome::Failed(_) => "✗",
            StepOutcome::Skipped(_) => "⚠",
        }
    }
}

/// 1回の実行の結果一覧（実行順）
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    steps: Vec<(Step, StepOutcome)>,
}

impl RunReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, step: Step, outcome: StepOutcome) {
        self.steps.push((step, outcome));
    }

    pub fn steps(&self) -> &[(Step, StepOutcome)] {
        &self.steps
    }

    /// ステップの結果（未実行なら `None`）
    pub fn outcome(&self, step: Step) -> Option<&StepOutcome> {
        self.steps
            .iter()
            .find(|(s, _)| *s == step)
            .map(|(_, outcome)| outcome)
    }

    pub fn succeeded_count(&self) -> usize {
        self.steps.iter().filter(|(_, o)| o.is_success()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.steps.iter().filter(|(_, o)| o.is_failure()).count()
    }

    pub fn skipped_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|(_, o)| matches!(o, StepOutcome::Skipped(_)))
            .count()
    }

    pub fn is_success(&self) -> bool {
        self.failed_count() == 0
    }
}
