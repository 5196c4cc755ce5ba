use quiz_core::model::StageId;

/// Selectability of a stage in the stage-selection view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageStatus {
    Locked,
    Unlocked,
    Completed,
}

impl StageStatus {
    #[must_use]
    pub fn is_selectable(self) -> bool {
        !matches!(self, StageStatus::Locked)
    }
}

/// Per-stage row for the stage-selection view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageOverview {
    pub index: usize,
    pub id: StageId,
    pub title: String,
    pub description: Option<String>,
    pub question_count: usize,
    pub status: StageStatus,
    pub is_current: bool,
}
