use services::{StageOverview, StageStatus};

/// One tile in the stage-selection grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StageTileVm {
    pub index: usize,
    pub heading: String,
    pub title: String,
    pub description: Option<String>,
    pub count_label: String,
    pub status: StageStatus,
    pub badge: Option<&'static str>,
}

impl StageTileVm {
    #[must_use]
    pub fn class(&self) -> &'static str {
        match self.status {
            StageStatus::Locked => "stage-tile stage-tile--locked",
            StageStatus::Completed => "stage-tile stage-tile--completed",
            StageStatus::Unlocked => "stage-tile",
        }
    }

    #[must_use]
    pub fn badge_class(&self) -> &'static str {
        match self.status {
            StageStatus::Completed => "stage-badge stage-badge--completed",
            _ => "stage-badge stage-badge--locked",
        }
    }
}

#[must_use]
pub fn map_stage_tile(overview: &StageOverview) -> StageTileVm {
    let count_label = if overview.question_count == 1 {
        "1 question".to_string()
    } else {
        format!("{} questions", overview.question_count)
    };

    let badge = match overview.status {
        StageStatus::Completed => Some("Completed"),
        StageStatus::Locked => Some("Locked"),
        StageStatus::Unlocked => None,
    };

    StageTileVm {
        index: overview.index,
        heading: format!("Stage {}", overview.id),
        title: overview.title.clone(),
        description: overview.description.clone(),
        count_label,
        status: overview.status,
        badge,
    }
}
