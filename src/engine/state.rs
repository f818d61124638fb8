use crate::domain::{AssetDescriptor, HistoryWindow};
use crate::models::PriceSnapshotRow;

/// One stage of an interactive session. Each stage carries what the next one needs.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    FetchSnapshot,
    DisplaySnapshot(Vec<PriceSnapshotRow>),
    SelectAsset(Vec<PriceSnapshotRow>),
    SelectWindow(AssetDescriptor),
    FetchAndRender(AssetDescriptor, HistoryWindow),
    Done,
}

impl Step {
    pub fn name(&self) -> &'static str {
        match self {
            Step::FetchSnapshot => "FetchSnapshot",
            Step::DisplaySnapshot(_) => "DisplaySnapshot",
            Step::SelectAsset(_) => "SelectAsset",
            Step::SelectWindow(_) => "SelectWindow",
            Step::FetchAndRender(..) => "FetchAndRender",
            Step::Done => "Done",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Step::Done)
    }
}
