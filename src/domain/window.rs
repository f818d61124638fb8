use std::fmt;

use strum::IntoEnumIterator;
use strum_macros::EnumIter;

/// Historical span offered to the user. The price service only accepts these values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum HistoryWindow {
    OneDay,
    SevenDays,
    FourteenDays,
    ThirtyDays,
    NinetyDays,
}

impl HistoryWindow {
    pub const fn days(self) -> u32 {
        match self {
            HistoryWindow::OneDay => 1,
            HistoryWindow::SevenDays => 7,
            HistoryWindow::FourteenDays => 14,
            HistoryWindow::ThirtyDays => 30,
            HistoryWindow::NinetyDays => 90,
        }
    }

    pub fn from_days(days: u32) -> Option<Self> {
        Self::iter().find(|w| w.days() == days)
    }

    /// Menu labels, shortest window first
    pub fn menu_labels() -> Vec<String> {
        Self::iter().map(|w| w.to_string()).collect()
    }

    /// Index into `menu_labels()` back to a window
    pub fn from_menu_index(index: usize) -> Option<Self> {
        Self::iter().nth(index)
    }
}

impl fmt::Display for HistoryWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.days())
    }
}
