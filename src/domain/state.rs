// Selection state: active group plus year range, advanced by pure transitions
use crate::domain::group::ThematicGroup;
use crate::domain::range::RangeState;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardState {
    pub group: ThematicGroup,
    pub range: RangeState,
}

/// A user interaction with the control surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    SelectGroup { group: ThematicGroup },
    SetFrom { year: i32 },
    SetTo { year: i32 },
    ApplyPreset { from: i32, to: i32 },
}

impl DashboardState {
    pub fn new(group: ThematicGroup, range: RangeState) -> Self {
        Self { group, range }
    }

    pub fn apply(self, action: Action) -> Self {
        match action {
            Action::SelectGroup { group } => Self { group, ..self },
            Action::SetFrom { year } => Self {
                range: self.range.set_from(year),
                ..self
            },
            Action::SetTo { year } => Self {
                range: self.range.set_to(year),
                ..self
            },
            Action::ApplyPreset { from, to } => Self {
                range: self.range.apply_preset(from, to),
                ..self
            },
        }
    }

    /// Status line: `"<group label> | <from>–<to>"`.
    pub fn status(&self) -> String {
        format!(
            "{} | {}–{}",
            self.group.label(),
            self.range.from_year(),
            self.range.to_year()
        )
    }
}
