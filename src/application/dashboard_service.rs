// Dashboard service - Use cases for rendering and advancing the dashboard
use crate::application::presenter::present;
use crate::application::store::TimeSeriesStore;
use crate::domain::dashboard::DashboardView;
use crate::domain::group::ThematicGroup;
use crate::domain::range::{CyclePreset, RangeState, YearDomain};
use crate::domain::state::{Action, DashboardState};
use crate::error::Result;
use serde::Serialize;
use std::sync::Arc;

/// Validated defaults and control-surface settings.
#[derive(Debug, Clone)]
pub struct DashboardSettings {
    pub default_state: DashboardState,
    pub domain: YearDomain,
    pub presets: Vec<CyclePreset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupTab {
    pub key: ThematicGroup,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PresetButton {
    pub label: String,
    pub from: i32,
    pub to: i32,
    pub active: bool,
}

/// State of the pickers and buttons that goes along with a view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Controls {
    pub groups: Vec<GroupTab>,
    pub presets: Vec<PresetButton>,
    pub years: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardResponse {
    pub state: DashboardState,
    pub view: DashboardView,
    pub controls: Controls,
}

#[derive(Clone)]
pub struct DashboardService {
    store: Arc<TimeSeriesStore>,
    settings: DashboardSettings,
}

impl DashboardService {
    pub fn new(store: Arc<TimeSeriesStore>, settings: DashboardSettings) -> Self {
        Self { store, settings }
    }

    pub fn initial_state(&self) -> DashboardState {
        self.settings.default_state
    }

    pub fn presets(&self) -> &[CyclePreset] {
        &self.settings.presets
    }

    /// Build a state from optional request parameters, falling back to the
    /// configured defaults. Years outside the domain are rejected.
    pub fn state_from(
        &self,
        group: Option<ThematicGroup>,
        from: Option<i32>,
        to: Option<i32>,
    ) -> Result<DashboardState> {
        let defaults = self.initial_state();
        let from = self.settings.domain.check(from.unwrap_or(defaults.range.from_year()))?;
        let to = self.settings.domain.check(to.unwrap_or(defaults.range.to_year()))?;
        let range = RangeState::new(from, to)?;
        Ok(DashboardState::new(group.unwrap_or(defaults.group), range))
    }

    pub fn render(&self, state: DashboardState) -> Result<DashboardResponse> {
        let state = DashboardState::new(state.group, self.settings.domain.check_range(state.range)?);
        let view = present(&state, &self.store);
        Ok(DashboardResponse {
            controls: self.controls(&state),
            state,
            view,
        })
    }

    /// Validate an action against the year domain, apply it and render the
    /// resulting state.
    pub fn apply(&self, state: DashboardState, action: Action) -> Result<DashboardResponse> {
        let domain = &self.settings.domain;
        match action {
            Action::SelectGroup { .. } => {}
            Action::SetFrom { year } | Action::SetTo { year } => {
                domain.check(year)?;
            }
            Action::ApplyPreset { from, to } => {
                domain.check_range(RangeState::new(from, to)?)?;
            }
        }

        let next = state.apply(action);
        tracing::debug!(?action, status = %next.status(), "Applied action");
        self.render(next)
    }

    fn controls(&self, state: &DashboardState) -> Controls {
        let groups = ThematicGroup::ALL
            .into_iter()
            .map(|g| GroupTab {
                key: g,
                label: g.label(),
                active: g == state.group,
            })
            .collect();

        let presets = self
            .settings
            .presets
            .iter()
            .map(|p| PresetButton {
                label: p.label.clone(),
                from: p.from,
                to: p.to,
                active: p.matches(state.range),
            })
            .collect();

        Controls {
            groups,
            presets,
            years: self.settings.domain.years(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::metric::Classification;
    use crate::domain::record::{Dataset, DatasetKind};
    use crate::error::DashboardError;

    fn service() -> DashboardService {
        let store = TimeSeriesStore::from_datasets(vec![Dataset::parse(
            DatasetKind::Labour,
            "year,emp,unemp,act,longu\n2010,55.4,11.2,62.4,5.5\n2014,61.8,7.7,67.0,3.7\n2018,69.2,3.7,71.9,1.4\n",
        )]);
        let settings = DashboardSettings {
            default_state: DashboardState::new(ThematicGroup::A, RangeState::new(2010, 2014).unwrap()),
            domain: YearDomain::default(),
            presets: vec![
                CyclePreset { label: "2010–2014".into(), from: 2010, to: 2014 },
                CyclePreset { label: "2014–2018".into(), from: 2014, to: 2018 },
            ],
        };
        DashboardService::new(Arc::new(store), settings)
    }

    #[test]
    fn test_state_from_uses_defaults() {
        let svc = service();
        assert_eq!(svc.state_from(None, None, None).unwrap(), svc.initial_state());

        let state = svc.state_from(Some(ThematicGroup::C), Some(2014), None).unwrap();
        assert_eq!(state.group, ThematicGroup::C);
        assert_eq!((state.range.from_year(), state.range.to_year()), (2014, 2014));
    }

    #[test]
    fn test_state_from_rejects_out_of_domain_and_inverted() {
        let svc = service();
        assert!(matches!(
            svc.state_from(None, Some(2005), None),
            Err(DashboardError::YearOutOfDomain { year: 2005, .. })
        ));
        assert!(matches!(
            svc.state_from(None, Some(2018), Some(2014)),
            Err(DashboardError::InvertedRange { .. })
        ));
    }

    #[test]
    fn test_render_marks_active_controls() {
        let svc = service();
        let resp = svc.render(svc.initial_state()).unwrap();

        let active_groups: Vec<_> = resp.controls.groups.iter().filter(|g| g.active).collect();
        assert_eq!(active_groups.len(), 1);
        assert_eq!(active_groups[0].key, ThematicGroup::A);
        assert!(resp.controls.presets[0].active);
        assert!(!resp.controls.presets[1].active);
        assert_eq!(resp.controls.years.first(), Some(&2010));
        assert_eq!(resp.controls.years.last(), Some(&2026));
    }

    #[test]
    fn test_apply_preset_then_group() {
        let svc = service();
        let resp = svc
            .apply(svc.initial_state(), Action::ApplyPreset { from: 2014, to: 2018 })
            .unwrap();
        assert!(resp.controls.presets[1].active);

        let resp = svc
            .apply(resp.state, Action::SelectGroup { group: ThematicGroup::C })
            .unwrap();
        assert_eq!(resp.view.status, "Munkaerőpiac | 2014–2018");
        let unemployment = &resp.view.table.cells[1];
        assert_eq!(unemployment.delta_display, "-4.0");
        assert_eq!(unemployment.classification, Classification::Good);
    }

    #[test]
    fn test_apply_rejects_out_of_domain_years() {
        let svc = service();
        let state = svc.initial_state();
        assert!(svc.apply(state, Action::SetFrom { year: 2030 }).is_err());
        assert!(svc.apply(state, Action::SetTo { year: 1999 }).is_err());
        assert!(svc.apply(state, Action::ApplyPreset { from: 2018, to: 2014 }).is_err());
        assert!(svc.apply(state, Action::ApplyPreset { from: 2022, to: 2030 }).is_err());
    }

    #[test]
    fn test_set_from_past_end_moves_both() {
        let svc = service();
        let resp = svc.apply(svc.initial_state(), Action::SetFrom { year: 2018 }).unwrap();
        assert_eq!(resp.view.status, "Az állam helyzete | 2018–2018");
        assert!(resp.controls.presets.iter().all(|p| !p.active));
    }
}
