// Year range selection with linked lower/upper bounds
use crate::domain::record::Dataset;
use crate::error::{DashboardError, Result};
use serde::{Deserialize, Serialize};

pub const FIRST_YEAR: i32 = 2010;
pub const LAST_YEAR: i32 = 2026;

/// Closed interval of years the pickers offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearDomain {
    pub min: i32,
    pub max: i32,
}

impl Default for YearDomain {
    fn default() -> Self {
        Self {
            min: FIRST_YEAR,
            max: LAST_YEAR,
        }
    }
}

impl YearDomain {
    pub fn contains(&self, year: i32) -> bool {
        (self.min..=self.max).contains(&year)
    }

    pub fn check(&self, year: i32) -> Result<i32> {
        if self.contains(year) {
            Ok(year)
        } else {
            Err(DashboardError::YearOutOfDomain {
                year,
                min: self.min,
                max: self.max,
            })
        }
    }

    pub fn check_range(&self, range: RangeState) -> Result<RangeState> {
        self.check(range.from_year)?;
        self.check(range.to_year)?;
        Ok(range)
    }

    pub fn years(&self) -> Vec<i32> {
        (self.min..=self.max).collect()
    }
}

/// Selected `[from_year, to_year]` window. `from_year <= to_year` holds after
/// every mutation; the two setters are the only way to move one bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RangeState {
    from_year: i32,
    to_year: i32,
}

impl RangeState {
    pub fn new(from_year: i32, to_year: i32) -> Result<Self> {
        if from_year > to_year {
            return Err(DashboardError::InvertedRange {
                from: from_year,
                to: to_year,
            });
        }
        Ok(Self { from_year, to_year })
    }

    pub fn from_year(&self) -> i32 {
        self.from_year
    }

    pub fn to_year(&self) -> i32 {
        self.to_year
    }

    /// Move the lower bound; pushes the upper bound up when it would fall behind.
    pub fn set_from(self, year: i32) -> Self {
        Self {
            from_year: year,
            to_year: self.to_year.max(year),
        }
    }

    /// Move the upper bound; pulls the lower bound down when it would overtake.
    pub fn set_to(self, year: i32) -> Self {
        Self {
            from_year: self.from_year.min(year),
            to_year: year,
        }
    }

    /// Set both bounds at once. Presets are validated when configuration is
    /// loaded, so no clamping happens here.
    pub fn apply_preset(self, from_year: i32, to_year: i32) -> Self {
        debug_assert!(from_year <= to_year);
        Self { from_year, to_year }
    }

    pub fn contains(&self, year: i32) -> bool {
        (self.from_year..=self.to_year).contains(&year)
    }

    /// Records with `from_year <= year <= to_year`, in their original order.
    pub fn filter(&self, dataset: &Dataset) -> Dataset {
        Dataset::new(
            dataset.kind,
            dataset
                .records
                .iter()
                .filter(|r| self.contains(r.year))
                .cloned()
                .collect(),
        )
    }
}

impl<'de> Deserialize<'de> for RangeState {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            from_year: i32,
            to_year: i32,
        }

        let raw = Raw::deserialize(deserializer)?;
        RangeState::new(raw.from_year, raw.to_year).map_err(serde::de::Error::custom)
    }
}

/// A named shortcut that sets both range endpoints at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CyclePreset {
    pub label: String,
    pub from: i32,
    pub to: i32,
}

impl CyclePreset {
    pub fn matches(&self, range: RangeState) -> bool {
        self.from == range.from_year() && self.to == range.to_year()
    }

    pub fn validate(&self, domain: &YearDomain) -> Result<()> {
        let invalid = |reason: String| DashboardError::InvalidPreset {
            label: self.label.clone(),
            reason,
        };
        if self.from > self.to {
            return Err(invalid(format!("{} is after {}", self.from, self.to)));
        }
        domain.check(self.from).map_err(|e| invalid(e.to_string()))?;
        domain.check(self.to).map_err(|e| invalid(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::{DatasetKind, Field, Record};
    use proptest::prelude::*;

    fn debt(years: &[i32]) -> Dataset {
        Dataset::new(
            DatasetKind::GovDebt,
            years
                .iter()
                .map(|&y| Record::new(y, vec![(Field::Debt, y as f64 / 10.0)]))
                .collect(),
        )
    }

    #[test]
    fn test_set_from_pushes_upper_bound() {
        let range = RangeState::new(2010, 2014).unwrap().set_from(2018);
        assert_eq!((range.from_year(), range.to_year()), (2018, 2018));

        let range = RangeState::new(2010, 2014).unwrap().set_from(2012);
        assert_eq!((range.from_year(), range.to_year()), (2012, 2014));
    }

    #[test]
    fn test_set_to_pulls_lower_bound() {
        let range = RangeState::new(2014, 2018).unwrap().set_to(2011);
        assert_eq!((range.from_year(), range.to_year()), (2011, 2011));

        let range = RangeState::new(2014, 2018).unwrap().set_to(2022);
        assert_eq!((range.from_year(), range.to_year()), (2014, 2022));
    }

    #[test]
    fn test_apply_preset_sets_both_bounds() {
        let range = RangeState::new(2010, 2010).unwrap().apply_preset(2018, 2022);
        assert_eq!((range.from_year(), range.to_year()), (2018, 2022));
    }

    #[test]
    fn test_new_rejects_inverted_range() {
        assert!(matches!(
            RangeState::new(2015, 2012),
            Err(DashboardError::InvertedRange { from: 2015, to: 2012 })
        ));
    }

    #[test]
    fn test_deserialize_rejects_inverted_range() {
        let ok: RangeState = serde_json::from_str(r#"{"from_year":2010,"to_year":2014}"#).unwrap();
        assert_eq!(ok.to_year(), 2014);
        assert!(serde_json::from_str::<RangeState>(r#"{"from_year":2014,"to_year":2010}"#).is_err());
    }

    #[test]
    fn test_filter_is_inclusive_and_ordered() {
        let ds = debt(&[2010, 2011, 2012, 2013, 2014, 2015]);
        let range = RangeState::new(2011, 2013).unwrap();
        assert_eq!(range.filter(&ds).years(), vec![2011, 2012, 2013]);
    }

    #[test]
    fn test_filter_outside_loaded_years_is_empty() {
        let ds = debt(&[2010, 2011]);
        let range = RangeState::new(2020, 2024).unwrap();
        assert!(range.filter(&ds).is_empty());
    }

    #[test]
    fn test_year_domain_check() {
        let domain = YearDomain::default();
        assert_eq!(domain.check(2010).unwrap(), 2010);
        assert_eq!(domain.check(2026).unwrap(), 2026);
        assert!(domain.check(2009).is_err());
        assert!(domain.check(2027).is_err());
        assert_eq!(domain.years().len(), 17);
    }

    #[test]
    fn test_preset_validation() {
        let domain = YearDomain::default();
        let ok = CyclePreset { label: "2018–2022".into(), from: 2018, to: 2022 };
        assert!(ok.validate(&domain).is_ok());
        assert!(ok.matches(RangeState::new(2018, 2022).unwrap()));
        assert!(!ok.matches(RangeState::new(2018, 2021).unwrap()));

        let inverted = CyclePreset { label: "bad".into(), from: 2022, to: 2018 };
        assert!(matches!(inverted.validate(&domain), Err(DashboardError::InvalidPreset { .. })));

        let outside = CyclePreset { label: "old".into(), from: 2006, to: 2010 };
        assert!(outside.validate(&domain).is_err());
    }

    #[derive(Debug, Clone)]
    enum Op {
        From(i32),
        To(i32),
        Preset(i32, i32),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (2010..=2026i32).prop_map(Op::From),
            (2010..=2026i32).prop_map(Op::To),
            (2010..=2026i32, 0..=16i32).prop_map(|(a, len)| Op::Preset(a, (a + len).min(2026))),
        ]
    }

    proptest! {
        #[test]
        fn prop_bounds_never_cross(ops in prop::collection::vec(op(), 0..40)) {
            let mut range = RangeState::new(2010, 2014).unwrap();
            for op in ops {
                range = match op {
                    Op::From(y) => range.set_from(y),
                    Op::To(y) => range.set_to(y),
                    Op::Preset(a, b) => range.apply_preset(a, b),
                };
                prop_assert!(range.from_year() <= range.to_year());
            }
        }

        #[test]
        fn prop_filter_is_idempotent(
            years in prop::collection::btree_set(2005..2030i32, 0..20),
            from in 2010..=2026i32,
            len in 0..=16i32,
        ) {
            let ds = debt(&years.into_iter().collect::<Vec<_>>());
            let range = RangeState::new(from, (from + len).min(2026)).unwrap();
            let once = range.filter(&ds);
            let twice = range.filter(&once);
            prop_assert_eq!(&once, &twice);
            prop_assert!(once.years().windows(2).all(|w| w[0] < w[1]));
        }
    }
}
