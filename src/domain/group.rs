// Thematic groups and their indicator tables
use crate::domain::metric::GoodDirection;
use crate::domain::record::{DatasetKind, Field, Record};
use crate::error::DashboardError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThematicGroup {
    A,
    B,
    C,
    D,
    E,
    F,
}

/// One tracked indicator: where its value comes from and which way is better.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorSpec {
    pub label: &'static str,
    pub dataset: DatasetKind,
    pub field: Field,
    pub good_direction: GoodDirection,
    pub color: &'static str,
    /// Drawn as a dashed overlay on top of the group's primary series.
    pub dashed: bool,
}

impl IndicatorSpec {
    const fn new(
        label: &'static str,
        dataset: DatasetKind,
        field: Field,
        good_direction: GoodDirection,
        color: &'static str,
    ) -> Self {
        Self {
            label,
            dataset,
            field,
            good_direction,
            color,
            dashed: false,
        }
    }

    const fn overlay(self) -> Self {
        Self { dashed: true, ..self }
    }

    pub fn select(&self, record: &Record) -> Option<f64> {
        debug_assert!(self.dataset.has_field(self.field));
        record.get(self.field)
    }
}

use DatasetKind as K;
use Field as F;
use GoodDirection::{Down, Up};

const GROUP_A: [IndicatorSpec; 4] = [
    IndicatorSpec::new("Bevétel / GDP", K::GovFinance, F::Revenue, Up, "#2563eb"),
    IndicatorSpec::new("Kiadás / GDP", K::GovFinance, F::Expenditure, Down, "#dc2626"),
    IndicatorSpec::new("Egyenleg / GDP", K::GovFinance, F::Balance, Up, "#9ca3af"),
    IndicatorSpec::new("Államadósság / GDP", K::GovDebt, F::Debt, Down, "#475569").overlay(),
];

const GROUP_B: [IndicatorSpec; 4] = [
    IndicatorSpec::new("Hazai infláció", K::Prices, F::Cpi, Down, "#2563eb"),
    IndicatorSpec::new("EU infláció", K::Prices, F::Hicp, Down, "#16a34a"),
    IndicatorSpec::new("Lakásárindex (reál)", K::Prices, F::HousePrice, Down, "#f59e0b"),
    IndicatorSpec::new("Reálkereset-index", K::Prices, F::RealWage, Up, "#dc2626"),
];

const GROUP_C: [IndicatorSpec; 4] = [
    IndicatorSpec::new("Foglalkoztatási ráta", K::Labour, F::Employment, Up, "#16a34a"),
    IndicatorSpec::new("Munkanélküliségi ráta", K::Labour, F::Unemployment, Down, "#dc2626"),
    IndicatorSpec::new("Aktivitási ráta", K::Labour, F::Activity, Up, "#2563eb"),
    IndicatorSpec::new("Hosszú távú munkanélküliség", K::Labour, F::LongTermUnemployment, Down, "#7c3aed"),
];

const GROUP_D: [IndicatorSpec; 4] = [
    IndicatorSpec::new("GDP növekedés", K::Economy, F::Growth, Up, "#2563eb"),
    IndicatorSpec::new("Egy főre jutó GDP (reál index)", K::Economy, F::GdpPerCapita, Up, "#16a34a"),
    IndicatorSpec::new("Beruházási ráta", K::Economy, F::Investment, Up, "#f59e0b"),
    IndicatorSpec::new("Termelékenység (reál index)", K::Economy, F::Productivity, Up, "#dc2626"),
];

const GROUP_E: [IndicatorSpec; 4] = [
    IndicatorSpec::new("Szociális kiadások / GDP", K::Social, F::SocialSpending, Down, "#2563eb"),
    IndicatorSpec::new("Nyugdíjkiadások / GDP", K::Social, F::Pensions, Down, "#16a34a"),
    IndicatorSpec::new("Egészségügyi kiadások / GDP", K::Social, F::Health, Down, "#f59e0b"),
    IndicatorSpec::new("Családtámogatások / GDP", K::Social, F::FamilySupport, Down, "#dc2626"),
];

const GROUP_F: [IndicatorSpec; 4] = [
    IndicatorSpec::new("Népesség (millió fő)", K::Demography, F::Population, Down, "#2563eb"),
    IndicatorSpec::new("Termékenységi ráta (TFR)", K::Demography, F::Fertility, Up, "#16a34a"),
    IndicatorSpec::new("Várható élettartam (év)", K::Demography, F::LifeExpectancy, Up, "#f59e0b"),
    IndicatorSpec::new("Időskori eltartottsági ráta (%)", K::Demography, F::OldAgeDependency, Down, "#dc2626"),
];

impl ThematicGroup {
    pub const ALL: [ThematicGroup; 6] = [
        ThematicGroup::A,
        ThematicGroup::B,
        ThematicGroup::C,
        ThematicGroup::D,
        ThematicGroup::E,
        ThematicGroup::F,
    ];

    pub fn key(self) -> &'static str {
        match self {
            ThematicGroup::A => "A",
            ThematicGroup::B => "B",
            ThematicGroup::C => "C",
            ThematicGroup::D => "D",
            ThematicGroup::E => "E",
            ThematicGroup::F => "F",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ThematicGroup::A => "Az állam helyzete",
            ThematicGroup::B => "Árak és jövedelmek",
            ThematicGroup::C => "Munkaerőpiac",
            ThematicGroup::D => "Gazdasági teljesítmény",
            ThematicGroup::E => "Társadalmi újraelosztás",
            ThematicGroup::F => "Demográfia és humán háttér",
        }
    }

    pub fn table_title(self) -> String {
        let badge = match self {
            ThematicGroup::A => "🟦",
            ThematicGroup::B => "🟧",
            ThematicGroup::C => "🟩",
            ThematicGroup::D => "🟨",
            ThematicGroup::E => "🟪",
            ThematicGroup::F => "🟫",
        };
        format!("{badge} {}", self.label())
    }

    pub fn y_axis_title(self) -> &'static str {
        match self {
            ThematicGroup::A | ThematicGroup::E => "% / GDP",
            ThematicGroup::B | ThematicGroup::C | ThematicGroup::D => "%",
            ThematicGroup::F => "Vegyes mértékegység",
        }
    }

    pub fn indicators(self) -> &'static [IndicatorSpec] {
        match self {
            ThematicGroup::A => &GROUP_A,
            ThematicGroup::B => &GROUP_B,
            ThematicGroup::C => &GROUP_C,
            ThematicGroup::D => &GROUP_D,
            ThematicGroup::E => &GROUP_E,
            ThematicGroup::F => &GROUP_F,
        }
    }

    /// Dataset whose years form the chart's x axis.
    pub fn primary_dataset(self) -> DatasetKind {
        self.indicators()[0].dataset
    }

    /// Distinct datasets the group reads, primary first.
    pub fn datasets(self) -> Vec<DatasetKind> {
        let mut out: Vec<DatasetKind> = Vec::new();
        for spec in self.indicators() {
            if !out.contains(&spec.dataset) {
                out.push(spec.dataset);
            }
        }
        out
    }
}

impl std::fmt::Display for ThematicGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ThematicGroup {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThematicGroup::ALL
            .into_iter()
            .find(|g| g.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DashboardError::UnknownGroup(s.to_string()))
    }
}
