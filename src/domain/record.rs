// Time-series records and per-dataset column layouts
use serde::{Deserialize, Serialize};

/// One column of a dataset, across all seven sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Revenue,
    Expenditure,
    Balance,
    Debt,
    Cpi,
    Hicp,
    HousePrice,
    RealWage,
    Employment,
    Unemployment,
    Activity,
    LongTermUnemployment,
    Growth,
    GdpPerCapita,
    Investment,
    Productivity,
    SocialSpending,
    Pensions,
    Health,
    FamilySupport,
    Population,
    Fertility,
    LifeExpectancy,
    OldAgeDependency,
}

/// The seven sources the dashboard is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatasetKind {
    GovFinance,
    GovDebt,
    Prices,
    Labour,
    Economy,
    Social,
    Demography,
}

impl DatasetKind {
    pub const ALL: [DatasetKind; 7] = [
        DatasetKind::GovFinance,
        DatasetKind::GovDebt,
        DatasetKind::Prices,
        DatasetKind::Labour,
        DatasetKind::Economy,
        DatasetKind::Social,
        DatasetKind::Demography,
    ];

    /// Column layout after the leading `year` column: `(column index, field)`.
    pub fn layout(self) -> &'static [(usize, Field)] {
        use Field::*;
        match self {
            DatasetKind::GovFinance => &[(1, Revenue), (2, Expenditure), (3, Balance)],
            DatasetKind::GovDebt => &[(1, Debt)],
            DatasetKind::Prices => &[(1, Cpi), (2, Hicp), (3, HousePrice), (4, RealWage)],
            DatasetKind::Labour => &[
                (1, Employment),
                (2, Unemployment),
                (3, Activity),
                (4, LongTermUnemployment),
            ],
            DatasetKind::Economy => &[(1, Growth), (2, GdpPerCapita), (3, Investment), (4, Productivity)],
            DatasetKind::Social => &[(1, SocialSpending), (2, Pensions), (3, Health), (4, FamilySupport)],
            DatasetKind::Demography => &[
                (1, Population),
                (2, Fertility),
                (3, LifeExpectancy),
                (4, OldAgeDependency),
            ],
        }
    }

    pub fn default_file_name(self) -> &'static str {
        match self {
            DatasetKind::GovFinance => "main_gov_finance_2010_2026.csv",
            DatasetKind::GovDebt => "gov_debt_2010_2026.csv",
            DatasetKind::Prices => "prices_living_2010_2026.csv",
            DatasetKind::Labour => "labour_market_2010_2026.csv",
            DatasetKind::Economy => "economic_performance_2010_2026.csv",
            DatasetKind::Social => "social_redistribution_2010_2026.csv",
            DatasetKind::Demography => "demography_human_background_2010_2026.csv",
        }
    }

    /// Key used in configuration (`files.<key>`) and logs.
    pub fn key(self) -> &'static str {
        match self {
            DatasetKind::GovFinance => "gov_finance",
            DatasetKind::GovDebt => "gov_debt",
            DatasetKind::Prices => "prices",
            DatasetKind::Labour => "labour",
            DatasetKind::Economy => "economy",
            DatasetKind::Social => "social",
            DatasetKind::Demography => "demography",
        }
    }

    pub fn has_field(self, field: Field) -> bool {
        self.layout().iter().any(|(_, f)| *f == field)
    }
}

impl std::fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// One year's observation. Unparseable cells are stored as `NaN`.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub year: i32,
    pub values: Vec<(Field, f64)>,
}

impl Record {
    pub fn new(year: i32, values: Vec<(Field, f64)>) -> Self {
        Self { year, values }
    }

    /// Value of `field`, or `None` when the column is absent or not a finite number.
    pub fn get(&self, field: Field) -> Option<f64> {
        self.values
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, v)| *v)
            .filter(|v| v.is_finite())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub kind: DatasetKind,
    pub records: Vec<Record>,
}

impl Dataset {
    pub fn new(kind: DatasetKind, records: Vec<Record>) -> Self {
        Self { kind, records }
    }

    pub fn empty(kind: DatasetKind) -> Self {
        Self::new(kind, Vec::new())
    }

    /// Parse comma-separated text: the first line is a header, every other
    /// line is one record in the kind's column layout.
    ///
    /// Only numeric coercion is applied. A cell that is empty, missing or not
    /// a number becomes `NaN`; a row whose year is not an integer has no key
    /// and is dropped.
    pub fn parse(kind: DatasetKind, text: &str) -> Self {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(text.trim().as_bytes());

        let mut records = Vec::new();
        for (line, row) in reader.records().enumerate() {
            let row = match row {
                Ok(row) => row,
                Err(e) => {
                    tracing::warn!(dataset = %kind, line = line + 2, "Skipping unreadable row: {}", e);
                    continue;
                }
            };

            let Some(year) = row.get(0).and_then(|cell| cell.parse::<i32>().ok()) else {
                tracing::warn!(dataset = %kind, line = line + 2, "Skipping row without a valid year");
                continue;
            };

            let values = kind
                .layout()
                .iter()
                .map(|&(column, field)| (field, coerce_number(row.get(column))))
                .collect();

            records.push(Record::new(year, values));
        }

        tracing::debug!(dataset = %kind, records = records.len(), "Parsed dataset");
        Self::new(kind, records)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn first(&self) -> Option<&Record> {
        self.records.first()
    }

    pub fn last(&self) -> Option<&Record> {
        self.records.last()
    }

    pub fn years(&self) -> Vec<i32> {
        self.records.iter().map(|r| r.year).collect()
    }

    pub fn record_for_year(&self, year: i32) -> Option<&Record> {
        self.records.iter().find(|r| r.year == year)
    }
}

fn coerce_number(cell: Option<&str>) -> f64 {
    match cell {
        Some(s) if !s.is_empty() => s.parse::<f64>().unwrap_or(f64::NAN),
        _ => f64::NAN,
    }
}
