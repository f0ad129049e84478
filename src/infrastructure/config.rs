use crate::application::dashboard_service::DashboardSettings;
use crate::domain::group::ThematicGroup;
use crate::domain::range::{CyclePreset, RangeState, YearDomain};
use crate::domain::record::DatasetKind;
use crate::domain::state::DashboardState;
use crate::error::DashboardError;
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub source: SourceSettings,
    /// Optional file name overrides keyed by dataset (`gov_finance`, `prices`, ...).
    #[serde(default)]
    pub files: HashMap<String, String>,
    pub defaults: DefaultSettings,
    #[serde(default)]
    pub years: YearDomain,
    #[serde(default)]
    pub presets: Vec<CyclePreset>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind: String,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Dir,
    Http,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SourceSettings {
    pub kind: SourceKind,
    /// Directory path or base URL, depending on `kind`.
    pub location: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DefaultSettings {
    pub group: String,
    pub from_year: i32,
    pub to_year: i32,
}

impl AppConfig {
    pub fn file_name(&self, kind: DatasetKind) -> String {
        self.files
            .get(kind.key())
            .cloned()
            .unwrap_or_else(|| kind.default_file_name().to_string())
    }

    /// Check defaults and presets against the year domain. Anything outside
    /// it is a configuration error rather than something to clamp.
    pub fn dashboard_settings(&self) -> Result<DashboardSettings, DashboardError> {
        let domain = self.years;
        let group: ThematicGroup = self.defaults.group.parse()?;
        let range = domain.check_range(RangeState::new(self.defaults.from_year, self.defaults.to_year)?)?;

        for preset in &self.presets {
            preset.validate(&domain)?;
        }

        Ok(DashboardSettings {
            default_state: DashboardState::new(group, range),
            domain,
            presets: self.presets.clone(),
        })
    }
}

pub fn load_app_config() -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/dashboard"))
        .add_source(config::Environment::with_prefix("DASHBOARD").separator("__"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        [server]
        bind = "127.0.0.1:9000"

        [source]
        kind = "http"
        location = "https://example.org/data"

        [files]
        prices = "prices.csv"

        [defaults]
        group = "A"
        from_year = 2010
        to_year = 2014

        [[presets]]
        label = "2010–2014"
        from = 2010
        to = 2014

        [[presets]]
        label = "2022–2026"
        from = 2022
        to = 2026
    "#;

    fn parse(toml: &str) -> AppConfig {
        config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_parse_sample_config() {
        let cfg = parse(SAMPLE);
        assert_eq!(cfg.server.bind, "127.0.0.1:9000");
        assert_eq!(cfg.source.kind, SourceKind::Http);
        assert_eq!(cfg.years, YearDomain::default());
        assert_eq!(cfg.presets.len(), 2);
        assert_eq!(cfg.file_name(DatasetKind::Prices), "prices.csv");
        assert_eq!(cfg.file_name(DatasetKind::GovDebt), "gov_debt_2010_2026.csv");
    }

    #[test]
    fn test_dashboard_settings_from_config() {
        let settings = parse(SAMPLE).dashboard_settings().unwrap();
        assert_eq!(settings.default_state.group, ThematicGroup::A);
        assert_eq!(settings.default_state.range.to_year(), 2014);
        assert_eq!(settings.presets[1].from, 2022);
    }

    #[test]
    fn test_preset_outside_domain_is_rejected() {
        let toml = format!("{SAMPLE}\n[[presets]]\nlabel = \"old\"\nfrom = 2006\nto = 2010\n");
        let err = parse(&toml).dashboard_settings().unwrap_err();
        assert!(matches!(err, DashboardError::InvalidPreset { .. }));
    }

    #[test]
    fn test_unknown_default_group_is_rejected() {
        let toml = SAMPLE.replace("group = \"A\"", "group = \"Z\"");
        assert!(matches!(
            parse(&toml).dashboard_settings(),
            Err(DashboardError::UnknownGroup(_))
        ));
    }

    #[test]
    fn test_default_range_outside_domain_is_rejected() {
        let toml = SAMPLE.replace("from_year = 2010", "from_year = 2008");
        assert!(matches!(
            parse(&toml).dashboard_settings(),
            Err(DashboardError::YearOutOfDomain { year: 2008, .. })
        ));
    }
}
