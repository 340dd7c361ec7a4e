use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::Path;

use crate::domain::{Catalog, CatalogError, IndustryPreset, InputChange, PricingTier};

/// Prefix for environment overrides, e.g. `FINDE_ROI__CALCULATOR__TEAM_SIZE=40`
pub const ENV_PREFIX: &str = "FINDE_ROI";

/// Directory searched for `default`, `{environment}`, and `local` files
pub const CONFIG_DIR: &str = "config";

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub logging: LoggingSettings,
    pub output: OutputSettings,
    #[serde(default)]
    pub calculator: CalculatorSettings,
    #[serde(default)]
    pub catalog: Option<CatalogSettings>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApplicationSettings {
    pub environment: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Compact,
    Json,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OutputSettings {
    pub format: OutputFormat,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

/// Inputs applied on top of the calculator defaults
///
/// Values are raw; they are clamped like any other edit.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct CalculatorSettings {
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub plan: Option<String>,
    #[serde(default)]
    pub hourly_rate: Option<f64>,
    #[serde(default)]
    pub team_size: Option<f64>,
    #[serde(default)]
    pub hours_saved: Option<f64>,
    #[serde(default)]
    pub usage_weeks: Option<f64>,
}

impl CalculatorSettings {
    /// Edits in application order
    ///
    /// The industry goes first because selecting a preset overwrites rate,
    /// hours, and usage weeks; explicit values then win over the preset.
    pub fn changes(&self) -> Vec<InputChange> {
        let mut changes = Vec::new();
        if let Some(industry) = &self.industry {
            changes.push(InputChange::Industry(industry.clone()));
        }
        if let Some(plan) = &self.plan {
            changes.push(InputChange::Plan(plan.clone()));
        }
        if let Some(rate) = self.hourly_rate {
            changes.push(InputChange::HourlyRate(rate));
        }
        if let Some(team_size) = self.team_size {
            changes.push(InputChange::TeamSize(team_size));
        }
        if let Some(hours) = self.hours_saved {
            changes.push(InputChange::HoursSaved(hours));
        }
        if let Some(weeks) = self.usage_weeks {
            changes.push(InputChange::UsageWeeks(weeks));
        }
        changes
    }
}

/// Replacement catalog supplied through configuration
#[derive(Debug, Deserialize, Clone)]
pub struct CatalogSettings {
    pub industries: Vec<IndustrySettings>,
    pub plans: Vec<PlanSettings>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct IndustrySettings {
    pub id: String,
    pub label: String,
    pub hourly_rate: f64,
    pub hours_saved: f64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PlanSettings {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub max_team_size: Option<u32>,
    pub monthly_seat_price: f64,
}

impl CatalogSettings {
    pub fn build(&self) -> Result<Catalog, CatalogError> {
        let industries = self
            .industries
            .iter()
            .map(|entry| {
                IndustryPreset::try_new(&entry.id, &entry.label, entry.hourly_rate, entry.hours_saved)
            })
            .collect::<Result<Vec<_>, _>>()?;
        let plans = self
            .plans
            .iter()
            .map(|entry| {
                PricingTier::try_new(
                    &entry.id,
                    &entry.name,
                    entry.max_team_size,
                    entry.monthly_seat_price,
                )
            })
            .collect::<Result<Vec<_>, _>>()?;

        Catalog::new(industries, plans)
    }
}

impl Settings {
    /// Load settings from `config/` and `FINDE_ROI__*` environment variables
    pub fn new() -> Result<Self, ConfigError> {
        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());
        Self::load(Path::new(CONFIG_DIR), &environment, None)
    }

    /// Load settings from an explicit directory
    ///
    /// `env_overrides` replaces the process environment as the source of
    /// `FINDE_ROI__*` variables when given.
    pub fn load(
        config_dir: &Path,
        environment: &str,
        env_overrides: Option<config::Map<String, String>>,
    ) -> Result<Self, ConfigError> {
        let file = |name: &str| File::from(config_dir.join(name)).required(false);

        let config = Config::builder()
            // Start with default values
            .set_default("application.environment", environment)?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "pretty")?
            .set_default("output.format", "text")?
            // Add configuration files if they exist
            .add_source(file("default"))
            .add_source(file(environment))
            .add_source(file("local"))
            // Add environment variables with prefix
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true)
                    .source(env_overrides),
            )
            .build()?;

        config.try_deserialize()
    }

    /// The configured catalog, or the built-in one
    pub fn catalog(&self) -> Result<Catalog, CatalogError> {
        match &self.catalog {
            Some(catalog) => catalog.build(),
            None => Ok(Catalog::default()),
        }
    }
}
