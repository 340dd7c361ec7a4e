//! Input model for the ROI calculator
//!
//! Holds the user-adjustable inputs, normalizes every edit into its domain,
//! and resolves the active preset and tier against the catalog. The pricing
//! tier is whatever the user selected; team size never switches it.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::advisory::{advise, Advisory};
use crate::domain::catalog::{Catalog, IndustryPreset, PricingTier};
use crate::domain::constants::defaults;
use crate::domain::engine::{self, RoiMetrics};
use crate::domain::types::{
    DisplayLabel, HourlyRate, HoursSaved, PlanId, PresetId, TeamSize, UsageWeeks,
};
use crate::infrastructure::log_messages;

/// Snapshot of every user-adjustable input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorInput {
    pub hourly_rate: HourlyRate,
    pub team_size: TeamSize,
    pub hours_saved: HoursSaved,
    pub usage_weeks: UsageWeeks,
    pub industry_id: PresetId,
    pub plan_id: PlanId,
}

/// One edit made through the input surface
///
/// Numeric edits carry the raw value as typed; it is clamped on application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum InputChange {
    HourlyRate(f64),
    TeamSize(f64),
    HoursSaved(f64),
    UsageWeeks(f64),
    Industry(String),
    Plan(String),
}

/// Everything the display surface needs after an edit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoiReport {
    pub input: CalculatorInput,
    pub industry: DisplayLabel,
    pub plan: DisplayLabel,
    pub metrics: RoiMetrics,
    pub advisories: Vec<Advisory>,
}

/// Calculator state bound to one catalog
#[derive(Debug, Clone)]
pub struct Calculator {
    catalog: Catalog,
    input: CalculatorInput,
}

impl Calculator {
    /// Start from the first preset, the first tier, and the default team size
    pub fn new(catalog: Catalog) -> Self {
        let preset = catalog.default_industry();
        let input = CalculatorInput {
            hourly_rate: preset.hourly_rate,
            team_size: TeamSize::new(defaults::TEAM_SIZE),
            hours_saved: preset.hours_saved,
            usage_weeks: UsageWeeks::new(defaults::USAGE_WEEKS),
            industry_id: preset.id.clone(),
            plan_id: catalog.default_plan().id.clone(),
        };

        Self { catalog, input }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Current input snapshot
    pub fn input(&self) -> &CalculatorInput {
        &self.input
    }

    pub fn set_hourly_rate(&mut self, value: f64) {
        self.input.hourly_rate = HourlyRate::new(value);
    }

    pub fn set_team_size(&mut self, value: f64) {
        self.input.team_size = TeamSize::from_raw(value);
    }

    pub fn set_hours_saved(&mut self, value: f64) {
        self.input.hours_saved = HoursSaved::new(value);
    }

    pub fn set_usage_weeks(&mut self, value: f64) {
        self.input.usage_weeks = UsageWeeks::from_raw(value);
    }

    /// Switch to a preset, overwriting rate and hours and resetting usage weeks
    ///
    /// Unknown ids leave the state untouched.
    pub fn select_industry(&mut self, id: &str) {
        let Some(preset) = self.catalog.find_industry(id) else {
            debug!(industry_id = id, "{}", log_messages::calculator::UNKNOWN_INDUSTRY);
            return;
        };

        self.input.hourly_rate = preset.hourly_rate;
        self.input.hours_saved = preset.hours_saved;
        self.input.usage_weeks = UsageWeeks::new(defaults::USAGE_WEEKS);
        self.input.industry_id = preset.id.clone();
    }

    /// Switch the active pricing tier; unknown ids leave the state untouched
    pub fn select_plan(&mut self, id: &str) {
        let Some(plan) = self.catalog.find_plan(id) else {
            debug!(plan_id = id, "{}", log_messages::calculator::UNKNOWN_PLAN);
            return;
        };

        self.input.plan_id = plan.id.clone();
    }

    /// The tier the user selected, or the catalog's first tier
    pub fn active_plan(&self) -> &PricingTier {
        self.catalog
            .find_plan(self.input.plan_id.as_ref())
            .unwrap_or_else(|| self.catalog.default_plan())
    }

    /// The preset last selected, or the catalog's first preset
    pub fn active_industry(&self) -> &IndustryPreset {
        self.catalog
            .find_industry(self.input.industry_id.as_ref())
            .unwrap_or_else(|| self.catalog.default_industry())
    }

    /// Recompute metrics from the current snapshot
    pub fn metrics(&self) -> RoiMetrics {
        engine::compute(&self.input, self.active_plan())
    }

    /// Recompute metrics and advisories from the current snapshot
    pub fn report(&self) -> RoiReport {
        let plan = self.active_plan();
        let metrics = engine::compute(&self.input, plan);
        let advisories = advise(&self.catalog, plan, self.input.team_size, &metrics);

        RoiReport {
            input: self.input.clone(),
            industry: self.active_industry().label.clone(),
            plan: plan.name.clone(),
            metrics,
            advisories,
        }
    }

    /// Apply one edit without recomputing
    pub fn update(&mut self, change: InputChange) {
        match change {
            InputChange::HourlyRate(value) => self.set_hourly_rate(value),
            InputChange::TeamSize(value) => self.set_team_size(value),
            InputChange::HoursSaved(value) => self.set_hours_saved(value),
            InputChange::UsageWeeks(value) => self.set_usage_weeks(value),
            InputChange::Industry(id) => self.select_industry(&id),
            InputChange::Plan(id) => self.select_plan(&id),
        }
    }

    /// Apply one edit and return the freshly recomputed report
    pub fn apply(&mut self, change: InputChange) -> RoiReport {
        self.update(change);
        self.report()
    }
}
