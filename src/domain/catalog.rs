//! Static catalogs of industry presets and pricing tiers
//!
//! Catalogs are built once, validated, and then only read. The calculator
//! receives its catalog at construction and never writes back to it.

use serde::Serialize;
use std::collections::HashSet;
use thiserror::Error;
use tracing::warn;

use crate::domain::types::{
    DisplayLabel, HourlyRate, HoursSaved, PlanId, PresetId, SeatCeiling, SeatPrice, TeamSize,
};
use crate::infrastructure::log_messages;

/// Errors raised while assembling a catalog
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("Invalid identifier: {0:?}")]
    InvalidId(String),

    #[error("Invalid label for {id}")]
    InvalidLabel { id: String },

    #[error("Hourly rate {value} for preset {id} is outside the calculator range")]
    HourlyRateOutOfRange { id: String, value: f64 },

    #[error("Hours saved {value} for preset {id} is outside the calculator range")]
    HoursSavedOutOfRange { id: String, value: f64 },

    #[error("Seat price {value} for plan {id} must be a finite, non-negative amount")]
    InvalidSeatPrice { id: String, value: f64 },

    #[error("Team size ceiling for plan {id} must be positive")]
    InvalidCeiling { id: String },

    #[error("Duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: String },

    #[error("Catalog needs at least one {0}")]
    Empty(&'static str),
}

/// A named bundle of default assumptions for one kind of team
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndustryPreset {
    pub id: PresetId,
    pub label: DisplayLabel,
    pub hourly_rate: HourlyRate,
    pub hours_saved: HoursSaved,
}

impl IndustryPreset {
    /// Validate a preset
    ///
    /// Preset values must already lie inside the calculator's input domains so
    /// that selecting the preset stores them unchanged.
    pub fn try_new(
        id: &str,
        label: &str,
        hourly_rate: f64,
        hours_saved: f64,
    ) -> Result<Self, CatalogError> {
        let id = PresetId::try_new(id.to_string())
            .map_err(|_| CatalogError::InvalidId(id.to_string()))?;
        let label = DisplayLabel::try_new(label.to_string()).map_err(|_| {
            CatalogError::InvalidLabel {
                id: id.to_string(),
            }
        })?;

        if !HourlyRate::contains(hourly_rate) {
            return Err(CatalogError::HourlyRateOutOfRange {
                id: id.to_string(),
                value: hourly_rate,
            });
        }
        if !HoursSaved::contains(hours_saved) {
            return Err(CatalogError::HoursSavedOutOfRange {
                id: id.to_string(),
                value: hours_saved,
            });
        }

        Ok(Self {
            id,
            label,
            hourly_rate: HourlyRate::new(hourly_rate),
            hours_saved: HoursSaved::new(hours_saved),
        })
    }
}

/// A named per-seat pricing rule
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricingTier {
    pub id: PlanId,
    pub name: DisplayLabel,
    /// `None` means the tier has no upper bound
    pub max_team_size: Option<SeatCeiling>,
    pub monthly_seat_price: SeatPrice,
}

impl PricingTier {
    pub fn try_new(
        id: &str,
        name: &str,
        max_team_size: Option<u32>,
        monthly_seat_price: f64,
    ) -> Result<Self, CatalogError> {
        let id =
            PlanId::try_new(id.to_string()).map_err(|_| CatalogError::InvalidId(id.to_string()))?;
        let name = DisplayLabel::try_new(name.to_string()).map_err(|_| {
            CatalogError::InvalidLabel {
                id: id.to_string(),
            }
        })?;
        let max_team_size = max_team_size
            .map(SeatCeiling::try_new)
            .transpose()
            .map_err(|_| CatalogError::InvalidCeiling { id: id.to_string() })?;
        let monthly_seat_price = SeatPrice::try_new(monthly_seat_price).map_err(|_| {
            CatalogError::InvalidSeatPrice {
                id: id.to_string(),
                value: monthly_seat_price,
            }
        })?;

        Ok(Self {
            id,
            name,
            max_team_size,
            monthly_seat_price,
        })
    }

    /// Sort key for the tier ordering: ascending ceiling, unbounded last
    pub fn ceiling_key(&self) -> u64 {
        self.max_team_size
            .map_or(u64::MAX, |ceiling| u64::from(ceiling.into_inner()))
    }

    /// Whether a team of this size fits the tier
    pub fn admits(&self, team_size: TeamSize) -> bool {
        self.max_team_size
            .is_none_or(|ceiling| ceiling.admits(team_size))
    }

    /// Whether this is the free pilot tier
    pub fn is_pilot(&self) -> bool {
        self.monthly_seat_price.is_free()
    }
}

/// Built-in industry presets: id, label, hourly rate, weekly hours saved
const DEFAULT_INDUSTRIES: [(&str, &str, f64, f64); 4] = [
    ("legal", "Legal & Compliance", 140.0, 6.0),
    ("hr", "HR & People Ops", 75.0, 5.0),
    ("consulting", "Consulting & Advisory", 180.0, 7.0),
    ("product", "Product & Engineering", 95.0, 6.0),
];

/// Built-in pricing tiers: id, name, seat ceiling, monthly seat price
const DEFAULT_PLANS: [(&str, &str, Option<u32>, f64); 4] = [
    ("starter", "Starter", Some(5), 149.0),
    ("growth", "Growth", Some(15), 229.0),
    ("enterprise", "Enterprise", None, 629.0),
    ("pilot", "Pilot Program", None, 0.0),
];

/// Immutable set of presets and tiers the calculator chooses from
///
/// Both lists are non-empty and their ids are unique.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Catalog {
    industries: Vec<IndustryPreset>,
    plans: Vec<PricingTier>,
}

impl Catalog {
    pub fn new(
        industries: Vec<IndustryPreset>,
        plans: Vec<PricingTier>,
    ) -> Result<Self, CatalogError> {
        if industries.is_empty() {
            return Err(CatalogError::Empty("industry preset"));
        }
        if plans.is_empty() {
            return Err(CatalogError::Empty("pricing tier"));
        }

        let mut seen: HashSet<&str> = HashSet::new();
        for preset in &industries {
            if !seen.insert(preset.id.as_ref()) {
                return Err(CatalogError::DuplicateId {
                    kind: "industry",
                    id: preset.id.to_string(),
                });
            }
        }

        let mut seen: HashSet<&str> = HashSet::new();
        for plan in &plans {
            if !seen.insert(plan.id.as_ref()) {
                return Err(CatalogError::DuplicateId {
                    kind: "plan",
                    id: plan.id.to_string(),
                });
            }
        }

        let catalog = Self { industries, plans };
        for (smaller, larger) in catalog.price_inversions() {
            warn!(
                smaller = %smaller.id,
                smaller_price = smaller.monthly_seat_price.into_inner(),
                larger = %larger.id,
                larger_price = larger.monthly_seat_price.into_inner(),
                "{}",
                log_messages::catalog::PRICE_INVERSION
            );
        }

        Ok(catalog)
    }

    pub fn industries(&self) -> &[IndustryPreset] {
        &self.industries
    }

    pub fn plans(&self) -> &[PricingTier] {
        &self.plans
    }

    /// Look up a preset by id; ids are matched after trimming and lower-casing
    pub fn find_industry(&self, id: &str) -> Option<&IndustryPreset> {
        let wanted = PresetId::try_new(id.to_string()).ok()?;
        self.industries.iter().find(|preset| preset.id == wanted)
    }

    /// Look up a tier by id; ids are matched after trimming and lower-casing
    pub fn find_plan(&self, id: &str) -> Option<&PricingTier> {
        let wanted = PlanId::try_new(id.to_string()).ok()?;
        self.plans.iter().find(|plan| plan.id == wanted)
    }

    /// The first preset in catalog order
    pub fn default_industry(&self) -> &IndustryPreset {
        &self.industries[0]
    }

    /// The first tier in catalog order
    pub fn default_plan(&self) -> &PricingTier {
        &self.plans[0]
    }

    /// Tiers in ascending ceiling order, unbounded tiers last
    ///
    /// Tiers with equal ceilings keep their catalog order.
    pub fn plans_by_ceiling(&self) -> Vec<&PricingTier> {
        let mut ordered: Vec<&PricingTier> = self.plans.iter().collect();
        ordered.sort_by_key(|plan| plan.ceiling_key());
        ordered
    }

    /// Neighbouring paid tiers whose seat price drops as the ceiling grows
    ///
    /// Free tiers are skipped. Such a catalog is still usable; it is only
    /// reported.
    pub fn price_inversions(&self) -> Vec<(&PricingTier, &PricingTier)> {
        let paid: Vec<&PricingTier> = self
            .plans_by_ceiling()
            .into_iter()
            .filter(|plan| !plan.is_pilot())
            .collect();
        paid.windows(2)
            .filter(|pair| {
                pair[1].monthly_seat_price.into_inner() < pair[0].monthly_seat_price.into_inner()
            })
            .map(|pair| (pair[0], pair[1]))
            .collect()
    }

    /// The next paid tier up from `current` that admits the team
    ///
    /// Only tiers with a larger ceiling than `current` are candidates. Returns
    /// `None` when no such tier fits the team.
    pub fn upgrade_for(&self, current: &PricingTier, team_size: TeamSize) -> Option<&PricingTier> {
        self.plans_by_ceiling().into_iter().find(|plan| {
            !plan.is_pilot()
                && plan.id != current.id
                && plan.ceiling_key() > current.ceiling_key()
                && plan.admits(team_size)
        })
    }

    /// The smallest tier a team of this size fits into
    ///
    /// Falls back to the largest tier when none admits the team. This is only
    /// a suggestion; the active tier is always the one the user selected.
    pub fn suggest_plan(&self, team_size: TeamSize) -> &PricingTier {
        let ordered = self.plans_by_ceiling();
        ordered
            .iter()
            .find(|plan| plan.admits(team_size))
            .or(ordered.last())
            .copied()
            .unwrap_or_else(|| self.default_plan())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        let industries = DEFAULT_INDUSTRIES
            .iter()
            .map(|&(id, label, rate, hours)| IndustryPreset::try_new(id, label, rate, hours))
            .collect::<Result<Vec<_>, _>>()
            .expect("Built-in industry presets are valid");
        let plans = DEFAULT_PLANS
            .iter()
            .map(|&(id, name, ceiling, price)| PricingTier::try_new(id, name, ceiling, price))
            .collect::<Result<Vec<_>, _>>()
            .expect("Built-in pricing tiers are valid");

        Self::new(industries, plans).expect("Built-in catalog is valid")
    }
}
