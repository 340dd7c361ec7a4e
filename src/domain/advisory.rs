//! Qualitative tips derived from computed metrics

use derive_more::Display;
use serde::Serialize;
use std::fmt;

use crate::domain::catalog::{Catalog, PricingTier};
use crate::domain::constants::pilot::CREDIT_WINDOW_DAYS;
use crate::domain::engine::RoiMetrics;
use crate::domain::types::{DisplayLabel, SeatCeiling, TeamSize};

/// A tip shown next to the metrics
#[derive(Debug, Clone, PartialEq, Eq, Display, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Advisory {
    #[display(
        "Increase weekly hours saved or adjust team size until the monthly gain exceeds licence cost."
    )]
    IncreaseHoursSaved,

    #[display(
        "Pilot conversions within {window_days} days keep their licence credit and onboarding support."
    )]
    PilotCredit { window_days: u32 },

    #[display("Consider upgrading beyond the {plan} tier once your team exceeds {ceiling} seats{suggested}.")]
    UpgradeTier {
        plan: DisplayLabel,
        ceiling: SeatCeiling,
        suggested: SuggestedTier,
    },
}

/// The larger paid tier that fits the team, if the catalog has one
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SuggestedTier(Option<DisplayLabel>);

impl SuggestedTier {
    pub fn new(label: Option<DisplayLabel>) -> Self {
        Self(label)
    }

    pub fn label(&self) -> Option<&DisplayLabel> {
        self.0.as_ref()
    }
}

impl fmt::Display for SuggestedTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(label) => write!(f, "; the {label} tier fits your current team"),
            None => Ok(()),
        }
    }
}

/// Collect the advisories for a computed result, in display order
pub fn advise(
    catalog: &Catalog,
    plan: &PricingTier,
    team_size: TeamSize,
    metrics: &RoiMetrics,
) -> Vec<Advisory> {
    let mut tips = Vec::new();

    if !metrics.is_profitable() {
        tips.push(Advisory::IncreaseHoursSaved);
    }

    if plan.is_pilot() {
        tips.push(Advisory::PilotCredit {
            window_days: CREDIT_WINDOW_DAYS,
        });
    }

    if let Some(ceiling) = plan.max_team_size.filter(|ceiling| !ceiling.admits(team_size)) {
        tips.push(Advisory::UpgradeTier {
            plan: plan.name.clone(),
            ceiling,
            suggested: SuggestedTier::new(
                catalog
                    .upgrade_for(plan, team_size)
                    .map(|larger| larger.name.clone()),
            ),
        });
    }

    tips
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::calculator::Calculator;
    use crate::domain::catalog::IndustryPreset;

    fn advisories_for(plan_id: &str, team_size: f64) -> Vec<Advisory> {
        let mut calculator = Calculator::new(Catalog::default());
        calculator.select_plan(plan_id);
        calculator.set_team_size(team_size);
        calculator.report().advisories
    }

    #[test]
    fn test_profitable_paid_plan_within_ceiling_has_no_tips() {
        assert!(advisories_for("growth", 12.0).is_empty());
    }

    #[test]
    fn test_pilot_tier_mentions_credit_window() {
        let tips = advisories_for("pilot", 12.0);
        assert_eq!(tips, vec![Advisory::PilotCredit { window_days: 60 }]);
        assert!(tips[0].to_string().contains("60 days"));
    }

    #[test]
    fn test_team_above_ceiling_suggests_next_tier() {
        let tips = advisories_for("starter", 12.0);
        assert_eq!(tips.len(), 1);
        assert_eq!(
            tips[0].to_string(),
            "Consider upgrading beyond the Starter tier once your team exceeds 5 seats; \
             the Growth tier fits your current team."
        );
    }

    fn upgrade_tip(plans: Vec<PricingTier>, plan_id: &str, team_size: f64) -> Advisory {
        let industries = vec![IndustryPreset::try_new("ops", "Operations", 120.0, 6.0).unwrap()];
        let mut calculator = Calculator::new(Catalog::new(industries, plans).unwrap());
        calculator.select_plan(plan_id);
        calculator.set_team_size(team_size);
        calculator
            .report()
            .advisories
            .into_iter()
            .find(|tip| matches!(tip, Advisory::UpgradeTier { .. }))
            .unwrap()
    }

    #[test]
    fn test_largest_bounded_tier_has_no_suggestion() {
        let tip = upgrade_tip(
            vec![
                PricingTier::try_new("small", "Small", Some(5), 30.0).unwrap(),
                PricingTier::try_new("mid", "Mid", Some(15), 50.0).unwrap(),
            ],
            "mid",
            50.0,
        );

        assert_eq!(
            tip.to_string(),
            "Consider upgrading beyond the Mid tier once your team exceeds 15 seats."
        );
    }

    #[test]
    fn test_free_tier_is_never_suggested_as_upgrade() {
        let tip = upgrade_tip(
            vec![
                PricingTier::try_new("starter", "Starter", Some(5), 149.0).unwrap(),
                PricingTier::try_new("pilot", "Pilot Program", None, 0.0).unwrap(),
                PricingTier::try_new("enterprise", "Enterprise", None, 629.0).unwrap(),
            ],
            "starter",
            40.0,
        );

        assert_eq!(
            tip.to_string(),
            "Consider upgrading beyond the Starter tier once your team exceeds 5 seats; \
             the Enterprise tier fits your current team."
        );
    }

    #[test]
    fn test_upgrade_tip_serializes_suggestion_as_label() {
        let tips = advisories_for("starter", 12.0);
        let json = serde_json::to_value(&tips[0]).unwrap();
        assert_eq!(json["kind"], "upgrade_tier");
        assert_eq!(json["suggested"], "Growth");
    }

    #[test]
    fn test_unprofitable_result_asks_for_more_hours() {
        let catalog = Catalog::default();
        let plan = PricingTier::try_new("pricey", "Pricey", None, 500.0).unwrap();
        let metrics = RoiMetrics {
            monthly_value: 10.0,
            monthly_cost: 500.0,
            monthly_net: -490.0,
            annual_value: 120.0,
            annual_cost: 6_000.0,
            annual_net: -5_880.0,
            roi: -98.0,
            payback_months: None,
            daily_value: 0.5,
        };

        let tips = advise(&catalog, &plan, TeamSize::new(1), &metrics);
        assert_eq!(tips, vec![Advisory::IncreaseHoursSaved]);
        assert!(tips[0].to_string().starts_with("Increase weekly hours saved"));
    }
}
