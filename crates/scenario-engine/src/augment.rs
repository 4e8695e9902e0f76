//! Extra fields and opportunities for the shutdown and peak-demand families.

use crate::config::AugmentationScope;
use crate::format::usd;
use rust_decimal::Decimal;
use scenario_core::{
    ConfiguredScenario, Opportunity, OpportunityKind, OpportunitySeverity, ScenarioKind,
    SimulationResults,
};

/// Recommended shutdown window reported for shutdown/maintenance runs.
pub const BEST_SHUTDOWN_MONTH: &str = "February (lowest seasonal demand and order backlog)";

/// Savings range quoted for the demand management opportunity.
pub const DEMAND_MANAGEMENT_SAVINGS: &str = "$180K - $240K";

/// Scenario families that receive augmentation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Family {
    Shutdown,
    PeakDemand,
}

impl Family {
    fn of(kind: ScenarioKind) -> Option<Self> {
        match kind {
            ScenarioKind::PlannedShutdown => Some(Family::Shutdown),
            ScenarioKind::SeasonalSpike => Some(Family::PeakDemand),
            _ => None,
        }
    }
}

/// Families to augment, in the order they first appear.
pub(crate) fn families(scenarios: &[ConfiguredScenario], scope: AugmentationScope) -> Vec<Family> {
    match scope {
        AugmentationScope::FirstScenario => scenarios
            .first()
            .and_then(ConfiguredScenario::kind)
            .and_then(Family::of)
            .into_iter()
            .collect(),
        AugmentationScope::AllScenarioTypes => {
            let mut out = Vec::new();
            for family in scenarios.iter().filter_map(|s| s.kind().and_then(Family::of)) {
                if !out.contains(&family) {
                    out.push(family);
                }
            }
            out
        }
    }
}

/// Apply one family's augmentation. `cost_delta` is the run's total
/// `cost.after - cost.before`. Opportunities are prepended, not appended.
pub(crate) fn apply(family: Family, results: &mut SimulationResults, cost_delta: Decimal) {
    match family {
        Family::Shutdown => {
            results.additional_cost = Some(usd(cost_delta));
            results.best_month = Some(BEST_SHUTDOWN_MONTH.to_string());
            results.opportunities.insert(
                0,
                Opportunity {
                    severity: OpportunitySeverity::High,
                    title: "Production Reallocation".into(),
                    description: "Shift output to sister facilities during the shutdown window \
                                  to protect customer commitments."
                        .into(),
                    savings: usd(cost_delta * Decimal::new(15, 2)),
                    link: "/production-planning".into(),
                    kind: OpportunityKind::Capacity,
                },
            );
        }
        Family::PeakDemand => {
            results.opportunities.insert(
                0,
                Opportunity {
                    severity: OpportunitySeverity::High,
                    title: "Demand Management Strategy".into(),
                    description: "Shape peak orders with pre-season incentives and allocation \
                                  rules so saturated plants serve priority customers first."
                        .into(),
                    savings: DEMAND_MANAGEMENT_SAVINGS.into(),
                    link: "/demand-planning".into(),
                    kind: OpportunityKind::Efficiency,
                },
            );
        }
    }
}
