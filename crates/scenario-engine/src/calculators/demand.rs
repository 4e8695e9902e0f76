//! Demand scenarios: seasonal spikes and regional drops.

use super::{times, Params};
use crate::accumulator::{Accumulator, Metric};
use crate::format::{count, usd};
use rust_decimal::Decimal;
use scenario_core::catalog::params::{DEMAND_DECREASE, DEMAND_INCREASE};
use scenario_core::{Opportunity, OpportunityKind, OpportunitySeverity, Risk, RiskSeverity};

/// Demand increase (%) above which the network cannot keep up.
pub const MAX_SERVICEABLE_INCREASE: f64 = 50.0;

/// Plants in the order they saturate as demand rises. A plant is at capacity
/// once the increase is strictly above its threshold.
pub const PLANT_THRESHOLDS: [(f64, &str); 6] = [
    (20.0, "Phoenix, AZ"),
    (30.0, "Chicago, IL"),
    (40.0, "Atlanta, GA"),
    (50.0, "Dallas, TX"),
    (60.0, "Memphis, TN"),
    (70.0, "Columbus, OH"),
];

/// Plants that run out of headroom at the given demand increase.
pub fn plants_at_capacity(demand_increase: f64) -> Vec<String> {
    PLANT_THRESHOLDS
        .iter()
        .filter(|(threshold, _)| demand_increase > *threshold)
        .map(|(_, plant)| plant.to_string())
        .collect()
}

/// Shared by the `Seasonal Spike` and `Peak Demand` tags.
///
/// Also records whether demand can be met and which plants saturate. With
/// several spike scenarios in one run the last one processed sets both.
pub(crate) fn seasonal_spike(p: &Params<'_>, acc: &mut Accumulator) {
    let increase = p.get(DEMAND_INCREASE);
    let cost = times(increase, 4200, 0);
    let can_meet = increase <= MAX_SERVICEABLE_INCREASE;
    let plants = plants_at_capacity(increase);

    if increase > 20.0 {
        let level = if increase > 60.0 {
            RiskSeverity::Critical
        } else if increase > 40.0 {
            RiskSeverity::High
        } else {
            RiskSeverity::Medium
        };
        acc.risk(Risk {
            severity: level,
            title: "Peak Demand Capacity Strain".into(),
            description: format!(
                "A {increase:.0}% demand increase pushes {} to full capacity.",
                count(plants.len(), "plant", "plants")
            ),
            mitigation: "Add temporary shifts and allocate constrained products to \
                         priority customers."
                .into(),
            impact: format!("{} in overtime and expedite cost", usd(cost)),
        });
    }

    acc.opportunity(Opportunity {
        severity: if can_meet {
            OpportunitySeverity::Medium
        } else {
            OpportunitySeverity::High
        },
        title: "Pre-Season Inventory Build".into(),
        description: "Building stock in the months before the peak flattens the load on \
                      saturated plants."
            .into(),
        savings: usd(cost * Decimal::new(30, 2)),
        link: "/demand-planning".into(),
        kind: OpportunityKind::Efficiency,
    });

    acc.can_meet_demand = Some(can_meet);
    acc.plants_at_capacity = Some(plants);
    acc.bump(Metric::Cost, cost);
    acc.bump(Metric::Capacity, times(increase, 3, 1));
    acc.bump(Metric::Inventory, -times(increase, 2, 1));
    acc.bump(Metric::ServiceLevel, -times(increase, 6, 2));
}

pub(crate) fn regional_demand_drop(p: &Params<'_>, acc: &mut Accumulator) {
    let decrease = p.get(DEMAND_DECREASE);
    let carrying = times(decrease, 900, 0);

    if decrease > 10.0 {
        acc.risk(Risk {
            severity: if decrease > 30.0 {
                RiskSeverity::High
            } else {
                RiskSeverity::Medium
            },
            title: "Excess Regional Inventory".into(),
            description: format!(
                "A {decrease:.0}% regional demand drop leaves finished goods sitting in \
                 local warehouses."
            ),
            mitigation: "Throttle replenishment to the region and rebalance stock to \
                         neighboring markets."
                .into(),
            impact: format!("{} in carrying cost", usd(carrying)),
        });
    }

    acc.opportunity(Opportunity {
        severity: OpportunitySeverity::Medium,
        title: "Redirect Volume to Growth Regions".into(),
        description: "Freed capacity can serve regions with order backlogs.".into(),
        savings: usd(times(decrease, 4500, 0)),
        link: "/demand-planning".into(),
        kind: OpportunityKind::Capacity,
    });

    acc.bump(Metric::Cost, carrying);
    acc.bump(Metric::Inventory, times(decrease, 5, 1));
    acc.bump(Metric::Capacity, -times(decrease, 4, 1));
    acc.bump(Metric::ServiceLevel, times(decrease, 2, 2));
}
