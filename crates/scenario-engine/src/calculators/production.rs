//! Production scenarios: planned shutdowns and capacity changes.

use super::{dec, times, Params};
use crate::accumulator::{Accumulator, Metric};
use crate::format::usd;
use rust_decimal::Decimal;
use scenario_core::catalog::params::{NEW_CAPACITY, SHUTDOWN_HOURS};
use scenario_core::{Opportunity, OpportunityKind, OpportunitySeverity, Risk, RiskSeverity};

/// Shared by the `Planned Shutdown` and `Planned Maintenance` tags.
pub(crate) fn planned_shutdown(p: &Params<'_>, acc: &mut Accumulator) {
    let hours = p.get(SHUTDOWN_HOURS);
    let cost = times(hours, 4500, 0);

    acc.risk(Risk {
        severity: if hours > 120.0 {
            RiskSeverity::High
        } else {
            RiskSeverity::Medium
        },
        title: "Production Gap During Shutdown".into(),
        description: format!(
            "A {hours:.0}-hour shutdown removes output the network must absorb elsewhere \
             or serve from stock."
        ),
        mitigation: "Pre-build finished goods and confirm overflow capacity at sister \
                     plants before the window opens."
            .into(),
        impact: format!("{} in downtime and overtime", usd(cost)),
    });

    acc.opportunity(Opportunity {
        severity: OpportunitySeverity::Medium,
        title: "Pre-Build Inventory Ahead of Shutdown".into(),
        description: "Building ahead at standard rates avoids expedite premiums while the \
                      line is down."
            .into(),
        savings: usd(cost * Decimal::new(20, 2)),
        link: "/production-planning".into(),
        kind: OpportunityKind::Capacity,
    });

    acc.bump(Metric::Cost, cost);
    acc.bump(Metric::Capacity, -times(hours, 5, 2));
    acc.bump(Metric::Inventory, -times(hours, 4, 2));
    acc.bump(Metric::ServiceLevel, -times(hours, 2, 2));
}

/// `newCapacity` above 100 is an expansion, anything else a reduction.
pub(crate) fn capacity_adjustment(p: &Params<'_>, acc: &mut Accumulator) {
    let new_capacity = p.get(NEW_CAPACITY);

    if new_capacity > 100.0 {
        let growth = dec(new_capacity) - Decimal::ONE_HUNDRED;
        let cost = growth.saturating_mul(Decimal::new(8500, 0));
        acc.risk(Risk {
            severity: if new_capacity - 100.0 > 20.0 {
                RiskSeverity::High
            } else {
                RiskSeverity::Medium
            },
            title: "Underutilized Capacity Investment".into(),
            description: format!(
                "Expanding to {new_capacity:.0}% of current capacity adds fixed cost ahead \
                 of confirmed demand."
            ),
            mitigation: "Phase the expansion and tie each stage to signed volume \
                         commitments."
                .into(),
            impact: format!("{} added fixed cost", usd(cost)),
        });
        acc.opportunity(Opportunity {
            severity: OpportunitySeverity::High,
            title: "Insource Outsourced Volume".into(),
            description: "New headroom can absorb volume currently placed with contract \
                          manufacturers."
                .into(),
            savings: usd(cost * Decimal::new(40, 2)),
            link: "/capacity".into(),
            kind: OpportunityKind::Capacity,
        });
        acc.bump(Metric::Cost, cost);
        acc.bump(Metric::Capacity, -growth.saturating_mul(Decimal::new(6, 1)));
        acc.bump(Metric::ServiceLevel, growth.saturating_mul(Decimal::new(5, 2)));
    } else {
        let cut = Decimal::ONE_HUNDRED - dec(new_capacity);
        let savings = cut.saturating_mul(Decimal::new(6000, 0));
        acc.risk(Risk {
            severity: if 100.0 - new_capacity > 25.0 {
                RiskSeverity::High
            } else {
                RiskSeverity::Medium
            },
            title: "Reduced Production Headroom".into(),
            description: format!(
                "Running at {new_capacity:.0}% of current capacity leaves little room for \
                 demand upside or unplanned downtime."
            ),
            mitigation: "Keep a standby agreement with a contract manufacturer for surge \
                         volume."
                .into(),
            impact: format!("{} lower operating cost", usd(savings)),
        });
        acc.opportunity(Opportunity {
            severity: OpportunitySeverity::Medium,
            title: "Fixed Cost Consolidation".into(),
            description: "Consolidating shifts and idle lines converts the reduction into \
                          recurring savings."
                .into(),
            savings: usd(savings),
            link: "/capacity".into(),
            kind: OpportunityKind::CostSaving,
        });
        acc.bump(Metric::Cost, -savings);
        acc.bump(Metric::Capacity, cut.saturating_mul(Decimal::new(8, 1)));
        acc.bump(Metric::ServiceLevel, -cut.saturating_mul(Decimal::new(1, 1)));
    }
}

#[cfg(test)]
mod tests {
    use crate::calculators::test_support::run;
    use rust_decimal::Decimal;
    use scenario_core::{OpportunityKind, RiskSeverity, ScenarioKind};

    #[test]
    fn shutdown_defaults() {
        let acc = run(ScenarioKind::PlannedShutdown, &[]);
        // 72h * 4500
        assert_eq!(acc.deltas.cost, Decimal::new(324_000, 0));
        assert_eq!(acc.risks[0].severity, RiskSeverity::Medium);
        let acc = run(ScenarioKind::PlannedShutdown, &[("downtimeHours", 121.0)]);
        assert_eq!(acc.risks[0].severity, RiskSeverity::High);
    }

    #[test]
    fn expansion_raises_cost() {
        let acc = run(ScenarioKind::CapacityAdjustment, &[("newCapacity", 130.0)]);
        assert_eq!(acc.deltas.cost, Decimal::new(255_000, 0));
        assert_eq!(acc.deltas.capacity, Decimal::new(-18, 0));
        assert_eq!(acc.risks[0].title, "Underutilized Capacity Investment");
        assert_eq!(acc.risks[0].severity, RiskSeverity::High);
        assert_eq!(acc.opportunities[0].kind, OpportunityKind::Capacity);
    }

    #[test]
    fn reduction_lowers_cost() {
        let acc = run(ScenarioKind::CapacityAdjustment, &[("newCapacity", 80.0)]);
        assert_eq!(acc.deltas.cost, Decimal::new(-120_000, 0));
        assert_eq!(acc.deltas.capacity, Decimal::new(16, 0));
        assert_eq!(acc.risks[0].title, "Reduced Production Headroom");
        assert_eq!(acc.risks[0].severity, RiskSeverity::Medium);
        assert_eq!(acc.opportunities[0].kind, OpportunityKind::CostSaving);
    }

    #[test]
    fn expansion_tiers() {
        let at = |v: f64| run(ScenarioKind::CapacityAdjustment, &[("newCapacity", v)]);
        assert_eq!(at(101.0).risks[0].severity, RiskSeverity::Medium);
        assert_eq!(at(120.0).risks[0].severity, RiskSeverity::Medium);
        assert_eq!(at(121.0).risks[0].severity, RiskSeverity::High);
        assert_eq!(at(1.0e30).risks[0].severity, RiskSeverity::High);
    }

    #[test]
    fn reduction_tiers() {
        let at = |v: f64| run(ScenarioKind::CapacityAdjustment, &[("newCapacity", v)]);
        assert_eq!(at(75.0).risks[0].severity, RiskSeverity::Medium);
        assert_eq!(at(74.0).risks[0].severity, RiskSeverity::High);
        let acc = at(70.0);
        assert_eq!(acc.risks[0].severity, RiskSeverity::High);
        assert_eq!(acc.deltas.cost, Decimal::new(-180_000, 0));
    }

    #[test]
    fn exactly_one_hundred_is_a_zero_reduction() {
        let acc = run(ScenarioKind::CapacityAdjustment, &[("newCapacity", 100.0)]);
        assert_eq!(acc.deltas.cost, Decimal::ZERO);
        assert_eq!(acc.risks[0].title, "Reduced Production Headroom");
    }
}
