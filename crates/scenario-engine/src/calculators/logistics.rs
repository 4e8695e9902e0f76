//! Logistics scenarios: carrier capacity, freight rates and route design.

use super::{dec, times, Params};
use crate::accumulator::{Accumulator, Metric};
use crate::format::usd;
use rust_decimal::Decimal;
use scenario_core::catalog::params::{
    CARRIER_REDUCTION, FREIGHT_CHANGE, ROUTE_EFFICIENCY, STOPS_PER_ROUTE,
};
use scenario_core::{Opportunity, OpportunityKind, OpportunitySeverity, Risk, RiskSeverity};

pub(crate) fn carrier_capacity(p: &Params<'_>, acc: &mut Accumulator) {
    let reduction = p.get(CARRIER_REDUCTION);
    let cost = times(reduction, 2000, 0);

    let level = if reduction > 30.0 {
        RiskSeverity::High
    } else if reduction > 15.0 {
        RiskSeverity::Medium
    } else {
        RiskSeverity::Low
    };
    acc.risk(Risk {
        severity: level,
        title: "Carrier Capacity Shortfall".into(),
        description: format!(
            "Contracted carriers cover {reduction:.0}% fewer loads, pushing freight to the \
             spot market."
        ),
        mitigation: "Tender overflow loads to pre-approved backup carriers and shift \
                     non-urgent volume to intermodal."
            .into(),
        impact: format!("{} in spot premiums", usd(cost)),
    });

    acc.opportunity(Opportunity {
        severity: if reduction > 30.0 {
            OpportunitySeverity::High
        } else {
            OpportunitySeverity::Medium
        },
        title: "Secondary Carrier Agreements".into(),
        description: "Standing agreements with backup carriers cap spot exposure in tight \
                      markets."
            .into(),
        savings: usd(cost * Decimal::new(30, 2)),
        link: "/logistics/carriers".into(),
        kind: OpportunityKind::RiskMitigation,
    });

    acc.bump(Metric::Cost, cost);
    acc.bump(Metric::ServiceLevel, -times(reduction, 1, 1));
    acc.bump(Metric::Inventory, times(reduction, 5, 2));
}

/// `costChange` is signed: negative values are rate decreases.
pub(crate) fn freight_cost_variation(p: &Params<'_>, acc: &mut Accumulator) {
    let change = p.get(FREIGHT_CHANGE);
    let cost = times(change, 3500, 0);

    if change > 5.0 {
        acc.risk(Risk {
            severity: if change > 20.0 {
                RiskSeverity::High
            } else {
                RiskSeverity::Medium
            },
            title: "Freight Rate Increase".into(),
            description: format!(
                "Freight rates rise {change:.0}%, lifting landed cost on every outbound lane."
            ),
            mitigation: "Shift volume to contracted lanes and consolidate partial loads."
                .into(),
            impact: format!("{} added freight spend", usd(cost)),
        });
    }

    let opportunity = if change < 0.0 {
        Opportunity {
            severity: OpportunitySeverity::Medium,
            title: "Lock In Lower Freight Rates".into(),
            description: "Signing multi-quarter contracts now holds the lower rates through \
                          the next cycle."
                .into(),
            savings: usd(-cost),
            link: "/logistics/freight".into(),
            kind: OpportunityKind::CostSaving,
        }
    } else {
        Opportunity {
            severity: if change > 20.0 {
                OpportunitySeverity::High
            } else {
                OpportunitySeverity::Medium
            },
            title: "Freight Contract Renegotiation".into(),
            description: "Volume commitments across lanes give leverage to renegotiate rates."
                .into(),
            savings: usd(cost * Decimal::new(50, 2)),
            link: "/logistics/freight".into(),
            kind: OpportunityKind::CostSaving,
        }
    };
    acc.opportunity(opportunity);

    acc.bump(Metric::Cost, cost);
}

pub(crate) fn multi_stop_optimization(p: &Params<'_>, acc: &mut Accumulator) {
    let stops = p.get(STOPS_PER_ROUTE);
    let efficiency = p.get(ROUTE_EFFICIENCY);
    let savings = times(efficiency, 2200, 0);
    let extra_stops = (dec(stops) - Decimal::new(3, 0)).max(Decimal::ZERO);

    if stops > 5.0 {
        acc.risk(Risk {
            severity: if stops > 8.0 {
                RiskSeverity::High
            } else {
                RiskSeverity::Medium
            },
            title: "Delivery Window Slippage".into(),
            description: format!(
                "Routes with {stops:.0} stops make late arrivals at the final drops more \
                 likely."
            ),
            mitigation: "Cap stops on routes serving customers with strict delivery \
                         windows."
                .into(),
            impact: "Lower on-time delivery for end-of-route customers".into(),
        });
    }

    acc.opportunity(Opportunity {
        severity: if efficiency >= 15.0 {
            OpportunitySeverity::High
        } else {
            OpportunitySeverity::Medium
        },
        title: "Route Consolidation Savings".into(),
        description: format!(
            "Combining drops into {stops:.0}-stop routes cuts miles driven by \
             {efficiency:.0}%."
        ),
        savings: usd(savings),
        link: "/logistics/routes".into(),
        kind: OpportunityKind::Efficiency,
    });

    acc.bump(Metric::Cost, -savings);
    acc.bump(
        Metric::ServiceLevel,
        -extra_stops.saturating_mul(Decimal::new(3, 1)),
    );
    acc.bump(Metric::Capacity, -times(efficiency, 1, 1));
}
