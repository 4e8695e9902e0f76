//! Supply-side scenarios: supplier failure and material flow disruption.

use super::{times, Params};
use crate::accumulator::{Accumulator, Metric};
use crate::format::usd;
use rust_decimal::Decimal;
use scenario_core::catalog::params::{FLOW_DOWNTIME, SUPPLIER_DURATION, SUPPLIER_SEVERITY};
use scenario_core::{Opportunity, OpportunityKind, OpportunitySeverity, Risk, RiskSeverity};

pub(crate) fn supplier_failure(p: &Params<'_>, acc: &mut Accumulator) {
    let severity = p.get(SUPPLIER_SEVERITY);
    let duration = p.get(SUPPLIER_DURATION);
    let cost = times(severity, 1200, 0).saturating_add(times(duration, 2500, 0));

    // below 30% the outage is absorbed by existing safety stock
    if severity > 30.0 {
        let level = if severity > 70.0 {
            RiskSeverity::Critical
        } else if severity > 50.0 {
            RiskSeverity::High
        } else {
            RiskSeverity::Medium
        };
        acc.risk(Risk {
            severity: level,
            title: "Critical Supplier Outage".into(),
            description: format!(
                "A {severity:.0}% supply disruption lasting {duration:.0} days starves \
                 downstream production of inbound components."
            ),
            mitigation: "Activate qualified secondary suppliers and pull forward safety \
                         stock from regional distribution centers."
                .into(),
            impact: format!("{} added cost", usd(cost)),
        });
    }

    acc.opportunity(Opportunity {
        severity: if severity > 50.0 {
            OpportunitySeverity::High
        } else {
            OpportunitySeverity::Medium
        },
        title: "Dual-Source Critical Components".into(),
        description: "Qualifying a second supplier for single-sourced parts caps exposure \
                      to future outages."
            .into(),
        savings: usd(cost * Decimal::new(35, 2)),
        link: "/suppliers".into(),
        kind: OpportunityKind::RiskMitigation,
    });

    acc.bump(Metric::Cost, cost);
    acc.bump(Metric::Inventory, -times(severity, 15, 2));
    acc.bump(Metric::ServiceLevel, -times(severity, 8, 2));
}

pub(crate) fn material_flow_disruption(p: &Params<'_>, acc: &mut Accumulator) {
    let downtime = p.get(FLOW_DOWNTIME);
    let cost = times(downtime, 3800, 0);

    let level = if downtime > 72.0 {
        RiskSeverity::Critical
    } else if downtime > 24.0 {
        RiskSeverity::High
    } else {
        RiskSeverity::Medium
    };
    acc.risk(Risk {
        severity: level,
        title: "Material Flow Interruption".into(),
        description: format!(
            "{downtime:.0} hours of blocked material flow idles dependent lines and \
             builds work-in-process queues."
        ),
        mitigation: "Reroute material through alternate docks and resequence production \
                     toward lines with staged inventory."
            .into(),
        impact: format!("{} added cost", usd(cost)),
    });

    acc.opportunity(Opportunity {
        severity: OpportunitySeverity::Medium,
        title: "Buffer Stock Repositioning".into(),
        description: "Staging buffer stock next to constrained lines shortens recovery \
                      after flow interruptions."
            .into(),
        savings: usd(cost * Decimal::new(25, 2)),
        link: "/inventory".into(),
        kind: OpportunityKind::Efficiency,
    });

    acc.bump(Metric::Cost, cost);
    acc.bump(Metric::Capacity, -times(downtime, 1, 1));
    acc.bump(Metric::Inventory, times(downtime, 8, 2));
    acc.bump(Metric::ServiceLevel, -times(downtime, 5, 2));
}
